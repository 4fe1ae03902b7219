//! # Statement Transform Tests
//!
//! Statements are transformed inside `function _() { ... }` so that
//! `return` is allowed, then the function body is compared.

use js_estree::transform;
use rstest::rstest;
use serde_json::{json, Value};

fn body(statements: &str) -> Value {
    let program = transform(&format!("function _() {{{statements}}}"))
        .unwrap_or_else(|e| panic!("{statements}: {e}"))
        .to_json();
    program["body"][0]["body"]["body"].clone()
}

fn program(source: &str) -> Value {
    transform(source)
        .unwrap_or_else(|e| panic!("{source}: {e}"))
        .to_json()["body"]
        .clone()
}

fn lit(value: Value, raw: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": raw })
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn assign(name: &str, value: i64) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "AssignmentExpression",
            "operator": "=",
            "left": ident(name),
            "right": lit(json!(value), &value.to_string())
        }
    })
}

fn declaration(kind: &str, init: Value) -> Value {
    json!([{
        "type": "VariableDeclaration",
        "kind": kind,
        "declarations": [{ "type": "VariableDeclarator", "id": ident("x"), "init": init }]
    }])
}

#[test]
fn test_wrapper_function() {
    let value = transform("function _() {}").unwrap().to_json();
    assert_eq!(
        value,
        json!({
            "type": "Program",
            "sourceType": "script",
            "body": [{
                "type": "FunctionDeclaration",
                "id": ident("_"),
                "expression": false,
                "generator": false,
                "async": false,
                "params": [],
                "body": { "type": "BlockStatement", "body": [] }
            }]
        })
    );
}

#[rstest]
#[case("return(1);", json!([{ "type": "ReturnStatement", "argument": lit(json!(1), "1") }]))]
#[case(
    "if(1)x=1;",
    json!([{
        "type": "IfStatement",
        "test": lit(json!(1), "1"),
        "consequent": assign("x", 1),
        "alternate": null
    }])
)]
#[case(
    "if(1)x=0;else{x=1;}",
    json!([{
        "type": "IfStatement",
        "test": lit(json!(1), "1"),
        "consequent": assign("x", 0),
        "alternate": { "type": "BlockStatement", "body": [assign("x", 1)] }
    }])
)]
#[case(
    "while(0){}",
    json!([{
        "type": "WhileStatement",
        "test": lit(json!(0), "0"),
        "body": { "type": "BlockStatement", "body": [] }
    }])
)]
#[case("var\tx;", declaration("var", json!(null)))]
#[case("var\tx=1;", declaration("var", lit(json!(1), "1")))]
#[case("let\tx;", declaration("let", json!(null)))]
#[case("let\tx=1;", declaration("let", lit(json!(1), "1")))]
#[case("const\tx=1;", declaration("const", lit(json!(1), "1")))]
fn test_statement(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(body(source), expected);
}

#[test]
fn test_empty_program() {
    assert_eq!(program(""), json!([]));
    assert_eq!(program("  // nothing\n"), json!([]));
}

#[test]
fn test_classic_for() {
    let value = &program("for (let i = 0; i < n; i++) ;")[0];
    assert_eq!(value["type"], json!("ForStatement"));
    assert_eq!(value["init"]["type"], json!("VariableDeclaration"));
    assert_eq!(value["test"]["operator"], json!("<"));
    assert_eq!(
        value["update"],
        json!({ "type": "UpdateExpression", "operator": "++", "prefix": false, "argument": ident("i") })
    );
    assert_eq!(value["body"], json!({ "type": "EmptyStatement" }));

    let empty = &program("for (;;) {}")[0];
    assert_eq!(empty["init"], json!(null));
    assert_eq!(empty["test"], json!(null));
    assert_eq!(empty["update"], json!(null));
}

#[test]
fn test_for_in_and_of() {
    assert_eq!(
        program("for (const k in o) {}")[0],
        json!({
            "type": "ForInStatement",
            "left": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{ "type": "VariableDeclarator", "id": ident("k"), "init": null }]
            },
            "right": ident("o"),
            "body": { "type": "BlockStatement", "body": [] }
        })
    );
    assert_eq!(
        program("for (x of xs) ;")[0],
        json!({
            "type": "ForOfStatement",
            "await": false,
            "left": ident("x"),
            "right": ident("xs"),
            "body": { "type": "EmptyStatement" }
        })
    );
}

#[test]
fn test_do_while() {
    assert_eq!(
        program("do x++; while (x < 3)")[0]["type"],
        json!("DoWhileStatement")
    );
}

#[test]
fn test_try_catch_finally() {
    let value = &program("try { a() } catch (e) { b(e) } finally { c() }")[0];
    assert_eq!(value["type"], json!("TryStatement"));
    assert_eq!(value["handler"]["type"], json!("CatchClause"));
    assert_eq!(value["handler"]["param"], ident("e"));
    assert_eq!(value["finalizer"]["type"], json!("BlockStatement"));

    let value = &program("try {} catch {}")[0];
    assert_eq!(value["handler"]["param"], json!(null));
    assert_eq!(value["finalizer"], json!(null));

    let value = &program("try {} finally {}")[0];
    assert_eq!(value["handler"], json!(null));
    assert_eq!(value["finalizer"], json!({ "type": "BlockStatement", "body": [] }));
}

#[test]
fn test_switch() {
    let value = &program("switch (x) { case 1: a; b; default: c }")[0];
    assert_eq!(value["discriminant"], ident("x"));
    let cases = value["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["test"], lit(json!(1), "1"));
    assert_eq!(cases[0]["consequent"].as_array().unwrap().len(), 2);
    assert_eq!(cases[1]["test"], json!(null));
    assert_eq!(cases[1]["consequent"].as_array().unwrap().len(), 1);
}

#[test]
fn test_labels_and_jumps() {
    let value = &program("outer: while (1) { break outer; continue }")[0];
    assert_eq!(value["type"], json!("LabeledStatement"));
    assert_eq!(value["label"], ident("outer"));
    let block = &value["body"]["body"]["body"];
    assert_eq!(block[0], json!({ "type": "BreakStatement", "label": ident("outer") }));
    assert_eq!(block[1], json!({ "type": "ContinueStatement", "label": null }));
}

#[test]
fn test_throw_and_debugger() {
    assert_eq!(
        program("throw e; debugger")
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["type"].clone())
            .collect::<Vec<_>>(),
        [json!("ThrowStatement"), json!("DebuggerStatement")]
    );
}

#[test]
fn test_class_declaration() {
    let value = &program("class A extends B { get x() { return 1 } static *gen() {} ['k']() {} }")[0];
    assert_eq!(value["type"], json!("ClassDeclaration"));
    assert_eq!(value["id"], ident("A"));
    assert_eq!(value["superClass"], ident("B"));
    let methods = value["body"]["body"].as_array().unwrap();
    assert_eq!(methods[0]["kind"], json!("get"));
    assert_eq!(methods[1]["static"], json!(true));
    assert_eq!(methods[1]["value"]["generator"], json!(true));
    assert_eq!(methods[2]["computed"], json!(true));
    assert_eq!(methods[2]["key"], lit(json!("k"), "'k'"));
}

#[test]
fn test_async_function_declaration() {
    let value = &program("async function f(a, ...b) { await a }")[0];
    assert_eq!(value["async"], json!(true));
    assert_eq!(value["params"][1], json!({ "type": "RestElement", "argument": ident("b") }));
}
