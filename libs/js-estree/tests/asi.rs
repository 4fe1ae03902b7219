//! # Contextual Token Tests
//!
//! Inferred semicolons, `++`/`--` after a line break and template content,
//! checked end to end through the ESTree output.

use js_estree::transform;
use rstest::rstest;
use serde_json::{json, Value};

fn program(source: &str) -> Value {
    transform(source)
        .unwrap_or_else(|e| panic!("{source}: {e}"))
        .to_json()["body"]
        .clone()
}

fn function_body(statements: &str) -> Value {
    program(&format!("function f() {{{statements}}}"))[0]["body"]["body"].clone()
}

fn lit(value: Value, raw: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": raw })
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn quasi(raw: &str, cooked: Value, tail: bool) -> Value {
    json!({ "type": "TemplateElement", "value": { "raw": raw, "cooked": cooked }, "tail": tail })
}

// =============================================================================
// INFERRED SEMICOLONS
// =============================================================================

#[rstest]
#[case::line_break("return\n1")]
#[case::comment("return /* c */ 1")]
fn test_bare_return(#[case] statements: &str) {
    assert_eq!(
        function_body(statements),
        json!([
            { "type": "ReturnStatement", "argument": null },
            { "type": "ExpressionStatement", "expression": lit(json!(1), "1") }
        ])
    );
}

#[test]
fn test_return_before_closing_brace() {
    assert_eq!(
        function_body("return"),
        json!([{ "type": "ReturnStatement", "argument": null }])
    );
}

#[test]
fn test_statements_split_by_line_breaks() {
    assert_eq!(
        program("let a = 1\nconst b = 2")
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["kind"].clone())
            .collect::<Vec<_>>(),
        [json!("let"), json!("const")]
    );
}

#[test]
fn test_if_before_else_on_next_line() {
    let statement = &program("if (a) b\nelse c")[0];
    assert_eq!(statement["consequent"]["expression"], ident("b"));
    assert_eq!(statement["alternate"]["expression"], ident("c"));
}

#[test]
fn test_continue_before_line_break() {
    let statement = &program("a: while (x) { continue\na }")[0];
    let block = &statement["body"]["body"]["body"];
    assert_eq!(block[0], json!({ "type": "ContinueStatement", "label": null }));
    assert_eq!(block[1]["expression"], ident("a"));
}

// =============================================================================
// UPDATE OPERATORS
// =============================================================================

#[test]
fn test_update_after_line_break_is_prefix() {
    assert_eq!(
        program("x\n++y"),
        json!([
            { "type": "ExpressionStatement", "expression": ident("x") },
            {
                "type": "ExpressionStatement",
                "expression": { "type": "UpdateExpression", "operator": "++", "prefix": true, "argument": ident("y") }
            }
        ])
    );
}

#[test]
fn test_update_on_same_line_is_postfix() {
    assert_eq!(
        program("x--;")[0]["expression"],
        json!({ "type": "UpdateExpression", "operator": "--", "prefix": false, "argument": ident("x") })
    );
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[test]
fn test_template_without_holes() {
    assert_eq!(
        program("`abc`;")[0]["expression"],
        json!({
            "type": "TemplateLiteral",
            "quasis": [quasi("abc", json!("abc"), true)],
            "expressions": []
        })
    );
}

#[test]
fn test_empty_template() {
    assert_eq!(
        program("``;")[0]["expression"]["quasis"],
        json!([quasi("", json!(""), true)])
    );
}

#[test]
fn test_template_with_holes() {
    assert_eq!(
        program("`a${b}c${d}`;")[0]["expression"],
        json!({
            "type": "TemplateLiteral",
            "quasis": [
                quasi("a", json!("a"), false),
                quasi("c", json!("c"), false),
                quasi("", json!(""), true)
            ],
            "expressions": [ident("b"), ident("d")]
        })
    );
}

#[test]
fn test_multiline_template_is_one_quasi() {
    assert_eq!(
        program("`one\ntwo\r\nthree`;")[0]["expression"]["quasis"],
        json!([quasi("one\ntwo\nthree", json!("one\ntwo\nthree"), true)])
    );
}

#[test]
fn test_template_escapes() {
    let quasis = &program(r"`\x41\n`;")[0]["expression"]["quasis"];
    assert_eq!(quasis[0], quasi(r"\x41\n", json!("A\n"), true));
}

#[test]
fn test_tagged_template() {
    assert_eq!(
        program(r"tag`\unicode ${x}`;")[0]["expression"],
        json!({
            "type": "TaggedTemplateExpression",
            "tag": ident("tag"),
            "quasi": {
                "type": "TemplateLiteral",
                "quasis": [
                    quasi(r"\unicode ", json!(null), false),
                    quasi("", json!(""), true)
                ],
                "expressions": [ident("x")]
            }
        })
    );
}

#[test]
fn test_template_followed_by_division() {
    let expression = &program("`a` / 2;")[0]["expression"];
    assert_eq!(expression["type"], json!("BinaryExpression"));
    assert_eq!(expression["operator"], json!("/"));
}
