//! # Serialized CST Tests
//!
//! Trees received as JSON go through the same processors as trees parsed
//! in-process.

use config::constants::GlobalConfig;
use js_estree::cst::SerializedNode;
use js_estree::{transform, transform_serialized, TransformError, TransformOptions};
use rstest::rstest;
use serde_json::json;

fn from_json(value: serde_json::Value) -> SerializedNode {
    serde_json::from_value(value).unwrap()
}

#[rstest]
#[case("x = 1;")]
#[case("function f(a, b = 2) { return a + b }")]
#[case("for (const k in o) if (k) continue; else break")]
#[case("class A extends B { static m() {} get x() { return this.y } }")]
#[case("var s = `a${b}c`, r = /x[/]/g, n = 0x1Fn;")]
#[case("x\n++y")]
fn test_serialized_matches_in_process(#[case] source: &str) {
    let cst = js_cst::parse(source).unwrap();
    let serialized = SerializedNode::from_cst(&cst.root);
    let json = serde_json::to_value(&serialized).unwrap();
    let received: SerializedNode = serde_json::from_value(json).unwrap();

    let direct = transform(source).unwrap();
    let indirect = transform_serialized(&received, source, &TransformOptions::default()).unwrap();
    assert_eq!(direct, indirect);
}

#[test]
fn test_hand_written_tree() {
    let cst = from_json(json!({
        "name": "Script", "from": 0, "to": 6,
        "children": [{
            "name": "ExpressionStatement", "from": 0, "to": 6,
            "children": [{
                "name": "CallExpression", "from": 0, "to": 5,
                "children": [
                    { "name": "VariableName", "from": 0, "to": 1 },
                    {
                        "name": "ArgList", "from": 1, "to": 5,
                        "children": [
                            { "name": "(", "from": 1, "to": 2 },
                            { "name": "String", "from": 2, "to": 4 },
                            { "name": ")", "from": 4, "to": 5 }
                        ]
                    }
                ]
            }, { "name": ";", "from": 5, "to": 6 }]
        }]
    }));
    let program = transform_serialized(&cst, "f('');", &TransformOptions::default()).unwrap();
    assert_eq!(
        program.to_json()["body"][0]["expression"],
        json!({
            "type": "CallExpression",
            "callee": { "type": "Identifier", "name": "f" },
            "arguments": [{ "type": "Literal", "value": "", "raw": "''" }],
            "optional": false
        })
    );
}

#[test]
fn test_unknown_rule() {
    let cst = from_json(json!({
        "name": "Script", "from": 0, "to": 1,
        "children": [{
            "name": "Mystery", "from": 0, "to": 1,
            "children": [{ "name": "VariableName", "from": 0, "to": 1 }]
        }]
    }));
    let err = transform_serialized(&cst, "x", &TransformOptions::default()).unwrap_err();
    let TransformError::UnhandledNodeKind { rule, args } = err else {
        panic!("expected an unhandled node, got {err:?}");
    };
    assert_eq!(rule, "Mystery");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_span_outside_source() {
    let cst = from_json(json!({
        "name": "Script", "from": 0, "to": 4,
        "children": [{
            "name": "ExpressionStatement", "from": 0, "to": 4,
            "children": [{ "name": "Number", "from": 2, "to": 4 }]
        }]
    }));
    let err = transform_serialized(&cst, "1", &TransformOptions::default()).unwrap_err();
    assert_eq!(
        err,
        TransformError::InvalidSpan { rule: "Number".into(), from: 2, to: 4 }
    );
}

#[test]
fn test_depth_bound() {
    let mut node = json!({ "name": "VariableName", "from": 1, "to": 2 });
    for _ in 0..6 {
        node = json!({ "name": "ParenthesizedExpression", "from": 0, "to": 3, "children": [node] });
    }
    let options = TransformOptions {
        config: GlobalConfig::new(Some(4)).unwrap(),
        ..TransformOptions::default()
    };
    let err = transform_serialized(&from_json(node), "(x)", &options).unwrap_err();
    assert_eq!(err, TransformError::DepthExceeded { limit: 4 });
}

#[test]
fn test_non_program_root() {
    let cst = from_json(json!({ "name": "Equals", "from": 0, "to": 1 }));
    let err = transform_serialized(&cst, "=", &TransformOptions::default()).unwrap_err();
    assert!(matches!(err, TransformError::MalformedArguments { rule, .. } if rule == "root"));
}

#[test]
fn test_invalid_regexp_flags() {
    let err = transform("/a/gg;").unwrap_err();
    assert_eq!(
        err,
        TransformError::LiteralDecode { raw: "/a/gg".into(), reason: "repeated flag 'g'".into() }
    );
}
