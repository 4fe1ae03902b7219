use super::*;
use config::constants::GlobalConfig;
use js_cst::{Dialect, Dialects, ParseErrorKind};
use serde_json::json;

fn body(source: &str) -> Vec<Node> {
    match transform(source).unwrap() {
        Node::Program { body, .. } => body,
        other => panic!("expected a program, got {other:?}"),
    }
}

#[test]
fn test_empty_source() {
    assert!(body("").is_empty());
    assert!(body("/* only */ // trivia\n").is_empty());
}

#[test]
fn test_program_json() {
    assert_eq!(
        transform(";").unwrap().to_json(),
        json!({
            "type": "Program",
            "sourceType": "script",
            "body": [{ "type": "EmptyStatement" }]
        })
    );
}

#[test]
fn test_statement_order() {
    let types: Vec<_> = body("a; b\nc").iter().map(Node::type_name).collect();
    assert_eq!(types, ["ExpressionStatement"; 3]);
}

#[test]
fn test_syntax_error() {
    let err = transform("a b").unwrap_err();
    let TransformError::Syntax(parse) = err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert!(matches!(parse.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn test_nesting_limit() {
    let options = TransformOptions {
        config: GlobalConfig::new(Some(8)).unwrap(),
        ..TransformOptions::default()
    };
    let err = transform_with("((((((((((1))))))))));", &options).unwrap_err();
    assert_eq!(err, TransformError::DepthExceeded { limit: 8 });
    assert!(transform_with("((1));", &options).is_ok());
}

#[test]
fn test_ts_dialect() {
    let options = TransformOptions {
        dialects: Dialects::none().with(Dialect::Ts),
        ..TransformOptions::default()
    };
    assert!(transform("var extends = 1;").is_ok());
    assert!(matches!(
        transform_with("var extends = 1;", &options),
        Err(TransformError::Syntax(_))
    ));
}

#[test]
fn test_transform_cursor_on_subtree() {
    let source = "f(1);";
    let cst = js_cst::parse(source).unwrap();
    let statement = SerializedNode::from_cst(&cst.root.children[0]);
    let fragment =
        transform_cursor(&mut statement.cursor(), source, &TransformOptions::default()).unwrap();
    let Fragment::Node(node) = fragment else {
        panic!("expected a node");
    };
    assert_eq!(node.type_name(), "ExpressionStatement");
}

#[test]
fn test_nested_default_groups() {
    let depth = 40;
    let source = format!("{}1{};", "(a=".repeat(depth), ")".repeat(depth));
    let statements = body(&source);
    let [Node::ExpressionStatement { expression }] = statements.as_slice() else {
        panic!("expected one expression statement");
    };
    let mut node = expression.as_ref();
    for _ in 0..depth {
        let Node::AssignmentExpression { right, .. } = node else {
            panic!("expected an assignment, got {node:?}");
        };
        node = right.as_ref();
    }
    assert_eq!(node.type_name(), "Literal");
}

#[test]
fn test_throw_after_comment() {
    let types: Vec<_> = body("throw /* c */ e").iter().map(Node::type_name).collect();
    assert_eq!(types, ["ThrowStatement"]);
    assert!(matches!(transform("throw\ne"), Err(TransformError::Syntax(_))));
}
