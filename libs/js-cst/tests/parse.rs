use js_cst::{
    parse, parse_with, CstNode, Dialect, Dialects, NodeKind, ParseErrorKind, ParseOptions, TreeCursor,
};
use rstest::rstest;

#[rstest]
#[case("")]
#[case("let a = 1\nconst b = 2")]
#[case("x\n++y")]
#[case("function f() { return\n1 }")]
#[case("function f() { return /* c */ 1 }")]
#[case("class A extends B { constructor() {} static async *m() {} get x() {} ; [k]() {} }")]
#[case("`a${b}c${d}`;")]
#[case("tag`x` / 2;")]
#[case("if (a) b\nelse c")]
#[case("do x++; while (x < 3)")]
#[case("try {} catch {}")]
#[case("a: while (x) { break a; continue\na }")]
#[case("switch (x) { case 1: a; b; default: c }")]
#[case("var extends = 1;")]
fn test_accepts(#[case] source: &str) {
    let cst = parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
    assert_eq!(cst.root.kind, NodeKind::Script);
}

#[rstest]
#[case("a b")]
#[case("f(;")]
#[case("return 1;")]
#[case("throw\ne;")]
#[case("{ a;")]
#[case("1++;")]
#[case("try {}")]
#[case("function () {}")]
fn test_rejects(#[case] source: &str) {
    assert!(parse(source).is_err(), "{source} should not parse");
}

#[test]
fn test_unterminated_template() {
    assert_eq!(parse("`abc").unwrap_err().kind, ParseErrorKind::UnterminatedTemplate);
}

#[test]
fn test_ts_dialect() {
    let options = ParseOptions::default().with_dialects(Dialects::none().with(Dialect::Ts));
    assert!(parse_with("class A extends B {}", &options).is_ok());
    assert!(parse_with("var extends = 1;", &options).is_err());
}

#[test]
fn test_cursor_visits_every_node() {
    let source = "a = [1, 2];";
    let cst = parse(source).unwrap();
    let mut cursor = cst.cursor();
    let mut names = Vec::new();
    loop {
        names.push(cursor.name().to_string());
        if cursor.first_child() {
            continue;
        }
        while !cursor.next_sibling() {
            if !cursor.parent() {
                assert_eq!(names[0], "Script");
                assert!(names.iter().any(|n| n == "ArrayExpression"));
                assert_eq!(names.iter().filter(|n| *n == "Number").count(), 2);
                return;
            }
        }
    }
}

fn check_children(node: &CstNode, source: &str) {
    let mut end = node.span.start();
    for child in &node.children {
        assert!(
            child.span.start() >= end && child.span.end() <= node.span.end(),
            "{} at {:?} escapes {} at {:?} in {source:?}",
            child.kind.name(),
            child.span,
            node.kind.name(),
            node.span,
        );
        assert!(child.span.start() <= child.span.end());
        end = child.span.end();
        check_children(child, source);
    }
}

#[rstest]
#[case("let s = `a${b}\nc${`d${e}`}`;")]
#[case("a = 1\nb = 2\n++c")]
#[case("x = /[/]+/g.test(y) / 2;")]
#[case("f(/* a */ 1, // b\n 2) /* c */;")]
#[case("function f() { return /* c */ 1 }")]
fn test_spans_nest_in_order(#[case] source: &str) {
    let cst = parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
    assert_eq!(cst.root.span.end(), source.len());
    check_children(&cst.root, source);

    let mut cursor = cst.cursor();
    let mut last_end = 0;
    let mut leaves = 0;
    loop {
        if cursor.first_child() {
            continue;
        }
        assert!(cursor.from() >= last_end, "leaf '{}' overlaps in {source:?}", cursor.name());
        assert!(source.get(cursor.from()..cursor.to()).is_some());
        last_end = cursor.to();
        leaves += 1;
        while !cursor.next_sibling() {
            if !cursor.parent() {
                assert!(leaves > 0);
                return;
            }
        }
    }
}
