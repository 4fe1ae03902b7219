//! Compound expressions: literals of arrays and objects, member access,
//! calls and `new`.

use super::Args;
use crate::ast::{Function, Node, PropertyKind};
use crate::error::TransformError;
use crate::fragment::Fragment;

/// Parentheses leave no trace in the tree.
pub(crate) fn parenthesized(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("(")?;
    let expression = args.next_node("expression")?;
    args.expect_token(")")?;
    Ok(Fragment::Node(expression))
}

/// Array literal; a comma not preceded by an element marks a hole.
pub(crate) fn array(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("[")?;
    let mut elements = Vec::new();
    let mut after_element = false;
    loop {
        if args.eat_token("]") {
            break;
        }
        if args.eat_token(",") {
            if !after_element {
                elements.push(None);
            }
            after_element = false;
            continue;
        }
        elements.push(Some(args.next_node("element")?));
        after_element = true;
    }
    Ok(Fragment::Node(Node::ArrayExpression { elements }))
}

pub(crate) fn object(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("{")?;
    let mut properties = Vec::new();
    while !args.eat_token("}") {
        if args.eat_token(",") {
            continue;
        }
        properties.push(args.next_node("property")?);
    }
    Ok(Fragment::Node(Node::ObjectExpression { properties }))
}

/// Modifier words in front of a method key.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct MethodModifiers {
    pub(super) is_async: bool,
    pub(super) accessor: Option<PropertyKind>,
    pub(super) generator: bool,
}

impl MethodModifiers {
    /// Consume `async`, `get`/`set` and `*` tokens.
    pub(super) fn parse(args: &mut Args) -> Self {
        let mut modifiers = Self::default();
        if args.eat_token("async") {
            modifiers.is_async = true;
        } else if args.eat_token("get") {
            modifiers.accessor = Some(PropertyKind::Get);
        } else if args.eat_token("set") {
            modifiers.accessor = Some(PropertyKind::Set);
        }
        modifiers.generator = args.eat_token("*");
        modifiers
    }

    pub(super) fn any(&self) -> bool {
        self.is_async || self.accessor.is_some() || self.generator
    }

    /// Build the function value of a method from its parameters and body.
    pub(super) fn method_value(&self, args: &mut Args) -> Result<Node, TransformError> {
        let params = args.next_list("parameter list")?;
        let body = Box::new(args.next_node("method body")?);
        Ok(Node::FunctionExpression(Function {
            id: None,
            expression: false,
            generator: self.generator,
            is_async: self.is_async,
            params,
            body,
        }))
    }
}

/// Key of a property or method, and whether it is computed.
pub(super) fn property_key(args: &mut Args) -> Result<(Node, bool), TransformError> {
    if args.eat_token("[") {
        let key = args.next_node("computed key")?;
        args.expect_token("]")?;
        return Ok((key, true));
    }
    Ok((args.next_node("property key")?, false))
}

/// Object entry: `key: value`, a method, an accessor or a shorthand.
pub(crate) fn property(args: &mut Args) -> Result<Fragment, TransformError> {
    let modifiers = MethodModifiers::parse(args);
    let (key, computed) = property_key(args)?;

    let (value, method, shorthand, kind) = if args.eat_token(":") {
        (args.next_node("property value")?, false, false, PropertyKind::Init)
    } else if modifiers.any() || matches!(args.peek(), Some(Fragment::List(_))) {
        let value = modifiers.method_value(args)?;
        match modifiers.accessor {
            Some(kind) => (value, false, false, kind),
            None => (value, true, false, PropertyKind::Init),
        }
    } else {
        (key.clone(), false, true, PropertyKind::Init)
    };

    Ok(Fragment::Node(Node::Property {
        method,
        shorthand,
        computed,
        key: Box::new(key),
        value: Box::new(value),
        kind,
    }))
}

pub(crate) fn spread(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("...")?;
    let argument = Box::new(args.next_node("spread argument")?);
    Ok(Fragment::Node(Node::SpreadElement { argument }))
}

// =============================================================================
// MEMBERS AND CALLS
// =============================================================================

pub(crate) fn member(args: &mut Args) -> Result<Fragment, TransformError> {
    let object = Box::new(args.next_node("object")?);
    let computed = if args.eat_token(".") {
        false
    } else {
        args.expect_token("[")?;
        true
    };
    let property = Box::new(args.next_node("property")?);
    if computed {
        args.expect_token("]")?;
    }
    Ok(Fragment::Node(Node::MemberExpression {
        object,
        property,
        computed,
        optional: false,
    }))
}

pub(crate) fn call(args: &mut Args) -> Result<Fragment, TransformError> {
    let callee = Box::new(args.next_node("callee")?);
    let arguments = args.next_list("argument list")?;
    Ok(Fragment::Node(Node::CallExpression {
        callee,
        arguments,
        optional: false,
    }))
}

/// `(a, ...b)` becomes the list of argument nodes.
pub(crate) fn arg_list(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("(")?;
    let mut arguments = Vec::new();
    while !args.eat_token(")") {
        if args.eat_token(",") {
            continue;
        }
        arguments.push(args.next_node("argument")?);
    }
    Ok(Fragment::List(arguments))
}

/// `new C` without parentheses has no arguments.
pub(crate) fn new_expression(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("new")?;
    let callee = Box::new(args.next_node("constructor")?);
    let arguments = if args.remaining() > 0 {
        args.next_list("argument list")?
    } else {
        Vec::new()
    };
    Ok(Fragment::Node(Node::NewExpression { callee, arguments }))
}

pub(crate) fn tagged_template(args: &mut Args) -> Result<Fragment, TransformError> {
    let tag = Box::new(args.next_node("tag")?);
    let quasi = Box::new(args.next_node("template")?);
    Ok(Fragment::Node(Node::TaggedTemplateExpression { tag, quasi }))
}

#[cfg(test)]
mod tests {
    use crate::ast::{Node, PropertyKind};
    use crate::fragment::Fragment;
    use crate::processors::{process, Rule};

    fn token(text: &str) -> Fragment {
        Fragment::Token(text.into())
    }

    fn id(name: &str) -> Fragment {
        Node::identifier(name).into()
    }

    fn node(rule: Rule, args: Vec<Fragment>) -> Node {
        match process(rule, args).unwrap() {
            Fragment::Node(node) => node,
            other => panic!("expected a node, got {other:?}"),
        }
    }

    #[test]
    fn test_parentheses_vanish() {
        assert_eq!(
            node(Rule::ParenthesizedExpression, vec![token("("), id("x"), token(")")]),
            Node::identifier("x")
        );
    }

    #[test]
    fn test_array_holes() {
        // [, a, , b,]
        let array = node(
            Rule::ArrayExpression,
            vec![
                token("["),
                token(","),
                id("a"),
                token(","),
                token(","),
                id("b"),
                token(","),
                token("]"),
            ],
        );
        let Node::ArrayExpression { elements } = array else {
            panic!("expected an array");
        };
        assert_eq!(
            elements,
            vec![None, Some(Node::identifier("a")), None, Some(Node::identifier("b"))]
        );
    }

    #[test]
    fn test_shorthand_property() {
        let property = node(Rule::Property, vec![id("a")]);
        let Node::Property { shorthand, method, key, value, .. } = property else {
            panic!("expected a property");
        };
        assert!(shorthand && !method);
        assert_eq!(key, value);
    }

    #[test]
    fn test_getter_property() {
        let body = Node::BlockStatement { body: vec![] };
        let property = node(
            Rule::Property,
            vec![token("get"), id("x"), Fragment::List(vec![]), body.into()],
        );
        assert!(matches!(
            property,
            Node::Property { method: false, kind: PropertyKind::Get, .. }
        ));
    }

    #[test]
    fn test_computed_member() {
        let member = node(
            Rule::MemberExpression,
            vec![id("o"), token("["), id("k"), token("]")],
        );
        assert!(matches!(member, Node::MemberExpression { computed: true, optional: false, .. }));
    }

    #[test]
    fn test_new_without_arguments() {
        let new = node(Rule::NewExpression, vec![token("new"), id("C")]);
        assert_eq!(
            new,
            Node::NewExpression { callee: Box::new(Node::identifier("C")), arguments: vec![] }
        );
    }

    #[test]
    fn test_arg_list_is_a_list() {
        let fragment = process(
            Rule::ArgList,
            vec![token("("), id("a"), token(","), id("b"), token(")")],
        )
        .unwrap();
        assert_eq!(
            fragment,
            Fragment::List(vec![Node::identifier("a"), Node::identifier("b")])
        );
    }
}
