//! Functions, parameters and classes.

use super::expressions::{property_key, MethodModifiers};
use super::Args;
use crate::ast::{Class, Function, Literal, LiteralValue, MethodKind, Node, PropertyKind};
use crate::error::TransformError;
use crate::fragment::Fragment;

// =============================================================================
// FUNCTIONS
// =============================================================================

pub(crate) fn function_declaration(args: &mut Args) -> Result<Fragment, TransformError> {
    Ok(Fragment::Node(Node::FunctionDeclaration(function(args)?)))
}

pub(crate) fn function_expression(args: &mut Args) -> Result<Fragment, TransformError> {
    Ok(Fragment::Node(Node::FunctionExpression(function(args)?)))
}

/// `async? function *? name? (params) { body }`
fn function(args: &mut Args) -> Result<Function, TransformError> {
    let is_async = args.eat_token("async");
    args.expect_token("function")?;
    let generator = args.eat_token("*");
    let id = args.optional_node().map(Box::new);
    let params = args.next_list("parameter list")?;
    let body = Box::new(args.next_node("function body")?);
    Ok(Function {
        id,
        expression: false,
        generator,
        is_async,
        params,
        body,
    })
}

/// Arrow function; a lone identifier head is a one-parameter list.
pub(crate) fn arrow_function(args: &mut Args) -> Result<Fragment, TransformError> {
    let is_async = args.eat_token("async");
    let params = match args.next() {
        Some(Fragment::List(params)) => params,
        Some(Fragment::Node(param)) => vec![param],
        _ => return Err(args.malformed("expected arrow parameters")),
    };
    args.expect_token("=>")?;
    let body = args.next_node("arrow body")?;
    Ok(Fragment::Node(Node::ArrowFunctionExpression(Function {
        id: None,
        expression: !matches!(body, Node::BlockStatement { .. }),
        generator: false,
        is_async,
        params,
        body: Box::new(body),
    })))
}

/// Parameters become identifiers, `AssignmentPattern`s for defaults and a
/// trailing `RestElement`.
pub(crate) fn param_list(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("(")?;
    let mut params = Vec::new();
    while !args.eat_token(")") {
        if args.eat_token(",") {
            continue;
        }
        if args.eat_token("...") {
            let argument = Box::new(args.next_node("rest parameter")?);
            params.push(Node::RestElement { argument });
            continue;
        }
        let param = args.next_node("parameter")?;
        if args.eat_token("=") {
            let default = args.next_node("default value")?;
            params.push(Node::AssignmentPattern {
                left: Box::new(param),
                right: Box::new(default),
            });
        } else {
            params.push(param);
        }
    }
    Ok(Fragment::List(params))
}

// =============================================================================
// CLASSES
// =============================================================================

pub(crate) fn class_declaration(args: &mut Args) -> Result<Fragment, TransformError> {
    Ok(Fragment::Node(Node::ClassDeclaration(class(args)?)))
}

pub(crate) fn class_expression(args: &mut Args) -> Result<Fragment, TransformError> {
    Ok(Fragment::Node(Node::ClassExpression(class(args)?)))
}

/// `class name? (extends heritage)? { body }`
fn class(args: &mut Args) -> Result<Class, TransformError> {
    args.expect_token("class")?;
    let named = !matches!(args.peek_node(), Some(Node::ClassBody { .. }) | None);
    let id = if named {
        args.optional_node().map(Box::new)
    } else {
        None
    };
    let super_class = if args.eat_token("extends") {
        Some(Box::new(args.next_node("superclass")?))
    } else {
        None
    };
    let body = Box::new(args.next_node("class body")?);
    Ok(Class {
        id,
        super_class,
        body,
    })
}

pub(crate) fn class_body(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("{")?;
    let mut body = Vec::new();
    while !args.eat_token("}") {
        if args.eat_token(";") {
            continue;
        }
        body.push(args.next_node("method")?);
    }
    Ok(Fragment::Node(Node::ClassBody { body }))
}

/// Class method. A non-static method keyed `constructor` is the constructor.
pub(crate) fn method_declaration(args: &mut Args) -> Result<Fragment, TransformError> {
    let is_static = args.eat_token("static");
    let modifiers = MethodModifiers::parse(args);
    let (key, computed) = property_key(args)?;
    let value = modifiers.method_value(args)?;

    let kind = match modifiers.accessor {
        Some(PropertyKind::Get) => MethodKind::Get,
        Some(PropertyKind::Set) => MethodKind::Set,
        _ if !is_static && !computed && is_constructor_key(&key) => MethodKind::Constructor,
        _ => MethodKind::Method,
    };

    Ok(Fragment::Node(Node::MethodDefinition {
        is_static,
        computed,
        key: Box::new(key),
        kind,
        value: Box::new(value),
    }))
}

fn is_constructor_key(key: &Node) -> bool {
    match key {
        Node::Identifier { name } => name == "constructor",
        Node::Literal(Literal {
            value: LiteralValue::String(value),
            ..
        }) => value == "constructor",
        _ => false,
    }
}
