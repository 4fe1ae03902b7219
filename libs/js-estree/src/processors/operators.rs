//! Operator terminals and operator expressions.

use super::{Args, LOGICAL_OPERATORS, UPDATE_OPERATORS};
use crate::ast::Node;
use crate::error::TransformError;
use crate::fragment::Fragment;

/// Named operator terminals keep their text.
pub(crate) fn token(args: &mut Args) -> Result<Fragment, TransformError> {
    Ok(Fragment::Token(args.next_token("operator")?))
}

/// Prefix and postfix operators.
///
/// The operator's position decides `prefix`; `++` and `--` build an
/// `UpdateExpression`, everything else a `UnaryExpression`.
pub(crate) fn unary(args: &mut Args) -> Result<Fragment, TransformError> {
    let (operator, argument, prefix) = match args.next() {
        Some(Fragment::Token(operator)) => (operator, args.next_node("operand")?, true),
        Some(Fragment::Node(argument)) => (args.next_token("operator")?, argument, false),
        _ => return Err(args.malformed("expected operator or operand")),
    };
    let argument = Box::new(argument);

    let node = if UPDATE_OPERATORS.contains(&operator.as_str()) {
        Node::UpdateExpression {
            operator,
            prefix,
            argument,
        }
    } else if prefix {
        Node::UnaryExpression {
            operator,
            prefix,
            argument,
        }
    } else {
        return Err(args.malformed(format!("'{operator}' is not a postfix operator")));
    };
    Ok(Fragment::Node(node))
}

pub(crate) fn binary(args: &mut Args) -> Result<Fragment, TransformError> {
    let left = Box::new(args.next_node("left operand")?);
    let operator = args.next_token("operator")?;
    let right = Box::new(args.next_node("right operand")?);

    let node = if LOGICAL_OPERATORS.contains(&operator.as_str()) {
        Node::LogicalExpression {
            left,
            operator,
            right,
        }
    } else {
        Node::BinaryExpression {
            left,
            operator,
            right,
        }
    };
    Ok(Fragment::Node(node))
}

pub(crate) fn assignment(args: &mut Args) -> Result<Fragment, TransformError> {
    let left = Box::new(args.next_node("assignment target")?);
    let operator = args.next_token("operator")?;
    let right = Box::new(args.next_node("assigned value")?);
    Ok(Fragment::Node(Node::AssignmentExpression {
        operator,
        left,
        right,
    }))
}

pub(crate) fn conditional(args: &mut Args) -> Result<Fragment, TransformError> {
    let test = Box::new(args.next_node("condition")?);
    args.expect_token("?")?;
    let consequent = Box::new(args.next_node("consequent")?);
    args.expect_token(":")?;
    let alternate = Box::new(args.next_node("alternate")?);
    Ok(Fragment::Node(Node::ConditionalExpression {
        test,
        consequent,
        alternate,
    }))
}

pub(crate) fn sequence(args: &mut Args) -> Result<Fragment, TransformError> {
    let mut expressions = vec![args.next_node("expression")?];
    while args.eat_token(",") {
        expressions.push(args.next_node("expression")?);
    }
    Ok(Fragment::Node(Node::SequenceExpression { expressions }))
}

pub(crate) fn await_expression(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("await")?;
    let argument = Box::new(args.next_node("operand")?);
    Ok(Fragment::Node(Node::AwaitExpression { argument }))
}
