//! Program, statements and declarations.
//!
//! Statement terminators are optional arguments everywhere: an inferred
//! semicolon leaves no child in the CST.

use super::Args;
use crate::ast::{Node, SourceType, VariableKind};
use crate::error::TransformError;
use crate::fragment::{Fragment, LoopHead};

pub(crate) fn script(args: &mut Args) -> Result<Fragment, TransformError> {
    // A script without statements is a leaf whose only argument is its text.
    if args.remaining() == 1 && args.peek_token().is_some() {
        args.next();
    }
    let mut body = Vec::new();
    while args.remaining() > 0 {
        body.push(args.next_node("statement")?);
    }
    Ok(Fragment::Node(Node::Program {
        body,
        source_type: SourceType::Script,
    }))
}

pub(crate) fn expression_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    let expression = Box::new(args.next_node("expression")?);
    args.eat_token(";");
    Ok(Fragment::Node(Node::ExpressionStatement { expression }))
}

/// `var a = 1, b;` and the declaration head of a classic `for`.
pub(crate) fn variable_declaration(args: &mut Args) -> Result<Fragment, TransformError> {
    let keyword = args.next_token("declaration keyword")?;
    let kind = VariableKind::from_keyword(&keyword)
        .ok_or_else(|| args.malformed(format!("'{keyword}' is not a declaration keyword")))?;

    let mut declarations = Vec::new();
    loop {
        let id = Box::new(args.next_node("binding")?);
        let init = if args.eat_token("=") {
            Some(Box::new(args.next_node("initializer")?))
        } else {
            None
        };
        declarations.push(Node::VariableDeclarator { id, init });
        if !args.eat_token(",") {
            break;
        }
    }
    args.eat_token(";");
    Ok(Fragment::Node(Node::VariableDeclaration { declarations, kind }))
}

pub(crate) fn block(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("{")?;
    let mut body = Vec::new();
    while !args.eat_token("}") {
        body.push(args.next_node("statement")?);
    }
    Ok(Fragment::Node(Node::BlockStatement { body }))
}

pub(crate) fn empty_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token(";")?;
    Ok(Fragment::Node(Node::EmptyStatement))
}

pub(crate) fn debugger_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("debugger")?;
    args.eat_token(";");
    Ok(Fragment::Node(Node::DebuggerStatement))
}

pub(crate) fn labeled_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    let label = Box::new(args.next_node("label")?);
    args.expect_token(":")?;
    let body = Box::new(args.next_node("labeled body")?);
    Ok(Fragment::Node(Node::LabeledStatement { label, body }))
}

// =============================================================================
// JUMPS
// =============================================================================

pub(crate) fn return_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("return")?;
    let argument = args.optional_node().map(Box::new);
    args.eat_token(";");
    Ok(Fragment::Node(Node::ReturnStatement { argument }))
}

pub(crate) fn break_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("break")?;
    let label = args.optional_node().map(Box::new);
    args.eat_token(";");
    Ok(Fragment::Node(Node::BreakStatement { label }))
}

pub(crate) fn continue_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("continue")?;
    let label = args.optional_node().map(Box::new);
    args.eat_token(";");
    Ok(Fragment::Node(Node::ContinueStatement { label }))
}

pub(crate) fn throw_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("throw")?;
    let argument = Box::new(args.next_node("thrown value")?);
    args.eat_token(";");
    Ok(Fragment::Node(Node::ThrowStatement { argument }))
}

// =============================================================================
// CONDITIONALS AND LOOPS
// =============================================================================

pub(crate) fn if_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("if")?;
    let test = Box::new(args.next_node("condition")?);
    let consequent = Box::new(args.next_node("consequent")?);
    let alternate = if args.eat_token("else") {
        Some(Box::new(args.next_node("alternate")?))
    } else {
        None
    };
    Ok(Fragment::Node(Node::IfStatement {
        test,
        consequent,
        alternate,
    }))
}

pub(crate) fn while_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("while")?;
    let test = Box::new(args.next_node("condition")?);
    let body = Box::new(args.next_node("loop body")?);
    Ok(Fragment::Node(Node::WhileStatement { test, body }))
}

pub(crate) fn do_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("do")?;
    let body = Box::new(args.next_node("loop body")?);
    args.expect_token("while")?;
    let test = Box::new(args.next_node("condition")?);
    args.eat_token(";");
    Ok(Fragment::Node(Node::DoWhileStatement { body, test }))
}

/// The loop head decides which of the three `for` statements this is.
pub(crate) fn for_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("for")?;
    let head = args.next_loop()?;
    let body = Box::new(args.next_node("loop body")?);
    let node = match head {
        LoopHead::Classic { init, test, update } => Node::ForStatement {
            init: init.map(Box::new),
            test: test.map(Box::new),
            update: update.map(Box::new),
            body,
        },
        LoopHead::In { left, right } => Node::ForInStatement {
            left: Box::new(left),
            right: Box::new(right),
            body,
        },
        LoopHead::Of { left, right } => Node::ForOfStatement {
            is_await: false,
            left: Box::new(left),
            right: Box::new(right),
            body,
        },
    };
    Ok(Fragment::Node(node))
}

/// `(init? ; test? ; update?)`
pub(crate) fn for_spec(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("(")?;
    let init = args.optional_node();
    args.expect_token(";")?;
    let test = args.optional_node();
    args.expect_token(";")?;
    let update = args.optional_node();
    args.expect_token(")")?;
    Ok(Fragment::Loop(LoopHead::Classic { init, test, update }))
}

pub(crate) fn for_in_spec(args: &mut Args) -> Result<Fragment, TransformError> {
    let (left, right) = iteration_head(args, "in")?;
    Ok(Fragment::Loop(LoopHead::In { left, right }))
}

pub(crate) fn for_of_spec(args: &mut Args) -> Result<Fragment, TransformError> {
    let (left, right) = iteration_head(args, "of")?;
    Ok(Fragment::Loop(LoopHead::Of { left, right }))
}

/// `(kind? left in|of right)`; a declared left side becomes a declaration
/// with a single uninitialized declarator.
fn iteration_head(args: &mut Args, keyword: &str) -> Result<(Node, Node), TransformError> {
    args.expect_token("(")?;
    let kind = args.peek_token().and_then(VariableKind::from_keyword);
    let left = match kind {
        Some(kind) => {
            args.next();
            let id = Box::new(args.next_node("binding")?);
            Node::VariableDeclaration {
                declarations: vec![Node::VariableDeclarator { id, init: None }],
                kind,
            }
        }
        None => args.next_node("loop target")?,
    };
    args.expect_token(keyword)?;
    let right = args.next_node("iterated value")?;
    args.expect_token(")")?;
    Ok((left, right))
}

// =============================================================================
// TRY
// =============================================================================

pub(crate) fn try_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("try")?;
    let block = Box::new(args.next_node("try block")?);
    let handler = if matches!(args.peek_node(), Some(Node::CatchClause { .. })) {
        args.optional_node().map(Box::new)
    } else {
        None
    };
    let finalizer = args.optional_node().map(Box::new);
    if handler.is_none() && finalizer.is_none() {
        return Err(args.malformed("try without catch or finally"));
    }
    Ok(Fragment::Node(Node::TryStatement {
        block,
        handler,
        finalizer,
    }))
}

pub(crate) fn catch_clause(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("catch")?;
    let param = if args.eat_token("(") {
        let param = args.next_node("catch binding")?;
        args.expect_token(")")?;
        Some(Box::new(param))
    } else {
        None
    };
    let body = Box::new(args.next_node("catch body")?);
    Ok(Fragment::Node(Node::CatchClause { param, body }))
}

/// The finalizer is the block itself.
pub(crate) fn finally_clause(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("finally")?;
    Ok(Fragment::Node(args.next_node("finally block")?))
}

// =============================================================================
// SWITCH
// =============================================================================

pub(crate) fn switch_statement(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("switch")?;
    let discriminant = Box::new(args.next_node("discriminant")?);
    let cases = args.next_list("switch body")?;
    Ok(Fragment::Node(Node::SwitchStatement {
        discriminant,
        cases,
    }))
}

/// Attach each statement to the closest case label before it.
pub(crate) fn switch_body(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("{")?;
    let mut cases: Vec<Node> = Vec::new();
    while !args.eat_token("}") {
        let node = args.next_node("case or statement")?;
        if let Node::SwitchCase { .. } = node {
            cases.push(node);
            continue;
        }
        match cases.last_mut() {
            Some(Node::SwitchCase { consequent, .. }) => consequent.push(node),
            _ => return Err(args.malformed("statement before the first case label")),
        }
    }
    Ok(Fragment::List(cases))
}

pub(crate) fn case_label(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("case")?;
    let test = Box::new(args.next_node("case test")?);
    args.expect_token(":")?;
    Ok(Fragment::Node(Node::SwitchCase {
        test: Some(test),
        consequent: Vec::new(),
    }))
}

pub(crate) fn default_label(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("default")?;
    args.expect_token(":")?;
    Ok(Fragment::Node(Node::SwitchCase {
        test: None,
        consequent: Vec::new(),
    }))
}
