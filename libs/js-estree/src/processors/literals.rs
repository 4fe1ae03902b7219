//! Named terminals: literals, identifiers and templates.

use super::Args;
use crate::ast::{Literal, Node};
use crate::decode;
use crate::error::TransformError;
use crate::fragment::Fragment;

/// Identifier spellings that denote values rather than variables.
///
/// `true`/`false` become boolean literals, `null` a null literal, `this` and
/// `super` their own node types. Every other name stays an `Identifier`.
fn keyword_value(name: &str) -> Option<Node> {
    match name {
        "true" => Some(Node::Literal(Literal::boolean(true))),
        "false" => Some(Node::Literal(Literal::boolean(false))),
        "null" => Some(Node::Literal(Literal::null())),
        "this" => Some(Node::ThisExpression),
        "super" => Some(Node::Super),
        _ => None,
    }
}

pub(crate) fn variable_name(args: &mut Args) -> Result<Fragment, TransformError> {
    let name = args.next_token("name")?;
    let node = keyword_value(&name).unwrap_or(Node::Identifier { name });
    Ok(Fragment::Node(node))
}

pub(crate) fn identifier(args: &mut Args) -> Result<Fragment, TransformError> {
    let name = args.next_token("name")?;
    Ok(Fragment::Node(Node::Identifier { name }))
}

pub(crate) fn number(args: &mut Args) -> Result<Fragment, TransformError> {
    let raw = args.next_token("number")?;
    Ok(Fragment::Node(Node::Literal(decode::number(&raw)?)))
}

pub(crate) fn string(args: &mut Args) -> Result<Fragment, TransformError> {
    let raw = args.next_token("string")?;
    Ok(Fragment::Node(Node::Literal(decode::string(&raw)?)))
}

pub(crate) fn regexp(args: &mut Args) -> Result<Fragment, TransformError> {
    let raw = args.next_token("regular expression")?;
    Ok(Fragment::Node(Node::Literal(decode::regexp(&raw)?)))
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// One run of template text; adjacent runs are merged by [`template_string`].
pub(crate) fn template_content(args: &mut Args) -> Result<Fragment, TransformError> {
    let text = args.next_token("template text")?;
    Ok(Fragment::Node(Node::TemplateElement {
        value: decode::template(&text)?,
        tail: false,
    }))
}

/// Rebuild a template literal from its runs and holes.
///
/// Quasis and expressions alternate, starting and ending with a quasi, so a
/// quasi is emitted at every `${` and at the closing backtick even when no
/// text precedes it.
pub(crate) fn template_string(args: &mut Args) -> Result<Fragment, TransformError> {
    args.expect_token("`")?;
    let mut quasis = Vec::new();
    let mut expressions = Vec::new();
    let mut raw = String::new();

    loop {
        match args.next() {
            Some(Fragment::Node(Node::TemplateElement { value, .. })) => raw.push_str(&value.raw),
            Some(Fragment::Token(token)) if token == "${" => {
                quasis.push(element(&std::mem::take(&mut raw), false)?);
                expressions.push(args.next_node("template expression")?);
                args.expect_token("}")?;
            }
            Some(Fragment::Token(token)) if token == "`" => {
                quasis.push(element(&raw, true)?);
                break;
            }
            Some(other) => {
                return Err(args.malformed(format!("unexpected {} in template", other.describe())))
            }
            None => return Err(args.malformed("template without closing '`'")),
        }
    }

    Ok(Fragment::Node(Node::TemplateLiteral {
        quasis,
        expressions,
    }))
}

fn element(raw: &str, tail: bool) -> Result<Node, TransformError> {
    Ok(Node::TemplateElement {
        value: decode::template(raw)?,
        tail,
    })
}

// =============================================================================
// TESTS
// =============================================================================
