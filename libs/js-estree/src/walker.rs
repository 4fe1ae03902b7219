//! # Tree Walker
//!
//! Rebuilds a tree bottom-up through a [`TreeCursor`]. Every child is
//! processed first and becomes one argument of its parent's processor; a
//! childless node contributes its own source text as its only argument.
//!
//! Dispatch for a node named `rule`:
//!
//! 1. a registered processor for `rule` builds the fragment;
//! 2. otherwise a node whose only argument is the token `rule` itself (a
//!    keyword or punctuator) passes that token through;
//! 3. otherwise the node is [`TransformError::UnhandledNodeKind`].

use crate::error::TransformError;
use crate::fragment::Fragment;
use crate::processors::{process, Rule};
use config::constants::GlobalConfig;
use js_cst::TreeCursor;
use log::debug;

/// Walks one tree over one source text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walker<'s> {
    source: &'s str,
    config: GlobalConfig,
}

impl<'s> Walker<'s> {
    pub(crate) fn new(source: &'s str, config: GlobalConfig) -> Self {
        Self { source, config }
    }

    /// Process the node under the cursor and everything below it.
    ///
    /// The cursor is back on the same node when this returns `Ok`.
    pub(crate) fn walk<C: TreeCursor>(
        &self,
        cursor: &mut C,
        depth: usize,
    ) -> Result<Fragment, TransformError> {
        if let Some(limit) = self.config.max_nesting_depth {
            if depth > limit {
                debug!("tree depth bound {limit} reached at '{}'", cursor.name());
                return Err(TransformError::DepthExceeded { limit });
            }
        }

        let rule = cursor.name().to_string();
        let args = if cursor.first_child() {
            let mut args = Vec::new();
            loop {
                let arg = stacker::maybe_grow(
                    self.config.red_zone_bytes,
                    self.config.stack_size_bytes,
                    || self.walk(cursor, depth + 1),
                )?;
                args.push(arg);
                if !cursor.next_sibling() {
                    break;
                }
            }
            cursor.parent();
            args
        } else {
            vec![Fragment::Token(self.text(&rule, cursor)?.to_string())]
        };

        dispatch(rule, args)
    }

    fn text<C: TreeCursor>(&self, rule: &str, cursor: &C) -> Result<&'s str, TransformError> {
        let (from, to) = (cursor.from(), cursor.to());
        self.source
            .get(from..to)
            .ok_or_else(|| TransformError::InvalidSpan {
                rule: rule.to_string(),
                from,
                to,
            })
    }
}

/// Route processed children to the node's processor.
fn dispatch(rule: String, args: Vec<Fragment>) -> Result<Fragment, TransformError> {
    if let Some(known) = Rule::from_name(&rule) {
        return process(known, args);
    }
    match args.as_slice() {
        [Fragment::Token(text)] if *text == rule => Ok(Fragment::Token(rule)),
        _ => {
            debug!("no processor for '{rule}' ({} argument(s))", args.len());
            Err(TransformError::UnhandledNodeKind { rule, args })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Literal, Node};
    use crate::cst::SerializedNode;

    fn leaf(name: &str, from: usize, to: usize) -> SerializedNode {
        SerializedNode::new(name, from, to, Vec::new())
    }

    fn walk(root: &SerializedNode, source: &str) -> Result<Fragment, TransformError> {
        Walker::new(source, GlobalConfig::default()).walk(&mut root.cursor(), 0)
    }

    #[test]
    fn test_terminal_passes_through() {
        let fragment = walk(&leaf(";", 0, 1), ";").unwrap();
        assert_eq!(fragment, Fragment::Token(";".into()));
    }

    #[test]
    fn test_terminal_with_other_text_is_unhandled() {
        let err = walk(&leaf("?", 0, 1), ":").unwrap_err();
        assert!(matches!(err, TransformError::UnhandledNodeKind { rule, .. } if rule == "?"));
    }

    #[test]
    fn test_named_leaf_uses_processor() {
        let fragment = walk(&leaf("Number", 1, 3), " 42").unwrap();
        assert_eq!(fragment, Fragment::Node(Node::Literal(Literal::number(42.0, "42"))));
    }

    #[test]
    fn test_children_become_arguments() {
        let root = SerializedNode::new(
            "ExpressionStatement",
            0,
            2,
            vec![leaf("VariableName", 0, 1), leaf(";", 1, 2)],
        );
        let fragment = walk(&root, "x;").unwrap();
        assert_eq!(
            fragment,
            Fragment::Node(Node::ExpressionStatement {
                expression: Box::new(Node::identifier("x")),
            })
        );
    }

    #[test]
    fn test_span_outside_source() {
        let err = walk(&leaf("Number", 0, 9), "1").unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidSpan { rule: "Number".into(), from: 0, to: 9 }
        );
    }

    #[test]
    fn test_depth_bound() {
        let mut node = leaf("VariableName", 0, 1);
        for _ in 0..4 {
            node = SerializedNode::new("ParenthesizedExpression", 0, 1, vec![node]);
        }
        let config = GlobalConfig::new(Some(2)).unwrap();
        let err = Walker::new("x", config).walk(&mut node.cursor(), 0).unwrap_err();
        assert_eq!(err, TransformError::DepthExceeded { limit: 2 });
    }
}
