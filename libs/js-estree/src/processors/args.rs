//! Positional cursor over a node's processed children.

use crate::ast::Node;
use crate::error::TransformError;
use crate::fragment::{Fragment, LoopHead};
use std::iter::Peekable;
use std::vec::IntoIter;

/// The processed children of one CST node, consumed left to right.
///
/// Every accessor that expects a particular shape reports a mismatch as
/// [`TransformError::MalformedArguments`] naming the rule and the position.
#[derive(Debug)]
pub(crate) struct Args {
    rule: &'static str,
    iter: Peekable<IntoIter<Fragment>>,
    pos: usize,
}

impl Args {
    pub(crate) fn new(rule: &'static str, args: Vec<Fragment>) -> Self {
        Self {
            rule,
            iter: args.into_iter().peekable(),
            pos: 0,
        }
    }

    /// Take the next argument, whatever it is.
    pub(crate) fn next(&mut self) -> Option<Fragment> {
        let next = self.iter.next();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    pub(crate) fn peek(&mut self) -> Option<&Fragment> {
        self.iter.peek()
    }

    /// Text of the next argument if it is a token.
    pub(crate) fn peek_token(&mut self) -> Option<&str> {
        match self.iter.peek() {
            Some(Fragment::Token(text)) => Some(text),
            _ => None,
        }
    }

    /// The next argument if it is a node.
    pub(crate) fn peek_node(&mut self) -> Option<&Node> {
        match self.iter.peek() {
            Some(Fragment::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.iter.len()
    }

    pub(crate) fn next_node(&mut self, what: &str) -> Result<Node, TransformError> {
        match self.next() {
            Some(Fragment::Node(node)) => Ok(node),
            other => Err(self.mismatch(what, other)),
        }
    }

    /// Take the next argument only if it is a node.
    pub(crate) fn optional_node(&mut self) -> Option<Node> {
        self.peek_node()?;
        match self.next() {
            Some(Fragment::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn next_token(&mut self, what: &str) -> Result<String, TransformError> {
        match self.next() {
            Some(Fragment::Token(text)) => Ok(text),
            other => Err(self.mismatch(what, other)),
        }
    }

    pub(crate) fn next_list(&mut self, what: &str) -> Result<Vec<Node>, TransformError> {
        match self.next() {
            Some(Fragment::List(nodes)) => Ok(nodes),
            other => Err(self.mismatch(what, other)),
        }
    }

    pub(crate) fn next_loop(&mut self) -> Result<LoopHead, TransformError> {
        match self.next() {
            Some(Fragment::Loop(head)) => Ok(head),
            other => Err(self.mismatch("loop head", other)),
        }
    }

    /// Consume the token `spelling` if it comes next.
    pub(crate) fn eat_token(&mut self, spelling: &str) -> bool {
        if self.peek_token() == Some(spelling) {
            self.next();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_token(&mut self, spelling: &str) -> Result<(), TransformError> {
        if self.eat_token(spelling) {
            return Ok(());
        }
        let found = self.iter.peek().map(Fragment::describe);
        Err(self.malformed(match found {
            Some(found) => format!("expected '{spelling}' at argument {}, found {found}", self.pos),
            None => format!("expected '{spelling}' at argument {}, found nothing", self.pos),
        }))
    }

    /// Fail if any argument is left unconsumed.
    pub(crate) fn finish(&mut self) -> Result<(), TransformError> {
        match self.iter.peek().map(Fragment::describe) {
            Some(extra) => Err(self.malformed(format!(
                "unexpected {extra} at argument {}",
                self.pos
            ))),
            None => Ok(()),
        }
    }

    pub(crate) fn malformed(&self, message: impl Into<String>) -> TransformError {
        TransformError::malformed(self.rule, message)
    }

    fn mismatch(&self, what: &str, found: Option<Fragment>) -> TransformError {
        // `pos` already counts the argument that did not match.
        let at = self.pos.saturating_sub(usize::from(found.is_some()));
        match found {
            Some(found) => self.malformed(format!(
                "expected {what} at argument {at}, found {}",
                found.describe()
            )),
            None => self.malformed(format!("expected {what} at argument {at}, found nothing")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(fragments: Vec<Fragment>) -> Args {
        Args::new("Test", fragments)
    }

    #[test]
    fn test_tokens_and_nodes() {
        let mut args = args(vec![
            Fragment::Token("(".into()),
            Fragment::Node(Node::identifier("x")),
            Fragment::Token(")".into()),
        ]);
        assert!(!args.eat_token(")"));
        args.expect_token("(").unwrap();
        assert!(args.optional_node().is_some());
        assert!(args.optional_node().is_none());
        assert_eq!(args.remaining(), 1);
        args.expect_token(")").unwrap();
        args.finish().unwrap();
    }

    #[test]
    fn test_mismatch_names_position() {
        let mut args = args(vec![Fragment::Token(";".into())]);
        let err = args.next_node("expression").unwrap_err();
        assert_eq!(
            err,
            TransformError::malformed("Test", "expected expression at argument 0, found ';'")
        );
        let err = args.next_list("arguments").unwrap_err();
        assert_eq!(
            err,
            TransformError::malformed("Test", "expected arguments at argument 1, found nothing")
        );
    }

    #[test]
    fn test_finish_reports_leftovers() {
        let mut args = args(vec![Fragment::List(Vec::new())]);
        assert_eq!(
            args.finish().unwrap_err(),
            TransformError::malformed("Test", "unexpected list of 0 at argument 0")
        );
    }

    #[test]
    fn test_expect_token_at_end() {
        let mut args = args(Vec::new());
        assert_eq!(
            args.expect_token("}").unwrap_err(),
            TransformError::malformed("Test", "expected '}' at argument 0, found nothing")
        );
    }
}
