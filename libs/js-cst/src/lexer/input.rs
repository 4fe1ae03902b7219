//! # Recognizer Input
//!
//! Codepoint cursor handed to the contextual recognizers. A recognizer reads
//! with `next`/`peek`, moves with `advance`, and reports a decision with
//! `accept_token`. Returning without accepting declines, and the caller simply
//! drops the cursor, so any characters a declining recognizer advanced over
//! are never consumed.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::lexer::{Input, Term};
//!
//! let mut input = Input::new("`abc`", 1);
//! assert_eq!(input.next(), Some('a'));
//! assert_eq!(input.peek(2), Some('c'));
//! input.advance();
//! input.accept_token(Term::TemplateContent, 0);
//! assert_eq!(input.accepted(), Some((Term::TemplateContent, 2)));
//! ```

use super::token::Term;

// =============================================================================
// INPUT
// =============================================================================

/// Codepoint cursor over the source text starting at a byte offset.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    pos: usize,
    /// Token accepted by the recognizer, with its end offset.
    token: Option<(Term, usize)>,
}

impl<'a> Input<'a> {
    /// Create a cursor positioned at byte offset `pos`.
    ///
    /// ## Parameters
    ///
    /// - `source`: Full source text
    /// - `pos`: Byte offset of the first character to scan
    pub fn new(source: &'a str, pos: usize) -> Self {
        Self {
            source,
            pos: pos.min(source.len()),
            token: None,
        }
    }

    /// Current codepoint, or `None` at end of input.
    pub fn next(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The codepoint `offset` positions ahead; `peek(0)` equals `next()`.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Move past the current codepoint.
    ///
    /// ## Returns
    ///
    /// The codepoint consumed, or `None` at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Accept a token of kind `term` ending `end_offset` bytes away from the
    /// current position.
    ///
    /// A later call replaces an earlier one.
    pub fn accept_token(&mut self, term: Term, end_offset: isize) {
        let end = self
            .pos
            .checked_add_signed(end_offset)
            .unwrap_or(self.pos)
            .min(self.source.len());
        self.token = Some((term, end));
    }

    /// The accepted token and its end offset, if any.
    pub fn accepted(&self) -> Option<(Term, usize)> {
        self.token
    }

    /// Unscanned remainder of the source.
    fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or("")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_is_none() {
        let mut input = Input::new("a", 0);
        assert_eq!(input.advance(), Some('a'));
        assert_eq!(input.next(), None);
        assert_eq!(input.advance(), None);
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_advance_is_codepoint_wide() {
        let mut input = Input::new("é!", 0);
        input.advance();
        assert_eq!(input.position(), 2);
        assert_eq!(input.next(), Some('!'));
    }

    #[test]
    fn test_accept_with_negative_offset() {
        let mut input = Input::new("ab${", 0);
        input.advance();
        input.advance();
        input.advance();
        input.accept_token(Term::TemplateContent, -1);
        assert_eq!(input.accepted(), Some((Term::TemplateContent, 2)));
    }

    #[test]
    fn test_accept_is_clamped_to_source() {
        let mut input = Input::new("x", 1);
        input.accept_token(Term::TemplateEnd, 1);
        assert_eq!(input.accepted(), Some((Term::TemplateEnd, 1)));
    }
}
