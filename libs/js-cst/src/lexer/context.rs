//! # Context Tracker
//!
//! Tracks whether a line break or comment sits between the last significant
//! token and the next one. ASI, the no-terminator marker and `++`/`--`
//! classification all consult it.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::lexer::{ContextTracker, Term, TokenContext};
//!
//! let ctx = ContextTracker::start();
//! let ctx = ContextTracker::shift(ctx, Term::Newline);
//! let ctx = ContextTracker::shift(ctx, Term::Spaces);
//! assert!(ctx.is_break());
//! assert_eq!(ContextTracker::shift(ctx, Term::Token), TokenContext::None);
//! ```

use super::token::Term;

/// Class of the last trivia seen since the previous significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenContext {
    /// Nothing but spaces since the last significant token.
    #[default]
    None,
    /// A line terminator was shifted.
    Newline,
    /// A line or block comment was shifted.
    Comment,
}

impl TokenContext {
    /// `true` when a newline or comment separates the surrounding tokens.
    pub fn is_break(self) -> bool {
        !matches!(self, TokenContext::None)
    }
}

/// Stateless transition function over [`TokenContext`].
///
/// Each lexer owns its own context value, so nothing leaks between parses.
pub struct ContextTracker;

impl ContextTracker {
    /// State at the start of every token stream.
    pub const fn start() -> TokenContext {
        TokenContext::None
    }

    /// State after shifting `term`.
    pub fn shift(context: TokenContext, term: Term) -> TokenContext {
        match term {
            Term::LineComment | Term::BlockComment => TokenContext::Comment,
            Term::Newline => TokenContext::Newline,
            Term::Spaces => context,
            _ => TokenContext::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_none() {
        assert_eq!(ContextTracker::start(), TokenContext::None);
        assert!(!ContextTracker::start().is_break());
    }

    #[test]
    fn test_comments_set_comment() {
        let ctx = ContextTracker::shift(TokenContext::None, Term::BlockComment);
        assert_eq!(ctx, TokenContext::Comment);
        let ctx = ContextTracker::shift(TokenContext::Newline, Term::LineComment);
        assert_eq!(ctx, TokenContext::Comment);
    }

    #[test]
    fn test_spaces_keep_state() {
        for ctx in [TokenContext::None, TokenContext::Newline, TokenContext::Comment] {
            assert_eq!(ContextTracker::shift(ctx, Term::Spaces), ctx);
        }
    }

    #[test]
    fn test_significant_tokens_reset() {
        for term in [Term::Token, Term::Incdec, Term::TemplateEnd, Term::InsertSemi] {
            assert_eq!(
                ContextTracker::shift(TokenContext::Comment, term),
                TokenContext::None
            );
        }
    }
}
