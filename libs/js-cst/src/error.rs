//! # Parse Errors
//!
//! Error types for the JavaScript parser. Parsing stops at the first error.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::error::{ParseError, ParseErrorKind};
//! use js_cst::Span;
//!
//! let error = ParseError::unexpected_token(")", "identifier").with_span(Span::new(4, 5));
//! assert_eq!(error.to_string(), "unexpected token ')', expected identifier at byte 4");
//! ```

use crate::span::Span;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte {}", .span.start())]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create unexpected EOF error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Unexpected end of file.
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Invalid number literal.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Character that starts no token.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    /// Unterminated string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Unterminated block comment.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// Template string without its closing backtick.
    #[error("unterminated template literal")]
    UnterminatedTemplate,

    /// Regular expression without its closing slash.
    #[error("unterminated regular expression")]
    UnterminatedRegExp,

    /// Syntactic nesting exceeded the configured bound.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured bound.
        limit: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
