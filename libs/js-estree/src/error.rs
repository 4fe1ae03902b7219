//! # Transform Errors
//!
//! A transform either returns a whole tree or fails with the first error;
//! there is no partial output.
//!
//! ## Example
//!
//! ```rust
//! use js_estree::{transform, TransformError};
//!
//! let err = transform("f(").unwrap_err();
//! assert!(matches!(err, TransformError::Syntax(_)));
//! ```

use crate::fragment::Fragment;
use js_cst::{ParseError, ParseErrorKind};
use thiserror::Error;

/// Errors raised while parsing or rebuilding a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The source failed to parse.
    #[error("syntax error: {0}")]
    Syntax(ParseError),

    /// A CST node whose rule has no processor and is not a bare terminal.
    #[error("unhandled node kind '{rule}' with {} argument(s)", .args.len())]
    UnhandledNodeKind {
        /// Rule name of the node.
        rule: String,
        /// Processed children of the node.
        args: Vec<Fragment>,
    },

    /// Children that do not match the shape the rule's processor expects.
    #[error("malformed arguments for '{rule}': {message}")]
    MalformedArguments { rule: String, message: String },

    /// Tree nesting beyond the configured bound.
    #[error("tree nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    /// A literal whose text cannot be decoded.
    #[error("cannot decode literal {raw}: {reason}")]
    LiteralDecode { raw: String, reason: String },

    /// A node span that does not slice the source.
    #[error("span {from}..{to} of '{rule}' is outside the source")]
    InvalidSpan { rule: String, from: usize, to: usize },
}

impl TransformError {
    /// Create a malformed-arguments error.
    pub fn malformed(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedArguments {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create a literal-decoding error.
    pub fn literal(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LiteralDecode {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

impl From<ParseError> for TransformError {
    fn from(error: ParseError) -> Self {
        match error.kind {
            ParseErrorKind::NestingTooDeep { limit } => Self::DepthExceeded { limit },
            _ => Self::Syntax(error),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
