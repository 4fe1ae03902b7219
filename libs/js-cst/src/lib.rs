//! # JavaScript CST Parser (Pure Rust)
//!
//! A grammar-driven JavaScript parser producing a lossless Concrete Syntax
//! Tree whose nodes are labeled by grammar rule and carry byte spans.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer ⇄ Parser → CST
//!                 ↑
//!      contextual recognizers (ASI, no-ASI, ++/--, templates, dialect keywords)
//! ```
//!
//! Tokens are scanned on demand because several lexical decisions depend on
//! grammar position. The recognizers in [`lexer`] make those decisions from a
//! codepoint cursor and a view of what the parser could shift.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::{parse, NodeKind};
//!
//! let cst = parse("let x = 1\nx++").unwrap();
//! assert_eq!(cst.root.children.len(), 2);
//! assert_eq!(cst.root.children[1].children[0].kind, NodeKind::PostfixExpression);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! js-cst → js-estree
//! ```

pub mod cst;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod span;

// Re-export public API
pub use cst::{Cst, CstNode, NodeKind};
pub use cursor::{NodeCursor, SyntaxNode, TreeCursor};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Dialect, Dialects};
pub use options::ParseOptions;
pub use span::{Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse JavaScript source code into a Concrete Syntax Tree.
///
/// ## Parameters
///
/// - `source`: JavaScript source code string
///
/// ## Returns
///
/// `Cst` rooted at a `Script` node, or the first syntax error
///
/// ## Example
///
/// ```rust
/// use js_cst::parse;
///
/// let cst = parse("f(1);").unwrap();
/// assert_eq!(cst.root.kind, js_cst::NodeKind::Script);
/// assert!(parse("f(;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Cst, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Parse with explicit dialects and recursion bounds.
///
/// ## Example
///
/// ```rust
/// use js_cst::{parse_with, Dialect, Dialects, ParseOptions};
///
/// let options = ParseOptions::default().with_dialects(Dialects::none().with(Dialect::Ts));
/// assert!(parse_with("class A extends B {}", &options).is_ok());
/// ```
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Cst, ParseError> {
    parser::Parser::new(source, *options).parse()
}

// =============================================================================
// TESTS
// =============================================================================
