//! # Literal Decoding
//!
//! Turns literal source text into the values ESTree carries, without
//! evaluating anything.
//!
//! ## Example
//!
//! ```rust
//! use js_estree::ast::LiteralValue;
//! use js_estree::decode;
//!
//! assert_eq!(decode::number("1e3").unwrap().value, LiteralValue::Number(1000.0));
//! assert_eq!(decode::string("'x'").unwrap().value, LiteralValue::String("x".into()));
//! assert!(decode::regexp("/a/q").is_err());
//! ```

mod number;
mod regexp;
mod string;

pub use number::number;
pub use regexp::regexp;
pub use string::{string, template};
