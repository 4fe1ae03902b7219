//! # JavaScript ESTree Transformer
//!
//! Rebuilds the ESTree of a JavaScript program from a concrete syntax tree.
//!
//! ## Architecture
//!
//! ```text
//! Source → js-cst (CST) → walker → processors → ESTree (serde JSON)
//! ```
//!
//! The walker visits the CST bottom-up through [`js_cst::TreeCursor`], so a
//! tree parsed here and one received from another engine (see [`cst`]) go
//! through the same processors.
//!
//! ## Example
//!
//! ```rust
//! use js_estree::transform;
//! use serde_json::json;
//!
//! let program = transform("x = 1;").unwrap();
//! assert_eq!(
//!     program.to_json(),
//!     json!({
//!         "type": "Program",
//!         "sourceType": "script",
//!         "body": [{
//!             "type": "ExpressionStatement",
//!             "expression": {
//!                 "type": "AssignmentExpression",
//!                 "operator": "=",
//!                 "left": { "type": "Identifier", "name": "x" },
//!                 "right": { "type": "Literal", "value": 1, "raw": "1" }
//!             }
//!         }]
//!     })
//! );
//! ```

pub mod ast;
pub mod cst;
pub mod decode;
pub mod error;
pub mod fragment;
pub mod processors;
mod walker;

pub use ast::Node;
pub use error::TransformError;
pub use fragment::Fragment;

use config::constants::GlobalConfig;
use cst::SerializedNode;
use js_cst::{Dialects, ParseOptions, TreeCursor};
use log::debug;
use walker::Walker;

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for one transform.
///
/// ## Example
///
/// ```rust
/// use js_estree::TransformOptions;
/// use config::constants::GlobalConfig;
///
/// let options = TransformOptions {
///     config: GlobalConfig::new(Some(64)).unwrap(),
///     ..TransformOptions::default()
/// };
/// assert_eq!(options.parse_options().config.max_nesting_depth, Some(64));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Grammar dialects enabled while parsing.
    pub dialects: Dialects,
    /// Nesting bound and stack growth, shared by parser and walker.
    pub config: GlobalConfig,
}

impl TransformOptions {
    /// The matching parser options.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_dialects(self.dialects)
            .with_config(self.config)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse and transform JavaScript source into an ESTree `Program`.
///
/// ## Parameters
///
/// - `source`: JavaScript source code string
///
/// ## Returns
///
/// `Result<Node, TransformError>` - the `Program` node, or the first error
pub fn transform(source: &str) -> Result<Node, TransformError> {
    transform_with(source, &TransformOptions::default())
}

/// Parse and transform with explicit options.
///
/// ## Example
///
/// ```rust
/// use js_estree::{transform_with, TransformOptions};
/// use js_cst::{Dialect, Dialects};
///
/// let options = TransformOptions {
///     dialects: Dialects::none().with(Dialect::Ts),
///     ..TransformOptions::default()
/// };
/// assert!(transform_with("class A extends B {}", &options).is_ok());
/// assert!(transform_with("var extends;", &options).is_err());
/// ```
pub fn transform_with(source: &str, options: &TransformOptions) -> Result<Node, TransformError> {
    let cst = js_cst::parse_with(source, &options.parse_options())?;
    debug!("parsed {} top-level statement(s)", cst.root.children.len());
    let fragment = transform_cursor(&mut cst.cursor(), source, options)?;
    root_node(fragment)
}

/// Transform the tree under `cursor`, whatever engine produced it.
///
/// ## Returns
///
/// The fragment for the cursor's node; a whole program yields
/// `Fragment::Node(Program)`
pub fn transform_cursor<C: TreeCursor>(
    cursor: &mut C,
    source: &str,
    options: &TransformOptions,
) -> Result<Fragment, TransformError> {
    Walker::new(source, options.config).walk(cursor, 0)
}

/// Transform a CST received in serialized form.
pub fn transform_serialized(
    root: &SerializedNode,
    source: &str,
    options: &TransformOptions,
) -> Result<Node, TransformError> {
    root_node(transform_cursor(&mut root.cursor(), source, options)?)
}

fn root_node(fragment: Fragment) -> Result<Node, TransformError> {
    match fragment {
        Fragment::Node(node) => Ok(node),
        other => Err(TransformError::malformed(
            "root",
            format!("expected a node, found {}", other.describe()),
        )),
    }
}

#[cfg(test)]
mod tests;
