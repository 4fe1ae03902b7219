//! # Serialized CST Types
//!
//! A concrete syntax tree received as data rather than built in-process.
//! This lets parsing happen in another engine (for example one hosted in
//! JavaScript) while the ESTree reconstruction happens here.
//!
//! ## Architecture
//!
//! ```text
//! External engine: Source → CST → JSON
//! Rust:            JSON → SerializedNode → js-estree → ESTree
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use js_estree::cst::SerializedNode;
//! use js_estree::{transform_serialized, TransformOptions};
//!
//! let json = r#"{
//!     "name": "Script", "from": 0, "to": 2,
//!     "children": [{
//!         "name": "ExpressionStatement", "from": 0, "to": 2,
//!         "children": [
//!             { "name": "Number", "from": 0, "to": 1 },
//!             { "name": ";", "from": 1, "to": 2 }
//!         ]
//!     }]
//! }"#;
//! let cst: SerializedNode = serde_json::from_str(json).unwrap();
//! let program = transform_serialized(&cst, "7;", &TransformOptions::default()).unwrap();
//! assert_eq!(program.type_name(), "Program");
//! ```

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use js_cst::{CstNode, NodeCursor, SyntaxNode};
use serde::{Deserialize, Serialize};

/// A serialized syntax tree node.
///
/// # Fields
///
/// * `name` - Grammar rule name, or the spelling of a fixed token
/// * `from` - Byte offset where this node starts
/// * `to` - Byte offset where this node ends
/// * `children` - Ordered child nodes; absent for leaves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedNode {
    pub name: String,
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SerializedNode>,
}

/// Cursor over a [`SerializedNode`] tree.
pub type SerializedCursor<'t> = NodeCursor<'t, SerializedNode>;

impl SerializedNode {
    /// Create a node.
    pub fn new(name: impl Into<String>, from: usize, to: usize, children: Vec<SerializedNode>) -> Self {
        Self {
            name: name.into(),
            from,
            to,
            children,
        }
    }

    /// Copy an in-process CST into serialized form.
    ///
    /// The copy is unbounded; the depth limit applies when the result is
    /// transformed.
    pub fn from_cst(node: &CstNode) -> Self {
        let children = node
            .children
            .iter()
            .map(|child| {
                stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    Self::from_cst(child)
                })
            })
            .collect();
        Self {
            name: node.name().to_string(),
            from: node.span.start(),
            to: node.span.end(),
            children,
        }
    }

    /// Depth-first cursor positioned at this node.
    pub fn cursor(&self) -> SerializedCursor<'_> {
        NodeCursor::new(self)
    }
}

impl SyntaxNode for SerializedNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn from(&self) -> usize {
        self.from
    }

    fn to(&self) -> usize {
        self.to
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

// =============================================================================
// TESTS
// =============================================================================
