//! # Walker Values
//!
//! What one CST node turns into while the tree is being rebuilt. Only
//! [`Fragment::Node`] may reach the caller; tokens, lists and loop heads are
//! intermediate shapes consumed by the parent rule.

use crate::ast::Node;

/// Result of processing one CST node.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A finished ESTree node.
    Node(Node),
    /// Source text of a terminal, such as an operator or keyword.
    Token(String),
    /// Ordered nodes, such as call arguments or parameters.
    List(Vec<Node>),
    /// Parenthesized head of a `for` loop.
    Loop(LoopHead),
}

impl Fragment {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Node(node) => node.type_name().to_string(),
            Self::Token(text) => format!("'{text}'"),
            Self::List(nodes) => format!("list of {}", nodes.len()),
            Self::Loop(_) => "loop head".to_string(),
        }
    }
}

impl From<Node> for Fragment {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// The three shapes of a `for` head.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopHead {
    /// `(init; test; update)`
    Classic {
        init: Option<Node>,
        test: Option<Node>,
        update: Option<Node>,
    },
    /// `(left in right)`
    In { left: Node, right: Node },
    /// `(left of right)`
    Of { left: Node, right: Node },
}
