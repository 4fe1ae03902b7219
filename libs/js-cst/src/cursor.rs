//! # Tree Cursor
//!
//! Depth-first cursor over a syntax tree, exposing each node's rule name and
//! byte span. Transformers walk any tree through [`TreeCursor`], so a CST
//! built here and one deserialized from another engine are rebuilt by the
//! same code.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::{parse, TreeCursor};
//!
//! let cst = parse("1;").unwrap();
//! let mut cursor = cst.cursor();
//! assert_eq!(cursor.name(), "Script");
//! assert!(cursor.first_child());
//! assert_eq!(cursor.name(), "ExpressionStatement");
//! assert!(cursor.first_child());
//! assert_eq!((cursor.name(), cursor.from(), cursor.to()), ("Number", 0, 1));
//! assert!(cursor.next_sibling());
//! assert_eq!(cursor.name(), ";");
//! assert!(!cursor.next_sibling());
//! assert!(cursor.parent());
//! assert!(cursor.parent());
//! assert!(!cursor.parent());
//! ```

// =============================================================================
// TRAITS
// =============================================================================

/// Depth-first cursor over a syntax tree.
///
/// Movement methods return `false` and leave the cursor in place when the
/// requested node does not exist.
pub trait TreeCursor {
    /// Grammar-rule name of the current node.
    fn name(&self) -> &str;
    /// Start byte offset of the current node.
    fn from(&self) -> usize;
    /// End byte offset of the current node.
    fn to(&self) -> usize;
    /// Move to the first child.
    fn first_child(&mut self) -> bool;
    /// Move to the next sibling.
    fn next_sibling(&mut self) -> bool;
    /// Move to the parent.
    fn parent(&mut self) -> bool;
}

/// A tree node [`NodeCursor`] can walk.
pub trait SyntaxNode {
    /// Grammar-rule name.
    fn name(&self) -> &str;
    /// Start byte offset.
    fn from(&self) -> usize;
    /// End byte offset.
    fn to(&self) -> usize;
    /// Ordered children.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

// =============================================================================
// NODE CURSOR
// =============================================================================

/// Cursor over an in-memory tree of [`SyntaxNode`]s.
///
/// Keeps the path from the root as `(node, index among siblings)` pairs.
#[derive(Debug, Clone)]
pub struct NodeCursor<'t, N> {
    path: Vec<(&'t N, usize)>,
}

impl<'t, N: SyntaxNode> NodeCursor<'t, N> {
    /// Create a cursor positioned at `root`.
    pub fn new(root: &'t N) -> Self {
        Self {
            path: vec![(root, 0)],
        }
    }

    /// Node the cursor is positioned at.
    pub fn node(&self) -> &'t N {
        // The path always holds at least the root.
        self.path[self.path.len() - 1].0
    }
}

impl<'t, N: SyntaxNode> TreeCursor for NodeCursor<'t, N> {
    fn name(&self) -> &str {
        self.node().name()
    }

    fn from(&self) -> usize {
        self.node().from()
    }

    fn to(&self) -> usize {
        self.node().to()
    }

    fn first_child(&mut self) -> bool {
        match self.node().children().first() {
            Some(child) => {
                self.path.push((child, 0));
                true
            }
            None => false,
        }
    }

    fn next_sibling(&mut self) -> bool {
        let depth = self.path.len();
        if depth < 2 {
            return false;
        }
        let parent = self.path[depth - 2].0;
        let index = self.path[depth - 1].1 + 1;
        match parent.children().get(index) {
            Some(sibling) => {
                self.path[depth - 1] = (sibling, index);
                true
            }
            None => false,
        }
    }

    fn parent(&mut self) -> bool {
        if self.path.len() < 2 {
            return false;
        }
        self.path.pop();
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::{CstNode, NodeKind};
    use crate::span::Span;

    fn sample() -> CstNode {
        // a + b;
        CstNode::node(
            NodeKind::Script,
            vec![CstNode::node(
                NodeKind::ExpressionStatement,
                vec![
                    CstNode::node(
                        NodeKind::BinaryExpression,
                        vec![
                            CstNode::leaf(NodeKind::VariableName, Span::new(0, 1)),
                            CstNode::leaf(NodeKind::ArithOp, Span::new(2, 3)),
                            CstNode::leaf(NodeKind::VariableName, Span::new(4, 5)),
                        ],
                    ),
                    CstNode::leaf(NodeKind::Literal(";"), Span::new(5, 6)),
                ],
            )],
        )
    }

    fn preorder<C: TreeCursor>(cursor: &mut C, out: &mut Vec<String>) {
        out.push(cursor.name().to_string());
        if cursor.first_child() {
            loop {
                preorder(cursor, out);
                if !cursor.next_sibling() {
                    break;
                }
            }
            cursor.parent();
        }
    }

    #[test]
    fn test_preorder_walk() {
        let root = sample();
        let mut names = Vec::new();
        preorder(&mut NodeCursor::new(&root), &mut names);
        assert_eq!(
            names,
            [
                "Script",
                "ExpressionStatement",
                "BinaryExpression",
                "VariableName",
                "ArithOp",
                "VariableName",
                ";"
            ]
        );
    }

    #[test]
    fn test_root_has_no_siblings_or_parent() {
        let root = sample();
        let mut cursor = NodeCursor::new(&root);
        assert!(!cursor.next_sibling());
        assert!(!cursor.parent());
        assert_eq!((cursor.from(), cursor.to()), (0, 6));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let root = sample();
        let mut cursor = NodeCursor::new(&root);
        cursor.first_child();
        cursor.first_child();
        cursor.next_sibling();
        assert_eq!(cursor.name(), ";");
        assert!(!cursor.first_child());
        assert_eq!(cursor.name(), ";");
    }
}
