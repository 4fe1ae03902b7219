//! # Concrete Syntax Tree (CST)
//!
//! Lossless tree labeled by grammar rule. Leaves carry no text of their own;
//! their text is the source sliced by their span. Fixed-spelling tokens
//! (keywords and punctuation) are leaves named by their spelling.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::{parse, NodeKind};
//!
//! let cst = parse("x;").unwrap();
//! assert_eq!(cst.root.kind, NodeKind::Script);
//! assert_eq!(cst.root.children[0].kind, NodeKind::ExpressionStatement);
//! assert_eq!(cst.root.children[0].children[1].kind.name(), ";");
//! ```

use crate::cursor::{NodeCursor, SyntaxNode};
use crate::span::{Span, Spanned};
use serde::Serialize;

// =============================================================================
// CST
// =============================================================================

/// Concrete Syntax Tree result.
#[derive(Debug, Clone, Serialize)]
pub struct Cst {
    /// Root node of the syntax tree, always a [`NodeKind::Script`].
    pub root: CstNode,
}

impl Cst {
    /// Create a new CST.
    pub fn new(root: CstNode) -> Self {
        Self { root }
    }

    /// Depth-first cursor positioned at the root.
    pub fn cursor(&self) -> NodeCursor<'_, CstNode> {
        NodeCursor::new(&self.root)
    }
}

// =============================================================================
// CST NODE
// =============================================================================

/// A node in the Concrete Syntax Tree.
///
/// ## Example
///
/// ```rust
/// use js_cst::{CstNode, NodeKind, Span};
///
/// let node = CstNode::leaf(NodeKind::Number, Span::new(0, 2));
/// assert!(node.children.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CstNode {
    /// Node type.
    pub kind: NodeKind,
    /// Source span.
    pub span: Span,
    /// Child nodes, ordered and disjoint.
    pub children: Vec<CstNode>,
}

impl CstNode {
    /// Create a leaf node.
    pub fn leaf(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// Create node with children and an explicit span.
    pub fn with_children(kind: NodeKind, span: Span, children: Vec<CstNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    /// Create node spanning from its first to its last child.
    ///
    /// A childless node gets an empty span at offset zero; grammar rules
    /// always produce at least one child.
    pub fn node(kind: NodeKind, children: Vec<CstNode>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::empty(0),
        };
        Self::with_children(kind, span, children)
    }

    /// Find first child with given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Grammar-rule name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl Spanned for CstNode {
    fn span(&self) -> Span {
        self.span
    }
}

impl SyntaxNode for CstNode {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn from(&self) -> usize {
        self.span.start()
    }

    fn to(&self) -> usize {
        self.span.end()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $kind:ident),* $(,)?) => {
        /// Types of CST nodes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum NodeKind {
            $($(#[$doc])* $kind,)*
            /// Fixed-spelling token, named by its spelling.
            Literal(&'static str),
        }

        impl NodeKind {
            /// Grammar-rule name; the spelling itself for fixed-spelling tokens.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)*
                    Self::Literal(spelling) => *spelling,
                }
            }
        }
    };
}

node_kinds! {
    // Top-level
    /// Root node containing all statements.
    Script,

    // Statements
    /// `expr;`
    ExpressionStatement,
    /// `var x = 1, y;`, also the declaration head of a `for` loop.
    VariableDeclaration,
    /// `function f() {}`
    FunctionDeclaration,
    /// `class A extends B {}`
    ClassDeclaration,
    /// `{ ... }` of a class.
    ClassBody,
    /// Method inside a class body.
    MethodDeclaration,
    /// `return x;`
    ReturnStatement,
    /// `if (x) a; else b;`
    IfStatement,
    /// `while (x) body`
    WhileStatement,
    /// `do body while (x);`
    DoStatement,
    /// `for (spec) body`
    ForStatement,
    /// `(init; test; update)`
    ForSpec,
    /// `(left in right)`
    ForInSpec,
    /// `(left of right)`
    ForOfSpec,
    /// `{ statements }`
    Block,
    /// `break label;`
    BreakStatement,
    /// `continue label;`
    ContinueStatement,
    /// `throw x;`
    ThrowStatement,
    /// `try {} catch (e) {} finally {}`
    TryStatement,
    /// `catch (e) {}`
    CatchClause,
    /// `finally {}`
    FinallyClause,
    /// `switch (x) { ... }`
    SwitchStatement,
    /// `{ case ...: ... }`, labels and statements side by side.
    SwitchBody,
    /// `case x:`
    CaseLabel,
    /// `default:`
    DefaultLabel,
    /// `label: statement`
    LabeledStatement,
    /// `;`
    EmptyStatement,
    /// `debugger;`
    DebuggerStatement,

    // Expressions
    /// `(x)`
    ParenthesizedExpression,
    /// `[a, , b]`
    ArrayExpression,
    /// `{a: 1}`
    ObjectExpression,
    /// One entry of an object literal.
    Property,
    /// `...x`
    Spread,
    /// `` `a${b}c` ``
    TemplateString,
    /// ``tag`x` ``
    TaggedTemplateExpression,
    /// `a.b`, `a[b]`
    MemberExpression,
    /// `f(x)`
    CallExpression,
    /// `(a, b)` of a call.
    ArgList,
    /// `new C(x)`
    NewExpression,
    /// `!x`, `typeof x`, `++x`
    UnaryExpression,
    /// `x++`
    PostfixExpression,
    /// `await x`
    AwaitExpression,
    /// `a + b`, `a && b`
    BinaryExpression,
    /// `a ? b : c`
    ConditionalExpression,
    /// `a = b`, `a += b`
    AssignmentExpression,
    /// `a, b`
    SequenceExpression,
    /// `(a) => b`
    ArrowFunction,
    /// `function () {}`
    FunctionExpression,
    /// `class {}`
    ClassExpression,
    /// `(a, b = 1, ...c)` of a function.
    ParamList,

    // Named tokens
    /// Numeric literal.
    Number,
    /// String literal.
    String,
    /// Regular expression literal.
    RegExp,
    /// Identifier in expression position.
    VariableName,
    /// Identifier being bound.
    VariableDefinition,
    /// Identifier after `.`
    PropertyName,
    /// Identifier naming an object or class member.
    PropertyDefinition,
    /// Statement label.
    Label,
    /// Literal text run inside a template string.
    TemplateContent,
    /// `+ - * / % **`
    ArithOp,
    /// `== != === !== < <= > >=`
    CompareOp,
    /// `&& || ?? !`
    LogicOp,
    /// `& | ^ << >> >>> ~`
    BitOp,
    /// `++ --`
    UpdateOp,
    /// `+= -= ...`
    AssignOp,
    /// `=`
    Equals,
    /// `*` marking a generator.
    Star,
}

// =============================================================================
// TESTS
// =============================================================================
