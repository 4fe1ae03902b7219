//! # ESTree Nodes
//!
//! The ESTree subset produced by the transformer. Serializing a [`Node`] with
//! serde yields the JSON a standard JavaScript parser emits for the same
//! source, without location fields.
//!
//! ## Example
//!
//! ```rust
//! use js_estree::ast::{Literal, Node};
//! use serde_json::json;
//!
//! let node = Node::ExpressionStatement {
//!     expression: Box::new(Node::Literal(Literal::number(1.0, "1"))),
//! };
//! assert_eq!(
//!     serde_json::to_value(&node).unwrap(),
//!     json!({
//!         "type": "ExpressionStatement",
//!         "expression": { "type": "Literal", "value": 1, "raw": "1" }
//!     })
//! );
//! ```

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// NODE
// =============================================================================

/// An ESTree node, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    // -------------------------------------------------------------------------
    // Program and statements
    // -------------------------------------------------------------------------
    Program {
        body: Vec<Node>,
        #[serde(rename = "sourceType")]
        source_type: SourceType,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement,
    DebuggerStatement,
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },
    ForStatement {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    ForOfStatement {
        #[serde(rename = "await")]
        is_await: bool,
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    BreakStatement {
        label: Option<Box<Node>>,
    },
    ContinueStatement {
        label: Option<Box<Node>>,
    },
    ThrowStatement {
        argument: Box<Node>,
    },
    TryStatement {
        block: Box<Node>,
        handler: Option<Box<Node>>,
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Option<Box<Node>>,
        body: Box<Node>,
    },
    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },
    SwitchCase {
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },
    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },

    // -------------------------------------------------------------------------
    // Declarations
    // -------------------------------------------------------------------------
    VariableDeclaration {
        declarations: Vec<Node>,
        kind: VariableKind,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    FunctionDeclaration(Function),
    FunctionExpression(Function),
    ArrowFunctionExpression(Function),
    ClassDeclaration(Class),
    ClassExpression(Class),
    ClassBody {
        body: Vec<Node>,
    },
    MethodDefinition {
        #[serde(rename = "static")]
        is_static: bool,
        computed: bool,
        key: Box<Node>,
        kind: MethodKind,
        value: Box<Node>,
    },

    // -------------------------------------------------------------------------
    // Expressions
    // -------------------------------------------------------------------------
    Identifier {
        name: String,
    },
    Literal(Literal),
    ThisExpression,
    Super,
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        method: bool,
        shorthand: bool,
        computed: bool,
        key: Box<Node>,
        value: Box<Node>,
        kind: PropertyKind,
    },
    SpreadElement {
        argument: Box<Node>,
    },
    RestElement {
        argument: Box<Node>,
    },
    AssignmentPattern {
        left: Box<Node>,
        right: Box<Node>,
    },
    TemplateLiteral {
        quasis: Vec<Node>,
        expressions: Vec<Node>,
    },
    TemplateElement {
        value: TemplateValue,
        tail: bool,
    },
    TaggedTemplateExpression {
        tag: Box<Node>,
        quasi: Box<Node>,
    },
    UnaryExpression {
        operator: String,
        prefix: bool,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: String,
        prefix: bool,
        argument: Box<Node>,
    },
    BinaryExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    LogicalExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        optional: bool,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
        optional: bool,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    AwaitExpression {
        argument: Box<Node>,
    },
}

impl Node {
    /// Create an identifier.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// ESTree `type` of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Program { .. } => "Program",
            Self::ExpressionStatement { .. } => "ExpressionStatement",
            Self::BlockStatement { .. } => "BlockStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::DebuggerStatement => "DebuggerStatement",
            Self::IfStatement { .. } => "IfStatement",
            Self::ReturnStatement { .. } => "ReturnStatement",
            Self::WhileStatement { .. } => "WhileStatement",
            Self::DoWhileStatement { .. } => "DoWhileStatement",
            Self::ForStatement { .. } => "ForStatement",
            Self::ForInStatement { .. } => "ForInStatement",
            Self::ForOfStatement { .. } => "ForOfStatement",
            Self::BreakStatement { .. } => "BreakStatement",
            Self::ContinueStatement { .. } => "ContinueStatement",
            Self::ThrowStatement { .. } => "ThrowStatement",
            Self::TryStatement { .. } => "TryStatement",
            Self::CatchClause { .. } => "CatchClause",
            Self::SwitchStatement { .. } => "SwitchStatement",
            Self::SwitchCase { .. } => "SwitchCase",
            Self::LabeledStatement { .. } => "LabeledStatement",
            Self::VariableDeclaration { .. } => "VariableDeclaration",
            Self::VariableDeclarator { .. } => "VariableDeclarator",
            Self::FunctionDeclaration(_) => "FunctionDeclaration",
            Self::FunctionExpression(_) => "FunctionExpression",
            Self::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Self::ClassDeclaration(_) => "ClassDeclaration",
            Self::ClassExpression(_) => "ClassExpression",
            Self::ClassBody { .. } => "ClassBody",
            Self::MethodDefinition { .. } => "MethodDefinition",
            Self::Identifier { .. } => "Identifier",
            Self::Literal(_) => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::Super => "Super",
            Self::ArrayExpression { .. } => "ArrayExpression",
            Self::ObjectExpression { .. } => "ObjectExpression",
            Self::Property { .. } => "Property",
            Self::SpreadElement { .. } => "SpreadElement",
            Self::RestElement { .. } => "RestElement",
            Self::AssignmentPattern { .. } => "AssignmentPattern",
            Self::TemplateLiteral { .. } => "TemplateLiteral",
            Self::TemplateElement { .. } => "TemplateElement",
            Self::TaggedTemplateExpression { .. } => "TaggedTemplateExpression",
            Self::UnaryExpression { .. } => "UnaryExpression",
            Self::UpdateExpression { .. } => "UpdateExpression",
            Self::BinaryExpression { .. } => "BinaryExpression",
            Self::LogicalExpression { .. } => "LogicalExpression",
            Self::AssignmentExpression { .. } => "AssignmentExpression",
            Self::ConditionalExpression { .. } => "ConditionalExpression",
            Self::CallExpression { .. } => "CallExpression",
            Self::NewExpression { .. } => "NewExpression",
            Self::MemberExpression { .. } => "MemberExpression",
            Self::SequenceExpression { .. } => "SequenceExpression",
            Self::AwaitExpression { .. } => "AwaitExpression",
        }
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // Node serialization has no failure path: every map key is a string
        // and every number is finite or written as null.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// =============================================================================
// FUNCTIONS AND CLASSES
// =============================================================================

/// Fields shared by function declarations, expressions and arrows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub id: Option<Box<Node>>,
    /// Whether the body is a bare expression; only arrows set it.
    pub expression: bool,
    pub generator: bool,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub params: Vec<Node>,
    pub body: Box<Node>,
}

/// Fields shared by class declarations and expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub id: Option<Box<Node>>,
    #[serde(rename = "superClass")]
    pub super_class: Option<Box<Node>>,
    pub body: Box<Node>,
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    /// Kind for a declaration keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(Self::Var),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

// =============================================================================
// LITERALS
// =============================================================================

/// `Literal` node payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    /// Source text of the literal.
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexLiteral>,
    /// Digits of a bigint literal without the `n` suffix or separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigint: Option<String>,
}

impl Literal {
    /// Literal with no extra fields.
    pub fn new(value: LiteralValue, raw: impl Into<String>) -> Self {
        Self {
            value,
            raw: raw.into(),
            regex: None,
            bigint: None,
        }
    }

    pub fn number(value: f64, raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::Number(value), raw)
    }

    pub fn string(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::new(LiteralValue::String(value.into()), raw)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(LiteralValue::Boolean(value), if value { "true" } else { "false" })
    }

    pub fn null() -> Self {
        Self::new(LiteralValue::Null, "null")
    }
}

/// Decoded value of a literal.
///
/// Values with no JSON form (`BigInt`, `RegExp`) serialize as `null`; their
/// content lives in the `bigint` and `regex` fields of [`Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
    RegExp,
}

impl LiteralValue {
    /// Numeric value, if this is a number or a bigint that fits an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::BigInt(n) => n.to_f64(),
            _ => None,
        }
    }
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::BigInt(_) | Self::RegExp => serializer.serialize_none(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::Number(_) => serializer.serialize_none(),
        }
    }
}

/// `regex` field of a regular expression literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

/// `value` field of a template element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateValue {
    pub raw: String,
    /// `None` when the raw text holds an escape that is invalid outside a
    /// tagged template.
    pub cooked: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================
