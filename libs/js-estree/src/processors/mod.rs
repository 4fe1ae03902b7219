//! # Processors
//!
//! One reconstruction function per grammar rule. Each receives the
//! already-processed children of a node and returns the node's fragment.
//!
//! ## Registry
//!
//! [`Rule`] is the closed set of rules with a processor. Terminals named by
//! their own spelling (`;`, `if`, `=>`, ...) have none: the walker passes them
//! through as tokens.
//!
//! ## Example
//!
//! ```rust
//! use js_estree::processors::{process, Rule};
//! use js_estree::Fragment;
//!
//! let rule = Rule::from_name("VariableName").unwrap();
//! let fragment = process(rule, vec![Fragment::Token("this".into())]).unwrap();
//! assert!(matches!(fragment, Fragment::Node(node) if node.type_name() == "ThisExpression"));
//! assert!(Rule::from_name(";").is_none());
//! ```

mod args;
mod expressions;
mod functions;
mod literals;
mod operators;
mod statements;

pub(crate) use args::Args;

use crate::error::TransformError;
use crate::fragment::Fragment;

/// Operators that build a `LogicalExpression` rather than a `BinaryExpression`.
pub const LOGICAL_OPERATORS: &[&str] = &["&&", "||", "??"];

/// Operators that build an `UpdateExpression` rather than a `UnaryExpression`.
pub const UPDATE_OPERATORS: &[&str] = &["++", "--"];

macro_rules! rules {
    ($($(#[$doc:meta])* $rule:ident => $handler:path),* $(,)?) => {
        /// Grammar rules with a processor.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($(#[$doc])* $rule,)*
        }

        impl Rule {
            /// Look up the processor for a rule name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($rule) => Some(Self::$rule),)*
                    _ => None,
                }
            }

            /// Rule name as it appears in the CST.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$rule => stringify!($rule),)*
                }
            }
        }

        /// Run the processor of `rule` over its processed children.
        ///
        /// ## Returns
        ///
        /// The node's fragment, or `MalformedArguments` when the children do
        /// not have the shape the rule produces
        pub fn process(rule: Rule, args: Vec<Fragment>) -> Result<Fragment, TransformError> {
            let mut args = Args::new(rule.name(), args);
            let fragment = match rule {
                $(Rule::$rule => $handler(&mut args)?,)*
            };
            args.finish()?;
            Ok(fragment)
        }
    };
}

rules! {
    // Program and statements
    Script => statements::script,
    ExpressionStatement => statements::expression_statement,
    VariableDeclaration => statements::variable_declaration,
    ReturnStatement => statements::return_statement,
    IfStatement => statements::if_statement,
    WhileStatement => statements::while_statement,
    DoStatement => statements::do_statement,
    ForStatement => statements::for_statement,
    ForSpec => statements::for_spec,
    ForInSpec => statements::for_in_spec,
    ForOfSpec => statements::for_of_spec,
    Block => statements::block,
    BreakStatement => statements::break_statement,
    ContinueStatement => statements::continue_statement,
    ThrowStatement => statements::throw_statement,
    TryStatement => statements::try_statement,
    CatchClause => statements::catch_clause,
    FinallyClause => statements::finally_clause,
    SwitchStatement => statements::switch_statement,
    SwitchBody => statements::switch_body,
    CaseLabel => statements::case_label,
    DefaultLabel => statements::default_label,
    LabeledStatement => statements::labeled_statement,
    EmptyStatement => statements::empty_statement,
    DebuggerStatement => statements::debugger_statement,

    // Functions and classes
    FunctionDeclaration => functions::function_declaration,
    FunctionExpression => functions::function_expression,
    ArrowFunction => functions::arrow_function,
    ParamList => functions::param_list,
    ClassDeclaration => functions::class_declaration,
    ClassExpression => functions::class_expression,
    ClassBody => functions::class_body,
    MethodDeclaration => functions::method_declaration,

    // Expressions
    ParenthesizedExpression => expressions::parenthesized,
    ArrayExpression => expressions::array,
    ObjectExpression => expressions::object,
    Property => expressions::property,
    Spread => expressions::spread,
    MemberExpression => expressions::member,
    CallExpression => expressions::call,
    ArgList => expressions::arg_list,
    NewExpression => expressions::new_expression,
    TaggedTemplateExpression => expressions::tagged_template,
    UnaryExpression => operators::unary,
    PostfixExpression => operators::unary,
    AwaitExpression => operators::await_expression,
    BinaryExpression => operators::binary,
    ConditionalExpression => operators::conditional,
    AssignmentExpression => operators::assignment,
    SequenceExpression => operators::sequence,

    // Named terminals
    Number => literals::number,
    String => literals::string,
    RegExp => literals::regexp,
    TemplateString => literals::template_string,
    TemplateContent => literals::template_content,
    VariableName => literals::variable_name,
    /// Bound name.
    VariableDefinition => literals::identifier,
    /// Name after `.`.
    PropertyName => literals::identifier,
    /// Object or class member name.
    PropertyDefinition => literals::identifier,
    Label => literals::identifier,
    ArithOp => operators::token,
    CompareOp => operators::token,
    LogicOp => operators::token,
    BitOp => operators::token,
    UpdateOp => operators::token,
    AssignOp => operators::token,
    Equals => operators::token,
    Star => operators::token,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_round_trip() {
        for name in ["Script", "PostfixExpression", "Star", "TemplateContent"] {
            let rule = Rule::from_name(name).unwrap();
            assert_eq!(rule.name(), name);
        }
    }

    #[test]
    fn test_terminals_have_no_rule() {
        for name in [";", "if", "=>", "${", "extends", "Mystery"] {
            assert!(Rule::from_name(name).is_none(), "{name}");
        }
    }

    #[test]
    fn test_leftover_arguments_are_malformed() {
        let err = process(
            Rule::EmptyStatement,
            vec![Fragment::Token(";".into()), Fragment::Token(";".into())],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransformError::malformed("EmptyStatement", "unexpected ';' at argument 1")
        );
    }
}
