//! # Operator Parsing
//!
//! Parses binary, conditional and unary operators using precedence climbing.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | `\|\|` `??` | Left |
//! | 2 | `&&` | Left |
//! | 3 | `\|` | Left |
//! | 4 | `^` | Left |
//! | 5 | `&` | Left |
//! | 6 | `==` `!=` `===` `!==` | Left |
//! | 7 | `<` `>` `<=` `>=` `in` `instanceof` | Left |
//! | 8 | `<<` `>>` `>>>` | Left |
//! | 9 | `+` `-` | Left |
//! | 10 | `*` `/` `%` | Left |
//! | 11 | `**` | Right |
//!
//! Conditional `?:` sits below all of them; unary operators above.

use super::Parser;
use crate::cst::{CstNode, NodeKind};
use crate::error::ParseError;
use crate::lexer::{incdec, Input, Term, Token, TokenKind};

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// `|| ??`
    Coalesce = 1,
    /// `&&`
    And = 2,
    /// `|`
    BitOr = 3,
    /// `^`
    BitXor = 4,
    /// `&`
    BitAnd = 5,
    /// `== != === !==`
    Equality = 6,
    /// `< > <= >= in instanceof`
    Relational = 7,
    /// `<< >> >>>`
    Shift = 8,
    /// `+ -`
    Additive = 9,
    /// `* / %`
    Multiplicative = 10,
    /// `**`
    Exponent = 11,
}

impl Precedence {
    /// Lowest binary level.
    pub(super) const LOWEST: Self = Self::Coalesce;

    /// Get next higher precedence level.
    ///
    /// Used for left-associative operators.
    fn next(self) -> Self {
        match self {
            Self::Coalesce => Self::And,
            Self::And => Self::BitOr,
            Self::BitOr => Self::BitXor,
            Self::BitXor => Self::BitAnd,
            Self::BitAnd => Self::Equality,
            Self::Equality => Self::Relational,
            Self::Relational => Self::Shift,
            Self::Shift => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative | Self::Exponent => Self::Exponent,
        }
    }
}

/// Classify a token as a binary operator.
///
/// ## Returns
///
/// Precedence and the leaf kind of the operator, or `None`
fn binary_operator(kind: TokenKind, no_in: bool) -> Option<(Precedence, NodeKind)> {
    let op = match kind {
        TokenKind::Punct(p) => p,
        TokenKind::Keyword("instanceof") => {
            return Some((Precedence::Relational, NodeKind::Literal("instanceof")))
        }
        TokenKind::Keyword("in") if !no_in => {
            return Some((Precedence::Relational, NodeKind::Literal("in")))
        }
        _ => return None,
    };
    let classified = match op {
        "||" | "??" => (Precedence::Coalesce, NodeKind::LogicOp),
        "&&" => (Precedence::And, NodeKind::LogicOp),
        "|" => (Precedence::BitOr, NodeKind::BitOp),
        "^" => (Precedence::BitXor, NodeKind::BitOp),
        "&" => (Precedence::BitAnd, NodeKind::BitOp),
        "==" | "!=" | "===" | "!==" => (Precedence::Equality, NodeKind::CompareOp),
        "<" | ">" | "<=" | ">=" => (Precedence::Relational, NodeKind::CompareOp),
        "<<" | ">>" | ">>>" => (Precedence::Shift, NodeKind::BitOp),
        "+" | "-" => (Precedence::Additive, NodeKind::ArithOp),
        "*" | "/" | "%" => (Precedence::Multiplicative, NodeKind::ArithOp),
        "**" => (Precedence::Exponent, NodeKind::ArithOp),
        _ => return None,
    };
    Some(classified)
}

/// Classify a token as a prefix operator.
fn unary_operator(token: &Token) -> Option<NodeKind> {
    match token.kind {
        TokenKind::Punct("!") => Some(NodeKind::LogicOp),
        TokenKind::Punct("~") => Some(NodeKind::BitOp),
        TokenKind::Punct("+" | "-") => Some(NodeKind::ArithOp),
        TokenKind::Punct("++" | "--") => Some(NodeKind::UpdateOp),
        TokenKind::Keyword(word @ ("typeof" | "void" | "delete")) => Some(NodeKind::Literal(word)),
        _ => None,
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl<'a> Parser<'a> {
    /// Parse a conditional expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// conditional = binary ( "?" assignment ":" assignment )?
    /// ```
    pub(super) fn parse_conditional(&mut self) -> Result<CstNode, ParseError> {
        let test = self.parse_precedence(Precedence::LOWEST)?;
        let Some(question) = self.eat_punct("?")? else {
            return Ok(test);
        };
        let consequent = self.with_in(|p| p.parse_assignment())?;
        let colon = self.expect_punct(":")?;
        let alternate = self.parse_assignment()?;
        Ok(CstNode::node(
            NodeKind::ConditionalExpression,
            vec![test, question, consequent, colon, alternate],
        ))
    }

    /// Parse expression with minimum precedence.
    ///
    /// ## Parameters
    ///
    /// - `min_prec`: Minimum precedence level to parse
    ///
    /// ## Returns
    ///
    /// Parsed expression node
    pub(super) fn parse_precedence(&mut self, min_prec: Precedence) -> Result<CstNode, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let token = self.peek()?;
            let Some((prec, op_kind)) = binary_operator(token.kind, self.no_in) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let op = self.leaf(op_kind)?;
            let next_prec = if prec == Precedence::Exponent {
                prec
            } else {
                prec.next()
            };
            let right = self.nested(|p| p.parse_precedence(next_prec))?;
            left = CstNode::node(NodeKind::BinaryExpression, vec![left, op, right]);
        }

        Ok(left)
    }

    /// Parse unary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// unary = ("!" | "~" | "+" | "-" | "++" | "--" | "typeof" | "void" | "delete") unary
    ///       | "await" unary
    ///       | postfix
    /// ```
    pub(super) fn parse_unary(&mut self) -> Result<CstNode, ParseError> {
        let token = self.peek()?;

        if let Some(op_kind) = unary_operator(&token) {
            if op_kind == NodeKind::UpdateOp && !self.is_prefix_update(&token) {
                return Err(self.unexpected(&token, "expression"));
            }
            let op = self.leaf(op_kind)?;
            let operand = self.nested(|p| p.parse_unary())?;
            if op_kind == NodeKind::UpdateOp && !self.is_assignable(&operand) {
                return Err(self.unexpected(&token, "assignable operand"));
            }
            return Ok(CstNode::node(NodeKind::UnaryExpression, vec![op, operand]));
        }

        if self.in_async && self.check_word("await")? {
            let keyword = self.contextual("await")?;
            let operand = self.nested(|p| p.parse_unary())?;
            return Ok(CstNode::node(NodeKind::AwaitExpression, vec![keyword, operand]));
        }

        self.parse_postfix()
    }

    /// Parse postfix `++`/`--`.
    ///
    /// A line break or comment before the operator makes it a prefix of the
    /// next statement instead.
    fn parse_postfix(&mut self) -> Result<CstNode, ParseError> {
        let operand = self.parse_left_hand_side()?;
        let token = self.peek()?;
        if !(token.is_punct("++") || token.is_punct("--")) {
            return Ok(operand);
        }

        let mut input = Input::new(self.source, token.span.start());
        incdec(&mut input, &self.view(token.context, &[Term::Incdec]));
        if !matches!(input.accepted(), Some((Term::Incdec, _))) {
            return Ok(operand);
        }
        if !self.is_assignable(&operand) {
            return Err(self.unexpected(&token, "';'"));
        }
        let op = self.leaf(NodeKind::UpdateOp)?;
        Ok(CstNode::node(NodeKind::PostfixExpression, vec![operand, op]))
    }

    fn is_prefix_update(&self, token: &Token) -> bool {
        let mut input = Input::new(self.source, token.span.start());
        incdec(&mut input, &self.view(token.context, &[]));
        matches!(input.accepted(), Some((Term::IncdecPrefix, _)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
