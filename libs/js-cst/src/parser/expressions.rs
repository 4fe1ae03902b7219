//! # Expression Parsing
//!
//! Sequences, assignments, member/call chains and primary expressions.
//!
//! ## Responsibilities
//!
//! - Sequences and assignments: `a = b, c += d`
//! - Calls and member access: `f(x)`, `a.b`, `a[b]`, `new C()`
//! - Tagged templates: ``tag`x` ``
//! - Literals: numbers, strings, regular expressions, templates
//! - Array and object literals, including holes, spreads and methods
//!
//! ## Example
//!
//! ```rust,ignore
//! let expr = parser.parse_expression()?;
//! ```

use super::Parser;
use crate::cst::{CstNode, NodeKind};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{template, Input, Term, TokenKind};
use crate::span::Span;

/// Identifiers that can never be assigned to.
const NOT_ASSIGNABLE: &[&str] = &["this", "super", "true", "false", "null"];

/// Compound assignment operators.
const ASSIGN_OPS: &[&str] = &[
    "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=", "||=",
    "??=",
];

impl<'a> Parser<'a> {
    /// Parse a comma-separated expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// expression = assignment ("," assignment)*
    /// ```
    pub(super) fn parse_expression(&mut self) -> Result<CstNode, ParseError> {
        let first = self.parse_assignment()?;
        if !self.check_punct(",")? {
            return Ok(first);
        }
        let mut children = vec![first];
        while let Some(comma) = self.eat_punct(",")? {
            children.push(comma);
            children.push(self.parse_assignment()?);
        }
        Ok(CstNode::node(NodeKind::SequenceExpression, children))
    }

    /// Parse an assignment, arrow function or conditional expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// assignment = arrow
    ///            | conditional (("=" | "+=" | ...) assignment)?
    /// ```
    pub(super) fn parse_assignment(&mut self) -> Result<CstNode, ParseError> {
        self.nested(|p| {
            if let Some(arrow) = p.try_parse_arrow()? {
                return Ok(arrow);
            }

            let target = p.parse_conditional()?;
            let token = p.peek()?;
            let op_kind = match token.kind {
                TokenKind::Punct("=") => NodeKind::Equals,
                TokenKind::Punct(op) if ASSIGN_OPS.contains(&op) => NodeKind::AssignOp,
                _ => return Ok(target),
            };
            if !p.is_assignable(&target) {
                return Err(p.unexpected(&token, "assignable left-hand side"));
            }
            let op = p.leaf(op_kind)?;
            let value = p.parse_assignment()?;
            Ok(CstNode::node(
                NodeKind::AssignmentExpression,
                vec![target, op, value],
            ))
        })
    }

    /// Run `f` with `in` treated as an operator again.
    pub(super) fn with_in<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = self.no_in;
        self.no_in = false;
        let result = f(self);
        self.no_in = saved;
        result
    }

    /// Whether `node` may appear on the left of `=` or as an update operand.
    pub(super) fn is_assignable(&self, node: &CstNode) -> bool {
        match node.kind {
            NodeKind::VariableName => node
                .span
                .text(self.source)
                .is_some_and(|name| !NOT_ASSIGNABLE.contains(&name)),
            NodeKind::MemberExpression => true,
            NodeKind::ParenthesizedExpression => node
                .children
                .get(1)
                .is_some_and(|inner| self.is_assignable(inner)),
            _ => false,
        }
    }

    // =========================================================================
    // CALLS AND MEMBERS
    // =========================================================================

    /// Parse a left-hand-side expression: primary or `new` followed by any
    /// number of member accesses, calls and tagged templates.
    pub(super) fn parse_left_hand_side(&mut self) -> Result<CstNode, ParseError> {
        let base = if self.check_keyword("new")? {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        self.parse_member_chain(base, true)
    }

    /// Parse `.name`, `[expr]`, `(args)` and template suffixes.
    ///
    /// ## Parameters
    ///
    /// - `expr`: Expression the suffixes apply to
    /// - `allow_call`: Whether `(` continues the chain; it does not inside a
    ///   `new` callee
    fn parse_member_chain(&mut self, mut expr: CstNode, allow_call: bool) -> Result<CstNode, ParseError> {
        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::Punct(".") => {
                    let dot = self.leaf(NodeKind::Literal("."))?;
                    let name = self.parse_property_name()?;
                    expr = CstNode::node(NodeKind::MemberExpression, vec![expr, dot, name]);
                }
                TokenKind::Punct("[") => {
                    let open = self.leaf(NodeKind::Literal("["))?;
                    let property = self.with_in(|p| p.parse_expression())?;
                    let close = self.expect_punct("]")?;
                    expr = CstNode::node(
                        NodeKind::MemberExpression,
                        vec![expr, open, property, close],
                    );
                }
                TokenKind::Punct("(") if allow_call => {
                    let args = self.parse_arguments()?;
                    expr = CstNode::node(NodeKind::CallExpression, vec![expr, args]);
                }
                TokenKind::Punct("`") => {
                    let quasi = self.parse_template()?;
                    expr = CstNode::node(NodeKind::TaggedTemplateExpression, vec![expr, quasi]);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Parse the identifier after `.`, where reserved words are allowed.
    fn parse_property_name(&mut self) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => self.leaf(NodeKind::PropertyName),
            _ => Err(self.unexpected(&token, "property name")),
        }
    }

    /// Parse a `new` expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// new = "new" (new | primary) member_suffix* arguments?
    /// ```
    fn parse_new(&mut self) -> Result<CstNode, ParseError> {
        self.nested(|p| {
            let keyword = p.expect_keyword("new")?;
            let base = if p.check_keyword("new")? {
                p.parse_new()?
            } else {
                p.parse_primary()?
            };
            let callee = p.parse_member_chain(base, false)?;
            let mut children = vec![keyword, callee];
            if p.check_punct("(")? {
                children.push(p.parse_arguments()?);
            }
            Ok(CstNode::node(NodeKind::NewExpression, children))
        })
    }

    /// Parse a call's argument list.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// arguments = "(" ((spread | assignment) ("," (spread | assignment))* ","?)? ")"
    /// ```
    pub(super) fn parse_arguments(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let mut children = vec![p.expect_punct("(")?];
            while !p.check_punct(")")? {
                children.push(p.parse_spread_or_assignment()?);
                match p.eat_punct(",")? {
                    Some(comma) => children.push(comma),
                    None => break,
                }
            }
            children.push(p.expect_punct(")")?);
            Ok(CstNode::node(NodeKind::ArgList, children))
        })
    }

    fn parse_spread_or_assignment(&mut self) -> Result<CstNode, ParseError> {
        match self.eat_punct("...")? {
            Some(dots) => {
                let argument = self.parse_assignment()?;
                Ok(CstNode::node(NodeKind::Spread, vec![dots, argument]))
            }
            None => self.parse_assignment(),
        }
    }

    // =========================================================================
    // PRIMARY
    // =========================================================================

    /// Parse a primary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// primary = identifier | number | string | regexp | template
    ///         | "(" expression ")" | array | object
    ///         | function | class
    /// ```
    pub(super) fn parse_primary(&mut self) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Identifier => {
                if self.check_word("async")? {
                    let second = self.peek_second()?;
                    if second.is_keyword("function") && self.no_semicolon_at(&second)? {
                        let modifier = self.contextual("async")?;
                        return self.parse_function(NodeKind::FunctionExpression, Some(modifier));
                    }
                }
                self.leaf(NodeKind::VariableName)
            }
            TokenKind::Number => self.leaf(NodeKind::Number),
            TokenKind::String => self.leaf(NodeKind::String),
            TokenKind::RegExp => self.leaf(NodeKind::RegExp),
            TokenKind::Keyword("function") => self.parse_function(NodeKind::FunctionExpression, None),
            TokenKind::Keyword("class") => self.parse_class(NodeKind::ClassExpression),
            TokenKind::Punct("(") => self.parse_parenthesized(),
            TokenKind::Punct("[") => self.parse_array(),
            TokenKind::Punct("{") => self.parse_object(),
            TokenKind::Punct("`") => self.parse_template(),
            _ => Err(self.unexpected(&token, "expression")),
        }
    }

    /// Parse `"(" expression ")"`.
    pub(super) fn parse_parenthesized(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let open = p.expect_punct("(")?;
            let expr = p.parse_expression()?;
            let close = p.expect_punct(")")?;
            Ok(CstNode::node(
                NodeKind::ParenthesizedExpression,
                vec![open, expr, close],
            ))
        })
    }

    /// Parse an array literal.
    ///
    /// Commas are kept as leaves so holes stay visible: `[a, , b]` has two
    /// consecutive `,` children.
    fn parse_array(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let mut children = vec![p.expect_punct("[")?];
            loop {
                if p.check_punct("]")? {
                    break;
                }
                if let Some(comma) = p.eat_punct(",")? {
                    children.push(comma);
                    continue;
                }
                children.push(p.parse_spread_or_assignment()?);
                if !p.check_punct("]")? {
                    children.push(p.expect_punct(",")?);
                }
            }
            children.push(p.expect_punct("]")?);
            Ok(CstNode::node(NodeKind::ArrayExpression, children))
        })
    }

    /// Parse an object literal.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// object = "{" ((property | spread) ("," (property | spread))* ","?)? "}"
    /// ```
    fn parse_object(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let mut children = vec![p.expect_punct("{")?];
            while !p.check_punct("}")? {
                let entry = match p.eat_punct("...")? {
                    Some(dots) => {
                        let argument = p.parse_assignment()?;
                        CstNode::node(NodeKind::Spread, vec![dots, argument])
                    }
                    None => p.parse_property()?,
                };
                children.push(entry);
                match p.eat_punct(",")? {
                    Some(comma) => children.push(comma),
                    None => break,
                }
            }
            children.push(p.expect_punct("}")?);
            Ok(CstNode::node(NodeKind::ObjectExpression, children))
        })
    }

    /// Parse one object entry: `key: value`, a shorthand or a method.
    fn parse_property(&mut self) -> Result<CstNode, ParseError> {
        let mut children = Vec::new();
        let modifiers = self.parse_method_modifiers(&mut children, false)?;
        self.parse_property_key(&mut children)?;

        if modifiers.is_method() || self.check_punct("(")? {
            self.parse_method_rest(&mut children, modifiers.is_async)?;
            return Ok(CstNode::node(NodeKind::Property, children));
        }

        if let Some(colon) = self.eat_punct(":")? {
            children.push(colon);
            children.push(self.parse_assignment()?);
            return Ok(CstNode::node(NodeKind::Property, children));
        }

        let shorthand = children.first().is_some_and(|key| {
            key.kind == NodeKind::PropertyDefinition
                && self.keyword_free(key)
        });
        if shorthand {
            return Ok(CstNode::node(NodeKind::Property, children));
        }
        let token = self.peek()?;
        Err(self.unexpected(&token, "':'"))
    }

    /// Whether a leaf's text is usable as a variable name.
    fn keyword_free(&self, node: &CstNode) -> bool {
        node.span
            .text(self.source)
            .is_some_and(|name| crate::lexer::keyword(name).is_none())
    }

    // =========================================================================
    // TEMPLATES
    // =========================================================================

    /// Parse a template string.
    ///
    /// Chunks between backticks are scanned by the template recognizer
    /// rather than the regular tokenizer.
    pub(super) fn parse_template(&mut self) -> Result<CstNode, ParseError> {
        let open = self.expect_punct("`")?;
        let start = open.span.start();
        let mut children = vec![open];
        loop {
            let mut input = Input::new(self.source, self.pos);
            template(&mut input);
            let at = self.pos;
            match input.accepted() {
                Some((Term::TemplateContent, end)) => {
                    children.push(CstNode::leaf(NodeKind::TemplateContent, Span::new(at, end)));
                    self.jump_to(end, false);
                }
                Some((Term::TemplateDollarBrace, end)) => {
                    children.push(CstNode::leaf(NodeKind::Literal("${"), Span::new(at, end)));
                    self.jump_to(end, true);
                    children.push(self.with_in(|p| p.parse_expression())?);
                    children.push(self.expect_punct("}")?);
                }
                Some((Term::TemplateEnd, end)) => {
                    children.push(CstNode::leaf(NodeKind::Literal("`"), Span::new(at, end)));
                    self.jump_to(end, false);
                    return Ok(CstNode::node(NodeKind::TemplateString, children));
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedTemplate,
                        Span::new(start, self.pos),
                    ))
                }
            }
        }
    }

    /// Continue scanning at `pos`, bypassing the regular tokenizer.
    fn jump_to(&mut self, pos: usize, regex_allowed: bool) {
        self.pos = pos;
        self.regex_allowed = regex_allowed;
        self.peeked = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
