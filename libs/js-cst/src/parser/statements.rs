//! # Statement Parsing
//!
//! Statement dispatch, declarations, blocks and the restricted productions
//! (`return`, `break`, `continue`, `throw`) whose argument must start on the
//! same line.
//!
//! ## Grammar
//!
//! ```text
//! statement = block | ";" | declaration | control_flow
//!           | "return" expression? ";"
//!           | "break" label? ";" | "continue" label? ";"
//!           | "throw" expression ";" | "debugger" ";"
//!           | label ":" statement
//!           | expression ";"
//! ```
//!
//! Every `";"` may be inferred before `}`, at end of input, or after a line
//! break or comment.

use super::Parser;
use crate::cst::{CstNode, NodeKind};
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a statement.
    pub(super) fn parse_statement(&mut self) -> Result<CstNode, ParseError> {
        self.nested(|p| {
            let token = p.peek()?;
            match token.kind {
                TokenKind::Punct("{") => p.parse_block(),
                TokenKind::Punct(";") => {
                    let semi = p.leaf(NodeKind::Literal(";"))?;
                    Ok(CstNode::node(NodeKind::EmptyStatement, vec![semi]))
                }
                TokenKind::Keyword("var" | "let" | "const") => {
                    let mut children = p.parse_variable_declaration(false)?;
                    p.semicolon(&mut children)?;
                    Ok(CstNode::node(NodeKind::VariableDeclaration, children))
                }
                TokenKind::Keyword("function") => {
                    p.parse_function(NodeKind::FunctionDeclaration, None)
                }
                TokenKind::Keyword("class") => p.parse_class(NodeKind::ClassDeclaration),
                TokenKind::Keyword("if") => p.parse_if(),
                TokenKind::Keyword("while") => p.parse_while(),
                TokenKind::Keyword("do") => p.parse_do(),
                TokenKind::Keyword("for") => p.parse_for(),
                TokenKind::Keyword("try") => p.parse_try(),
                TokenKind::Keyword("switch") => p.parse_switch(),
                TokenKind::Keyword("return") => p.parse_return(),
                TokenKind::Keyword(word @ ("break" | "continue")) => p.parse_jump(word),
                TokenKind::Keyword("throw") => p.parse_throw(),
                TokenKind::Keyword("debugger") => {
                    let mut children = vec![p.leaf(NodeKind::Literal("debugger"))?];
                    p.semicolon(&mut children)?;
                    Ok(CstNode::node(NodeKind::DebuggerStatement, children))
                }
                TokenKind::Identifier => p.parse_identifier_statement(),
                _ => p.parse_expression_statement(),
            }
        })
    }

    /// Parse a statement starting with an identifier: an async function
    /// declaration, a labeled statement or an expression statement.
    fn parse_identifier_statement(&mut self) -> Result<CstNode, ParseError> {
        let second = self.peek_second()?;
        if second.is_punct(":") {
            let label = self.leaf(NodeKind::Label)?;
            let colon = self.leaf(NodeKind::Literal(":"))?;
            let body = self.parse_statement()?;
            return Ok(CstNode::node(
                NodeKind::LabeledStatement,
                vec![label, colon, body],
            ));
        }
        if self.check_word("async")?
            && second.is_keyword("function")
            && self.no_semicolon_at(&second)?
        {
            let modifier = self.contextual("async")?;
            return self.parse_function(NodeKind::FunctionDeclaration, Some(modifier));
        }
        self.parse_expression_statement()
    }

    fn parse_expression_statement(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.parse_expression()?];
        self.semicolon(&mut children)?;
        Ok(CstNode::node(NodeKind::ExpressionStatement, children))
    }

    /// Parse `"{" statement* "}"`.
    pub(super) fn parse_block(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.expect_punct("{")?];
        while !self.check_punct("}")? {
            let token = self.peek()?;
            if token.is_eof() {
                return Err(self.unexpected(&token, "'}'"));
            }
            children.push(self.parse_statement()?);
        }
        children.push(self.expect_punct("}")?);
        Ok(CstNode::node(NodeKind::Block, children))
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    /// Parse the children of a variable declaration, without its terminator.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// declaration = ("var" | "let" | "const") binding ("," binding)*
    /// binding     = identifier ("=" assignment)?
    /// ```
    ///
    /// ## Parameters
    ///
    /// - `no_in`: Parsing a `for` head, where `in` ends an initializer
    pub(super) fn parse_variable_declaration(&mut self, no_in: bool) -> Result<Vec<CstNode>, ParseError> {
        let token = self.peek()?;
        let TokenKind::Keyword(keyword @ ("var" | "let" | "const")) = token.kind else {
            return Err(self.unexpected(&token, "declaration"));
        };
        let mut children = vec![self.leaf(NodeKind::Literal(keyword))?];
        children.push(self.identifier(NodeKind::VariableDefinition)?);
        self.parse_declaration_rest(&mut children, no_in)?;
        Ok(children)
    }

    /// Continue a declaration right after its first bound name.
    pub(super) fn parse_declaration_rest(
        &mut self,
        children: &mut Vec<CstNode>,
        no_in: bool,
    ) -> Result<(), ParseError> {
        let saved = self.no_in;
        self.no_in = no_in;
        let result = self.parse_bindings(children);
        self.no_in = saved;
        result
    }

    fn parse_bindings(&mut self, children: &mut Vec<CstNode>) -> Result<(), ParseError> {
        loop {
            if self.check_punct("=")? {
                children.push(self.leaf(NodeKind::Equals)?);
                children.push(self.parse_assignment()?);
            }
            match self.eat_punct(",")? {
                Some(comma) => {
                    children.push(comma);
                    children.push(self.identifier(NodeKind::VariableDefinition)?);
                }
                None => return Ok(()),
            }
        }
    }

    // =========================================================================
    // RESTRICTED PRODUCTIONS
    // =========================================================================

    /// Parse `"return" expression? ";"`.
    ///
    /// The argument is only taken when it starts on the same line.
    fn parse_return(&mut self) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        if !self.in_function {
            return Err(self.unexpected(&token, "statement outside of a function"));
        }
        let mut children = vec![self.leaf(NodeKind::Literal("return"))?];
        if self.same_line()? {
            children.push(self.parse_expression()?);
        }
        self.semicolon(&mut children)?;
        Ok(CstNode::node(NodeKind::ReturnStatement, children))
    }

    /// Parse `break` or `continue` with an optional same-line label.
    fn parse_jump(&mut self, keyword: &'static str) -> Result<CstNode, ParseError> {
        let kind = if keyword == "break" {
            NodeKind::BreakStatement
        } else {
            NodeKind::ContinueStatement
        };
        let mut children = vec![self.leaf(NodeKind::Literal(keyword))?];
        if self.same_line()? && self.peek()?.kind == TokenKind::Identifier {
            children.push(self.leaf(NodeKind::Label)?);
        }
        self.semicolon(&mut children)?;
        Ok(CstNode::node(kind, children))
    }

    /// Parse `"throw" expression ";"`; a line break after `throw` is an error.
    ///
    /// A comment on the same line is not a break here, unlike for ASI.
    fn parse_throw(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.leaf(NodeKind::Literal("throw"))?];
        let token = self.peek()?;
        if self.line_break_before(&token) {
            return Err(self.unexpected(&token, "expression on the same line as 'throw'"));
        }
        children.push(self.parse_expression()?);
        self.semicolon(&mut children)?;
        Ok(CstNode::node(NodeKind::ThrowStatement, children))
    }
}

// =============================================================================
// TESTS
// =============================================================================
