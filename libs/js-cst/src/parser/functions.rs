//! # Function and Class Parsing
//!
//! Function declarations and expressions, arrow functions, parameter lists,
//! classes, and the method syntax shared by classes and object literals.
//!
//! ## Example
//!
//! ```text
//! async function f(a, b = 1, ...rest) { await a; }
//! (x, y) => x + y
//! class A extends B { static *gen() {} get x() {} }
//! ```

use super::Parser;
use crate::cst::{CstNode, NodeKind};
use crate::error::ParseError;
use crate::lexer::TokenKind;

/// Modifier words seen before a method key.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Modifiers {
    pub(super) is_async: bool,
    pub(super) accessor: bool,
    pub(super) generator: bool,
}

impl Modifiers {
    /// Whether the modifiers force method syntax.
    pub(super) fn is_method(&self) -> bool {
        self.is_async || self.accessor || self.generator
    }
}

impl<'a> Parser<'a> {
    // =========================================================================
    // FUNCTIONS
    // =========================================================================

    /// Parse a function declaration or expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// function = "async"? "function" "*"? identifier? params block
    /// ```
    ///
    /// ## Parameters
    ///
    /// - `kind`: `FunctionDeclaration` (name required) or `FunctionExpression`
    /// - `modifier`: Already consumed `async` leaf
    pub(super) fn parse_function(
        &mut self,
        kind: NodeKind,
        modifier: Option<CstNode>,
    ) -> Result<CstNode, ParseError> {
        self.nested(|p| {
            let is_async = modifier.is_some();
            let mut children: Vec<CstNode> = modifier.into_iter().collect();
            children.push(p.expect_keyword("function")?);
            if p.check_punct("*")? {
                children.push(p.leaf(NodeKind::Star)?);
            }
            let token = p.peek()?;
            if token.kind == TokenKind::Identifier {
                children.push(p.leaf(NodeKind::VariableDefinition)?);
            } else if kind == NodeKind::FunctionDeclaration {
                return Err(p.unexpected(&token, "function name"));
            }
            children.push(p.parse_params()?);
            children.push(p.parse_function_body(is_async)?);
            Ok(CstNode::node(kind, children))
        })
    }

    /// Parse a parameter list.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// params = "(" (param ("," param)* ("," "..." identifier)? | "..." identifier)? ")"
    /// param  = identifier ("=" assignment)?
    /// ```
    pub(super) fn parse_params(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let mut children = vec![p.expect_punct("(")?];
            while !p.check_punct(")")? {
                if let Some(dots) = p.eat_punct("...")? {
                    children.push(dots);
                    children.push(p.identifier(NodeKind::VariableDefinition)?);
                    break;
                }
                children.push(p.identifier(NodeKind::VariableDefinition)?);
                if p.check_punct("=")? {
                    children.push(p.leaf(NodeKind::Equals)?);
                    children.push(p.parse_assignment()?);
                }
                match p.eat_punct(",")? {
                    Some(comma) => children.push(comma),
                    None => break,
                }
            }
            children.push(p.expect_punct(")")?);
            Ok(CstNode::node(NodeKind::ParamList, children))
        })
    }

    /// Parse a function body, where `return` is allowed and `await` is an
    /// operator for async functions.
    fn parse_function_body(&mut self, is_async: bool) -> Result<CstNode, ParseError> {
        self.function_scope(is_async, |p| p.parse_block())
    }

    fn function_scope<T>(
        &mut self,
        is_async: bool,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = (self.in_function, self.in_async, self.no_in);
        self.in_function = true;
        self.in_async = is_async;
        self.no_in = false;
        let result = f(self);
        (self.in_function, self.in_async, self.no_in) = saved;
        result
    }

    // =========================================================================
    // ARROW FUNCTIONS
    // =========================================================================

    /// Parse an arrow function if one starts here.
    ///
    /// Parenthesized heads are parsed speculatively: `(a, b)` is only a
    /// parameter list when `=>` follows it. A rejected head is remembered by
    /// offset so nested groups are speculated on once each.
    ///
    /// ## Returns
    ///
    /// The arrow function, or `None` with the parser left untouched
    pub(super) fn try_parse_arrow(&mut self) -> Result<Option<CstNode>, ParseError> {
        let token = self.peek()?;
        let is_async = if self.check_word("async")? {
            let second = self.peek_second()?;
            (second.kind == TokenKind::Identifier || second.is_punct("("))
                && self.no_semicolon_at(&second)?
        } else {
            false
        };
        let candidate = is_async
            || token.is_punct("(")
            || (token.kind == TokenKind::Identifier && self.peek_second()?.is_punct("=>"));
        if !candidate || self.failed_arrows.contains(&token.span.start()) {
            return Ok(None);
        }

        let head = self.attempt(|p| {
            let modifier = if is_async {
                Some(p.contextual("async")?)
            } else {
                None
            };
            let params = if p.peek()?.kind == TokenKind::Identifier {
                p.leaf(NodeKind::VariableDefinition)?
            } else {
                p.parse_params()?
            };
            let arrow = p.peek()?;
            if !arrow.is_punct("=>") {
                return Err(p.unexpected(&arrow, "'=>'"));
            }
            Ok((modifier, params))
        })?;

        match head {
            Some((modifier, params)) => self.parse_arrow_body(modifier, params).map(Some),
            None => {
                self.failed_arrows.insert(token.span.start());
                Ok(None)
            }
        }
    }

    /// Parse `=>` and the arrow body.
    fn parse_arrow_body(
        &mut self,
        modifier: Option<CstNode>,
        params: CstNode,
    ) -> Result<CstNode, ParseError> {
        let is_async = modifier.is_some();
        let mut children: Vec<CstNode> = modifier.into_iter().collect();
        children.push(params);
        children.push(self.expect_punct("=>")?);
        let body = if self.check_punct("{")? {
            self.parse_function_body(is_async)?
        } else {
            let saved = self.in_async;
            self.in_async = is_async;
            let body = self.parse_assignment();
            self.in_async = saved;
            body?
        };
        children.push(body);
        Ok(CstNode::node(NodeKind::ArrowFunction, children))
    }

    // =========================================================================
    // CLASSES
    // =========================================================================

    /// Parse a class declaration or expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// class = "class" identifier? ("extends" lhs)? class_body
    /// ```
    pub(super) fn parse_class(&mut self, kind: NodeKind) -> Result<CstNode, ParseError> {
        self.nested(|p| {
            let mut children = vec![p.expect_keyword("class")?];
            let token = p.peek()?;
            if token.kind == TokenKind::Identifier && p.text(&token) != "extends" {
                children.push(p.leaf(NodeKind::VariableDefinition)?);
            } else if kind == NodeKind::ClassDeclaration {
                return Err(p.unexpected(&token, "class name"));
            }
            if p.check_word("extends")? || p.check_keyword("extends")? {
                children.push(p.leaf(NodeKind::Literal("extends"))?);
                children.push(p.parse_left_hand_side()?);
            }
            children.push(p.parse_class_body()?);
            Ok(CstNode::node(kind, children))
        })
    }

    /// Parse `"{" (method | ";")* "}"`.
    fn parse_class_body(&mut self) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            let mut children = vec![p.expect_punct("{")?];
            while !p.check_punct("}")? {
                if let Some(semi) = p.eat_punct(";")? {
                    children.push(semi);
                    continue;
                }
                let mut method = Vec::new();
                let modifiers = p.parse_method_modifiers(&mut method, true)?;
                p.parse_property_key(&mut method)?;
                p.parse_method_rest(&mut method, modifiers.is_async)?;
                children.push(CstNode::node(NodeKind::MethodDeclaration, method));
            }
            children.push(p.expect_punct("}")?);
            Ok(CstNode::node(NodeKind::ClassBody, children))
        })
    }

    // =========================================================================
    // METHODS
    // =========================================================================

    /// Parse `static`, `async`, `get`/`set` and `*` before a method key.
    ///
    /// A modifier word directly followed by `(`, `:`, `,` or `}` is the key
    /// itself.
    pub(super) fn parse_method_modifiers(
        &mut self,
        children: &mut Vec<CstNode>,
        allow_static: bool,
    ) -> Result<Modifiers, ParseError> {
        let mut modifiers = Modifiers::default();
        if allow_static && self.is_modifier("static", false)? {
            children.push(self.contextual("static")?);
        }
        if self.is_modifier("async", true)? {
            children.push(self.contextual("async")?);
            modifiers.is_async = true;
        } else {
            for word in ["get", "set"] {
                if self.is_modifier(word, false)? {
                    children.push(self.contextual(word)?);
                    modifiers.accessor = true;
                    break;
                }
            }
        }
        if !modifiers.accessor && self.check_punct("*")? {
            children.push(self.leaf(NodeKind::Star)?);
            modifiers.generator = true;
        }
        Ok(modifiers)
    }

    fn is_modifier(&mut self, word: &str, same_line: bool) -> Result<bool, ParseError> {
        if !self.check_word(word)? {
            return Ok(false);
        }
        let second = self.peek_second()?;
        let starts_key = matches!(
            second.kind,
            TokenKind::Identifier
                | TokenKind::Keyword(_)
                | TokenKind::String
                | TokenKind::Number
                | TokenKind::Punct("[")
                | TokenKind::Punct("*")
        );
        Ok(starts_key && (!same_line || self.no_semicolon_at(&second)?))
    }

    /// Parse a property or method key.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// key = identifier | reserved_word | string | number | "[" assignment "]"
    /// ```
    pub(super) fn parse_property_key(&mut self, children: &mut Vec<CstNode>) -> Result<(), ParseError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => {
                children.push(self.leaf(NodeKind::PropertyDefinition)?)
            }
            TokenKind::String => children.push(self.leaf(NodeKind::String)?),
            TokenKind::Number => children.push(self.leaf(NodeKind::Number)?),
            TokenKind::Punct("[") => {
                children.push(self.leaf(NodeKind::Literal("["))?);
                children.push(self.with_in(|p| p.parse_assignment())?);
                children.push(self.expect_punct("]")?);
            }
            _ => return Err(self.unexpected(&token, "property name")),
        }
        Ok(())
    }

    /// Parse the parameter list and body of a method.
    pub(super) fn parse_method_rest(
        &mut self,
        children: &mut Vec<CstNode>,
        is_async: bool,
    ) -> Result<(), ParseError> {
        children.push(self.parse_params()?);
        children.push(self.parse_function_body(is_async)?);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
