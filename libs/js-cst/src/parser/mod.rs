//! # JavaScript Parser
//!
//! Recursive descent parser producing a lezer-style Concrete Syntax Tree.
//!
//! Tokens are pulled from the [`Lexer`] one at a time. Wherever the grammar
//! needs a context-sensitive decision (an inferred `;`, a restricted
//! production, `++` after an operand, a template chunk) the parser builds a
//! [`StackView`] of what it could shift and hands it to the matching
//! recognizer.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::parser::Parser;
//! use js_cst::ParseOptions;
//!
//! let cst = Parser::new("x++;", ParseOptions::default()).parse().unwrap();
//! assert_eq!(cst.root.children.len(), 1);
//! ```

mod control_flow;
mod expressions;
mod functions;
mod operators;
mod statements;

use std::collections::HashSet;

use log::debug;

use crate::cst::{Cst, CstNode, NodeKind};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{
    insert_semicolon, is_newline, no_semicolon, Input, Lexer, StackView, Term, Token,
    TokenContext, TokenKind,
};
use crate::options::ParseOptions;
use crate::span::Span;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for JavaScript.
pub struct Parser<'a> {
    /// Source text.
    source: &'a str,
    /// On-demand tokenizer.
    lexer: Lexer<'a>,
    /// Dialects and recursion bounds.
    options: ParseOptions,
    /// Byte offset right after the last consumed token.
    pos: usize,
    /// Whether a `/` at `pos` would open a regular expression.
    regex_allowed: bool,
    /// Lookahead token scanned from `pos`.
    peeked: Option<Token>,
    /// Current syntactic nesting.
    depth: usize,
    /// Inside a function body, where `return` is allowed.
    in_function: bool,
    /// Inside an async function body, where `await` is an operator.
    in_async: bool,
    /// Parsing a `for` head, where `in` ends the left-hand side.
    no_in: bool,
    /// Offsets where an arrow head was already tried and rejected.
    failed_arrows: HashSet<usize>,
}

/// Parser position to return to after a failed speculative parse.
#[derive(Clone, Copy)]
struct Snapshot {
    pos: usize,
    regex_allowed: bool,
    peeked: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `source`: JavaScript source text
    /// - `options`: Dialects and nesting bound
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            lexer: Lexer::new(source, options.dialects),
            options,
            pos: 0,
            regex_allowed: true,
            peeked: None,
            depth: 0,
            in_function: false,
            in_async: false,
            no_in: false,
            failed_arrows: HashSet::new(),
        }
    }

    /// Parse the entire source into a CST.
    ///
    /// ## Returns
    ///
    /// CST rooted at a `Script` node, or the first syntax error
    pub fn parse(&mut self) -> Result<Cst, ParseError> {
        let mut children = Vec::new();
        while !self.peek()?.is_eof() {
            children.push(self.parse_statement()?);
        }
        let root = CstNode::with_children(
            NodeKind::Script,
            Span::new(0, self.source.len()),
            children,
        );
        Ok(Cst::new(root))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.peeked {
            return Ok(token);
        }
        let token = self.lexer.scan(self.pos, self.regex_allowed)?;
        self.peeked = Some(token);
        Ok(token)
    }

    /// Get the token after the current one.
    fn peek_second(&mut self) -> Result<Token, ParseError> {
        let first = self.peek()?;
        self.lexer
            .scan(first.span.end(), first.kind.allows_regex_after())
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed
    fn advance(&mut self) -> Result<Token, ParseError> {
        let token = self.peek()?;
        self.pos = token.span.end();
        self.regex_allowed = token.kind.allows_regex_after();
        self.peeked = None;
        Ok(token)
    }

    /// Consume the current token as a leaf of the given kind.
    fn leaf(&mut self, kind: NodeKind) -> Result<CstNode, ParseError> {
        let token = self.advance()?;
        Ok(CstNode::leaf(kind, token.span))
    }

    /// Source text of a token.
    fn text(&self, token: &Token) -> &'a str {
        token.span.text(self.source).unwrap_or("")
    }

    /// Check if current token is the given punctuator.
    fn check_punct(&mut self, spelling: &str) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_punct(spelling))
    }

    /// Check if current token is the given reserved word.
    fn check_keyword(&mut self, spelling: &str) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_keyword(spelling))
    }

    /// Check if current token is an identifier spelled `word`.
    fn check_word(&mut self, word: &str) -> Result<bool, ParseError> {
        let token = self.peek()?;
        Ok(token.kind == TokenKind::Identifier && self.text(&token) == word)
    }

    /// Consume the given punctuator or fail.
    fn expect_punct(&mut self, spelling: &'static str) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        if token.is_punct(spelling) {
            self.leaf(NodeKind::Literal(spelling))
        } else {
            Err(self.unexpected(&token, &format!("'{spelling}'")))
        }
    }

    /// Consume the punctuator if present.
    fn eat_punct(&mut self, spelling: &'static str) -> Result<Option<CstNode>, ParseError> {
        if self.check_punct(spelling)? {
            Ok(Some(self.leaf(NodeKind::Literal(spelling))?))
        } else {
            Ok(None)
        }
    }

    /// Consume the given reserved word or fail.
    fn expect_keyword(&mut self, spelling: &'static str) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        if token.is_keyword(spelling) {
            self.leaf(NodeKind::Literal(spelling))
        } else {
            Err(self.unexpected(&token, &format!("'{spelling}'")))
        }
    }

    /// Consume a contextual word (`of`, `async`, `get`, ...) as a keyword leaf.
    fn contextual(&mut self, word: &'static str) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        if token.kind == TokenKind::Identifier && self.text(&token) == word {
            self.leaf(NodeKind::Literal(word))
        } else {
            Err(self.unexpected(&token, &format!("'{word}'")))
        }
    }

    /// Consume an identifier as a leaf of the given kind.
    fn identifier(&mut self, kind: NodeKind) -> Result<CstNode, ParseError> {
        let token = self.peek()?;
        if token.kind == TokenKind::Identifier {
            self.leaf(kind)
        } else {
            Err(self.unexpected(&token, "identifier"))
        }
    }

    /// Error for an unexpected token.
    fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        if token.is_eof() {
            ParseError::unexpected_eof(expected).with_span(token.span)
        } else {
            ParseError::unexpected_token(self.text(token), expected).with_span(token.span)
        }
    }

    // =========================================================================
    // CONTEXTUAL DECISIONS
    // =========================================================================

    /// What the grammar can shift at the current token.
    fn view(&self, context: TokenContext, shiftable: &'static [Term]) -> StackView {
        StackView {
            context,
            shiftable,
            dialects: self.options.dialects,
        }
    }

    /// End a statement with an explicit `;` or an inferred one.
    ///
    /// An inferred terminator adds no node.
    fn semicolon(&mut self, children: &mut Vec<CstNode>) -> Result<(), ParseError> {
        if let Some(semi) = self.eat_punct(";")? {
            children.push(semi);
            return Ok(());
        }
        let token = self.peek()?;
        let mut input = Input::new(self.source, token.span.start());
        insert_semicolon(&mut input, &self.view(token.context, &[Term::InsertSemi]));
        match input.accepted() {
            Some((Term::InsertSemi, _)) => Ok(()),
            _ => Err(self.unexpected(&token, "';'")),
        }
    }

    /// Whether the current token continues the statement on the same line,
    /// which restricted productions (`return x`, `async function`) require.
    fn same_line(&mut self) -> Result<bool, ParseError> {
        let token = self.peek()?;
        self.no_semicolon_at(&token)
    }

    /// Whether a line terminator sits in the trivia before `token`,
    /// including one inside a block comment.
    fn line_break_before(&self, token: &Token) -> bool {
        self.source
            .get(self.pos..token.span.start())
            .is_some_and(|trivia| trivia.chars().any(is_newline))
    }

    fn no_semicolon_at(&self, token: &Token) -> Result<bool, ParseError> {
        let mut input = Input::new(self.source, token.span.start());
        no_semicolon(&mut input, &self.view(token.context, &[Term::NoSemi]));
        Ok(matches!(input.accepted(), Some((Term::NoSemi, _))))
    }

    // =========================================================================
    // NESTING AND BACKTRACKING
    // =========================================================================

    /// Run `f` one nesting level deeper, growing the stack as needed.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Some(limit) = self.options.config.max_nesting_depth {
            if self.depth >= limit {
                debug!("nesting bound {limit} reached at byte {}", self.pos);
                return Err(ParseError::new(
                    ParseErrorKind::NestingTooDeep { limit },
                    Span::empty(self.pos),
                ));
            }
        }
        self.depth += 1;
        let red_zone = self.options.config.red_zone_bytes;
        let stack_size = self.options.config.stack_size_bytes;
        let result = stacker::maybe_grow(red_zone, stack_size, || f(self));
        self.depth -= 1;
        result
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            regex_allowed: self.regex_allowed,
            peeked: self.peeked,
            depth: self.depth,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.pos;
        self.regex_allowed = snapshot.regex_allowed;
        self.peeked = snapshot.peeked;
        self.depth = snapshot.depth;
    }

    /// Run `f` speculatively; on failure rewind and return `None`.
    ///
    /// Nesting-bound failures are not swallowed.
    fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) => Ok(Some(value)),
            Err(err) if matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }) => Err(err),
            Err(_) => {
                self.restore(snapshot);
                Ok(None)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Dialect, Dialects};
    use config::constants::GlobalConfig;

    fn parse(source: &str) -> Result<Cst, ParseError> {
        Parser::new(source, ParseOptions::default()).parse()
    }

    fn kinds(node: &CstNode) -> Vec<&'static str> {
        node.children.iter().map(|c| c.kind.name()).collect()
    }

    #[test]
    fn test_parse_empty() {
        let cst = parse("").unwrap();
        assert_eq!(cst.root.kind, NodeKind::Script);
        assert!(cst.root.children.is_empty());
    }

    #[test]
    fn test_parse_only_trivia() {
        let cst = parse("  // nothing\n/* here */").unwrap();
        assert!(cst.root.children.is_empty());
        assert_eq!(cst.root.span, Span::new(0, 23));
    }

    #[test]
    fn test_parse_multiple_statements() {
        let cst = parse("a; b\nc").unwrap();
        assert_eq!(cst.root.children.len(), 3);
        assert_eq!(kinds(&cst.root.children[0]), ["VariableName", ";"]);
        assert_eq!(kinds(&cst.root.children[1]), ["VariableName"]);
    }

    #[test]
    fn test_missing_semicolon_on_same_line() {
        let err = parse("a b").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "b".into(),
                expected: "';'".into()
            }
        );
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn test_nesting_bound() {
        let config = GlobalConfig::new(Some(8)).unwrap();
        let options = ParseOptions::default().with_config(config);
        let err = Parser::new("((((((((((1))))))))));", options).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 8 });
    }

    #[test]
    fn test_ts_dialect_reserves_extends() {
        assert!(parse("var extends = 1;").is_ok());
        let options = ParseOptions::default().with_dialects(Dialects::none().with(Dialect::Ts));
        let err = Parser::new("var extends = 1;", options).parse().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }
}
