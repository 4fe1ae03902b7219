//! # JavaScript Lexer
//!
//! On-demand tokenizer driven by the parser. Whether `/` starts a regular
//! expression, whether `++` is postfix and where a template chunk ends all
//! depend on grammar position, so tokens are scanned one at a time from a
//! byte offset rather than up front.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::lexer::{Dialects, Lexer, TokenContext, TokenKind};
//!
//! let lexer = Lexer::new("x\n/* c */ y", Dialects::none());
//! let x = lexer.scan(0, true).unwrap();
//! assert_eq!(x.kind, TokenKind::Identifier);
//! let y = lexer.scan(x.span.end(), false).unwrap();
//! assert_eq!(y.context, TokenContext::Comment);
//! ```

mod context;
mod contextual;
mod input;
mod token;

pub use context::{ContextTracker, TokenContext};
pub use contextual::{
    incdec, insert_semicolon, no_semicolon, template, ts_extends, Dialect, Dialects, ParseStack,
};
pub use input::Input;
pub use token::{keyword, Term, Token, TokenKind, KEYWORDS, PUNCTUATORS};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;

// =============================================================================
// STACK VIEW
// =============================================================================

/// Snapshot of what the parser could shift at one position, handed to the
/// contextual recognizers.
#[derive(Debug, Clone, Copy)]
pub struct StackView {
    /// Tracker state before the token under consideration.
    pub context: TokenContext,
    /// Terms the grammar accepts here.
    pub shiftable: &'static [Term],
    /// Enabled dialects.
    pub dialects: Dialects,
}

impl ParseStack for StackView {
    fn context(&self) -> TokenContext {
        self.context
    }

    fn can_shift(&self, term: Term) -> bool {
        self.shiftable.contains(&term)
    }

    fn dialect_enabled(&self, dialect: Dialect) -> bool {
        self.dialects.contains(dialect)
    }
}

// =============================================================================
// LEXER
// =============================================================================

/// JavaScript lexer.
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Dialects consulted for keyword promotion.
    dialects: Dialects,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str, dialects: Dialects) -> Self {
        Self { source, dialects }
    }

    /// Source text being lexed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Skip trivia from `pos` and scan one significant token.
    ///
    /// ## Parameters
    ///
    /// - `pos`: Byte offset right after the previous significant token
    /// - `regex_allowed`: Whether a `/` here opens a regular expression
    ///
    /// ## Returns
    ///
    /// The token, carrying the tracker state left by the skipped trivia
    pub fn scan(&self, pos: usize, regex_allowed: bool) -> Result<Token, ParseError> {
        let (start, context) = self.skip_trivia(pos)?;
        let mut input = Input::new(self.source, start);
        let Some(c) = input.next() else {
            return Ok(Token::new(TokenKind::Eof, Span::empty(start), context));
        };

        let kind = if is_id_start(c) {
            self.scan_word(&mut input, context)
        } else if c.is_ascii_digit() || (c == '.' && input.peek(1).is_some_and(|d| d.is_ascii_digit())) {
            self.scan_number(&mut input)?
        } else if c == '"' || c == '\'' {
            self.scan_string(&mut input, c)?
        } else if c == '/' && regex_allowed {
            self.scan_regexp(&mut input)?
        } else {
            self.scan_punct(&mut input)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidCharacter(c), Span::new(start, start + c.len_utf8())))?
        };

        Ok(Token::new(kind, Span::new(start, input.position()), context))
    }

    /// Skip whitespace, line terminators and comments, threading the context
    /// tracker through each of them.
    fn skip_trivia(&self, pos: usize) -> Result<(usize, TokenContext), ParseError> {
        let mut input = Input::new(self.source, pos);
        let mut context = ContextTracker::start();
        loop {
            match input.next() {
                Some(c) if is_newline(c) => {
                    input.advance();
                    context = ContextTracker::shift(context, Term::Newline);
                }
                Some(c) if is_space(c) => {
                    while input.next().is_some_and(is_space) {
                        input.advance();
                    }
                    context = ContextTracker::shift(context, Term::Spaces);
                }
                Some('/') if input.peek(1) == Some('/') => {
                    while input.next().is_some_and(|c| !is_newline(c)) {
                        input.advance();
                    }
                    context = ContextTracker::shift(context, Term::LineComment);
                }
                Some('/') if input.peek(1) == Some('*') => {
                    let start = input.position();
                    input.advance();
                    input.advance();
                    loop {
                        match input.next() {
                            None => {
                                return Err(ParseError::new(
                                    ParseErrorKind::UnterminatedComment,
                                    Span::new(start, input.position()),
                                ))
                            }
                            Some('*') if input.peek(1) == Some('/') => {
                                input.advance();
                                input.advance();
                                break;
                            }
                            Some(_) => {
                                input.advance();
                            }
                        }
                    }
                    context = ContextTracker::shift(context, Term::BlockComment);
                }
                _ => break,
            }
        }
        Ok((input.position(), context))
    }

    /// Scan an identifier or reserved word.
    fn scan_word(&self, input: &mut Input<'a>, context: TokenContext) -> TokenKind {
        let start = input.position();
        while input.next().is_some_and(is_id_continue) {
            input.advance();
        }
        let word = Span::new(start, input.position()).text(self.source).unwrap_or("");
        let view = StackView {
            context,
            shiftable: &[],
            dialects: self.dialects,
        };
        if ts_extends(word, &view).is_some() {
            return TokenKind::Keyword("extends");
        }
        keyword(word).map_or(TokenKind::Identifier, TokenKind::Keyword)
    }

    /// Scan a numeric literal, including radix prefixes, separators, exponents
    /// and the BigInt suffix.
    fn scan_number(&self, input: &mut Input<'a>) -> Result<TokenKind, ParseError> {
        let start = input.position();
        let radix = match (input.next(), input.peek(1)) {
            (Some('0'), Some('x' | 'X')) => Some(16),
            (Some('0'), Some('o' | 'O')) => Some(8),
            (Some('0'), Some('b' | 'B')) => Some(2),
            _ => None,
        };

        if let Some(radix) = radix {
            input.advance();
            input.advance();
            let digits = input.position();
            while input.next().is_some_and(|c| c.is_digit(radix) || c == '_') {
                input.advance();
            }
            if input.position() == digits {
                return Err(self.invalid_number(start, input.position()));
            }
        } else {
            eat_digits(input);
            if input.next() == Some('.') {
                input.advance();
                eat_digits(input);
            }
            if matches!(input.next(), Some('e' | 'E')) {
                let signed = matches!(input.peek(1), Some('+' | '-'));
                let digit_at = if signed { 2 } else { 1 };
                if input.peek(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                    input.advance();
                    if signed {
                        input.advance();
                    }
                    eat_digits(input);
                }
            }
        }

        if input.next() == Some('n') {
            input.advance();
        }
        if input.next().is_some_and(is_id_continue) {
            input.advance();
            return Err(self.invalid_number(start, input.position()));
        }
        Ok(TokenKind::Number)
    }

    /// Scan a single- or double-quoted string literal.
    fn scan_string(&self, input: &mut Input<'a>, quote: char) -> Result<TokenKind, ParseError> {
        let start = input.position();
        input.advance();
        loop {
            match input.next() {
                None | Some('\n') | Some('\r') => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedString,
                        Span::new(start, input.position()),
                    ))
                }
                Some('\\') => {
                    input.advance();
                    if input.advance() == Some('\r') && input.next() == Some('\n') {
                        input.advance();
                    }
                }
                Some(c) => {
                    input.advance();
                    if c == quote {
                        return Ok(TokenKind::String);
                    }
                }
            }
        }
    }

    /// Scan a regular expression literal and its flags.
    fn scan_regexp(&self, input: &mut Input<'a>) -> Result<TokenKind, ParseError> {
        let start = input.position();
        let unterminated =
            |input: &Input<'a>| ParseError::new(ParseErrorKind::UnterminatedRegExp, Span::new(start, input.position()));
        input.advance();
        let mut in_class = false;
        loop {
            match input.next() {
                None => return Err(unterminated(input)),
                Some(c) if is_newline(c) => return Err(unterminated(input)),
                Some('\\') => {
                    input.advance();
                    if input.next().map_or(true, is_newline) {
                        return Err(unterminated(input));
                    }
                    input.advance();
                }
                Some('[') => {
                    in_class = true;
                    input.advance();
                }
                Some(']') => {
                    in_class = false;
                    input.advance();
                }
                Some('/') if !in_class => {
                    input.advance();
                    break;
                }
                Some(_) => {
                    input.advance();
                }
            }
        }
        while input.next().is_some_and(is_id_continue) {
            input.advance();
        }
        Ok(TokenKind::RegExp)
    }

    /// Scan the longest matching punctuator.
    fn scan_punct(&self, input: &mut Input<'a>) -> Option<TokenKind> {
        let rest = self.source.get(input.position()..)?;
        let punct = PUNCTUATORS.iter().copied().find(|p| rest.starts_with(p))?;
        for _ in 0..punct.len() {
            input.advance();
        }
        Some(TokenKind::Punct(punct))
    }

    fn invalid_number(&self, start: usize, end: usize) -> ParseError {
        let span = Span::new(start, end);
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: span.text(self.source).unwrap_or("").to_string(),
            },
            span,
        )
    }
}

// =============================================================================
// CHARACTER CLASSES
// =============================================================================

fn eat_digits(input: &mut Input<'_>) {
    while input.next().is_some_and(|c| c.is_ascii_digit() || c == '_') {
        input.advance();
    }
}

/// Line terminators.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Horizontal whitespace.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}' | '\u{c}' | ' ' | '\u{85}' | '\u{a0}' | '\u{feff}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    )
}

fn is_id_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_id_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '\u{200c}' | '\u{200d}')
}

// =============================================================================
// TESTS
// =============================================================================
