//! # Contextual Recognizers
//!
//! Hand-written scanners for tokens a regular tokenizer cannot classify on
//! its own: inferred statement terminators, the marker forbidding them,
//! prefix/postfix `++`/`--`, template string chunks and dialect keywords.
//!
//! Each recognizer receives an [`Input`] positioned where the engine wants a
//! token and a [`ParseStack`] describing what the grammar could shift there.
//! It either accepts a token through [`Input::accept_token`] or returns
//! without accepting, which declines.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::lexer::{incdec, Dialect, Input, ParseStack, Term, TokenContext};
//!
//! struct Postfix;
//! impl ParseStack for Postfix {
//!     fn context(&self) -> TokenContext { TokenContext::None }
//!     fn can_shift(&self, term: Term) -> bool { term == Term::Incdec }
//!     fn dialect_enabled(&self, _: Dialect) -> bool { false }
//! }
//!
//! let mut input = Input::new("x++", 1);
//! incdec(&mut input, &Postfix);
//! assert_eq!(input.accepted(), Some((Term::Incdec, 3)));
//! ```

use log::trace;

use super::context::TokenContext;
use super::input::Input;
use super::token::Term;

/// Whitespace codepoints that make [`no_semicolon`] decline.
const SPACE: &[char] = &[
    '\u{9}', '\u{a}', '\u{b}', '\u{c}', '\u{d}', ' ', '\u{85}', '\u{a0}', '\u{1680}',
    '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}',
    '\u{2007}', '\u{2008}', '\u{2009}', '\u{200a}', '\u{2028}', '\u{2029}', '\u{202f}',
    '\u{205f}', '\u{3000}',
];

// =============================================================================
// DIALECTS
// =============================================================================

/// Optional grammar extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// TypeScript-flavoured keywords.
    Ts,
}

/// Set of enabled dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dialects {
    ts: bool,
}

impl Dialects {
    /// No dialects enabled.
    pub const fn none() -> Self {
        Self { ts: false }
    }

    /// Returns a copy with `dialect` enabled.
    pub const fn with(mut self, dialect: Dialect) -> Self {
        match dialect {
            Dialect::Ts => self.ts = true,
        }
        self
    }

    /// Whether `dialect` is enabled.
    pub const fn contains(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Ts => self.ts,
        }
    }
}

// =============================================================================
// PARSE STACK
// =============================================================================

/// Capability queries a recognizer may put to the parser.
pub trait ParseStack {
    /// Tracker state at the current position.
    fn context(&self) -> TokenContext;
    /// Whether the grammar could shift `term` at the current position.
    fn can_shift(&self, term: Term) -> bool;
    /// Whether `dialect` is enabled for this parse.
    fn dialect_enabled(&self, dialect: Dialect) -> bool;
}

// =============================================================================
// RECOGNIZERS
// =============================================================================

/// Infers a statement terminator before `}`, at end of input, or after a
/// line break or comment, provided the grammar can take one here.
pub fn insert_semicolon(input: &mut Input<'_>, stack: &impl ParseStack) {
    let next = input.next();
    if (next == Some('}') || next.is_none() || stack.context().is_break())
        && stack.can_shift(Term::InsertSemi)
    {
        trace!("inferred statement terminator at byte {}", input.position());
        input.accept_token(Term::InsertSemi, 0);
    }
}

/// Asserts that the statement continues on the same line.
///
/// Declines on whitespace and comment starts so the engine skips them first.
pub fn no_semicolon(input: &mut Input<'_>, stack: &impl ParseStack) {
    let next = input.next();
    if next.is_some_and(|c| SPACE.contains(&c)) {
        return;
    }
    if next == Some('/') && matches!(input.peek(1), Some('/') | Some('*')) {
        return;
    }
    if !matches!(next, Some('}') | Some(';') | None)
        && !stack.context().is_break()
        && stack.can_shift(Term::NoSemi)
    {
        input.accept_token(Term::NoSemi, 0);
    }
}

/// Classifies `++`/`--` as postfix when the grammar can take a postfix
/// operator and no line break or comment precedes it, otherwise as prefix.
pub fn incdec(input: &mut Input<'_>, stack: &impl ParseStack) {
    let Some(first) = input.next().filter(|c| matches!(c, '+' | '-')) else {
        return;
    };
    input.advance();
    if input.next() != Some(first) {
        return;
    }
    input.advance();
    let postfix = !stack.context().is_break() && stack.can_shift(Term::Incdec);
    trace!(
        "`{first}{first}` at byte {} is {}",
        input.position() - 2,
        if postfix { "postfix" } else { "prefix" }
    );
    input.accept_token(if postfix { Term::Incdec } else { Term::IncdecPrefix }, 0);
}

/// Scans one chunk of a template string, starting right after the opening
/// backtick or after the `}` closing a hole.
///
/// Emits literal text up to (not including) a `${` or the closing backtick,
/// `${` itself when it comes first, or the closing backtick when nothing
/// precedes it. Text is also flushed after each line break.
pub fn template(input: &mut Input<'_>) {
    let mut after_dollar = false;
    let mut scanned = 0usize;
    loop {
        let next = input.next();
        match next {
            None => {
                if scanned > 0 {
                    input.accept_token(Term::TemplateContent, 0);
                }
                return;
            }
            Some('`') => {
                if scanned > 0 {
                    input.accept_token(Term::TemplateContent, 0);
                } else {
                    input.accept_token(Term::TemplateEnd, 1);
                }
                return;
            }
            Some('{') if after_dollar => {
                if scanned == 1 {
                    input.accept_token(Term::TemplateDollarBrace, 1);
                } else {
                    input.accept_token(Term::TemplateContent, -1);
                }
                return;
            }
            Some('\n') if scanned > 0 => {
                input.advance();
                input.accept_token(Term::TemplateContent, 0);
                return;
            }
            Some('\\') => {
                input.advance();
            }
            Some(_) => {}
        }
        after_dollar = next == Some('$');
        input.advance();
        scanned += 1;
    }
}

/// Promotes `extends` to a keyword when the TypeScript dialect is enabled.
///
/// Returns `None` for any other word or when the dialect is off.
pub fn ts_extends(word: &str, stack: &impl ParseStack) -> Option<Term> {
    (word == "extends" && stack.dialect_enabled(Dialect::Ts)).then_some(Term::TsExtends)
}

// =============================================================================
// TESTS
// =============================================================================
