//! # Tokens
//!
//! Token types for the JavaScript lexer, plus the grammar terms the context
//! tracker and contextual recognizers talk about.
//!
//! ## Example
//!
//! ```rust
//! use js_cst::lexer::{Token, TokenKind, TokenContext};
//! use js_cst::Span;
//!
//! let token = Token::new(TokenKind::Punct("++"), Span::new(1, 3), TokenContext::None);
//! assert!(token.is_punct("++"));
//! ```

use super::context::TokenContext;
use crate::span::{Span, Spanned};

// =============================================================================
// TERM
// =============================================================================

/// Grammar terms visible to the context tracker and the contextual
/// recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// Run of horizontal whitespace.
    Spaces,
    /// A single line terminator.
    Newline,
    /// `// ...` up to the end of the line.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// Zero-length statement terminator inferred by ASI.
    InsertSemi,
    /// Zero-length marker asserting that no terminator may be inferred here.
    NoSemi,
    /// `++`/`--` in postfix position.
    Incdec,
    /// `++`/`--` in prefix position.
    IncdecPrefix,
    /// Literal text run inside a template string.
    TemplateContent,
    /// `${` opening a template hole.
    TemplateDollarBrace,
    /// Closing backtick of a template string.
    TemplateEnd,
    /// `extends` promoted to a keyword by the TypeScript dialect.
    TsExtends,
    /// Any other significant token.
    Token,
}

// =============================================================================
// TOKEN
// =============================================================================

/// A significant token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Tracker state after the trivia preceding this token.
    pub context: TokenContext,
}

impl Token {
    /// Create a new token.
    pub const fn new(kind: TokenKind, span: Span, context: TokenContext) -> Self {
        Self {
            kind,
            span,
            context,
        }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Check if token is the given punctuator.
    pub fn is_punct(&self, spelling: &str) -> bool {
        matches!(self.kind, TokenKind::Punct(p) if p == spelling)
    }

    /// Check if token is the given reserved word.
    pub fn is_keyword(&self, spelling: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword(k) if k == spelling)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier, including contextual words like `of` or `async`.
    Identifier,
    /// Reserved word.
    Keyword(&'static str),
    /// Punctuator, including the opening backtick of a template.
    Punct(&'static str),
    /// Numeric literal like `10`, `0xff` or `10n`.
    Number,
    /// String literal like `"x"` or `'x'`.
    String,
    /// Regular expression literal like `/a+/g`.
    RegExp,
    /// End of file.
    Eof,
}

impl TokenKind {
    /// Whether a `/` right after a token of this kind starts a regular
    /// expression rather than a division.
    pub fn allows_regex_after(&self) -> bool {
        match self {
            Self::Identifier | Self::Number | Self::String | Self::RegExp | Self::Eof => false,
            Self::Keyword(_) => true,
            Self::Punct(p) => !matches!(*p, ")" | "]" | "++" | "--"),
        }
    }

    /// Get display string for error messages.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Keyword(spelling) | Self::Punct(spelling) => *spelling,
            Self::Number => "number",
            Self::String => "string",
            Self::RegExp => "regular expression",
            Self::Eof => "end of file",
        }
    }
}

/// Words that can never be identifiers.
///
/// `extends` is absent: it only becomes reserved through
/// [`ts_extends`](super::ts_extends).
pub const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "finally", "for", "function", "if", "in", "instanceof", "let", "new",
    "return", "switch", "throw", "try", "typeof", "var", "void", "while",
];

/// Punctuators, longest first so the scanner can take the first match.
pub const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=",
    "^=", "**", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-", "*",
    "/", "%", "&", "|", "^", "!", "~", "?", ":", "=", ".", "`",
];

/// Looks up the static spelling of a reserved word.
pub fn keyword(word: &str) -> Option<&'static str> {
    KEYWORDS.iter().copied().find(|k| *k == word)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuators_longest_first() {
        for (i, long) in PUNCTUATORS.iter().enumerate() {
            for short in &PUNCTUATORS[..i] {
                assert!(
                    !long.starts_with(short) || long == short,
                    "{short} shadows {long}"
                );
            }
        }
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("typeof"), Some("typeof"));
        assert_eq!(keyword("extends"), None);
        assert_eq!(keyword("of"), None);
    }

    #[test]
    fn test_regex_allowance() {
        assert!(!TokenKind::Identifier.allows_regex_after());
        assert!(!TokenKind::Punct(")").allows_regex_after());
        assert!(TokenKind::Punct("(").allows_regex_after());
        assert!(TokenKind::Keyword("return").allows_regex_after());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::Punct("(").display(), "(");
        assert_eq!(TokenKind::Identifier.display(), "identifier");
    }
}
