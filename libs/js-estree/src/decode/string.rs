//! String and template escape decoding.
//!
//! Decoding goes through UTF-16 code units so that `\uD83D\uDE00` written
//! as two escapes forms one character, as it does in JavaScript. A surrogate
//! left unpaired has no `char`, so it decodes to U+FFFD.

use crate::ast::{Literal, TemplateValue};
use crate::error::TransformError;
use log::warn;
use std::iter::Peekable;
use std::str::Chars;

/// Where the escapes being decoded appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    /// Quoted string: legacy octal and `\8`/`\9` are accepted.
    String,
    /// Template chunk: line terminators normalize to `\n` and legacy escapes
    /// are invalid.
    Template,
}

/// An escape the literal's flavor does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InvalidEscape(&'static str);

/// Decode a quoted string literal.
///
/// ## Example
///
/// ```rust
/// use js_estree::decode::string;
///
/// let literal = string(r#""a\t\".""#).unwrap();
/// assert_eq!(literal.raw, r#""a\t\".""#);
/// ```
pub fn string(raw: &str) -> Result<Literal, TransformError> {
    let body = raw
        .get(1..raw.len().saturating_sub(1))
        .filter(|_| raw.len() >= 2)
        .ok_or_else(|| TransformError::literal(raw, "missing quotes"))?;
    let value = cook(body, Flavor::String)
        .map_err(|InvalidEscape(reason)| TransformError::literal(raw, reason))?;
    Ok(Literal::string(value, raw))
}

/// Decode the text of a template chunk.
///
/// `raw` has its line terminators normalized to `\n`; `cooked` is `None`
/// when the chunk holds an escape that only a tagged template may contain.
pub fn template(text: &str) -> Result<TemplateValue, TransformError> {
    let raw = normalize_newlines(text);
    let cooked = cook(text, Flavor::Template).ok();
    Ok(TemplateValue { raw, cooked })
}

/// Replace `\r\n` and lone `\r` with `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn cook(body: &str, flavor: Flavor) -> Result<String, InvalidEscape> {
    let mut units: Vec<u16> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escape(&mut chars, flavor, &mut units)?,
            '\r' if flavor == Flavor::Template => {
                chars.next_if_eq(&'\n');
                units.push(u16::from(b'\n'));
            }
            _ => push_char(&mut units, c),
        }
    }

    let mut text = String::with_capacity(units.len());
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => text.push(c),
            Err(e) => {
                warn!("unpaired surrogate {:#06x} decoded as U+FFFD", e.unpaired_surrogate());
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    Ok(text)
}

fn escape(
    chars: &mut Peekable<Chars<'_>>,
    flavor: Flavor,
    units: &mut Vec<u16>,
) -> Result<(), InvalidEscape> {
    let Some(c) = chars.next() else {
        return Err(InvalidEscape("dangling backslash"));
    };
    match c {
        'n' => push_char(units, '\n'),
        't' => push_char(units, '\t'),
        'r' => push_char(units, '\r'),
        'b' => push_char(units, '\u{8}'),
        'f' => push_char(units, '\u{c}'),
        'v' => push_char(units, '\u{b}'),
        '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => push_char(units, '\0'),
        '0'..='7' if flavor == Flavor::String => units.push(legacy_octal(c, chars)),
        '8' | '9' if flavor == Flavor::String => push_char(units, c),
        '0'..='9' => return Err(InvalidEscape("octal escape in template")),
        'x' => {
            let value = hex_digits(chars, 2).ok_or(InvalidEscape("malformed \\x escape"))?;
            units.push(value as u16);
        }
        'u' => unicode(chars, units)?,
        '\r' => {
            chars.next_if_eq(&'\n');
        }
        '\n' | '\u{2028}' | '\u{2029}' => {}
        other => push_char(units, other),
    }
    Ok(())
}

/// `\7`, `\12`, `\377`: up to three digits while the value stays below 256.
fn legacy_octal(first: char, chars: &mut Peekable<Chars<'_>>) -> u16 {
    let mut value = first as u16 - u16::from(b'0');
    let max_digits = if first <= '3' { 3 } else { 2 };
    for _ in 1..max_digits {
        match chars.peek() {
            Some(d @ '0'..='7') => {
                value = value * 8 + (*d as u16 - u16::from(b'0'));
                chars.next();
            }
            _ => break,
        }
    }
    value
}

/// `\uHHHH` pushes one code unit; `\u{H...}` pushes one code point.
fn unicode(chars: &mut Peekable<Chars<'_>>, units: &mut Vec<u16>) -> Result<(), InvalidEscape> {
    if chars.next_if_eq(&'{').is_none() {
        let value = hex_digits(chars, 4).ok_or(InvalidEscape("malformed \\u escape"))?;
        units.push(value as u16);
        return Ok(());
    }

    let mut value: u32 = 0;
    let mut count = 0;
    loop {
        match chars.next() {
            Some('}') if count > 0 => break,
            Some(d) if d.is_ascii_hexdigit() => {
                value = value * 16 + d.to_digit(16).unwrap_or(0);
                count += 1;
                if value > 0x10FFFF {
                    return Err(InvalidEscape("code point out of range"));
                }
            }
            _ => return Err(InvalidEscape("malformed \\u{} escape")),
        }
    }
    match char::from_u32(value) {
        Some(c) => push_char(units, c),
        // Surrogate code points stay as single units.
        None => units.push(value as u16),
    }
    Ok(())
}

fn hex_digits(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        let digit = chars.next_if(|c| c.is_ascii_hexdigit())?.to_digit(16)?;
        value = value * 16 + digit;
    }
    Some(value)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LiteralValue;
    use rstest::rstest;

    fn value(raw: &str) -> String {
        match string(raw).unwrap().value {
            LiteralValue::String(s) => s,
            other => panic!("expected a string value, got {other:?}"),
        }
    }

    #[rstest]
    #[case(r#""""#, "")]
    #[case(r#""x""#, "x")]
    #[case(r#""a\t\".""#, "a\t\".")]
    #[case("''", "")]
    #[case(r"'<\x12\u1234>'", "<\u{12}\u{1234}>")]
    #[case(r"'\u{1F600}'", "\u{1F600}")]
    #[case(r"'\uD83D\uDE00'", "\u{1F600}")]
    #[case(r"'\0'", "\0")]
    #[case(r"'\101\7'", "A\u{7}")]
    #[case(r"'\8'", "8")]
    #[case(r"'\q'", "q")]
    #[case("'a\\\nb'", "ab")]
    #[case("'a\\\r\nb'", "ab")]
    fn test_string_values(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(value(raw), expected);
    }

    #[test]
    fn test_lone_surrogate() {
        assert_eq!(value(r"'\uD800'"), "\u{FFFD}");
        assert_eq!(value(r"'a\uDE00\uD83D'"), "a\u{FFFD}\u{FFFD}");
        let value = template(r"\uD800").unwrap();
        assert_eq!(value.cooked.as_deref(), Some("\u{FFFD}"));
    }

    #[test]
    fn test_malformed_escapes() {
        assert!(string(r"'\x1'").is_err());
        assert!(string(r"'\u{110000}'").is_err());
        assert!(string(r"'\u{}'").is_err());
    }

    #[test]
    fn test_template_cooked() {
        let value = template("a\\n${").unwrap();
        assert_eq!(value.raw, "a\\n${");
        assert_eq!(value.cooked.as_deref(), Some("a\n${"));
    }

    #[test]
    fn test_template_newlines() {
        let value = template("a\r\nb\rc").unwrap();
        assert_eq!(value.raw, "a\nb\nc");
        assert_eq!(value.cooked.as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn test_template_invalid_escape_has_no_cooked() {
        let value = template(r"\01 \unicode").unwrap();
        assert_eq!(value.raw, r"\01 \unicode");
        assert_eq!(value.cooked, None);
    }
}
