//! Regular expression literal decoding.

use crate::ast::{Literal, LiteralValue, RegexLiteral};
use crate::error::TransformError;

/// Flags a regular expression may carry.
const FLAGS: &str = "dgimsuyv";

/// Split a regular expression literal into pattern and flags and check both.
///
/// The pattern check is structural only: groups and character classes must
/// be balanced and no escape may dangle.
///
/// ## Example
///
/// ```rust
/// use js_estree::decode::regexp;
///
/// let literal = regexp(r"/\d+/gi").unwrap();
/// let regex = literal.regex.unwrap();
/// assert_eq!((regex.pattern.as_str(), regex.flags.as_str()), (r"\d+", "gi"));
/// ```
pub fn regexp(raw: &str) -> Result<Literal, TransformError> {
    let end = raw
        .rfind('/')
        .filter(|end| raw.starts_with('/') && *end > 0)
        .ok_or_else(|| TransformError::literal(raw, "missing slashes"))?;
    let pattern = &raw[1..end];
    let flags = &raw[end + 1..];

    check_flags(flags).map_err(|reason| TransformError::literal(raw, reason))?;
    check_pattern(pattern).map_err(|reason| TransformError::literal(raw, reason))?;

    let mut literal = Literal::new(LiteralValue::RegExp, raw);
    literal.regex = Some(RegexLiteral {
        pattern: pattern.to_string(),
        flags: flags.to_string(),
    });
    Ok(literal)
}

fn check_flags(flags: &str) -> Result<(), String> {
    for (i, flag) in flags.char_indices() {
        if !FLAGS.contains(flag) {
            return Err(format!("unknown flag '{flag}'"));
        }
        if flags[..i].contains(flag) {
            return Err(format!("repeated flag '{flag}'"));
        }
    }
    if flags.contains('u') && flags.contains('v') {
        return Err("flags 'u' and 'v' are exclusive".to_string());
    }
    Ok(())
}

fn check_pattern(pattern: &str) -> Result<(), String> {
    if pattern.is_empty() {
        return Err("empty pattern".to_string());
    }

    let mut groups = 0usize;
    let mut in_class = false;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err("dangling escape".to_string());
                }
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => groups += 1,
            ')' if !in_class => {
                groups = groups
                    .checked_sub(1)
                    .ok_or_else(|| "unmatched ')'".to_string())?;
            }
            _ => {}
        }
    }

    if in_class {
        return Err("unterminated character class".to_string());
    }
    if groups > 0 {
        return Err("unterminated group".to_string());
    }
    Ok(())
}
