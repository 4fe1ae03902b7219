//! Numeric literal decoding.

use crate::ast::{Literal, LiteralValue};
use crate::error::TransformError;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Decode a numeric literal, including bigints.
///
/// ## Example
///
/// ```rust
/// use js_estree::decode::number;
///
/// assert_eq!(number("0xC4f3").unwrap().value.as_f64(), Some(50419.0));
/// assert_eq!(number("1_000").unwrap().value.as_f64(), Some(1000.0));
/// assert_eq!(number("0x1Fn").unwrap().bigint.as_deref(), Some("0x1F"));
/// ```
pub fn number(raw: &str) -> Result<Literal, TransformError> {
    let digits: String = raw.chars().filter(|c| *c != '_').collect();

    if let Some(body) = digits.strip_suffix('n') {
        let (radix, unprefixed) = split_radix(body);
        let value = BigInt::parse_bytes(unprefixed.as_bytes(), radix)
            .ok_or_else(|| TransformError::literal(raw, "invalid bigint digits"))?;
        let mut literal = Literal::new(LiteralValue::BigInt(value), raw);
        literal.bigint = Some(body.to_string());
        return Ok(literal);
    }

    let value = match split_radix(&digits) {
        (10, decimal) if is_legacy_octal(decimal) => integer(raw, &decimal[1..], 8)?,
        (10, decimal) => decimal
            .parse::<f64>()
            .map_err(|e| TransformError::literal(raw, e.to_string()))?,
        (radix, unprefixed) => integer(raw, unprefixed, radix)?,
    };
    Ok(Literal::number(value, raw))
}

/// Split off a `0x`, `0o` or `0b` prefix.
fn split_radix(digits: &str) -> (u32, &str) {
    let bytes = digits.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            b'b' | b'B' => 2,
            _ => return (10, digits),
        };
        return (radix, &digits[2..]);
    }
    (10, digits)
}

/// `017` is octal; `019` is a decimal with a leading zero.
fn is_legacy_octal(digits: &str) -> bool {
    digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
}

fn integer(raw: &str, digits: &str, radix: u32) -> Result<f64, TransformError> {
    BigInt::parse_bytes(digits.as_bytes(), radix)
        .and_then(|n| n.to_f64())
        .ok_or_else(|| TransformError::literal(raw, format!("invalid base-{radix} digits")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0.0)]
    #[case("3.45", 3.45)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("0.8e12", 8e11)]
    #[case("1.22e-7", 1.22e-7)]
    #[case("1E3", 1000.0)]
    #[case("0xC4f3", 50419.0)]
    #[case("0o17", 15.0)]
    #[case("0B101", 5.0)]
    #[case("017", 15.0)]
    #[case("019", 19.0)]
    #[case("1_000_000", 1e6)]
    fn test_number_values(#[case] raw: &str, #[case] expected: f64) {
        let literal = number(raw).unwrap();
        assert_eq!(literal.value, LiteralValue::Number(expected));
        assert_eq!(literal.raw, raw);
        assert!(literal.bigint.is_none());
    }

    #[test]
    fn test_bigint() {
        let literal = number("100n").unwrap();
        assert_eq!(literal.value, LiteralValue::BigInt(BigInt::from(100)));
        assert_eq!(literal.bigint.as_deref(), Some("100"));

        let literal = number("0b1_1n").unwrap();
        assert_eq!(literal.value, LiteralValue::BigInt(BigInt::from(3)));
        assert_eq!(literal.bigint.as_deref(), Some("0b11"));
    }

    #[test]
    fn test_bigint_beyond_f64_precision() {
        let literal = number("9007199254740993n").unwrap();
        let LiteralValue::BigInt(value) = literal.value else {
            panic!("expected a bigint");
        };
        assert_eq!(value.to_string(), "9007199254740993");
    }

    #[test]
    fn test_invalid_digits() {
        assert!(matches!(number("0x"), Err(TransformError::LiteralDecode { .. })));
        assert!(matches!(number("1.2.3"), Err(TransformError::LiteralDecode { .. })));
    }
}
