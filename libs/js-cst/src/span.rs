//! # Source Span
//!
//! Byte ranges into the parsed source. Every CST node carries one, and leaf
//! text is always recovered by slicing the source with it.
//!
//! ## Usage
//!
//! ```rust
//! use js_cst::Span;
//!
//! let span = Span::new(1, 4);
//! assert_eq!(span.text("(1+2);"), Some("1+2"));
//! assert_eq!(span.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the source text.
///
/// # Example
///
/// ```rust
/// use js_cst::Span;
///
/// // For source "var x=1;" the span of "x" would be:
/// let span = Span::new(4, 5);
/// assert_eq!(span.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a zero-length span at `at`.
    ///
    /// Used for inferred tokens that cover no source text.
    #[inline]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for zero-length spans.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a span running from the start of `self` to the end of `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use js_cst::Span;
    ///
    /// let joined = Span::new(0, 3).to(Span::new(5, 9));
    /// assert_eq!(joined, Span::new(0, 9));
    /// ```
    #[inline]
    pub const fn to(self, other: Span) -> Span {
        Span::new(self.start, other.end)
    }

    /// Slices `source` with this span.
    ///
    /// Returns `None` when the span is out of bounds or does not fall on
    /// character boundaries.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// Anything that covers a range of source text.
pub trait Spanned {
    /// Returns the covered range.
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_slices_source() {
        let span = Span::new(4, 5);
        assert_eq!(span.text("var x=1;"), Some("x"));
    }

    #[test]
    fn test_text_rejects_out_of_bounds() {
        assert_eq!(Span::new(2, 40).text("abc"), None);
    }

    #[test]
    fn test_text_rejects_split_codepoint() {
        // "é" is two bytes wide
        assert_eq!(Span::new(0, 1).text("é"), None);
    }

    #[test]
    fn test_empty_span() {
        let span = Span::empty(7);
        assert!(span.is_empty());
        assert_eq!(span.start(), 7);
        assert_eq!(span.end(), 7);
    }
}
