//! Cross-version text comparison.
//!
//! Two versions of a file are unrelated buffers: a span from the stale
//! version means nothing as an offset into the updated one. Every
//! "did this region change" question is answered here, by walking both
//! regions against their own text. Neither region is copied.

use crate::Span;

/// Compare the text under `first` in `first_text` with the text under
/// `second` in `second_text`.
///
/// Returns `true` iff both ranges have the same length and identical bytes.
/// A range that is inverted or reaches past the end of its text never
/// compares equal to anything.
///
/// # Examples
///
/// ```
/// use hmr_ir::{text::ranges_equal, Span};
///
/// let stale = "let a = 1;";
/// let updated = "\nlet a = 1;";
/// assert!(ranges_equal(stale, Span::new(0, 10), updated, Span::new(1, 11)));
/// assert!(!ranges_equal(stale, Span::new(0, 10), updated, Span::new(0, 10)));
/// ```
pub fn ranges_equal(first_text: &str, first: Span, second_text: &str, second: Span) -> bool {
    if first.is_inverted() || second.is_inverted() || first.len() != second.len() {
        return false;
    }
    let (Some(a), Some(b)) = (
        first_text.as_bytes().get(first.to_range()),
        second_text.as_bytes().get(second.to_range()),
    ) else {
        return false;
    };
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Compare two optional ranges.
///
/// Two absent ranges are equal; an absent range never equals a present one.
pub fn optional_ranges_equal(
    first_text: &str,
    first: Option<Span>,
    second_text: &str,
    second: Option<Span>,
) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(first), Some(second)) => ranges_equal(first_text, first, second_text, second),
        _ => false,
    }
}
