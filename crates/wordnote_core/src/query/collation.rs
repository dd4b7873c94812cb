//! Base-strength collation for sentence ordering.
//!
//! Two strings compare equal at base strength when they differ only in case
//! or accents. The rule is fixed (NFD, strip combining marks, lowercase, then
//! scalar-value order) so ordering never depends on the host locale.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns the case- and accent-folded comparison key for `value`.
pub fn base_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares two strings at base strength.
pub fn compare_base(left: &str, right: &str) -> Ordering {
    base_key(left).cmp(&base_key(right))
}

/// Sentence length used as the primary sort key, in Unicode scalar values.
pub fn sentence_len(value: &str) -> usize {
    value.chars().count()
}
