//! Locale-aware string ordering for text columns.
//!
//! Root-locale style, level by level: base letters first (accents and case ignored),
//! then accents, then case with lowercase first. Raw code points break any remaining
//! tie so the order is total.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed comparison key. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: String,
    secondary: String,
    /// `true` where the decomposed char is uppercase.
    tertiary: Vec<bool>,
    raw: String,
}

impl SortKey {
    pub fn new(s: &str) -> Self {
        let primary = s
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let secondary = s.nfd().flat_map(char::to_lowercase).collect();
        let tertiary = s.nfd().map(char::is_uppercase).collect();
        Self { primary, secondary, tertiary, raw: s.to_string() }
    }
}

pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    SortKey::new(a).cmp(&SortKey::new(b))
}
