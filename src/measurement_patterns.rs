//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and lookup tables used to recognize
//! quantities and list markers in free-form recipe text.

use lazy_static::lazy_static;
use regex::Regex;

/// Bare integer, e.g. "12"
pub const INTEGER_PATTERN: &str = r"^\d+$";

/// Decimal number with an optional whole part, e.g. "1.5" or ".25"
pub const DECIMAL_PATTERN: &str = r"^\d*\.\d+$";

/// Simple fraction, e.g. "3/4"
pub const FRACTION_PATTERN: &str = r"^(\d+)/(\d+)$";

/// Mixed number, e.g. "1 3/4"
pub const MIXED_NUMBER_PATTERN: &str = r"^(\d+)\s+(\d+)/(\d+)$";

/// Leading bullet or numbered-list marker, capturing the rest of the line
pub const LIST_MARKER_PATTERN: &str = r"^(?:-|\*|\+|⁃|•|\d+\.)\s*(.*)$";

// Compiled once; every pattern above is a constant known to be valid
lazy_static! {
    pub static ref INTEGER_REGEX: Regex =
        Regex::new(INTEGER_PATTERN).expect("Integer pattern should be valid");
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
    pub static ref FRACTION_REGEX: Regex =
        Regex::new(FRACTION_PATTERN).expect("Fraction pattern should be valid");
    pub static ref MIXED_NUMBER_REGEX: Regex =
        Regex::new(MIXED_NUMBER_PATTERN).expect("Mixed number pattern should be valid");
    pub static ref LIST_MARKER_REGEX: Regex =
        Regex::new(LIST_MARKER_PATTERN).expect("List marker pattern should be valid");
}

/// Unicode vulgar fractions and the (dividend, divisor) pair each one stands for.
///
/// Used in both directions: glyph to ASCII while parsing, and pair to glyph
/// while rendering.
pub const VULGAR_FRACTIONS: &[(char, i64, i64)] = &[
    ('½', 1, 2),
    ('⅓', 1, 3),
    ('⅔', 2, 3),
    ('¼', 1, 4),
    ('¾', 3, 4),
    ('⅕', 1, 5),
    ('⅖', 2, 5),
    ('⅗', 3, 5),
    ('⅘', 4, 5),
    ('⅙', 1, 6),
    ('⅚', 5, 6),
    ('⅛', 1, 8),
    ('⅜', 3, 8),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
    ('⅒', 1, 10),
];

/// Look up the vulgar fraction glyph for an exact (dividend, divisor) pair
pub fn vulgar_glyph(dividend: i64, divisor: i64) -> Option<char> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(_, d, v)| *d == dividend && *v == divisor)
        .map(|(glyph, _, _)| *glyph)
}

/// Replace every vulgar fraction glyph with " num/den".
///
/// The leading space keeps glued forms such as "1½" parseable as a mixed number.
pub fn expand_vulgar_fractions(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match VULGAR_FRACTIONS.iter().find(|(glyph, _, _)| *glyph == c) {
            Some((_, dividend, divisor)) => {
                expanded.push_str(&format!(" {}/{}", dividend, divisor));
            }
            None => expanded.push(c),
        }
    }
    expanded
}
