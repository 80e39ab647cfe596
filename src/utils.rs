// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by queries and field values.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: strip diacritics, lowercase, collapse whitespace.
///
/// Queries and candidates both pass through here, which is what makes the
/// matcher case- and accent-insensitive:
/// - "Café" → "cafe"
/// - "  Wireless   MOUSE " → "wireless mouse"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize and split into characters, the unit the matcher works in.
pub fn normalized_chars(value: &str) -> Vec<char> {
    normalize(value).chars().collect()
}

/// Combining diacritical marks (Unicode category Mn ranges we strip).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
