// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The constants behind search ranking, and the one formula that combines
//! field scores.
//!
//! # Constants
//!
//! | Constant                    | Value | Meaning                                     |
//! |-----------------------------|-------|---------------------------------------------|
//! | `DEFAULT_THRESHOLD`         | 0.4   | Worst fuzzy score still counted as a match  |
//! | `MIN_MATCH_CHAR_LENGTH`     | 2     | Shorter candidates never match              |
//! | `DEFAULT_LOCATION_DISTANCE` | 100   | Chars of offset that cost a full 1.0        |
//! | `DEFAULT_MAX_RESULTS`       | 10    | Merged result cap                           |
//!
//! With the defaults a perfect match must start within the first 40
//! characters of a field to count at all; every typo eats into that budget.

/// Largest fuzzy score accepted as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Candidates with fewer characters than this are never matched.
pub const MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Divisor of the match-position penalty.
pub const DEFAULT_LOCATION_DISTANCE: usize = 100;

/// Default cap on merged results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Combine per-field scores into a record score.
///
/// `total = Σ score_i × weight_i` over the fields that matched. Fields that
/// did not match (`None`) contribute nothing. If no field matched, the record
/// does not match either.
pub fn weighted_sum(fields: impl IntoIterator<Item = (Option<f64>, f64)>) -> Option<f64> {
    fields
        .into_iter()
        .filter_map(|(score, weight)| score.map(|s| s * weight))
        .fold(None, |total, contribution| {
            Some(total.unwrap_or(0.0) + contribution)
        })
}

/// Lowest score among the elements of a list-valued field.
pub fn best_of(scores: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    scores.into_iter().flatten().min_by(f64::total_cmp)
}
