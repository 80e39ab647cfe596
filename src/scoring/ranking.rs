// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how hits get sorted.
//!
//! Sort order, all ascending:
//! 1. **Score** - lower distance wins
//! 2. **Slot** - the corpus registered first wins a tie
//! 3. **Position** - the record inserted first wins a tie
//!
//! `(slot, position)` is unique within one merge, so this is a total order and
//! the same inputs always produce the same ranking. Scores are compared with
//! `f64::total_cmp`; NaN cannot come out of the scorer, but if one did it would
//! sort last instead of poisoning the sort.

use crate::types::{MatchResult, ScoredRecord};
use std::cmp::Ordering;

/// Compare two hits from the same corpus.
pub fn compare_scored(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Compare two merged hits.
///
/// # Example
///
/// ```ignore
/// // Article at 0.05 beats catalog item at 0.1, whatever the slots
/// assert_eq!(compare_results(&article_hit, &catalog_hit), Ordering::Less);
/// ```
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.slot.cmp(&b.slot))
        .then_with(|| a.position.cmp(&b.position))
}

/// Is this sequence in ranking order? Used by debug assertions and tests.
pub fn is_ranked(results: &[MatchResult]) -> bool {
    results
        .windows(2)
        .all(|pair| compare_results(&pair[0], &pair[1]) != Ordering::Greater)
}
