// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring alignment with an early-exit optimization.
//!
//! Classic Levenshtein compares two whole strings. For search we want to know
//! how well the query fits *somewhere inside* the candidate, so the first DP
//! row is all zeros: an alignment may start at any candidate position for free
//! (Sellers' variant). Adjacent transpositions cost one edit, same as a
//! substitution (optimal string alignment distance).
//!
//! Every cell also remembers where its alignment started, because the matcher
//! penalizes late matches.
//!
//! Two early exits keep this cheap for the common no-match case:
//! 1. If the query is longer than the candidate by more than `max`, no
//!    alignment can fit (each unmatched query char is a deletion).
//! 2. Row minima never decrease. Once a whole row exceeds `max`, stop.

/// One way of fitting the query into the candidate.
///
/// Field order matters: the derived `Ord` prefers fewer errors, then the
/// earlier start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Alignment {
    /// Edit operations needed (insertions, deletions, substitutions, transpositions).
    pub errors: usize,
    /// Candidate character index where the aligned substring begins.
    pub start: usize,
}

impl Alignment {
    fn step(self, cost: usize) -> Self {
        Alignment {
            errors: self.errors + cost,
            start: self.start,
        }
    }
}

/// Best alignment of `query` ending at each candidate position, keeping only
/// those within `max` errors.
///
/// Returns an empty vector when nothing fits. An empty query trivially fits
/// everywhere with zero errors; callers reject empty queries before this.
pub fn substring_alignments(query: &[char], candidate: &[char], max: usize) -> Vec<Alignment> {
    let m = query.len();
    let n = candidate.len();

    // Early-exit: every query char beyond the candidate length is a deletion
    if m.saturating_sub(n) > max {
        return Vec::new();
    }

    // Row 0: free start at every candidate position
    let mut before_prev: Vec<Alignment> = Vec::new();
    let mut prev: Vec<Alignment> = (0..=n)
        .map(|j| Alignment {
            errors: 0,
            start: j,
        })
        .collect();
    let mut cur: Vec<Alignment> = vec![Alignment { errors: 0, start: 0 }; n + 1];

    for i in 1..=m {
        let qc = query[i - 1];
        cur[0] = Alignment {
            errors: i,
            start: 0,
        };
        let mut min_row = cur[0].errors;

        for j in 1..=n {
            let cc = candidate[j - 1];
            let substitute = prev[j - 1].step(usize::from(qc != cc));
            let delete = prev[j].step(1);
            let insert = cur[j - 1].step(1);
            let mut best = substitute.min(delete).min(insert);

            if i > 1 && j > 1 && qc == candidate[j - 2] && query[i - 2] == cc {
                best = best.min(before_prev[j - 2].step(1));
            }

            cur[j] = best;
            min_row = min_row.min(best.errors);
        }

        // Early-exit: minima only grow from here
        if min_row > max {
            return Vec::new();
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
        if cur.len() != n + 1 {
            cur = vec![Alignment { errors: 0, start: 0 }; n + 1];
        }
    }

    prev.into_iter().filter(|a| a.errors <= max).collect()
}

/// Smallest number of edits needed to fit `query` somewhere in `candidate`.
pub fn substring_distance(query: &[char], candidate: &[char]) -> usize {
    substring_alignments(query, candidate, query.len())
        .into_iter()
        .map(|a| a.errors)
        .min()
        .unwrap_or(query.len())
}
