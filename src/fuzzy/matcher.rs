// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy matcher: one query, one field value, one number.
//!
//! ```text
//! score = errors / query_len + start / location_distance
//! ```
//!
//! Both terms are monotone: more typos score worse, and so does a match that
//! starts further into the candidate. A perfect match at position 0 scores
//! exactly 0. Anything above the threshold is not a match at all.

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::fuzzy::levenshtein::{substring_alignments, Alignment};
use crate::utils::normalized_chars;

/// A query normalized once and reused across many candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    chars: Vec<char>,
}

impl PreparedQuery {
    /// Normalize `query`. Returns `None` for empty or whitespace-only input.
    pub fn new(query: &str) -> Option<Self> {
        let chars = normalized_chars(query);
        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    /// Normalized length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: blank queries never become a `PreparedQuery`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

/// Typo-tolerant scorer for a single (query, candidate) pair.
///
/// Stateless apart from its configuration; cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Build a matcher, rejecting invalid configuration.
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Score `candidate` against `query`. Lower is better; `None` means no match.
    ///
    /// Empty queries and candidates never match.
    pub fn score(&self, query: &str, candidate: &str) -> Option<f64> {
        let prepared = PreparedQuery::new(query)?;
        self.score_prepared(&prepared, candidate)
    }

    /// Same as [`score`](Self::score) with the query already normalized.
    pub fn score_prepared(&self, query: &PreparedQuery, candidate: &str) -> Option<f64> {
        self.score_normalized(query, &normalized_chars(candidate))
    }

    /// Score a candidate that already went through `utils::normalized_chars`.
    pub fn score_normalized(&self, query: &PreparedQuery, candidate: &[char]) -> Option<f64> {
        if candidate.len() < self.config.min_match_len {
            return None;
        }

        let best = substring_alignments(query.as_chars(), candidate, self.max_errors(query.len()))
            .into_iter()
            .map(|alignment| self.alignment_score(alignment, query.len()))
            .min_by(f64::total_cmp)?;

        (best <= self.config.threshold).then_some(best)
    }

    /// Largest error count that could still land under the threshold.
    ///
    /// Only used to prune the DP; the final `<= threshold` check decides.
    fn max_errors(&self, query_len: usize) -> usize {
        (self.config.threshold * query_len as f64 + 1e-9).floor() as usize
    }

    fn alignment_score(&self, alignment: Alignment, query_len: usize) -> f64 {
        let accuracy = alignment.errors as f64 / query_len as f64;
        let proximity = alignment.start as f64 / self.config.location_distance as f64;
        accuracy + proximity
    }
}
