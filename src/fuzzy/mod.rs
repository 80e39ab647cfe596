// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: a bounded approximate-substring alignment that counts
//! edits, and the matcher that turns an alignment into a normalized score and
//! applies the threshold.

pub mod levenshtein;
mod matcher;

pub use levenshtein::{substring_alignments, substring_distance, Alignment};
pub use matcher::{FuzzyMatcher, PreparedQuery};
