// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication for merged searches.
//!
//! A record should appear at most once in a result list. Within one corpus
//! that holds trivially, but nothing stops a host from registering two
//! catalog snapshots that share items, or feeding the same item twice. The
//! merge key is `(corpus kind, record id)`: the same id in the catalog and in
//! the articles is two different things, the same id twice in the catalog is
//! one.
//!
//! **Invariant**: each `(corpus, id)` appears at most once in merged results,
//! and the surviving copy is the best-ranked one.

use crate::scoring::ranking::compare_results;
use crate::types::{CorpusKind, MatchResult};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Identity of a record across corpora.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub corpus: CorpusKind,
    pub id: String,
}

impl RecordKey {
    pub fn of(result: &MatchResult) -> Self {
        Self {
            corpus: result.corpus,
            id: result.id().to_string(),
        }
    }
}

/// Collects hits from any number of corpora, keeping the best per record.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(catalog_hits);
/// merger.merge_all(article_hits);
/// let top = merger.into_sorted(10);
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger {
    map: HashMap<RecordKey, MatchResult>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Merge one hit, replacing an existing copy only if this one ranks better.
    pub fn merge(&mut self, result: MatchResult) {
        self.map
            .entry(RecordKey::of(&result))
            .and_modify(|existing| {
                if compare_results(&result, existing) == Ordering::Less {
                    *existing = result.clone();
                }
            })
            .or_insert(result);
    }

    pub fn merge_all(&mut self, results: impl IntoIterator<Item = MatchResult>) {
        for result in results {
            self.merge(result);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.map.contains_key(key)
    }

    /// Rank everything, then keep the first `limit`.
    ///
    /// Truncation happens strictly after sorting, so the output is always a
    /// prefix of the full ranking.
    pub fn into_sorted(self, limit: usize) -> Vec<MatchResult> {
        let mut results: Vec<_> = self.map.into_values().collect();
        results.sort_by(compare_results);
        results.truncate(limit);
        results
    }
}
