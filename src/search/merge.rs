// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-corpus search: fan out, tag, merge, rank, truncate.
//!
//! # Pipeline
//!
//! 1. Skip everything for a blank query
//! 2. Search each registered corpus independently
//! 3. Tag each hit with its corpus kind and registration slot
//! 4. Deduplicate by `(corpus, id)`, keeping the best copy
//! 5. Sort ascending by `(score, slot, position)`
//! 6. Truncate to `max_results`
//!
//! Corpora are searched one after another. The order does not matter for the
//! result: ranking depends only on the tags, never on arrival order.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::{ConfigError, Result};
use crate::fuzzy::FuzzyMatcher;
use crate::index::CorpusIndex;
use crate::scoring::ranking::is_ranked;
use crate::search::dedup::ResultMerger;
use crate::types::{Article, CatalogItem, MatchResult, Record};

/// Runs queries against every registered corpus and merges the hits.
///
/// Every corpus is searched with the matcher built from `config.matcher`,
/// whatever matcher it was built with. Cheap to clone: corpora are shared
/// behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    corpora: Vec<Arc<CorpusIndex>>,
    config: SearchConfig,
    matcher: FuzzyMatcher,
}

impl Searcher {
    /// Empty searcher with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty searcher with a validated configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            corpora: Vec::new(),
            matcher: FuzzyMatcher::new(config.matcher)?,
            config,
        })
    }

    /// The usual setup: catalog registered first, articles second.
    pub fn storefront(
        items: impl IntoIterator<Item = CatalogItem>,
        posts: impl IntoIterator<Item = Article>,
        config: SearchConfig,
    ) -> Result<Self> {
        let mut searcher = Self::with_config(config)?;
        searcher.register(CorpusIndex::catalog(items)?);
        searcher.register(CorpusIndex::articles(posts)?);
        Ok(searcher)
    }

    /// Register a corpus. Returns its slot; earlier slots win score ties.
    pub fn register(&mut self, index: CorpusIndex) -> usize {
        let index = index.with_matcher(self.matcher);
        self.corpora.push(Arc::new(index));
        self.corpora.len() - 1
    }

    /// Register a corpus that is also shared elsewhere.
    ///
    /// The `Arc` is kept as is when its matcher already agrees with this
    /// searcher's; otherwise the snapshot is copied with the right matcher.
    pub fn register_shared(&mut self, index: Arc<CorpusIndex>) -> usize {
        if index.matcher() == &self.matcher {
            self.corpora.push(index);
            self.corpora.len() - 1
        } else {
            self.register(CorpusIndex::clone(&index))
        }
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_corpus(mut self, index: CorpusIndex) -> Self {
        self.register(index);
        self
    }

    /// Replace the snapshot at `slot` with one over `records`.
    ///
    /// The corpus keeps its slot, fields and matcher. Clones of this searcher
    /// made earlier keep the old snapshot.
    pub fn rebuild<I>(&mut self, slot: usize, records: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        let current = self
            .corpora
            .get_mut(slot)
            .ok_or(ConfigError::UnknownSlot(slot))?;
        *current = Arc::new(current.rebuild(records)?);
        Ok(())
    }

    /// Top `max_results` hits across all corpora, best first.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut merger = ResultMerger::new();
        let mut total = 0;
        for (slot, index) in self.corpora.iter().enumerate() {
            let kind = index.kind();
            let hits = index.search(query);
            total += hits.len();
            merger.merge_all(hits.into_iter().map(|hit| MatchResult {
                record: hit.record,
                score: hit.score,
                corpus: kind,
                slot,
                position: hit.position,
            }));
        }

        let results = merger.into_sorted(max_results);
        debug_assert!(is_ranked(&results));

        tracing::trace!(
            query,
            corpora = self.corpora.len(),
            hits = total,
            returned = results.len(),
            "merged search"
        );
        results
    }

    /// [`search`](Self::search) capped at the configured `max_results`.
    pub fn search_default(&self, query: &str) -> Vec<MatchResult> {
        self.search(query, self.config.max_results)
    }

    pub fn corpora(&self) -> &[Arc<CorpusIndex>] {
        &self.corpora
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
