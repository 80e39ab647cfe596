// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index: one corpus, one field table, one immutable snapshot.
//!
//! Building an index is where all the validation happens. The field table is
//! checked, every record is checked against the corpus variant, and the
//! records are frozen behind `Arc`s. After that `search` cannot fail.
//!
//! Field values are normalized once per snapshot. A keystroke only normalizes
//! the query.
//!
//! The snapshot never observes later changes to the host's collection. When
//! the collection changes, call [`CorpusIndex::rebuild`]: it is the only way
//! in, which makes invalidation an explicit step rather than something that
//! happens behind your back.
//!
//! # Ordering
//!
//! Hits come back ascending by score. Ties keep insertion order, so two
//! records that score the same are always returned in the order the host
//! supplied them.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ConfigError, Result};
use crate::fuzzy::{FuzzyMatcher, PreparedQuery};
use crate::scoring::ranking::compare_scored;
use crate::scoring::{
    article_fields, catalog_fields, explain_record, normalize_fields, score_normalized_fields,
    validate_fields, FieldSpec, NormalizedField, RecordScore,
};
use crate::types::{Article, CatalogItem, CorpusKind, Record, ScoredRecord};

/// A searchable, read-only snapshot of one corpus.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    kind: CorpusKind,
    records: Vec<Arc<Record>>,
    /// `normalized[i][f]` is field `f` of record `i`, ready for the matcher.
    normalized: Vec<Vec<Option<NormalizedField>>>,
    fields: Vec<FieldSpec>,
    matcher: FuzzyMatcher,
}

impl CorpusIndex {
    /// Build an index over `records` using `fields`.
    ///
    /// Fails if the field table is invalid or any record is not of `kind`.
    pub fn new<I>(kind: CorpusKind, records: I, fields: Vec<FieldSpec>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        validate_fields(kind, &fields)?;
        let records = snapshot(kind, records)?;
        let normalized = normalize_all(&records, &fields);

        tracing::debug!(
            %kind,
            records = records.len(),
            fields = fields.len(),
            "built corpus index"
        );

        Ok(Self {
            kind,
            records,
            normalized,
            fields,
            matcher: FuzzyMatcher::default(),
        })
    }

    /// Catalog corpus with the default catalog field table.
    pub fn catalog(items: impl IntoIterator<Item = CatalogItem>) -> Result<Self> {
        Self::new(CorpusKind::Catalog, items, catalog_fields())
    }

    /// Article corpus with the default article field table.
    pub fn articles(posts: impl IntoIterator<Item = Article>) -> Result<Self> {
        Self::new(CorpusKind::Article, posts, article_fields())
    }

    /// Swap in a differently configured matcher.
    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// New snapshot over `records`, keeping this index's kind, fields and matcher.
    pub fn rebuild<I>(&self, records: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        let records = snapshot(self.kind, records)?;
        let normalized = normalize_all(&records, &self.fields);
        tracing::debug!(
            kind = %self.kind,
            previous = self.records.len(),
            records = records.len(),
            "rebuilt corpus index"
        );

        Ok(Self {
            kind: self.kind,
            records,
            normalized,
            fields: self.fields.clone(),
            matcher: self.matcher,
        })
    }

    /// Every matching record, best first. Blank queries match nothing.
    pub fn search(&self, query: &str) -> Vec<ScoredRecord> {
        let Some(prepared) = PreparedQuery::new(query) else {
            return Vec::new();
        };

        let mut hits = self.score_all(&prepared);
        hits.sort_by(compare_scored);

        tracing::trace!(kind = %self.kind, query, hits = hits.len(), "corpus search");
        hits
    }

    /// Per-field breakdown of how the record at `position` scores for `query`.
    pub fn explain(&self, query: &str, position: usize) -> Option<RecordScore> {
        let record = self.records.get(position)?;
        explain_record(&self.matcher, query, record, &self.fields)
    }

    fn score_one(&self, query: &PreparedQuery, position: usize) -> Option<ScoredRecord> {
        let score =
            score_normalized_fields(&self.matcher, query, &self.normalized[position], &self.fields)?;
        Some(ScoredRecord {
            record: Arc::clone(&self.records[position]),
            score,
            position,
        })
    }

    fn score_all(&self, query: &PreparedQuery) -> Vec<ScoredRecord> {
        #[cfg(feature = "parallel")]
        {
            (0..self.records.len())
                .into_par_iter()
                .filter_map(|position| self.score_one(query, position))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.records.len())
                .filter_map(|position| self.score_one(query, position))
                .collect()
        }
    }

    pub fn kind(&self) -> CorpusKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&Arc<Record>> {
        self.records.get(position)
    }
}

fn normalize_all(records: &[Arc<Record>], fields: &[FieldSpec]) -> Vec<Vec<Option<NormalizedField>>> {
    records
        .iter()
        .map(|record| normalize_fields(record, fields))
        .collect()
}

/// Freeze `records`, rejecting any that belong to another corpus.
fn snapshot<I>(kind: CorpusKind, records: I) -> Result<Vec<Arc<Record>>>
where
    I: IntoIterator,
    I::Item: Into<Record>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let record = record.into();
            if record.kind() == kind {
                Ok(Arc::new(record))
            } else {
                Err(ConfigError::VariantMismatch {
                    expected: kind,
                    found: record.kind(),
                    position,
                })
            }
        })
        .collect()
}
