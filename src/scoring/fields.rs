// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-weighted record scoring.
//!
//! A record is a bag of fields; a [`FieldSpec`] says how to pull one field out
//! and how much it counts. Each corpus gets its own table, resolved once when
//! the index is built:
//!
//! | Corpus  | Field       | Weight |
//! |---------|-------------|--------|
//! | catalog | title       | 0.4    |
//! | catalog | description | 0.3    |
//! | catalog | category    | 0.2    |
//! | catalog | features    | 0.1    |
//! | article | title       | 0.4    |
//! | article | excerpt     | 0.3    |
//! | article | content     | 0.2    |
//! | article | tags        | 0.1    |
//!
//! The scorer itself knows nothing about corpora. Given the same table it
//! behaves identically for any record.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::fuzzy::{FuzzyMatcher, PreparedQuery};
use crate::scoring::core::{best_of, weighted_sum};
use crate::types::{CorpusKind, FieldValue, Record};
use crate::utils::normalized_chars;

/// Pulls a field out of a record. `None` means the record has no such field.
pub type Extractor = for<'a> fn(&'a Record) -> Option<FieldValue<'a>>;

/// One searchable field: name, extractor, relative weight.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub weight: f64,
    pub extract: Extractor,
}

impl FieldSpec {
    pub const fn new(name: &'static str, weight: f64, extract: Extractor) -> Self {
        Self {
            name,
            weight,
            extract,
        }
    }

    /// Same field, different weight.
    pub fn with_weight(self, weight: f64) -> Self {
        Self { weight, ..self }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DEFAULT TABLES
// =============================================================================

fn catalog_title(record: &Record) -> Option<FieldValue<'_>> {
    record.as_catalog().map(|item| FieldValue::Text(&item.title))
}

fn catalog_description(record: &Record) -> Option<FieldValue<'_>> {
    record.as_catalog().map(|item| FieldValue::Text(&item.description))
}

fn catalog_category(record: &Record) -> Option<FieldValue<'_>> {
    record.as_catalog().map(|item| FieldValue::Text(&item.category))
}

fn catalog_features(record: &Record) -> Option<FieldValue<'_>> {
    record.as_catalog().map(|item| FieldValue::List(&item.features))
}

fn article_title(record: &Record) -> Option<FieldValue<'_>> {
    record.as_article().map(|post| FieldValue::Text(&post.title))
}

fn article_excerpt(record: &Record) -> Option<FieldValue<'_>> {
    record.as_article().map(|post| FieldValue::Text(&post.excerpt))
}

fn article_content(record: &Record) -> Option<FieldValue<'_>> {
    record.as_article().map(|post| FieldValue::Text(&post.content))
}

fn article_tags(record: &Record) -> Option<FieldValue<'_>> {
    record.as_article().map(|post| FieldValue::List(&post.tags))
}

/// Searchable fields of a catalog item.
pub fn catalog_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("title", 0.4, catalog_title),
        FieldSpec::new("description", 0.3, catalog_description),
        FieldSpec::new("category", 0.2, catalog_category),
        FieldSpec::new("features", 0.1, catalog_features),
    ]
}

/// Searchable fields of an article.
pub fn article_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("title", 0.4, article_title),
        FieldSpec::new("excerpt", 0.3, article_excerpt),
        FieldSpec::new("content", 0.2, article_content),
        FieldSpec::new("tags", 0.1, article_tags),
    ]
}

pub fn default_fields(kind: CorpusKind) -> Vec<FieldSpec> {
    match kind {
        CorpusKind::Catalog => catalog_fields(),
        CorpusKind::Article => article_fields(),
    }
}

/// Reject tables that scoring could not make sense of.
///
/// Checks:
/// - at least one field
/// - every weight finite and within `(0, 1]`
/// - no field name repeated
pub fn validate_fields(kind: CorpusKind, specs: &[FieldSpec]) -> Result<()> {
    if specs.is_empty() {
        return Err(ConfigError::EmptyFieldSpecs { kind });
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !spec.weight.is_finite() || spec.weight <= 0.0 || spec.weight > 1.0 {
            return Err(ConfigError::InvalidWeight {
                field: spec.name.to_string(),
                weight: spec.weight,
            });
        }
        if !seen.insert(spec.name) {
            return Err(ConfigError::DuplicateField {
                field: spec.name.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// SCORING
// =============================================================================

/// Score of one field: the text itself, or the best element of a list.
fn field_score(matcher: &FuzzyMatcher, query: &PreparedQuery, value: FieldValue<'_>) -> Option<f64> {
    match value {
        FieldValue::Text(text) => matcher.score_prepared(query, text),
        FieldValue::List(items) => best_of(
            items
                .iter()
                .map(|item| matcher.score_prepared(query, item)),
        ),
    }
}

/// A field value normalized ahead of time, so repeated queries skip that work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedField {
    Text(Vec<char>),
    List(Vec<Vec<char>>),
}

impl From<FieldValue<'_>> for NormalizedField {
    fn from(value: FieldValue<'_>) -> Self {
        match value {
            FieldValue::Text(text) => Self::Text(normalized_chars(text)),
            FieldValue::List(items) => {
                Self::List(items.iter().map(|item| normalized_chars(item)).collect())
            }
        }
    }
}

/// Pull and normalize every field of `record`, one slot per entry in `specs`.
pub fn normalize_fields(record: &Record, specs: &[FieldSpec]) -> Vec<Option<NormalizedField>> {
    specs
        .iter()
        .map(|spec| (spec.extract)(record).map(NormalizedField::from))
        .collect()
}

fn normalized_field_score(
    matcher: &FuzzyMatcher,
    query: &PreparedQuery,
    field: &NormalizedField,
) -> Option<f64> {
    match field {
        NormalizedField::Text(chars) => matcher.score_normalized(query, chars),
        NormalizedField::List(items) => best_of(
            items
                .iter()
                .map(|item| matcher.score_normalized(query, item)),
        ),
    }
}

/// [`score_record_prepared`] over fields from [`normalize_fields`] with the same `specs`.
pub fn score_normalized_fields(
    matcher: &FuzzyMatcher,
    query: &PreparedQuery,
    fields: &[Option<NormalizedField>],
    specs: &[FieldSpec],
) -> Option<f64> {
    debug_assert_eq!(fields.len(), specs.len());
    weighted_sum(specs.iter().zip(fields).map(|(spec, field)| {
        let score = field
            .as_ref()
            .and_then(|field| normalized_field_score(matcher, query, field));
        (score, spec.weight)
    }))
}

/// Weighted distance of `record` from `query`, or `None` if no field matched.
pub fn score_record(
    matcher: &FuzzyMatcher,
    query: &str,
    record: &Record,
    specs: &[FieldSpec],
) -> Option<f64> {
    let prepared = PreparedQuery::new(query)?;
    score_record_prepared(matcher, &prepared, record, specs)
}

/// [`score_record`] with the query already normalized.
pub fn score_record_prepared(
    matcher: &FuzzyMatcher,
    query: &PreparedQuery,
    record: &Record,
    specs: &[FieldSpec],
) -> Option<f64> {
    weighted_sum(specs.iter().map(|spec| {
        let score = (spec.extract)(record).and_then(|value| field_score(matcher, query, value));
        (score, spec.weight)
    }))
}

/// One matched field in a score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: &'static str,
    /// Raw fuzzy score before weighting.
    pub score: f64,
    pub weight: f64,
}

impl FieldMatch {
    pub fn contribution(&self) -> f64 {
        self.score * self.weight
    }
}

/// A record score together with the fields that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordScore {
    pub total: f64,
    pub fields: Vec<FieldMatch>,
}

/// Like [`score_record`], but keeps the per-field breakdown.
pub fn explain_record(
    matcher: &FuzzyMatcher,
    query: &str,
    record: &Record,
    specs: &[FieldSpec],
) -> Option<RecordScore> {
    let prepared = PreparedQuery::new(query)?;
    let fields: Vec<FieldMatch> = specs
        .iter()
        .filter_map(|spec| {
            let value = (spec.extract)(record)?;
            let score = field_score(matcher, &prepared, value)?;
            Some(FieldMatch {
                field: spec.name,
                score,
                weight: spec.weight,
            })
        })
        .collect();

    let total = weighted_sum(fields.iter().map(|f| (Some(f.score), f.weight)))?;
    Some(RecordScore { total, fields })
}
