// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records we search and the hits we hand back.
//!
//! Two corpora, two record shapes. Catalog items are things you can buy;
//! articles are things you can read. Rather than a trait object per record,
//! `Record` is a closed sum type: each corpus resolves its field table once
//! at construction and scoring never asks "what kind of record is this?".
//!
//! | Rust Type      | Role                                              |
//! |----------------|---------------------------------------------------|
//! | `CatalogItem`  | Product entry (title, description, features, ...) |
//! | `Article`      | Editorial post (title, excerpt, body, tags, ...)  |
//! | `Record`       | Either of the above                               |
//! | `CorpusKind`   | Tag carried by every hit: catalog or article      |
//! | `FieldValue`   | What a field extractor yields: text or list       |
//! | `ScoredRecord` | One corpus-level hit                              |
//! | `MatchResult`  | One merged, corpus-tagged hit                     |
//!
//! # Invariants
//!
//! - **ScoredRecord**: `position` is the record's index in its corpus snapshot.
//! - **MatchResult**: `(score, slot, position)` is a total order over hits of
//!   one merge; no two hits share `(slot, position)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// RECORDS
// =============================================================================

/// A product in the catalog.
///
/// Only `title`, `description`, `category` and `features` are searched by
/// default; the rest rides along for the presentation layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub affiliate_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// An editorial article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publish timestamp as supplied by the host (ISO-8601).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
}

/// Any searchable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Catalog(CatalogItem),
    Article(Article),
}

impl Record {
    /// Which corpus this record variant belongs to.
    pub fn kind(&self) -> CorpusKind {
        match self {
            Record::Catalog(_) => CorpusKind::Catalog,
            Record::Article(_) => CorpusKind::Article,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Catalog(item) => &item.id,
            Record::Article(article) => &article.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Catalog(item) => &item.title,
            Record::Article(article) => &article.title,
        }
    }

    pub fn as_catalog(&self) -> Option<&CatalogItem> {
        match self {
            Record::Catalog(item) => Some(item),
            Record::Article(_) => None,
        }
    }

    pub fn as_article(&self) -> Option<&Article> {
        match self {
            Record::Article(article) => Some(article),
            Record::Catalog(_) => None,
        }
    }
}

impl From<CatalogItem> for Record {
    fn from(item: CatalogItem) -> Self {
        Record::Catalog(item)
    }
}

impl From<Article> for Record {
    fn from(article: Article) -> Self {
        Record::Article(article)
    }
}

// =============================================================================
// CORPUS TAG
// =============================================================================

/// Source corpus of a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusKind {
    Catalog,
    Article,
}

impl CorpusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CorpusKind::Catalog => "catalog",
            CorpusKind::Article => "article",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FIELD VALUES
// =============================================================================

/// The text a field extractor pulls out of a record.
///
/// List-valued fields (features, tags) are matched element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

// =============================================================================
// HITS
// =============================================================================

/// A record that matched within one corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: Arc<Record>,
    /// Weighted distance, lower is better.
    pub score: f64,
    /// Index of the record in its corpus snapshot (insertion order).
    pub position: usize,
}

/// A merged hit, tagged with the corpus it came from.
///
/// Produced fresh for every query and never mutated afterwards. The
/// presentation layer renders these in order and must not reorder them.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub record: Arc<Record>,
    /// Weighted distance, lower is better.
    pub score: f64,
    pub corpus: CorpusKind,
    /// Registration order of the source corpus (first tie-breaker).
    pub slot: usize,
    /// Insertion order within the source corpus (second tie-breaker).
    pub position: usize,
}

impl MatchResult {
    pub fn title(&self) -> &str {
        self.record.title()
    }

    pub fn id(&self) -> &str {
        self.record.id()
    }
}
