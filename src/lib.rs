// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant search across a product catalog and a blog.
//!
//! Type a few characters, get a ranked list of things you can buy and things
//! you can read, side by side. Each corpus is matched with a forgiving
//! approximate-substring matcher, scored as a weighted sum over its fields,
//! and the two ranked lists are folded into one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  fuzzy/     │────▶│  scoring/    │────▶│  index.rs    │
//! │ (distance,  │     │ (field table,│     │ (CorpusIndex │
//! │  matcher)   │     │  weighting)  │     │  snapshot)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      search/                        │
//! │  merge.rs (Searcher) ──▶ dedup.rs ──▶ session.rs    │
//! │  fan-out, tag, rank      one per id   query + list  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module    | Role                                          |
//! |-----------|-----------------------------------------------|
//! | `fuzzy`   | Edit distance and the score for one string    |
//! | `scoring` | Field tables, weighted record scores, ranking |
//! | `index`   | One immutable, searchable corpus              |
//! | `search`  | Cross-corpus merge and the query session      |
//! | `config`  | Matcher and result-cap settings               |
//! | `types`   | Records and hits                              |
//!
//! # Usage
//!
//! ```ignore
//! use trawl::{SearchConfig, SearchSession, Searcher};
//!
//! let searcher = Searcher::storefront(items, posts, SearchConfig::default())?;
//! let mut session = SearchSession::new(searcher);
//!
//! for hit in session.set_query("wireles mouse") {
//!     println!("{} {} {:.3}", hit.corpus, hit.title(), hit.score);
//! }
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
mod utils;

pub use config::{ConfigLoadError, MatcherConfig, SearchConfig};
pub use error::{ConfigError, Result};
pub use fuzzy::{FuzzyMatcher, PreparedQuery};
pub use index::CorpusIndex;
pub use scoring::{
    article_fields, catalog_fields, default_fields, FieldMatch, FieldSpec, RecordScore,
};
pub use search::{QueryTicket, SearchBackend, SearchSession, SessionState, Searcher};
pub use types::{Article, CatalogItem, CorpusKind, FieldValue, MatchResult, Record, ScoredRecord};
pub use utils::normalize;
