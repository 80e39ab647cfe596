// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are distances. Zero is a perfect match and bigger is worse, all the
//! way up from the fuzzy matcher, through the per-record weighted sum, to the
//! merged ranking. Every sort in this crate is ascending.

mod core;
pub mod fields;
pub mod ranking;

pub use self::core::*;
pub use fields::{
    article_fields, catalog_fields, default_fields, explain_record, normalize_fields,
    score_normalized_fields, score_record, score_record_prepared, validate_fields, FieldMatch,
    FieldSpec, NormalizedField, RecordScore,
};
