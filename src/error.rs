// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration errors.
//!
//! Searching itself cannot fail: every query yields a (possibly empty)
//! result list. What can fail is building the thing that searches. A corpus
//! with no searchable fields, a negative weight, an article smuggled into the
//! catalog - all of these are rejected at construction time so that scoring
//! never has to second-guess its inputs.

use crate::types::CorpusKind;

/// Errors raised while constructing matchers, indices and searchers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A corpus was configured without any searchable fields.
    #[error("{kind} corpus has no searchable fields")]
    EmptyFieldSpecs { kind: CorpusKind },

    /// A field weight is non-finite or outside `(0, 1]`.
    #[error("field `{field}` has invalid weight {weight} (must be in (0, 1])")]
    InvalidWeight { field: String, weight: f64 },

    /// The same field name appears twice in one table.
    #[error("field `{field}` is configured more than once")]
    DuplicateField { field: String },

    /// A record of the wrong variant was handed to a corpus.
    #[error("record {position} is {found}, but the corpus holds {expected} records")]
    VariantMismatch {
        expected: CorpusKind,
        found: CorpusKind,
        position: usize,
    },

    /// Match threshold is non-finite or outside `[0, 1]`.
    #[error("threshold {0} must be within [0, 1]")]
    InvalidThreshold(f64),

    /// Minimum candidate length must be at least one character.
    #[error("min_match_len must be greater than 0")]
    InvalidMinMatchLength,

    /// Location distance is the divisor of the position penalty.
    #[error("location_distance must be greater than 0")]
    InvalidLocationDistance,

    /// The configured default result count must allow at least one result.
    #[error("max_results must be greater than 0")]
    InvalidMaxResults,

    /// Rebuild requested for a corpus slot that was never registered.
    #[error("no corpus registered at slot {0}")]
    UnknownSlot(usize),
}

/// Convenience alias for construction results.
pub type Result<T> = std::result::Result<T, ConfigError>;
