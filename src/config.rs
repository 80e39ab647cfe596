// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration with defaults tuned for a small storefront.
//!
//! [`MatcherConfig`] controls how forgiving the fuzzy matcher is;
//! [`SearchConfig`] adds the merge-level result cap. Field weights are not
//! here on purpose: they are per-corpus constants (see `scoring::fields`).
//!
//! Both structs deserialize with per-field defaults, so a config file only
//! has to mention what it changes:
//!
//! ```json
//! { "maxResults": 20, "matcher": { "threshold": 0.3 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::scoring::{
    DEFAULT_LOCATION_DISTANCE, DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD, MIN_MATCH_CHAR_LENGTH,
};

/// Fuzzy matcher knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Largest accepted score. 0.0 demands a perfect match, 1.0 accepts nearly anything.
    pub threshold: f64,
    /// Candidates with fewer characters than this never match.
    pub min_match_len: usize,
    /// How many characters into a candidate a match may start before the
    /// position penalty alone reaches 1.0.
    pub location_distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_match_len: MIN_MATCH_CHAR_LENGTH,
            location_distance: DEFAULT_LOCATION_DISTANCE,
        }
    }
}

impl MatcherConfig {
    /// Checks:
    /// - `threshold` is finite and within `[0, 1]`
    /// - `min_match_len` is greater than 0
    /// - `location_distance` is greater than 0
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.min_match_len == 0 {
            return Err(ConfigError::InvalidMinMatchLength);
        }
        if self.location_distance == 0 {
            return Err(ConfigError::InvalidLocationDistance);
        }
        Ok(())
    }
}

/// Engine-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub matcher: MatcherConfig,
    /// Result cap applied by `Searcher::search_default` and sessions.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        if self.max_results == 0 {
            return Err(ConfigError::InvalidMaxResults);
        }
        Ok(())
    }

    /// Parse a JSON config, then validate it.
    pub fn from_json(raw: &str) -> std::result::Result<Self, ConfigLoadError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// Failure to turn a config document into a valid [`SearchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
