// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpora and config from disk.
//!
//! Catalog and article files are plain JSON arrays in the shape the
//! storefront already serves (camelCase keys). A missing file argument means
//! an empty corpus, not an error: searching only the blog is a valid thing to
//! want.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use trawl::{Article, CatalogItem, SearchConfig};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}

pub fn load_catalog(path: Option<&Path>) -> Result<Vec<CatalogItem>> {
    match path {
        Some(path) => read_json(path, "catalog"),
        None => Ok(Vec::new()),
    }
}

pub fn load_articles(path: Option<&Path>) -> Result<Vec<Article>> {
    match path {
        Some(path) => read_json(path, "articles"),
        None => Ok(Vec::new()),
    }
}

/// Defaults when no file is given; otherwise parse and validate.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    SearchConfig::from_json(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
