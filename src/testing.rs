// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders so tests don't each grow their own.

#![doc(hidden)]

use crate::error::Result;
use crate::index::CorpusIndex;
use crate::types::{Article, CatalogItem};

/// Create a catalog item with just the fields most tests care about.
///
/// Description and features are empty so only title and category can match.
pub fn make_item(id: &str, title: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        price: 19.99,
        rating: 4.5,
        ..Default::default()
    }
}

/// Create a fully searchable catalog item.
pub fn make_item_with(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    features: &[&str],
) -> CatalogItem {
    CatalogItem {
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        ..make_item(id, title, category)
    }
}

/// Create an article with empty excerpt and content.
pub fn make_article(id: &str, title: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: "2025-01-01".to_string(),
        ..Default::default()
    }
}

/// Create a fully searchable article.
pub fn make_article_with(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    tags: &[&str],
) -> Article {
    Article {
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        ..make_article(id, title, tags)
    }
}

/// A small storefront catalog used by several test suites.
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        make_item_with(
            "1",
            "Wireless Mouse",
            "Ergonomic mouse with silent clicks",
            "electronics",
            &["bluetooth", "rechargeable"],
        ),
        make_item_with(
            "2",
            "Wireless Keyboard",
            "Low profile keyboard for desk setups",
            "electronics",
            &["bluetooth", "backlit"],
        ),
        make_item_with(
            "3",
            "Garden Hose",
            "Fifty foot expandable hose",
            "home",
            &["kink free"],
        ),
        make_item_with(
            "4",
            "Desk Lamp",
            "Adjustable arm with warm light",
            "home",
            &["dimmable", "usb charging"],
        ),
    ]
}

/// A small set of blog posts to go with [`sample_catalog`].
pub fn sample_articles() -> Vec<Article> {
    vec![
        make_article_with(
            "p1",
            "Choosing a Wireless Mouse",
            "What to look for before you buy",
            "Sensor quality matters more than button count.",
            &["peripherals", "buying guide"],
        ),
        make_article_with(
            "p2",
            "Spring Garden Checklist",
            "Get the yard ready",
            "Check hoses for leaks and sharpen your tools.",
            &["garden", "home"],
        ),
    ]
}

/// Index over [`sample_catalog`].
pub fn catalog_index() -> Result<CorpusIndex> {
    CorpusIndex::catalog(sample_catalog())
}

/// Index over [`sample_articles`].
pub fn article_index() -> Result<CorpusIndex> {
    CorpusIndex::articles(sample_articles())
}
