// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for merged search.
//!
//! Arbitrary corpora, arbitrary queries. Search must never panic, must return
//! results in ranking order, and must honor the limit.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trawl::scoring::ranking::is_ranked;
use trawl::{Article, CatalogItem, SearchConfig, Searcher};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    items: Vec<(String, String, Vec<String>)>,
    posts: Vec<(String, String, Vec<String>)>,
    query: String,
    limit: u8,
}

fuzz_target!(|input: SearchInput| {
    let items = input.items.into_iter().take(32).enumerate().map(
        |(i, (title, description, features))| CatalogItem {
            id: i.to_string(),
            title,
            description,
            features,
            ..Default::default()
        },
    );
    let posts = input.posts.into_iter().take(32).enumerate().map(
        |(i, (title, content, tags))| Article {
            id: i.to_string(),
            title,
            content,
            tags,
            ..Default::default()
        },
    );

    let searcher = match Searcher::storefront(items, posts, SearchConfig::default()) {
        Ok(searcher) => searcher,
        Err(_) => return,
    };

    let query: String = input.query.chars().take(40).collect();
    let limit = usize::from(input.limit);
    let results = searcher.search(&query, limit);

    assert!(results.len() <= limit);
    assert!(is_ranked(&results));
    for hit in &results {
        assert_eq!(hit.corpus, hit.record.kind());
        assert!(hit.score >= 0.0 && hit.score <= 0.4 + 1e-12);
    }

    // Truncation never changes what comes first
    let full = searcher.search(&query, usize::MAX);
    assert_eq!(&results[..], &full[..results.len()]);
});
