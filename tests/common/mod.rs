// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use trawl::scoring::ranking::is_ranked;
use trawl::testing::{make_article, make_item, sample_articles, sample_catalog};
use trawl::{CorpusKind, MatchResult, Record, SearchConfig, Searcher};

// ============================================================================
// FIXTURES
// ============================================================================

/// Catalog in slot 0, articles in slot 1, default config.
pub fn storefront() -> Searcher {
    Searcher::storefront(sample_catalog(), sample_articles(), SearchConfig::default())
        .expect("sample storefront builds")
}

/// Articles registered *before* the catalog.
pub fn blog_first() -> Searcher {
    Searcher::new()
        .with_corpus(trawl::testing::article_index().expect("articles build"))
        .with_corpus(trawl::testing::catalog_index().expect("catalog builds"))
}

/// `n` catalog items whose titles all contain "wireless".
pub fn many_wireless(n: usize) -> Searcher {
    let items: Vec<_> = (0..n)
        .map(|i| make_item(&format!("w{}", i), &format!("Wireless Gadget {}", i), "electronics"))
        .collect();
    Searcher::storefront(items, Vec::new(), SearchConfig::default()).expect("catalog builds")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// `(corpus, id)` of each hit, in order. Catalog ids get a `cat` prefix so
/// expectations read unambiguously.
pub fn labels(results: &[MatchResult]) -> Vec<String> {
    results
        .iter()
        .map(|hit| match hit.corpus {
            CorpusKind::Catalog => format!("cat{}", hit.id()),
            CorpusKind::Article => hit.id().to_string(),
        })
        .collect()
}

/// Scores never decrease along the list, and ties follow slot then position.
pub fn assert_ranked(results: &[MatchResult]) {
    assert!(
        is_ranked(results),
        "results out of order: {:?}",
        results
            .iter()
            .map(|r| (r.score, r.slot, r.position))
            .collect::<Vec<_>>()
    );
}

/// No `(corpus, id)` appears twice.
pub fn assert_unique(results: &[MatchResult]) {
    let mut seen = HashSet::new();
    for hit in results {
        assert!(
            seen.insert((hit.corpus, hit.id().to_string())),
            "duplicate hit {} {}",
            hit.corpus,
            hit.id()
        );
    }
}

/// Hand-built hit for merge tests that need exact scores.
pub fn hit(corpus: CorpusKind, id: &str, slot: usize, position: usize, score: f64) -> MatchResult {
    let record = match corpus {
        CorpusKind::Catalog => Record::from(make_item(id, id, "misc")),
        CorpusKind::Article => Record::from(make_article(id, id, &[])),
    };
    MatchResult {
        record: Arc::new(record),
        score,
        corpus,
        slot,
        position,
    }
}
