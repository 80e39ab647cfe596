// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the fuzzy matcher.
//!
//! Verifies that scores stay within the threshold, that a query always fits
//! itself perfectly, and that the substring distance never exceeds the query
//! length. The matcher is the heart of typo tolerance. If it lies about
//! distances, users get garbage results.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trawl::fuzzy::substring_distance;
use trawl::{normalize, FuzzyMatcher, MatcherConfig};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    candidate: String,
    /// Threshold in hundredths, wrapped into [0, 100]
    threshold: u8,
    location_distance: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths by characters (byte slicing could split a code point)
    let query: String = input.query.chars().take(40).collect();
    let candidate: String = input.candidate.chars().take(120).collect();

    let config = MatcherConfig {
        threshold: f64::from(input.threshold % 101) / 100.0,
        location_distance: usize::from(input.location_distance).max(1),
        ..Default::default()
    };
    let matcher = match FuzzyMatcher::new(config) {
        Ok(matcher) => matcher,
        Err(_) => return,
    };

    // INVARIANT 1: scores are within [0, threshold]
    if let Some(score) = matcher.score(&query, &candidate) {
        assert!(
            score >= 0.0 && score <= config.threshold,
            "score {} outside [0, {}] for query={:?} candidate={:?}",
            score, config.threshold, query, candidate
        );
    }

    let normalized = normalize(&query);
    if normalized.is_empty() {
        // INVARIANT 2: blank queries never match
        assert_eq!(matcher.score(&query, &candidate), None);
        return;
    }

    // INVARIANT 3: a query always matches itself with score 0
    if normalized.chars().count() >= config.min_match_len {
        assert_eq!(
            matcher.score(&query, &query),
            Some(0.0),
            "query={:?} should match itself",
            query
        );
    }

    // INVARIANT 4: substring distance is bounded by the query length
    let q: Vec<char> = normalized.chars().collect();
    let c: Vec<char> = normalize(&candidate).chars().collect();
    assert!(substring_distance(&q, &c) <= q.len());
});
