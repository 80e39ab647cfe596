//! Edge cases: blank input, hopeless input, odd corpora, odd limits.

use super::common::{assert_ranked, labels, many_wireless, storefront};
use trawl::testing::{make_article, make_item};
use trawl::{CorpusIndex, FuzzyMatcher, MatcherConfig, SearchConfig, Searcher};

#[test]
fn test_blank_queries_return_nothing() {
    let searcher = storefront();
    for query in ["", " ", "\t\n", "     "] {
        assert!(searcher.search(query, 10).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_nonsense_returns_nothing() {
    assert!(storefront().search("xyz123nonsense", 10).is_empty());
    assert!(storefront().search("qqqqqqqqqqqqqqqqqqqqqqqqqqqqqq", 10).is_empty());
}

#[test]
fn test_query_is_case_and_whitespace_insensitive() {
    let plain = storefront().search("wireless mouse", 10);
    let shouty = storefront().search("  WIRELESS    Mouse ", 10);
    assert_eq!(plain, shouty);
    assert_eq!(plain[0].score, 0.0);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_are_ignored() {
    let searcher = Searcher::new().with_corpus(
        CorpusIndex::catalog(vec![
            make_item("1", "Crème Brûlée Torch", "kitchen"),
            make_item("2", "Café Grinder", "kitchen"),
        ])
        .unwrap(),
    );
    assert_eq!(labels(&searcher.search("creme brulee", 10)), vec!["cat1"]);
    assert_eq!(labels(&searcher.search("CAFÉ", 10)), vec!["cat2"]);
    assert_eq!(searcher.search("cafe", 10)[0].score, 0.0);
}

#[test]
fn test_empty_corpora() {
    let searcher = Searcher::storefront(Vec::new(), Vec::new(), SearchConfig::default()).unwrap();
    assert_eq!(searcher.corpora().len(), 2);
    assert!(searcher.search("mouse", 10).is_empty());

    assert!(Searcher::new().search("mouse", 10).is_empty());
}

#[test]
fn test_single_character_fields_never_match() {
    let searcher = Searcher::new()
        .with_corpus(CorpusIndex::catalog(vec![make_item("1", "X", "a")]).unwrap());
    assert!(searcher.search("x", 10).is_empty());
    assert!(searcher.search("a", 10).is_empty());
}

#[test]
fn test_limit_zero_and_huge() {
    let searcher = many_wireless(25);
    assert!(searcher.search("wireless gadget", 0).is_empty());
    assert_eq!(searcher.search("wireless gadget", usize::MAX).len(), 25);
    assert_eq!(searcher.search_default("wireless gadget").len(), 10);
}

#[test]
fn test_query_longer_than_every_field() {
    let query = "wireless mouse with a very long description that no field can hold";
    let results = storefront().search(query, 10);
    assert_ranked(&results);
    assert!(results.iter().all(|r| r.score <= 0.4));
}

#[test]
fn test_non_latin_text_does_not_panic() {
    let searcher = Searcher::new().with_corpus(
        CorpusIndex::articles(vec![
            make_article("t", "తెలుగు వంటకాలు", &["వంట"]),
            make_article("j", "日本語のレシピ", &["料理"]),
        ])
        .unwrap(),
    );
    assert_eq!(labels(&searcher.search("తెలుగు", 10)), vec!["t"]);
    assert_eq!(labels(&searcher.search("日本語", 10)), vec!["j"]);
    assert_ranked(&searcher.search("🦀🦀", 10));
}

#[test]
fn test_zero_threshold_needs_exact_substring() {
    let strict = SearchConfig {
        matcher: MatcherConfig {
            threshold: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let searcher = Searcher::storefront(
        trawl::testing::sample_catalog(),
        trawl::testing::sample_articles(),
        strict,
    )
    .unwrap();

    assert!(searcher.search("wireles mouse", 10).is_empty());
    // Exact, but not at the start of the title
    assert!(searcher.search("mouse", 10).is_empty());
    assert_eq!(labels(&searcher.search("wireless", 10)), vec!["cat1", "cat2"]);
}

#[test]
fn test_zero_threshold_applies_to_hand_registered_corpora() {
    let strict = SearchConfig {
        matcher: MatcherConfig {
            threshold: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let searcher = Searcher::with_config(strict)
        .unwrap()
        .with_corpus(trawl::testing::catalog_index().unwrap())
        .with_corpus(trawl::testing::article_index().unwrap());

    assert!(searcher.search("wireles mouse", 10).is_empty());
    assert_eq!(labels(&searcher.search("wireless", 10)), vec!["cat1", "cat2"]);
}

#[test]
fn test_invalid_matcher_config_rejected() {
    let config = MatcherConfig {
        location_distance: 0,
        ..Default::default()
    };
    assert!(FuzzyMatcher::new(config).is_err());
    let config = SearchConfig {
        matcher: config,
        ..Default::default()
    };
    assert!(Searcher::storefront(Vec::new(), Vec::new(), config).is_err());
}
