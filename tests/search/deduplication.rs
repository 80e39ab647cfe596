//! Each record shows up at most once in a merged result list.

use super::common::{assert_unique, hit, storefront};
use trawl::testing::make_item;
use trawl::search::{RecordKey, ResultMerger};
use trawl::{CorpusIndex, CorpusKind, Searcher};

#[test]
fn test_storefront_results_are_unique() {
    for query in ["wireless", "hose", "home", "mouse", "w"] {
        assert_unique(&storefront().search(query, 50));
    }
}

#[test]
fn test_overlapping_snapshots_collapse_to_best_copy() {
    // Two catalog snapshots that share item "1"
    let first = CorpusIndex::catalog(vec![make_item("1", "Wireless Mouse", "electronics")]).unwrap();
    let second = CorpusIndex::catalog(vec![
        make_item("2", "Wireless Keyboard", "electronics"),
        make_item("1", "Wireless Mouse", "electronics"),
    ])
    .unwrap();
    let searcher = Searcher::new().with_corpus(first).with_corpus(second);

    let results = searcher.search("wireless mouse", 10);
    assert_unique(&results);
    let mouse: Vec<_> = results.iter().filter(|r| r.id() == "1").collect();
    assert_eq!(mouse.len(), 1);
    // Same score in both snapshots, so the earlier slot wins
    assert_eq!(mouse[0].slot, 0);
}

#[test]
fn test_same_id_in_different_corpora_is_not_a_duplicate() {
    let mut merger = ResultMerger::new();
    merger.merge(hit(CorpusKind::Catalog, "42", 0, 0, 0.2));
    merger.merge(hit(CorpusKind::Article, "42", 1, 0, 0.1));
    assert_eq!(merger.len(), 2);
    assert!(merger.contains(&RecordKey {
        corpus: CorpusKind::Article,
        id: "42".to_string(),
    }));
}

#[test]
fn test_better_copy_replaces_worse() {
    let mut merger = ResultMerger::new();
    merger.merge(hit(CorpusKind::Catalog, "7", 0, 3, 0.3));
    merger.merge(hit(CorpusKind::Catalog, "7", 1, 0, 0.05));
    merger.merge(hit(CorpusKind::Catalog, "7", 2, 9, 0.2));

    let results = merger.into_sorted(10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 0.05);
    assert_eq!(results[0].slot, 1);
}
