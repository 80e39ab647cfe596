//! Ranking across fields and corpora.
//!
//! Lower score wins everywhere. When two hits tie exactly, the corpus that was
//! registered first wins, then the record that was inserted first.

use super::common::{assert_ranked, blog_first, hit, labels, storefront};
use trawl::testing::{make_article, make_item_with};
use trawl::search::ResultMerger;
use trawl::{catalog_fields, CorpusIndex, CorpusKind, FieldSpec, Searcher};

#[test]
fn test_typo_prefers_closest_title() {
    let results = storefront().search("wireles mouse", 10);
    assert_ranked(&results);

    assert_eq!(labels(&results), vec!["cat1", "p1", "cat2"]);
    assert_eq!(results[0].title(), "Wireless Mouse");
    assert!(results[0].score < results[2].score);
}

#[test]
fn test_lower_score_beats_earlier_corpus() {
    // The article only matches through its content and tags, but it still
    // scores better than every catalog hit.
    let results = storefront().search("hose", 10);
    assert_ranked(&results);
    assert_eq!(results[0].corpus, CorpusKind::Article);
    assert_eq!(results[0].id(), "p2");
    assert_eq!(results[0].slot, 1);
    assert!(results.iter().skip(1).all(|r| r.corpus == CorpusKind::Catalog));
}

#[test]
fn test_article_at_half_the_score_ranks_first() {
    let mut merger = ResultMerger::new();
    merger.merge(hit(CorpusKind::Catalog, "lamp", 0, 0, 0.1));
    merger.merge(hit(CorpusKind::Article, "lamp-guide", 1, 0, 0.05));

    let results = merger.into_sorted(10);
    assert_eq!(results[0].id(), "lamp-guide");
    assert_eq!(results[1].id(), "lamp");
}

#[test]
fn test_exact_ties_keep_insertion_order() {
    let results = storefront().search("wireless", 10);
    assert_eq!(labels(&results), vec!["cat1", "cat2", "p1"]);
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn test_list_fields_match_any_element() {
    let results = storefront().search("bluetooth", 10);
    assert_eq!(labels(&results), vec!["cat1", "cat2"]);

    let results = storefront().search("buying guide", 10);
    assert_eq!(labels(&results), vec!["p1"]);
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_registration_order_breaks_cross_corpus_ties() {
    let searcher = Searcher::new()
        .with_corpus(CorpusIndex::catalog(vec![make_item_with("1", "Desk Lamp", "", "home", &[])]).unwrap())
        .with_corpus(
            CorpusIndex::articles(vec![make_article("a", "Desk Lamp", &[])]).unwrap(),
        );
    let results = searcher.search("desk lamp", 10);
    assert_eq!(labels(&results), vec!["cat1", "a"]);

    // Same corpora, reversed registration
    let searcher = Searcher::new()
        .with_corpus(
            CorpusIndex::articles(vec![make_article("a", "Desk Lamp", &[])]).unwrap(),
        )
        .with_corpus(CorpusIndex::catalog(vec![make_item_with("1", "Desk Lamp", "", "home", &[])]).unwrap());
    let results = searcher.search("desk lamp", 10);
    assert_eq!(labels(&results), vec!["a", "cat1"]);
}

#[test]
fn test_blog_first_registration_changes_only_ties() {
    let catalog_first = storefront().search("hose", 10);
    let articles_first = blog_first().search("hose", 10);

    // No exact ties for this query, so the order is the same
    assert_eq!(labels(&catalog_first), labels(&articles_first));
    assert_ranked(&articles_first);
}

/// Raising the weight of a field never flips two records that differ only by
/// a strictly better match on that field.
#[test]
fn test_upweighting_a_field_preserves_order() {
    let exact = make_item_with(
        "exact",
        "Office Bundle",
        "Bluetooth keyboard and mouse",
        "office",
        &["bluetooth keyboard"],
    );
    let typo = make_item_with(
        "typo",
        "Office Bundle",
        "Blutooth keyboard and mouse",
        "office",
        &["bluetooth keyboard"],
    );

    let order_with = |fields: Vec<FieldSpec>| {
        let index = CorpusIndex::new(
            CorpusKind::Catalog,
            vec![typo.clone(), exact.clone()],
            fields,
        )
        .unwrap();
        index
            .search("bluetooth keyboard")
            .iter()
            .map(|hit| hit.record.id().to_string())
            .collect::<Vec<_>>()
    };

    let baseline = order_with(catalog_fields());
    assert_eq!(baseline, vec!["exact", "typo"]);

    for weight in [0.3, 0.5, 0.9, 1.0] {
        let boosted: Vec<FieldSpec> = catalog_fields()
            .into_iter()
            .map(|spec| {
                if spec.name == "description" {
                    spec.with_weight(weight)
                } else {
                    spec
                }
            })
            .collect();
        assert_eq!(order_with(boosted), baseline, "weight {}", weight);
    }
}
