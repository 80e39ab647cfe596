//! Search session behavior: the query box and the list under it.

use std::sync::Arc;
use std::thread;

use super::common::{assert_ranked, labels, many_wireless, storefront};
use trawl::testing::make_item;
use trawl::{SearchBackend, SearchConfig, SearchSession, SessionState, Searcher};

#[test]
fn test_typing_refines_results() {
    let mut session = SearchSession::new(storefront());

    for prefix in ["w", "wi", "wir", "wire", "wirel", "wireles", "wireles mouse"] {
        let results = session.set_query(prefix);
        assert!(results.len() <= 10);
        assert_ranked(results);
        assert_eq!(session.state(), SessionState::Idle);
    }
    assert_eq!(labels(session.results()), vec!["cat1", "p1", "cat2"]);
}

#[test]
fn test_results_are_replaced_not_merged() {
    let mut session = SearchSession::new(storefront());
    session.set_query("bluetooth");
    assert_eq!(labels(session.results()), vec!["cat1", "cat2"]);

    session.set_query("buying guide");
    assert_eq!(labels(session.results()), vec!["p1"]);

    session.set_query("xyz123nonsense");
    assert!(session.results().is_empty());
}

#[test]
fn test_clearing_the_box_empties_results() {
    let mut session = SearchSession::new(storefront());
    session.set_query("hose");
    assert!(session.has_results());

    session.set_query("");
    assert!(!session.has_results());
    assert_eq!(session.query(), "");
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_session_cap() {
    let mut session = SearchSession::new(many_wireless(30));
    assert_eq!(session.max_results(), 10);
    assert_eq!(session.set_query("wireless gadget").len(), 10);

    let mut wide = SearchSession::new(many_wireless(30)).with_max_results(25);
    assert_eq!(wide.set_query("wireless gadget").len(), 25);
}

#[test]
fn test_session_cap_comes_from_config() {
    let items: Vec<_> = (0..30)
        .map(|i| make_item(&format!("m{}", i), "Wireless Mouse", "electronics"))
        .collect();
    let config = SearchConfig {
        max_results: 20,
        ..Default::default()
    };
    let searcher = Searcher::storefront(items, Vec::new(), config).unwrap();

    let mut session = SearchSession::new(Arc::new(searcher));
    assert_eq!(session.max_results(), 20);
    assert_eq!(session.set_query("mouse").len(), 20);
    assert_eq!(session.backend().search_default("mouse"), session.results());
}

#[test]
fn test_session_matches_direct_search() {
    let searcher = Arc::new(storefront());
    let mut session = SearchSession::new(Arc::clone(&searcher));
    for query in ["wireless", "hose", "home", "mouse"] {
        let direct = searcher.search(query, 10);
        assert_eq!(session.set_query(query), &direct[..]);
    }
}

#[test]
fn test_out_of_order_completions_keep_latest_query() {
    let searcher = Arc::new(storefront());
    let mut session = SearchSession::new(Arc::clone(&searcher));

    let stale = session.begin("hose").unwrap();
    let latest = session.begin("bluetooth").unwrap();
    assert!(session.is_searching());

    // Both computations run in the background
    let spawn = |query: String| {
        let searcher = Arc::clone(&searcher);
        thread::spawn(move || SearchBackend::search(&searcher, &query, 10))
    };
    let stale_job = spawn(stale.query().to_string());
    let latest_job = spawn(latest.query().to_string());

    // The latest lands first, then the stale one straggles in
    assert!(session.complete(&latest, latest_job.join().unwrap()));
    assert!(!session.complete(&stale, stale_job.join().unwrap()));

    assert_eq!(session.query(), "bluetooth");
    assert_eq!(labels(session.results()), vec!["cat1", "cat2"]);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_stale_completion_does_not_end_searching() {
    let mut session = SearchSession::new(storefront());
    let stale = session.begin("hose").unwrap();
    let latest = session.begin("home").unwrap();

    let stale_results = session.backend().search(stale.query(), 10);
    assert!(!session.complete(&stale, stale_results));
    assert!(session.is_searching());

    let results = session.backend().search(latest.query(), 10);
    assert!(session.complete(&latest, results));
    assert!(!session.is_searching());
    assert_eq!(labels(session.results())[0], "cat4");
}

#[test]
fn test_previous_results_visible_while_searching() {
    let mut session = SearchSession::new(storefront());
    session.set_query("bluetooth");
    let ticket = session.begin("hose").unwrap();

    // Still showing the old list until the new one lands
    assert_eq!(labels(session.results()), vec!["cat1", "cat2"]);

    let results = session.backend().search(ticket.query(), 10);
    session.complete(&ticket, results);
    assert_eq!(labels(session.results())[0], "p2");
}
