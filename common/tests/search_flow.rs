//! End-to-end flows across the store, the codec and the search guard.

use common::filter_fields::FilterValue;
use common::filter_store::FilterStore;
use common::kessler_filters::{MATCH_AFTER_DATE, MATCH_FILE_CLASS, MATCH_SOURCE, kessler_filing_fields};
use common::search_result::{FilingRecord, SearchResultPage};
use common::search_sequence::{CommitOutcome, LatestSearch};
use common::url_history::{MemoryUrlHistory, UrlHistory};
use common::url_params::TypedUrlParams;
use pretty_assertions::assert_eq;

fn filing(title: &str) -> FilingRecord {
    FilingRecord {
        id: title.to_lowercase(),
        title: title.to_string(),
        ..Default::default()
    }
}

fn mounted(url: &str) -> (FilterStore, MemoryUrlHistory) {
    let history = MemoryUrlHistory::new(url);
    let mut store = FilterStore::default();
    store.initialize(kessler_filing_fields(), Default::default()).unwrap();
    store.sync_from_url(&history);
    (store, history)
}

#[test]
fn page_load_seeds_store_from_url() {
    let (store, _) = mounted("?q=solar&f:match_source=usa-ny&page=2");
    let snapshot = store.snapshot();
    assert_eq!(
        snapshot,
        TypedUrlParams::from_query("solar")
            .with_filter(MATCH_SOURCE, "usa-ny")
            .with_page(2)
    );
    assert!(store.validation_errors().is_empty());
}

#[test]
fn filter_tweaks_replace_and_submission_pushes() {
    let (mut store, mut history) = mounted("q=solar");
    store.update_filter(MATCH_FILE_CLASS, vec!["orders", "testimony"]).unwrap();
    store.sync_to_url(&mut history);
    store.update_filter(MATCH_AFTER_DATE, "2023-06-01").unwrap();
    store.sync_to_url(&mut history);
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.current_query(),
        "q=solar&f:match_after_date=2023-06-01&f:match_file_class=orders%2Ctestimony"
    );

    store.set_query("solar tariff");
    store.submit_search(&mut history);
    assert_eq!(history.len(), 2);

    let (reloaded, _) = mounted(&history.current_query());
    assert_eq!(reloaded.value(MATCH_FILE_CLASS), Some(&FilterValue::from(vec!["orders", "testimony"])));
    assert_eq!(reloaded.query(), "solar tariff");
}

#[test]
fn only_the_latest_search_is_rendered() {
    let (mut store, _) = mounted("");
    let mut results = LatestSearch::<SearchResultPage<FilingRecord>>::new();

    store.set_query("alpha");
    let alpha_params = store.snapshot();
    let alpha = results.begin();

    store.set_query("beta");
    let beta_params = store.snapshot();
    let beta = results.begin();

    let beta_page = SearchResultPage::new(beta_params, vec![filing("Beta")]);
    assert_eq!(results.commit::<String>(beta, Ok(beta_page.clone())), CommitOutcome::Committed);
    // alpha's response shows up late
    let alpha_page = SearchResultPage::new(alpha_params, vec![filing("Alpha")]);
    assert_eq!(results.commit::<String>(alpha, Ok(alpha_page)), CommitOutcome::Stale);

    assert_eq!(results.results(), Some(&beta_page));
}

#[test]
fn failed_search_leaves_results_and_filters_untouched() {
    let (mut store, _) = mounted("q=solar&f:match_source=usa-ny");
    let mut results = LatestSearch::<SearchResultPage<FilingRecord>>::new();
    let first = results.begin();
    let page = SearchResultPage::new(store.snapshot(), vec![filing("Solar order")]);
    results.commit::<String>(first, Ok(page.clone()));

    let before = store.values().clone();
    store.set_page(1);
    let second = results.begin();
    assert_eq!(results.commit(second, Err("502 bad gateway")), CommitOutcome::Failed);
    assert_eq!(results.results(), Some(&page));
    assert_eq!(store.values(), &before);
}

/// History whose navigations can be blocked, like a router that rejects
/// the target.
struct BlockingHistory {
    inner: MemoryUrlHistory,
    blocked: bool,
}

impl UrlHistory for BlockingHistory {
    fn current_query(&self) -> String {
        self.inner.current_query()
    }

    fn replace_query(&mut self, query: &str) {
        if !self.blocked {
            self.inner.replace_query(query);
        }
    }

    fn push_query(&mut self, query: &str) {
        if !self.blocked {
            self.inner.push_query(query);
        }
    }
}

#[test]
fn blocked_navigation_is_not_reported_as_written() {
    let (mut store, inner) = mounted("q=solar");
    let mut history = BlockingHistory { inner, blocked: true };

    store.update_filter(MATCH_SOURCE, "usa-co").unwrap();
    assert!(!store.sync_to_url(&mut history));
    assert!(!store.submit_search(&mut history));
    assert!(!store.navigate_to_page(1, &mut history));
    assert_eq!(history.current_query(), "q=solar");

    history.blocked = false;
    assert!(store.sync_to_url(&mut history));
    assert_eq!(history.current_query(), "q=solar&f:match_source=usa-co&page=1");
}
