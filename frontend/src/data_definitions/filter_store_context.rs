//! Filter store shared by the search page components.
//!
//! The store itself lives in a signal; this context adds the URL plumbing:
//! filter tweaks replace the current history entry (text inputs after a
//! short debounce), while submissions and page changes push a new one.

use common::config::SearchConfig;
use common::filter_fields::{FilterFieldDefinition, FilterValue, FilterValues};
use common::filter_store::FilterStore;
use common::url_history::UrlHistory;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::router_history::RouterUrlHistory;

const URL_SYNC_DEBOUNCE_MS: u32 = 400;

#[derive(Clone, Copy)]
pub struct FilterStoreContext {
    pub store: Signal<FilterStore>,
    current_url: Signal<String>,
    pending_sync: Signal<u64>,
    navigator: Navigator,
}

pub fn use_filter_store_provider(config: SearchConfig, fields: Vec<FilterFieldDefinition>) -> FilterStoreContext {
    let store = use_signal(move || {
        let mut store = FilterStore::new(config.codec());
        // a failure here is recorded in the store's config error and rendered by the page
        let _ = store.initialize(fields, FilterValues::new());
        store
    });
    let current_url = use_signal(String::new);
    let pending_sync = use_signal(|| 0_u64);
    let navigator = navigator();
    use_context_provider(|| FilterStoreContext {
        store,
        current_url,
        pending_sync,
        navigator,
    })
}

pub fn use_filter_store() -> FilterStoreContext {
    use_context::<FilterStoreContext>()
}

impl FilterStoreContext {
    fn history(&self) -> RouterUrlHistory {
        RouterUrlHistory::new(self.navigator, self.current_url.peek().clone())
    }

    fn remember(mut self, history: &RouterUrlHistory) {
        self.current_url.set(history.current_query());
    }

    /// The router handed the page a (possibly new) query string: load it
    /// unless it is the one the store just wrote.
    pub fn load_from_url(mut self, query: &str) {
        self.current_url.set(query.to_string());
        if self.store.peek().encoded_query() == query {
            return;
        }
        let history = self.history();
        self.store.write().sync_from_url(&history);
    }

    pub fn sync_url_now(mut self) {
        *self.pending_sync.write() += 1;
        let mut history = self.history();
        if self.store.peek().sync_to_url(&mut history) {
            self.remember(&history);
        }
    }

    pub fn sync_url_debounced(mut self) {
        let generation = {
            let mut pending = self.pending_sync.write();
            *pending += 1;
            *pending
        };
        spawn(async move {
            TimeoutFuture::new(URL_SYNC_DEBOUNCE_MS).await;
            if *self.pending_sync.peek() == generation {
                self.sync_url_now();
            }
        });
    }

    pub fn submit_search(mut self) {
        *self.pending_sync.write() += 1;
        let mut history = self.history();
        let pushed = self.store.write().submit_search(&mut history);
        if pushed {
            self.remember(&history);
        }
    }

    pub fn go_to_page(mut self, page: u64) {
        let mut history = self.history();
        let pushed = self.store.write().navigate_to_page(page, &mut history);
        if pushed {
            self.remember(&history);
        }
    }

    /// Text-like inputs debounce the URL write; clicks write it at once.
    pub fn update_filter(mut self, key: &str, value: FilterValue, debounce: bool) {
        // unknown keys are recorded in the store's config error channel
        if self.store.write().update_filter(key, value).is_err() {
            return;
        }
        if debounce {
            self.sync_url_debounced();
        } else {
            self.sync_url_now();
        }
    }

    pub fn reset_filters(mut self) {
        self.store.write().reset_filters();
        self.sync_url_now();
    }

    pub fn set_dataset(mut self, dataset: String) {
        self.store.write().set_dataset(dataset);
        self.submit_search();
    }
}
