//! [`UrlHistory`] backed by the app router.

use common::url_history::UrlHistory;
use dioxus::{logger::tracing, router::Navigator};

use crate::data_definitions::url_param::SearchUrlQuery;
use crate::routes::Route;

/// Writes search-page URLs through the router so back/forward navigation
/// re-renders the page with the restored query.
pub struct RouterUrlHistory {
    navigator: Navigator,
    current: String,
}

impl RouterUrlHistory {
    pub fn new(navigator: Navigator, current: impl Into<String>) -> Self {
        Self { navigator, current: current.into() }
    }
}

impl UrlHistory for RouterUrlHistory {
    fn current_query(&self) -> String {
        self.current.clone()
    }

    fn replace_query(&mut self, query: &str) {
        match self.navigator.replace(Route::SearchPage { params: SearchUrlQuery::from(query) }) {
            None => self.current = query.to_string(),
            Some(failure) => tracing::warn!(?failure, query, "replacing search url failed"),
        }
    }

    fn push_query(&mut self, query: &str) {
        match self.navigator.push(Route::SearchPage { params: SearchUrlQuery::from(query) }) {
            None => self.current = query.to_string(),
            Some(failure) => tracing::warn!(?failure, query, "pushing search url failed"),
        }
    }
}
