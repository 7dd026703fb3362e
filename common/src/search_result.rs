use serde::{Deserialize, Serialize};

use crate::url_params::TypedUrlParams;

/// One page returned by the search service, together with the params that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage<T> {
    pub params: TypedUrlParams,
    pub results: Vec<T>,
}

impl<T> SearchResultPage<T> {
    pub fn new(params: TypedUrlParams, results: Vec<T>) -> Self {
        Self { params, results }
    }

    pub fn page(&self) -> u64 {
        self.params.pagination.page
    }

    pub fn limit(&self) -> u64 {
        self.params.pagination.limit
    }

    /// Guesses whether another page exists from whether this one is full.
    ///
    /// There is no total count to check against, so a final page holding
    /// exactly `limit` results reports one phantom page after it.
    pub fn has_more(&self) -> bool {
        self.results.len() as u64 >= self.limit()
    }

    /// Number of pages known to exist so far, counting the guessed next one.
    pub fn page_count_hint(&self) -> u64 {
        if self.has_more() { self.page() + 2 } else { self.page() + 1 }
    }

    /// One-based position of the result at `index_in_page` across all pages.
    pub fn result_number(&self, index_in_page: usize) -> u64 {
        self.params.pagination.offset() + index_in_page as u64 + 1
    }
}

/// A regulatory filing as rendered in the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilingRecord {
    pub id: String,
    pub title: String,
    pub docket_id: String,
    pub author: String,
    pub source: String,
    pub date: String,
    pub file_class: String,
    pub extension: String,
    pub snippet: String,
}
