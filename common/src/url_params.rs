//! Typed search state carried in the browser URL.

use std::{collections::BTreeMap, convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_const::DEFAULT_PAGE_SIZE;
use crate::url_codec::{decode_url_params, encode_url_params, parse_query_string};

/// Free-text query, dataset selector and filter values.
///
/// Filter values are always plain strings at this level; multi-valued
/// filters are packed into one delimited string before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UrlQueryParams {
    pub query: String,
    pub dataset: String,
    pub filters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlPaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl Default for UrlPaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UrlPaginationParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Index of the first result on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit)
    }
}

/// The unit round-tripped to and from the URL query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TypedUrlParams {
    pub query: UrlQueryParams,
    pub pagination: UrlPaginationParams,
}

impl TypedUrlParams {
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: UrlQueryParams {
                query: query.into(),
                ..Default::default()
            },
            pagination: UrlPaginationParams::default(),
        }
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.query.dataset = dataset.into();
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.pagination.limit = limit;
        self
    }
}

// Display writes the canonical query string (no leading `?`).
impl Display for TypedUrlParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode_url_params(self))
    }
}

// Parsing never fails: malformed input degrades to defaults.
impl FromStr for TypedUrlParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode_url_params(&parse_query_string(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let params = TypedUrlParams::from_query("rate case")
            .with_dataset("ny_puc")
            .with_filter("match_source", "usa-ny")
            .with_page(3);
        let text = params.to_string();
        let parsed: TypedUrlParams = text.parse().unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(UrlPaginationParams::new(2, 40).offset(), 80);
        assert_eq!(UrlPaginationParams::new(u64::MAX, 40).offset(), u64::MAX);
    }
}
