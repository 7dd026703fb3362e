//! Conversion between query strings and [`TypedUrlParams`].
//!
//! Decoding is deliberately permissive: the URL is hand-editable, so every
//! malformed piece falls back to its default instead of producing an error.
//! Encoding is canonical: defaults are dropped and filters come out in key
//! order.

use std::collections::BTreeMap;

use tracing::warn;

use crate::search_const::{
    DATASET_PARAM, DEFAULT_PAGE_SIZE, FILTER_PARAM_PREFIX, LIMIT_PARAM, PAGE_PARAM, QUERY_PARAM,
};
use crate::url_params::{TypedUrlParams, UrlPaginationParams, UrlQueryParams};

/// One raw query-string value as a router or a form would hand it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawParamValue {
    Absent,
    Single(String),
    Many(Vec<String>),
}

impl RawParamValue {
    /// First-wins view of the value.
    pub fn first(&self) -> Option<&str> {
        match self {
            RawParamValue::Absent => None,
            RawParamValue::Single(s) => Some(s.as_str()),
            RawParamValue::Many(values) => values.first().map(|s| s.as_str()),
        }
    }

    fn push(&mut self, value: String) {
        *self = match std::mem::replace(self, RawParamValue::Absent) {
            RawParamValue::Absent => RawParamValue::Single(value),
            RawParamValue::Single(prev) => RawParamValue::Many(vec![prev, value]),
            RawParamValue::Many(mut values) => {
                values.push(value);
                RawParamValue::Many(values)
            }
        };
    }
}

impl From<&str> for RawParamValue {
    fn from(value: &str) -> Self {
        RawParamValue::Single(value.to_string())
    }
}

impl From<String> for RawParamValue {
    fn from(value: String) -> Self {
        RawParamValue::Single(value)
    }
}

impl From<Vec<String>> for RawParamValue {
    fn from(values: Vec<String>) -> Self {
        RawParamValue::Many(values)
    }
}

pub type RawUrlParams = BTreeMap<String, RawParamValue>;

/// Splits a raw query string (with or without the leading `?`) into
/// form-decoded keys and values. Repeated keys collect into
/// [`RawParamValue::Many`] in order of appearance.
pub fn parse_query_string(query_string: &str) -> RawUrlParams {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query_string) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!(error = %e, "unreadable query string, using defaults");
            Vec::new()
        }
    };
    let mut params = RawUrlParams::new();
    for (key, value) in pairs {
        params
            .entry(key)
            .or_insert(RawParamValue::Absent)
            .push(value);
    }
    params
}

/// Codec parameterised by the page size treated as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlCodec {
    pub default_limit: u64,
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UrlCodec {
    pub fn new(default_limit: u64) -> Self {
        Self {
            default_limit: default_limit.max(1),
        }
    }

    pub fn decode(&self, raw: &RawUrlParams) -> TypedUrlParams {
        let first = |key: &str| raw.get(key).and_then(RawParamValue::first);

        let mut filters = BTreeMap::new();
        for (key, value) in raw {
            let Some(filter_key) = key.strip_prefix(FILTER_PARAM_PREFIX) else {
                continue;
            };
            if filter_key.is_empty() {
                continue;
            }
            if let Some(value) = value.first() {
                filters.insert(filter_key.to_string(), value.to_string());
            }
        }

        let page = first(PAGE_PARAM)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let limit = first(LIMIT_PARAM)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(self.default_limit);

        TypedUrlParams {
            query: UrlQueryParams {
                query: first(QUERY_PARAM).unwrap_or_default().to_string(),
                dataset: first(DATASET_PARAM).unwrap_or_default().to_string(),
                filters,
            },
            pagination: UrlPaginationParams { page, limit },
        }
    }

    pub fn decode_str(&self, query_string: &str) -> TypedUrlParams {
        self.decode(&parse_query_string(query_string))
    }

    /// Canonical query string without the leading `?`; empty when every
    /// field is at its default.
    pub fn encode(&self, params: &TypedUrlParams) -> String {
        let mut parts = Vec::new();
        if !params.query.query.is_empty() {
            parts.push(format!(
                "{QUERY_PARAM}={}",
                urlencoding::encode(&params.query.query)
            ));
        }
        if !params.query.dataset.is_empty() {
            parts.push(format!(
                "{DATASET_PARAM}={}",
                urlencoding::encode(&params.query.dataset)
            ));
        }
        for (key, value) in &params.query.filters {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            parts.push(format!(
                "{FILTER_PARAM_PREFIX}{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        if params.pagination.page > 0 {
            parts.push(format!("{PAGE_PARAM}={}", params.pagination.page));
        }
        if params.pagination.limit != self.default_limit {
            parts.push(format!("{LIMIT_PARAM}={}", params.pagination.limit));
        }
        parts.join("&")
    }
}

pub fn decode_url_params(raw: &RawUrlParams) -> TypedUrlParams {
    UrlCodec::default().decode(raw)
}

pub fn encode_url_params(params: &TypedUrlParams) -> String {
    UrlCodec::default().encode(params)
}
