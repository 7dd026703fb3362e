//! Query-string parameter carried by the search route.

use std::fmt::Display;

use common::url_codec::UrlCodec;
use common::url_params::TypedUrlParams;
use serde::{Deserialize, Serialize};

/// Raw query string of the search page, without the leading `?`.
///
/// Kept as text so the filter store decodes it with its own configured
/// codec; the router only moves it around.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchUrlQuery(pub String);

impl SearchUrlQuery {
    pub fn from_params(params: &TypedUrlParams, codec: UrlCodec) -> Self {
        Self(codec.encode(params))
    }

    pub fn params(&self, codec: UrlCodec) -> TypedUrlParams {
        codec.decode_str(&self.0)
    }
}

// the router hands the query spread over as a plain &str
impl From<&str> for SearchUrlQuery {
    fn from(query: &str) -> Self {
        SearchUrlQuery(query.trim_start_matches('?').to_string())
    }
}

impl Display for SearchUrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
