//! Framework-free core of the filing search: URL params, filter
//! configuration, the filter store and search sequencing.

pub mod config;
pub mod filter_fields;
pub mod filter_store;
pub mod kessler_filters;
pub mod search_const;
pub mod search_result;
pub mod search_sequence;
pub mod store_error;
pub mod url_codec;
pub mod url_history;
pub mod url_params;
pub mod validation;
