//! Constants shared by the URL codec, the filter store and the frontend.

/// Page size used when the URL carries no valid `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 40;

/// Query-string key for the free-text query.
pub const QUERY_PARAM: &str = "q";
/// Query-string key for the dataset selector.
pub const DATASET_PARAM: &str = "dataset";
/// Query-string key for the zero-based page index.
pub const PAGE_PARAM: &str = "page";
/// Query-string key for the page size.
pub const LIMIT_PARAM: &str = "limit";
/// Prefix marking a query-string key as a filter value.
pub const FILTER_PARAM_PREFIX: &str = "f:";

/// Separator for multi-select values packed into one URL string.
pub const MULTI_VALUE_DELIMITER: char = ',';
