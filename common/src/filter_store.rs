//! Runtime owner of the search filter state.
//!
//! The store is a plain state object: it is constructed by the host, passed
//! to whatever needs it, and mutated only through its methods. It also owns
//! the free-text query, dataset and pagination so a snapshot of it is a
//! complete, shareable URL.
//!
//! Validation failures are kept as inline per-field messages. Configuration
//! problems (unknown keys, malformed definitions) are returned as
//! `Err(StoreError)` *and* recorded in [`FilterStore::config_error`] so a host
//! error boundary can pick them up later.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, error, warn};

use crate::filter_fields::{FilterFieldDefinition, FilterValue, FilterValues, check_definitions};
use crate::store_error::StoreError;
use crate::url_codec::UrlCodec;
use crate::url_history::UrlHistory;
use crate::url_params::{TypedUrlParams, UrlPaginationParams, UrlQueryParams};
use crate::validation::{ValidationResult, validate_field};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    codec: UrlCodec,
    fields: Vec<FilterFieldDefinition>,
    positions: HashMap<String, usize>,
    values: FilterValues,
    field_errors: BTreeMap<String, String>,
    query: String,
    dataset: String,
    pagination: UrlPaginationParams,
    config_error: Option<StoreError>,
}

impl FilterStore {
    pub fn new(codec: UrlCodec) -> Self {
        Self {
            codec,
            pagination: UrlPaginationParams::new(0, codec.default_limit),
            ..Default::default()
        }
    }

    /// Installs the recognised field set and seeds its values.
    ///
    /// Either the whole call succeeds, or the store is left exactly as it
    /// was and the error is reported.
    pub fn initialize(
        &mut self,
        definitions: Vec<FilterFieldDefinition>,
        initial_values: FilterValues,
    ) -> Result<(), StoreError> {
        if let Err(problem) = check_definitions(&definitions) {
            return self.report(StoreError::MalformedFieldDefinition {
                key: problem.key,
                reason: problem.reason,
            });
        }
        let positions: HashMap<String, usize> = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key.clone(), i))
            .collect();
        let unknown: Vec<String> = initial_values
            .keys()
            .filter(|k| !positions.contains_key(*k))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return self.report(StoreError::UnknownFields { keys: unknown });
        }

        self.values = definitions
            .iter()
            .map(|d| (d.key.clone(), d.default_value()))
            .collect();
        self.values.extend(initial_values);
        self.fields = definitions;
        self.positions = positions;
        self.field_errors.clear();
        self.config_error = None;
        self.validate(None);
        debug!(fields = self.fields.len(), "filter store initialized");
        Ok(())
    }

    pub fn fields(&self) -> &[FilterFieldDefinition] {
        &self.fields
    }

    pub fn definition(&self, key: &str) -> Option<&FilterFieldDefinition> {
        self.positions.get(key).map(|&i| &self.fields[i])
    }

    pub fn value(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    /// Stores one value and re-validates that field only.
    pub fn update_filter(&mut self, key: &str, value: impl Into<FilterValue>) -> Result<(), StoreError> {
        if !self.positions.contains_key(key) {
            return self.report(StoreError::unknown(key));
        }
        self.values.insert(key.to_string(), value.into());
        self.validate_one(key);
        debug!(key, "filter updated");
        Ok(())
    }

    /// Applies all updates or none of them.
    pub fn bulk_update_filters(&mut self, updates: FilterValues) -> Result<(), StoreError> {
        let unknown: Vec<String> = updates
            .keys()
            .filter(|k| !self.positions.contains_key(*k))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return self.report(StoreError::UnknownFields { keys: unknown });
        }
        let keys: Vec<String> = updates.keys().cloned().collect();
        self.values.extend(updates);
        for key in &keys {
            self.validate_one(key);
        }
        debug!(count = keys.len(), "filters bulk updated");
        Ok(())
    }

    /// Puts every field back to its default value and clears inline errors.
    pub fn reset_filters(&mut self) {
        self.values = self
            .fields
            .iter()
            .map(|d| (d.key.clone(), d.default_value()))
            .collect();
        self.field_errors.clear();
        debug!("filters reset");
    }

    /// Validates one field, or all of them when `key` is `None`, refreshing
    /// the inline error state as a side effect.
    pub fn validate(&mut self, key: Option<&str>) -> ValidationResult {
        match key {
            Some(key) => {
                if !self.positions.contains_key(key) {
                    let err = StoreError::unknown(key);
                    let message = err.to_string();
                    let _ = self.report::<()>(err);
                    return ValidationResult::failed(key, message);
                }
                self.validate_one(key)
            }
            None => {
                let keys: Vec<String> = self.fields.iter().map(|d| d.key.clone()).collect();
                let mut result = ValidationResult::ok();
                for key in &keys {
                    result.merge(self.validate_one(key));
                }
                result
            }
        }
    }

    fn validate_one(&mut self, key: &str) -> ValidationResult {
        let Some(definition) = self.definition(key) else {
            return ValidationResult::ok();
        };
        let default = definition.default_value();
        let value = self.values.get(key).unwrap_or(&default);
        let result = validate_field(definition, value);
        match result.message_for(key) {
            Some(message) => {
                self.field_errors.insert(key.to_string(), message.to_string());
            }
            None => {
                self.field_errors.remove(key);
            }
        }
        result
    }

    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    pub fn validation_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Switching datasets changes the search context: filters and page reset.
    pub fn set_dataset(&mut self, dataset: impl Into<String>) {
        let dataset = dataset.into();
        if dataset == self.dataset {
            return;
        }
        debug!(from = %self.dataset, to = %dataset, "dataset changed");
        self.dataset = dataset;
        self.pagination.page = 0;
        self.reset_filters();
    }

    pub fn pagination(&self) -> UrlPaginationParams {
        self.pagination
    }

    pub fn set_page(&mut self, page: u64) {
        self.pagination.page = page;
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.pagination.limit = if limit == 0 { self.codec.default_limit } else { limit };
    }

    /// Current state as URL params. Visible fields at their default are
    /// left out; hidden fields are always carried when non-empty since no
    /// control exists to set them again.
    pub fn snapshot(&self) -> TypedUrlParams {
        let filters = self
            .fields
            .iter()
            .filter_map(|d| {
                let value = self.values.get(&d.key)?;
                if value.is_empty() || (!d.is_hidden() && *value == d.default_value()) {
                    return None;
                }
                Some((d.key.clone(), value.to_url_string()))
            })
            .collect();
        TypedUrlParams {
            query: UrlQueryParams {
                query: self.query.clone(),
                dataset: self.dataset.clone(),
                filters,
            },
            pagination: self.pagination,
        }
    }

    /// Params for the search service: what the URL says, plus the store's
    /// hidden filter values the URL does not mention.
    pub fn search_params(&self, url_params: TypedUrlParams) -> TypedUrlParams {
        let mut params = url_params;
        for definition in self.fields.iter().filter(|d| d.is_hidden()) {
            let Some(value) = self.values.get(&definition.key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            params
                .query
                .filters
                .entry(definition.key.clone())
                .or_insert_with(|| value.to_url_string());
        }
        params
    }

    pub fn encoded_query(&self) -> String {
        self.codec.encode(&self.snapshot())
    }

    /// Overwrites the whole state from decoded URL params.
    ///
    /// Unknown filter keys are ignored: a hand-edited URL is not a
    /// configuration error.
    pub fn apply_url_params(&mut self, params: &TypedUrlParams) {
        self.query = params.query.query.clone();
        self.dataset = params.query.dataset.clone();
        self.pagination = params.pagination;
        self.reset_filters();
        for (key, raw) in &params.query.filters {
            let Some(definition) = self.definition(key) else {
                warn!(key = %key, "ignoring unknown filter key from url");
                continue;
            };
            let value = definition.value_from_url(raw);
            self.values.insert(key.clone(), value);
        }
        self.validate(None);
    }

    /// Rewrites the current history entry with the store's state.
    /// Returns false when the URL already matched or the history refused
    /// the write.
    pub fn sync_to_url<H: UrlHistory + ?Sized>(&self, history: &mut H) -> bool {
        let encoded = self.encoded_query();
        if encoded == history.current_query() {
            return false;
        }
        debug!(query = %encoded, "replacing url");
        history.replace_query(&encoded);
        url_written(history, &encoded)
    }

    /// Explicit search submission: back to the first page and a new
    /// history entry.
    pub fn submit_search<H: UrlHistory + ?Sized>(&mut self, history: &mut H) -> bool {
        self.pagination.page = 0;
        let encoded = self.encoded_query();
        if encoded == history.current_query() {
            return false;
        }
        debug!(query = %encoded, "pushing url");
        history.push_query(&encoded);
        url_written(history, &encoded)
    }

    /// Moves to another result page as a new history entry.
    pub fn navigate_to_page<H: UrlHistory + ?Sized>(&mut self, page: u64, history: &mut H) -> bool {
        self.pagination.page = page;
        let encoded = self.encoded_query();
        if encoded == history.current_query() {
            return false;
        }
        history.push_query(&encoded);
        url_written(history, &encoded)
    }

    /// Reloads the state from the URL; used on mount and on back/forward.
    pub fn sync_from_url<H: UrlHistory + ?Sized>(&mut self, history: &H) {
        let params = self.codec.decode_str(&history.current_query());
        debug!(?params, "syncing from url");
        self.apply_url_params(&params);
    }

    pub fn config_error(&self) -> Option<&StoreError> {
        self.config_error.as_ref()
    }

    pub fn take_config_error(&mut self) -> Option<StoreError> {
        self.config_error.take()
    }

    fn report<T>(&mut self, err: StoreError) -> Result<T, StoreError> {
        error!(error = %err, "filter store configuration error");
        self.config_error = Some(err.clone());
        Err(err)
    }
}

/// A history may refuse a write (e.g. a blocked navigation); it then keeps
/// its old entry and the next sync tries again.
fn url_written<H: UrlHistory + ?Sized>(history: &H, encoded: &str) -> bool {
    let written = history.current_query() == encoded;
    if !written {
        warn!(query = %encoded, "history did not take the new url");
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_fields::FilterOption;
    use crate::url_history::MemoryUrlHistory;

    fn fields() -> Vec<FilterFieldDefinition> {
        vec![
            FilterFieldDefinition::text("match_author", "Author"),
            FilterFieldDefinition::select(
                "match_source",
                "Jurisdiction",
                vec![FilterOption::new("New York", "usa-ny"), FilterOption::new("Colorado", "usa-co")],
            ),
            FilterFieldDefinition::multi_select(
                "match_file_class",
                "File Class",
                vec![FilterOption::new("Orders", "orders"), FilterOption::new("Reports", "reports")],
            ),
            FilterFieldDefinition::date("match_after_date", "Filed After"),
        ]
    }

    fn store() -> FilterStore {
        let mut store = FilterStore::default();
        store.initialize(fields(), FilterValues::new()).unwrap();
        store
    }

    #[test]
    fn initialize_seeds_defaults_and_initial_values() {
        let mut store = FilterStore::default();
        let initial = FilterValues::from([("match_author".to_string(), FilterValue::from("Con Edison"))]);
        store.initialize(fields(), initial).unwrap();
        assert_eq!(store.value("match_author"), Some(&FilterValue::from("Con Edison")));
        assert_eq!(store.value("match_file_class"), Some(&FilterValue::Many(vec![])));
        assert!(store.config_error().is_none());
    }

    #[test]
    fn initialize_rejects_malformed_definitions_and_keeps_state() {
        let mut store = store();
        store.update_filter("match_author", "NYSEG").unwrap();
        let err = store
            .initialize(vec![FilterFieldDefinition::select("broken", "Broken", vec![])], FilterValues::new())
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedFieldDefinition { ref key, .. } if key == "broken"));
        assert_eq!(store.fields().len(), 4);
        assert_eq!(store.value("match_author"), Some(&FilterValue::from("NYSEG")));
        assert_eq!(store.config_error(), Some(&err));
    }

    #[test]
    fn initialize_rejects_unknown_initial_values() {
        let mut store = FilterStore::default();
        let initial = FilterValues::from([("nope".to_string(), FilterValue::from("x"))]);
        let err = store.initialize(fields(), initial).unwrap_err();
        assert_eq!(err, StoreError::unknown("nope"));
        assert!(store.fields().is_empty());
    }

    #[test]
    fn reinitialize_replaces_fields_and_resets_validation() {
        let mut store = store();
        store.update_filter("match_after_date", "yesterday").unwrap();
        assert!(store.field_error("match_after_date").is_some());
        store
            .initialize(vec![FilterFieldDefinition::text("match_name", "Name")], FilterValues::new())
            .unwrap();
        assert!(store.validation_errors().is_empty());
        assert!(store.definition("match_after_date").is_none());
        assert!(store.update_filter("match_author", "x").is_err());
    }

    #[test]
    fn update_unknown_key_leaves_values_unchanged() {
        let mut store = store();
        store.update_filter("match_author", "NYSEG").unwrap();
        let before = store.values().clone();
        let err = store.update_filter("match_color", "blue").unwrap_err();
        assert_eq!(err, StoreError::UnknownFields { keys: vec!["match_color".to_string()] });
        assert_eq!(store.values(), &before);
        assert_eq!(store.take_config_error(), Some(err));
        assert!(store.config_error().is_none());
    }

    #[test]
    fn update_validates_only_that_field() {
        let mut store = store();
        store.update_filter("match_source", "usa-tx").unwrap();
        assert!(store.field_error("match_source").is_some());
        store.update_filter("match_after_date", "2024-01-01").unwrap();
        assert!(store.field_error("match_source").is_some());
        assert!(store.field_error("match_after_date").is_none());
        store.update_filter("match_source", "usa-ny").unwrap();
        assert!(store.validation_errors().is_empty());
    }

    #[test]
    fn invalid_input_is_kept() {
        let mut store = store();
        store.update_filter("match_after_date", "2024-13-01").unwrap();
        assert_eq!(store.value("match_after_date"), Some(&FilterValue::from("2024-13-01")));
    }

    #[test]
    fn bulk_update_is_atomic() {
        let mut store = store();
        let before = store.values().clone();
        let updates = FilterValues::from([
            ("match_author".to_string(), FilterValue::from("NYSEG")),
            ("bogus".to_string(), FilterValue::from("1")),
            ("match_source".to_string(), FilterValue::from("usa-ny")),
            ("other".to_string(), FilterValue::from("2")),
        ]);
        let err = store.bulk_update_filters(updates).unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownFields { keys: vec!["bogus".to_string(), "other".to_string()] }
        );
        assert_eq!(store.values(), &before);
    }

    #[test]
    fn bulk_update_applies_and_validates() {
        let mut store = store();
        let updates = FilterValues::from([
            ("match_source".to_string(), FilterValue::from("usa-co")),
            ("match_file_class".to_string(), FilterValue::from(vec!["orders", "memos"])),
        ]);
        store.bulk_update_filters(updates).unwrap();
        assert_eq!(store.value("match_source"), Some(&FilterValue::from("usa-co")));
        assert!(store.field_error("match_source").is_none());
        assert!(store.field_error("match_file_class").is_some());
    }

    #[test]
    fn reset_then_validate_is_all_valid() {
        let mut store = store();
        store.update_filter("match_after_date", "soon").unwrap();
        store.update_filter("match_source", "mars").unwrap();
        store.reset_filters();
        assert!(store.validation_errors().is_empty());
        let result = store.validate(None);
        assert!(result.valid);
        assert!(result.messages.is_empty());
        assert_eq!(store.value("match_file_class"), Some(&FilterValue::Many(vec![])));
    }

    #[test]
    fn validate_aggregates_all_fields() {
        let mut store = store();
        store.update_filter("match_after_date", "soon").unwrap();
        store.update_filter("match_source", "mars").unwrap();
        let result = store.validate(None);
        assert!(!result.valid);
        assert_eq!(result.messages.len(), 2);
        assert!(store.validate(Some("match_author")).valid);
        assert!(!store.validate(Some("match_source")).valid);
    }

    #[test]
    fn validate_unknown_key_reports_config_error() {
        let mut store = store();
        let result = store.validate(Some("match_color"));
        assert!(!result.valid);
        assert_eq!(store.config_error(), Some(&StoreError::unknown("match_color")));
    }

    #[test]
    fn dataset_change_resets_filters_and_page() {
        let mut store = store();
        store.set_dataset("ny_puc");
        store.update_filter("match_author", "NYSEG").unwrap();
        store.set_page(3);
        store.set_dataset("ny_puc");
        assert_eq!(store.pagination().page, 3);
        store.set_dataset("co_puc");
        assert_eq!(store.pagination().page, 0);
        assert_eq!(store.value("match_author"), Some(&FilterValue::from("")));
    }

    #[test]
    fn snapshot_packs_multi_values_and_skips_defaults() {
        let mut store = store();
        store.set_query("rate case");
        store.update_filter("match_file_class", vec!["orders", "reports"]).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.query.query, "rate case");
        assert_eq!(snapshot.query.filters.len(), 1);
        assert_eq!(snapshot.query.filters["match_file_class"], "orders,reports");
    }

    #[test]
    fn hidden_defaults_reach_the_url_and_the_search() {
        let mut with_hidden = fields();
        with_hidden.push(FilterFieldDefinition::hidden("match_file_extension", "pdf"));
        let mut store = FilterStore::default();
        store.initialize(with_hidden, FilterValues::new()).unwrap();

        let decoded = UrlCodec::default().decode_str(&store.encoded_query());
        assert_eq!(decoded.query.filters.get("match_file_extension").map(String::as_str), Some("pdf"));

        // a shared link written before the hidden field existed
        let params = store.search_params(UrlCodec::default().decode_str("q=rates&f:match_author=NYSEG"));
        assert_eq!(params.query.filters.get("match_file_extension").map(String::as_str), Some("pdf"));
        assert_eq!(params.query.filters.get("match_author").map(String::as_str), Some("NYSEG"));

        let params = store.search_params(UrlCodec::default().decode_str("f:match_file_extension=docx"));
        assert_eq!(params.query.filters.get("match_file_extension").map(String::as_str), Some("docx"));
    }

    #[test]
    fn sync_to_url_replaces_and_submit_pushes() {
        let mut store = store();
        let mut history = MemoryUrlHistory::default();
        store.set_query("solar");
        assert!(store.sync_to_url(&mut history));
        assert!(!store.sync_to_url(&mut history));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_query(), "q=solar");

        store.set_page(2);
        store.update_filter("match_source", "usa-ny").unwrap();
        assert!(store.submit_search(&mut history));
        assert_eq!(history.len(), 2);
        assert_eq!(store.pagination().page, 0);
        assert_eq!(history.current_query(), "q=solar&f:match_source=usa-ny");
    }

    #[test]
    fn page_navigation_pushes_and_keeps_filters() {
        let mut store = store();
        let mut history = MemoryUrlHistory::new("q=solar");
        store.sync_from_url(&history);
        store.update_filter("match_source", "usa-ny").unwrap();
        store.sync_to_url(&mut history);
        assert!(store.navigate_to_page(1, &mut history));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_query(), "q=solar&f:match_source=usa-ny&page=1");
        assert!(!store.navigate_to_page(1, &mut history));
    }

    #[test]
    fn sync_from_url_lets_the_url_win() {
        let mut store = store();
        store.update_filter("match_author", "NYSEG").unwrap();
        let history = MemoryUrlHistory::new(
            "q=solar&f:match_source=usa-ny&f:match_file_class=orders,reports&f:unknown=1&page=2",
        );
        store.sync_from_url(&history);
        assert_eq!(store.query(), "solar");
        assert_eq!(store.pagination().page, 2);
        assert_eq!(store.value("match_author"), Some(&FilterValue::from("")));
        assert_eq!(store.value("match_source"), Some(&FilterValue::from("usa-ny")));
        assert_eq!(store.value("match_file_class"), Some(&FilterValue::from(vec!["orders", "reports"])));
        assert!(store.config_error().is_none());
    }

    #[test]
    fn sync_from_url_surfaces_bad_values_inline() {
        let mut store = store();
        store.sync_from_url(&MemoryUrlHistory::new("f:match_after_date=tomorrow"));
        assert!(store.field_error("match_after_date").is_some());
        assert_eq!(store.value("match_after_date"), Some(&FilterValue::from("tomorrow")));
    }

    #[test]
    fn back_navigation_restores_previous_filters() {
        let mut store = store();
        let mut history = MemoryUrlHistory::default();
        store.set_query("alpha");
        store.submit_search(&mut history);
        store.set_query("beta");
        store.update_filter("match_source", "usa-co").unwrap();
        store.submit_search(&mut history);

        history.back();
        store.sync_from_url(&history);
        assert_eq!(store.query(), "alpha");
        assert_eq!(store.value("match_source"), Some(&FilterValue::from("")));
    }

    #[test]
    fn zero_limit_falls_back_to_codec_default() {
        let mut store = FilterStore::new(UrlCodec::new(25));
        assert_eq!(store.pagination().limit, 25);
        store.set_limit(10);
        assert_eq!(store.encoded_query(), "limit=10");
        store.set_limit(0);
        assert_eq!(store.encoded_query(), "");
    }
}
