//! Per-field validation of filter values.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::filter_fields::{FilterFieldDefinition, FilterInputKind, FilterValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub key: String,
    pub message: String,
}

/// Pass/fail plus the messages that explain the failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub messages: Vec<ValidationMessage>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            messages: Vec::new(),
        }
    }

    pub fn failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            messages: vec![ValidationMessage {
                key: key.into(),
                message: message.into(),
            }],
        }
    }

    /// Folds another result in; the aggregate is valid iff both are.
    pub fn merge(&mut self, other: ValidationResult) {
        self.valid &= other.valid;
        self.messages.extend(other.messages);
    }

    pub fn message_for(&self, key: &str) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.message.as_str())
    }
}

fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(value).is_ok()
}

/// Checks `value` against the rules of its field. Empty values always pass.
pub fn validate_field(definition: &FilterFieldDefinition, value: &FilterValue) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::ok();
    }
    let key = definition.key.as_str();
    match (&definition.kind, value) {
        (FilterInputKind::MultiSelect { options }, FilterValue::Many(values)) => {
            let mut seen = BTreeSet::new();
            for v in values {
                if !options.iter().any(|o| &o.value == v) {
                    return ValidationResult::failed(key, format!("{v:?} is not an option of {}", definition.display_name));
                }
                if !seen.insert(v.as_str()) {
                    return ValidationResult::failed(key, format!("{v:?} is selected more than once"));
                }
            }
            ValidationResult::ok()
        }
        (FilterInputKind::MultiSelect { .. }, FilterValue::Single(_)) => {
            ValidationResult::failed(key, "wrong shape: expected a list of values")
        }
        (_, FilterValue::Many(_)) => ValidationResult::failed(key, "wrong shape: expected a single value"),
        (FilterInputKind::Select { options }, FilterValue::Single(v)) => {
            if options.iter().any(|o| &o.value == v) {
                ValidationResult::ok()
            } else {
                ValidationResult::failed(key, format!("{v:?} is not an option of {}", definition.display_name))
            }
        }
        (FilterInputKind::Date, FilterValue::Single(v)) => {
            if is_iso_date(v) {
                ValidationResult::ok()
            } else {
                ValidationResult::failed(key, format!("{v:?} is not a date (expected YYYY-MM-DD)"))
            }
        }
        (FilterInputKind::Text { .. } | FilterInputKind::Hidden { .. }, FilterValue::Single(_)) => ValidationResult::ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_fields::FilterOption;

    fn source_field() -> FilterFieldDefinition {
        FilterFieldDefinition::select("match_source", "Jurisdiction", vec![FilterOption::new("New York", "usa-ny")])
    }

    #[test]
    fn empty_values_pass_for_every_kind() {
        let fields = [
            FilterFieldDefinition::text("t", "T"),
            source_field(),
            FilterFieldDefinition::date("d", "D"),
        ];
        for field in &fields {
            assert!(validate_field(field, &FilterValue::from("")).valid);
        }
        let multi = FilterFieldDefinition::multi_select("m", "M", vec![FilterOption::new("a", "a")]);
        assert!(validate_field(&multi, &FilterValue::Many(vec![])).valid);
    }

    #[test]
    fn dates_must_be_iso() {
        let field = FilterFieldDefinition::date("match_after_date", "Filed After");
        assert!(validate_field(&field, &"2024-02-29".into()).valid);
        assert!(validate_field(&field, &"2024-02-29T10:00:00Z".into()).valid);
        let bad = validate_field(&field, &"2023-02-29".into());
        assert!(!bad.valid);
        assert!(bad.message_for("match_after_date").is_some());
        assert!(!validate_field(&field, &"last week".into()).valid);
    }

    #[test]
    fn select_values_must_be_options() {
        assert!(validate_field(&source_field(), &"usa-ny".into()).valid);
        assert!(!validate_field(&source_field(), &"usa-tx".into()).valid);
        assert!(!validate_field(&source_field(), &vec!["usa-ny"].into()).valid);
    }

    #[test]
    fn multi_select_rejects_unknown_and_duplicates() {
        let field = FilterFieldDefinition::multi_select(
            "m",
            "M",
            vec![FilterOption::new("A", "a"), FilterOption::new("B", "b")],
        );
        assert!(validate_field(&field, &vec!["a", "b"].into()).valid);
        assert!(!validate_field(&field, &vec!["a", "c"].into()).valid);
        assert!(!validate_field(&field, &vec!["a", "a"].into()).valid);
        assert!(!validate_field(&field, &"a".into()).valid);
    }

    #[test]
    fn merge_aggregates() {
        let mut result = ValidationResult::ok();
        result.merge(ValidationResult::ok());
        assert!(result.valid);
        result.merge(ValidationResult::failed("x", "bad"));
        result.merge(ValidationResult::ok());
        assert!(!result.valid);
        assert_eq!(result.messages.len(), 1);
    }
}
