//! Static filter field configuration.
//!
//! Each field is described by a [`FilterFieldDefinition`]; the input kind is
//! a tagged union so every kind carries only what it needs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::search_const::MULTI_VALUE_DELIMITER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterInputKind {
    Text { placeholder: String },
    Select { options: Vec<FilterOption> },
    MultiSelect { options: Vec<FilterOption> },
    Date,
    Hidden { default_value: String },
}

impl FilterInputKind {
    pub fn options(&self) -> &[FilterOption] {
        match self {
            FilterInputKind::Select { options } | FilterInputKind::MultiSelect { options } => options,
            _ => &[],
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, FilterInputKind::MultiSelect { .. })
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, FilterInputKind::Hidden { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFieldDefinition {
    pub key: String,
    pub display_name: String,
    pub kind: FilterInputKind,
}

impl FilterFieldDefinition {
    pub fn text(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FilterInputKind::Text { placeholder: String::new() })
    }

    pub fn select(key: impl Into<String>, display_name: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self::new(key, display_name, FilterInputKind::Select { options })
    }

    pub fn multi_select(key: impl Into<String>, display_name: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self::new(key, display_name, FilterInputKind::MultiSelect { options })
    }

    pub fn date(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(key, display_name, FilterInputKind::Date)
    }

    pub fn hidden(key: impl Into<String>, default_value: impl Into<String>) -> Self {
        let key = key.into();
        let display_name = key.clone();
        Self::new(key, display_name, FilterInputKind::Hidden { default_value: default_value.into() })
    }

    pub fn new(key: impl Into<String>, display_name: impl Into<String>, kind: FilterInputKind) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            kind,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.kind.is_hidden()
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        if let FilterInputKind::Text { placeholder } = &mut self.kind {
            *placeholder = text.into();
        }
        self
    }

    /// Value a field holds after a reset.
    pub fn default_value(&self) -> FilterValue {
        match &self.kind {
            FilterInputKind::MultiSelect { .. } => FilterValue::Many(Vec::new()),
            FilterInputKind::Hidden { default_value } => FilterValue::Single(default_value.clone()),
            _ => FilterValue::Single(String::new()),
        }
    }

    /// Reads a packed URL string into the value shape this field expects.
    pub fn value_from_url(&self, raw: &str) -> FilterValue {
        if self.kind.is_multi() {
            FilterValue::Many(
                raw.split(MULTI_VALUE_DELIMITER)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            FilterValue::Single(raw.to_string())
        }
    }

    /// Structural checks on one definition; returns the reason on failure.
    fn check(&self) -> Result<(), String> {
        if self.key.is_empty() {
            return Err("key must not be empty".to_string());
        }
        if let Some(c) = self.key.chars().find(|c| matches!(c, '&' | '=' | '#')) {
            return Err(format!("key contains reserved character {c:?}"));
        }
        if let FilterInputKind::Select { options } | FilterInputKind::MultiSelect { options } = &self.kind {
            if options.is_empty() {
                return Err("select fields need at least one option".to_string());
            }
            let mut seen = BTreeSet::new();
            for option in options {
                if option.value.is_empty() {
                    return Err(format!("option {:?} has an empty value", option.label));
                }
                if self.kind.is_multi() && option.value.contains(MULTI_VALUE_DELIMITER) {
                    return Err(format!("option value {:?} contains the multi-value delimiter", option.value));
                }
                if !seen.insert(option.value.as_str()) {
                    return Err(format!("duplicate option value {:?}", option.value));
                }
            }
        }
        Ok(())
    }
}

/// A field definition that failed structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionProblem {
    pub key: String,
    pub reason: String,
}

/// Checks a whole definition set: every definition individually, then key
/// uniqueness across the set. Stops at the first problem.
pub fn check_definitions(definitions: &[FilterFieldDefinition]) -> Result<(), DefinitionProblem> {
    let mut keys = BTreeSet::new();
    for definition in definitions {
        definition.check().map_err(|reason| DefinitionProblem {
            key: definition.key.clone(),
            reason,
        })?;
        if !keys.insert(definition.key.as_str()) {
            return Err(DefinitionProblem {
                key: definition.key.clone(),
                reason: "duplicate field key".to_string(),
            });
        }
    }
    Ok(())
}

/// Current value of one filter field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(s) => s.is_empty(),
            FilterValue::Many(values) => values.is_empty(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(s) => Some(s),
            FilterValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            FilterValue::Many(values) => Some(values),
            FilterValue::Single(_) => None,
        }
    }

    /// Packs the value into the single string carried by the URL.
    pub fn to_url_string(&self) -> String {
        match self {
            FilterValue::Single(s) => s.clone(),
            FilterValue::Many(values) => values.join(&MULTI_VALUE_DELIMITER.to_string()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

pub type FilterValues = BTreeMap<String, FilterValue>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<FilterOption> {
        vec![FilterOption::new("New York", "usa-ny"), FilterOption::new("Colorado", "usa-co")]
    }

    #[test]
    fn defaults_follow_kind() {
        assert_eq!(FilterFieldDefinition::text("a", "A").default_value(), FilterValue::Single(String::new()));
        assert_eq!(FilterFieldDefinition::multi_select("b", "B", sources()).default_value(), FilterValue::Many(vec![]));
        assert_eq!(FilterFieldDefinition::hidden("c", "pdf").default_value(), FilterValue::Single("pdf".to_string()));
    }

    #[test]
    fn multi_select_unpacks_url_values() {
        let field = FilterFieldDefinition::multi_select("b", "B", sources());
        assert_eq!(field.value_from_url("usa-ny, ,usa-co,"), FilterValue::from(vec!["usa-ny", "usa-co"]));
        assert_eq!(field.value_from_url(""), FilterValue::Many(vec![]));
        let text = FilterFieldDefinition::text("a", "A");
        assert_eq!(text.value_from_url("x,y"), FilterValue::from("x,y"));
    }

    #[test]
    fn rejects_malformed_definitions() {
        let cases = vec![
            (FilterFieldDefinition::text("", "Empty"), ""),
            (FilterFieldDefinition::text("a&b", "Amp"), "a&b"),
            (FilterFieldDefinition::select("s", "S", vec![]), "s"),
            (
                FilterFieldDefinition::select("s", "S", vec![FilterOption::new("x", "1"), FilterOption::new("y", "1")]),
                "s",
            ),
            (FilterFieldDefinition::multi_select("m", "M", vec![FilterOption::new("x", "a,b")]), "m"),
        ];
        for (definition, key) in cases {
            let problem = check_definitions(&[definition]).unwrap_err();
            assert_eq!(problem.key, key);
        }
    }

    #[test]
    fn rejects_duplicate_keys() {
        let problem = check_definitions(&[
            FilterFieldDefinition::text("a", "A"),
            FilterFieldDefinition::date("a", "Also A"),
        ])
        .unwrap_err();
        assert_eq!(problem.reason, "duplicate field key");
    }
}
