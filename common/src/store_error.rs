//! Configuration errors reported by the filter store.

use thiserror::Error;

/// Programmer-facing errors: the UI and the field configuration disagree.
/// Validation failures are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown filter field(s): {}", keys.join(", "))]
    UnknownFields { keys: Vec<String> },
    #[error("malformed filter field definition {key:?}: {reason}")]
    MalformedFieldDefinition { key: String, reason: String },
}

impl StoreError {
    pub fn unknown(key: impl Into<String>) -> Self {
        StoreError::UnknownFields { keys: vec![key.into()] }
    }
}
