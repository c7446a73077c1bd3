//! Storage record models for the settings persistence layer.
//!
//! Records wrap the raw JSON value with bookkeeping that only the storage
//! layer cares about. The settings model never sees these types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored setting value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRecord {
    /// The stored JSON value.
    pub value: Value,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl SettingRecord {
    /// Creates a record stamped with the current time.
    ///
    /// ```
    /// use swipekit::storage::SettingRecord;
    ///
    /// let record = SettingRecord::new(serde_json::Value::Bool(true));
    /// assert!(record.updated_at > 0);
    /// ```
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
