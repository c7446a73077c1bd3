//! Settings worker message types.
//!
//! This module defines the request and response protocol between the UI
//! thread and the background worker that owns settings storage. Messages are
//! serializable so they can cross a process or plugin boundary unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Messages sent from the UI thread to the settings worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read every stored setting.
    LoadSettings,

    /// Persist one setting.
    SetSetting {
        key: String,
        value: Value,
    },

    /// Remove every stored setting so defaults apply again.
    ResetSettings,
}

impl WorkerMessage {
    pub fn set_setting(key: impl Into<String>, value: Value) -> Self {
        Self::SetSetting {
            key: key.into(),
            value,
        }
    }
}

/// Messages sent from the settings worker back to the UI thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Raw stored values; missing keys are absent from the map.
    SettingsLoaded {
        settings: HashMap<String, Value>,
    },

    /// A setting was persisted.
    SettingSaved {
        key: String,
    },

    /// Stored settings were cleared.
    SettingsReset,

    /// Loading all settings failed.
    LoadFailed {
        message: String,
    },

    /// Any other storage operation failed.
    Error {
        message: String,
    },
}
