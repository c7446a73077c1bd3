//! In-memory settings backend.
//!
//! Nothing is written to disk. Useful for tests and for sessions where the
//! settings file cannot be opened; writes can be made to fail on demand to
//! exercise the persistence-failure path.

use crate::domain::error::{Result, SwipeError};
use crate::storage::backend::SettingsStorage;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemorySettingsStorage {
    settings: HashMap<String, Value>,
    fail_writes: bool,
}

impl MemorySettingsStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `settings`.
    #[must_use]
    pub fn with_settings(settings: HashMap<String, Value>) -> Self {
        Self {
            settings,
            fail_writes: false,
        }
    }

    /// Creates a backend whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            settings: HashMap::new(),
            fail_writes: true,
        }
    }
}

impl SettingsStorage for MemorySettingsStorage {
    fn get_setting(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.settings.get(key).cloned())
    }

    fn set_setting(&mut self, key: &str, value: Value) -> Result<()> {
        if self.fail_writes {
            return Err(SwipeError::Storage(format!("write rejected: {key}")));
        }
        self.settings.insert(key.to_string(), value);
        Ok(())
    }

    fn get_all_settings(&self) -> Result<HashMap<String, Value>> {
        Ok(self.settings.clone())
    }

    fn clear(&mut self) -> Result<()> {
        if self.fail_writes {
            return Err(SwipeError::Storage("clear rejected".to_string()));
        }
        self.settings.clear();
        Ok(())
    }
}
