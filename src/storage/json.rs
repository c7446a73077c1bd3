//! JSON file-based settings backend.
//!
//! This module provides a human-readable storage implementation using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash mid-write never leaves a corrupt settings file behind.

use crate::domain::error::{Result, SwipeError};
use crate::storage::backend::SettingsStorage;
use crate::storage::models::SettingRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored settings by key.
    #[serde(default)]
    settings: HashMap<String, SettingRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            settings: HashMap::new(),
        }
    }
}

/// JSON file settings backend.
///
/// The whole document is kept in memory and rewritten on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "settings": {
///     "left_swipe_enabled": { "value": true, "updated_at": 1700000000 },
///     "right_comment_action": { "value": "reply", "updated_at": 1700000000 }
///   }
/// }
/// ```
pub struct JsonSettingsStorage {
    file_path: PathBuf,
    data: StorageData,
    dirty: bool,
}

impl JsonSettingsStorage {
    /// Creates or opens a JSON settings file.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON settings storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty settings storage");
            StorageData::default()
        };

        tracing::debug!(setting_count = data.settings.len(), "settings storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| SwipeError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            settings = data.settings.len(),
            "loaded settings data"
        );

        Ok(data)
    }

    /// Writes to a temporary file, then renames it over the target path.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SwipeError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "settings saved");
        Ok(())
    }
}

impl SettingsStorage for JsonSettingsStorage {
    fn get_setting(&self, key: &str) -> Result<Option<Value>> {
        let value = self.data.settings.get(key).map(|record| record.value.clone());
        tracing::trace!(key = %key, found = value.is_some(), "setting lookup");
        Ok(value)
    }

    fn set_setting(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_set_setting", key = %key).entered();

        self.data
            .settings
            .insert(key.to_string(), SettingRecord::new(value));

        self.dirty = true;
        self.save_to_file()
    }

    fn get_all_settings(&self) -> Result<HashMap<String, Value>> {
        let settings: HashMap<String, Value> = self
            .data
            .settings
            .iter()
            .map(|(key, record)| (key.clone(), record.value.clone()))
            .collect();

        tracing::debug!(count = settings.len(), "retrieved settings");
        Ok(settings)
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_clear_settings").entered();

        self.data.settings.clear();
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonSettingsStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty settings on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save settings on drop");
            }
        }
    }
}
