//! Settings storage backend abstraction.
//!
//! This module defines the [`SettingsStorage`] trait that abstracts over
//! persistence backends for swipe settings. The settings worker owns a boxed
//! backend and is the only caller, so implementations need to be `Send` but
//! not `Sync`.
//!
//! # Design Philosophy
//!
//! The trait is a flat key/value store. The settings model decides which keys
//! exist and how values decode; backends only store JSON values.

use crate::domain::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Abstraction over persistent settings backends.
///
/// # Implementations
///
/// - [`crate::storage::JsonSettingsStorage`]: JSON file with atomic writes
/// - [`crate::storage::MemorySettingsStorage`]: in-memory, for tests and ephemeral sessions
///
/// # Examples
///
/// ```no_run
/// use swipekit::storage::{JsonSettingsStorage, SettingsStorage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonSettingsStorage::new(PathBuf::from("/tmp/settings.json"))?;
/// storage.set_setting("left_swipe_enabled", serde_json::Value::Bool(false))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SettingsStorage: Send {
    /// Reads one setting. Returns `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_setting(&self, key: &str) -> Result<Option<Value>>;

    /// Writes one setting, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set_setting(&mut self, key: &str, value: Value) -> Result<()>;

    /// Reads every stored setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_all_settings(&self) -> Result<HashMap<String, Value>>;

    /// Removes every stored setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn clear(&mut self) -> Result<()>;
}
