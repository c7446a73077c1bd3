//! Settings worker implementation.
//!
//! The worker owns the storage backend and turns each [`WorkerMessage`] into
//! a [`WorkerResponse`]. Storage failures become `Error` responses; they are
//! never propagated to the caller.

use crate::domain::error::{Result, SwipeError};
use crate::storage::{JsonSettingsStorage, SettingsStorage};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::path::PathBuf;

/// Worker state for handling settings storage operations.
///
/// A default worker has no backend; every message it handles fails.
#[derive(Default)]
pub struct SettingsWorker {
    storage: Option<Box<dyn SettingsStorage>>,
}

impl SettingsWorker {
    /// Creates a worker backed by a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn open(path: PathBuf) -> Result<Self> {
        let storage: Box<dyn SettingsStorage> = Box::new(JsonSettingsStorage::new(path)?);
        Ok(Self::with_storage(storage))
    }

    #[must_use]
    pub fn with_storage(storage: Box<dyn SettingsStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    fn get_storage(&mut self) -> Result<&mut Box<dyn SettingsStorage>> {
        self.storage
            .as_mut()
            .ok_or_else(|| SwipeError::Worker("Storage not initialized".to_string()))
    }

    /// Standardizes logging and error mapping across storage operations.
    fn handle_storage_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_settings(&mut self) -> WorkerResponse {
        match self.get_storage().and_then(|storage| storage.get_all_settings()) {
            Ok(settings) => {
                tracing::debug!(count = settings.len(), "settings loaded from storage");
                WorkerResponse::SettingsLoaded { settings }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings");
                WorkerResponse::LoadFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    fn handle_set_setting(&mut self, key: String, value: serde_json::Value) -> WorkerResponse {
        Self::handle_storage_result(
            "set setting",
            self.get_storage()
                .and_then(|storage| storage.set_setting(&key, value)),
            |()| WorkerResponse::SettingSaved { key },
        )
    }

    fn handle_reset_settings(&mut self) -> WorkerResponse {
        Self::handle_storage_result(
            "reset settings",
            self.get_storage().and_then(|storage| storage.clear()),
            |()| WorkerResponse::SettingsReset,
        )
    }

    /// Processes one message.
    pub fn handle(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_handle", message = ?message).entered();

        match message {
            WorkerMessage::LoadSettings => self.handle_load_settings(),
            WorkerMessage::SetSetting { key, value } => self.handle_set_setting(key, value),
            WorkerMessage::ResetSettings => self.handle_reset_settings(),
        }
    }
}
