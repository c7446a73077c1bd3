//! The gesture mapping store: state, event handler, and worker wired together.
//!
//! Settings screens call [`SettingsStore::apply`]; list items read
//! [`SettingsStore::settings`]. Writes update memory synchronously and are
//! persisted by the worker in the background. Call [`SettingsStore::pump`]
//! from the event loop to fold worker responses back into state.

use crate::app::{handle_event, Action, AppState, Event};
use crate::settings::{SettingChange, SwipeSettings, SwipeToggles};
use crate::worker::{WorkerHandle, WorkerMessage};

pub struct SettingsStore {
    state: AppState,
    worker: Option<WorkerHandle>,
}

impl SettingsStore {
    /// Creates a store backed by `worker` and requests the persisted settings.
    #[must_use]
    pub fn new(worker: WorkerHandle) -> Self {
        let mut store = Self {
            state: AppState::new(),
            worker: Some(worker),
        };
        store.dispatch(&Event::LoadSettings);
        store
    }

    /// Creates a store with no persistence. It is ready immediately.
    #[must_use]
    pub fn detached() -> Self {
        let mut state = AppState::new();
        state.ready = true;
        Self {
            state,
            worker: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SwipeSettings {
        self.state.settings()
    }

    #[must_use]
    pub const fn toggles(&self) -> SwipeToggles {
        self.state.toggles()
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.state.ready
    }

    /// Applies one settings change. Returns whether a render is needed.
    pub fn apply(&mut self, change: SettingChange) -> bool {
        self.dispatch(&Event::Change(change))
    }

    /// Restores every default and clears persisted settings.
    pub fn reset(&mut self) -> bool {
        self.dispatch(&Event::ResetSettings)
    }

    /// Folds every ready worker response into state. Returns whether a render is needed.
    pub fn pump(&mut self) -> bool {
        let responses = self
            .worker
            .as_ref()
            .map(WorkerHandle::drain)
            .unwrap_or_default();

        responses
            .into_iter()
            .map(|response| self.dispatch(&Event::WorkerResponse(response)))
            .fold(false, |render, needs| render || needs)
    }

    /// Handles one event directly, e.g. a worker response received elsewhere.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.state, event) {
            Ok((render, actions)) => {
                for action in actions {
                    self.execute(action);
                }
                render
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to handle settings event");
                false
            }
        }
    }

    fn execute(&self, action: Action) {
        match action {
            Action::PostToWorker(message) => self.post(message),
        }
    }

    fn post(&self, message: WorkerMessage) {
        let Some(worker) = &self.worker else {
            tracing::trace!("no settings worker, skipping persistence");
            return;
        };

        if let Err(e) = worker.post(message) {
            tracing::warn!(error = %e, "failed to queue settings write");
        }
    }
}
