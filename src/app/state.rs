//! Application state for the gesture mapping store.
//!
//! [`AppState`] holds the current [`SwipeSettings`] snapshot and whether the
//! persisted values have been loaded yet. The event handler is its only
//! writer; renderers read it through [`AppState::settings`].

use crate::settings::{SettingChange, SwipeSettings, SwipeToggles};
use serde_json::Value;
use std::collections::HashMap;

/// Central settings state container.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    settings: SwipeSettings,

    /// Set once persisted settings were loaded, failed to load, or were reset.
    ///
    /// Until then the defaults are shown; a failed load still flips this so
    /// the UI renders with whatever is in memory.
    pub ready: bool,

    /// Writes made since the outstanding load was requested.
    pending_load: Option<PendingLoad>,
}

/// In-memory writes that must win over a snapshot read before they happened.
#[derive(Debug, Clone, Default)]
struct PendingLoad {
    changes: Vec<SettingChange>,
    reset: bool,
}

impl PendingLoad {
    /// Builds the snapshot to adopt: stored values with later writes replayed on top.
    fn replay(self, stored: &HashMap<String, Value>) -> SwipeSettings {
        let mut settings = if self.reset {
            SwipeSettings::default()
        } else {
            SwipeSettings::from_stored(stored)
        };
        for change in self.changes {
            settings.apply(change);
        }
        settings
    }
}

impl AppState {
    /// Creates a not-yet-ready state holding the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot. Cheap to call once per render pass.
    #[must_use]
    pub const fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    #[must_use]
    pub const fn toggles(&self) -> SwipeToggles {
        self.settings.toggles()
    }

    /// Whether a load was requested and no response has arrived yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub(crate) fn settings_mut(&mut self) -> &mut SwipeSettings {
        &mut self.settings
    }

    pub(crate) fn begin_load(&mut self) {
        self.pending_load = Some(PendingLoad::default());
    }

    pub(crate) fn record_change(&mut self, change: SettingChange) {
        if let Some(pending) = &mut self.pending_load {
            pending.changes.push(change);
        }
    }

    pub(crate) fn record_reset(&mut self) {
        if let Some(pending) = &mut self.pending_load {
            pending.changes.clear();
            pending.reset = true;
        }
    }

    /// Adopts a loaded snapshot, keeping every write made while it was in flight.
    ///
    /// Returns how many writes were replayed over the stored values.
    pub(crate) fn finish_load(&mut self, stored: &HashMap<String, Value>) -> usize {
        let pending = self.pending_load.take().unwrap_or_default();
        let replayed = pending.changes.len();
        let loaded = pending.replay(stored);
        self.settings.replace_with(loaded);
        self.ready = true;
        replayed
    }

    pub(crate) fn abandon_load(&mut self) {
        self.pending_load = None;
        self.ready = true;
    }
}
