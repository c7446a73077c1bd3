//! Swipekit: configurable swipe gestures for list items.
//!
//! Swipekit provides:
//! - A sliding item widget with two action slots per side, armed by drag distance
//! - Per content type action resolvers (comments, posts, inbox items)
//! - A gesture mapping store with immediate in-memory updates
//! - Background persistence of settings to a JSON file
//! - Metadata for building gesture settings screens

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application (list rows, settings screens)     │
//! └─────────────────────────────────────────────────────┘
//!          │                    │                    │
//! ┌───────────────┐   ┌──────────────────┐  ┌───────────────┐
//! │ Sliding       │   │ Resolvers        │  │ Store (app/)  │
//! │ (sliding/)    │ ← │ (resolvers/)     │  │ - Events      │
//! │ - Thresholds  │   │ - Comment        │  │ - State       │
//! │ - Commit      │   │ - Post           │  │ - Actions     │
//! │ - View model  │   │ - Inbox          │  └───────────────┘
//! └───────────────┘   └──────────────────┘          │
//!                                           ┌───────────────┐
//!                                           │ Worker        │
//!                                           │ (worker/)     │
//!                                           └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, settings model, storage, infrastructure    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Gestures, directions, item identifiers, errors
//! - [`settings`]: Gesture mapping model and settings screen metadata
//! - [`sliding`]: The sliding item widget
//! - [`resolvers`]: Gesture to action resolution per content type
//! - [`app`]: Gesture mapping store with event/action model
//! - [`worker`]: Background settings persistence
//! - [`storage`]: JSON and in-memory settings backends
//! - [`infrastructure`]: Data directory and path utilities
//! - [`observability`]: File-based structured logging
//!
//! # Configuration
//!
//! ```toml
//! data_dir = "~/.local/share/swipekit"
//! settings_file = "settings.json"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use swipekit::domain::{Direction, Side};
//! use swipekit::settings::SettingChange;
//! use swipekit::{initialize, Config};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: Some(dir.path().display().to_string()),
//!     ..Default::default()
//! };
//!
//! let mut store = initialize(&config)?;
//! store.apply(SettingChange::SwipeEnabled { side: Side::Start, enabled: false });
//!
//! assert!(!store.toggles().left_enabled);
//! assert_eq!(swipekit::settings::visible_directions(store.toggles()),
//!     vec![Direction::ShortRight, Direction::Right]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod resolvers;
pub mod settings;
pub mod sliding;
pub mod storage;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, SettingsStore};
pub use domain::{Result, SwipeError};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use worker::{SettingsWorker, WorkerHandle};

/// Default settings file name inside the data directory.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Runtime configuration.
///
/// Every field is optional; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the settings file and logs.
    ///
    /// A leading `~` is expanded. Default: see [`infrastructure::get_data_dir`].
    pub data_dir: Option<String>,

    /// Settings file, relative to `data_dir` unless absolute.
    /// Default: `"settings.json"`
    pub settings_file: Option<String>,

    /// `EnvFilter` directive for logging.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use swipekit::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert("settings_file".to_string(), "".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert_eq!(config.settings_file, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            data_dir: get("data_dir"),
            settings_file: get("settings_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeError::Config`] if the document is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SwipeError::Config(e.to_string()))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SwipeError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// The data directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::get_data_dir, infrastructure::expand_tilde)
    }

    /// Full path of the JSON settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        let file = self
            .settings_file
            .as_deref()
            .map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), infrastructure::expand_tilde);

        if file.is_absolute() {
            file
        } else {
            self.resolved_data_dir().join(file)
        }
    }
}

/// Opens persisted settings and returns a store backed by a worker thread.
///
/// The store starts not ready and becomes ready once the worker answers the
/// initial load. If the settings file cannot be opened the worker runs
/// without a backend: the load fails and the store renders with defaults.
///
/// Logging is not initialized here; call [`observability::init_tracing`].
///
/// # Errors
///
/// Returns [`SwipeError::Worker`] if the worker thread cannot be spawned.
pub fn initialize(config: &Config) -> Result<SettingsStore> {
    let path = config.settings_path();
    let _span = tracing::debug_span!("initialize", path = ?path).entered();

    let worker = SettingsWorker::open(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to open settings storage, using defaults");
        SettingsWorker::default()
    });

    Ok(SettingsStore::new(WorkerHandle::spawn(worker)?))
}
