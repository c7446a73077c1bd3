//! Storage layer for persisted swipe settings.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation
//! - `models`: Storage record types separate from the settings model

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SettingsStorage;
pub use json::JsonSettingsStorage;
pub use memory::MemorySettingsStorage;
pub use models::SettingRecord;
