//! Application layer for the gesture mapping store.
//!
//! # Architecture
//!
//! ```text
//! Settings screen → Events → Event Handler → State Mutations → Actions → Worker
//!                                 ↑                                       ↓
//!                                 └───────────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic
//! - [`state`]: Settings state container
//! - [`store`]: State, handler, and worker wired together

pub mod actions;
pub mod handler;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use store::SettingsStore;
