//! Background worker for settings persistence.
//!
//! All storage I/O happens here so that settings screens never block on disk.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic
//! - `thread`: Thread hosting and fire-and-forget posting

pub mod handler;
pub mod messages;
pub mod thread;

pub use handler::SettingsWorker;
pub use messages::{WorkerMessage, WorkerResponse};
pub use thread::WorkerHandle;
