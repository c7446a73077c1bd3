//! File-based structured logging.
//!
//! `tracing` events and spans are formatted by `tracing-subscriber` and
//! written to a rotating log file in the data directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → swipekit.log
//! ```
//!
//! # Configuration
//!
//! The filter is the `trace_level` config option (an `EnvFilter` directive
//! such as `"debug"` or `"swipekit::sliding=trace"`), default `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFile, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, LOG_FILE_NAME};
