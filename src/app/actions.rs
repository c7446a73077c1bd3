//! Side effects emitted by the settings event handler.
//!
//! The handler mutates in-memory state synchronously and returns actions
//! describing the I/O still to be done. The store executes them without
//! waiting for completion.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a message to the settings worker.
    ///
    /// Used for persisting a changed setting, loading all settings, and
    /// clearing stored settings on reset.
    PostToWorker(WorkerMessage),
}
