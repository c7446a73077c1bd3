//! Error types for swipe gesture settings and sliding actions.
//!
//! This module defines the centralized error type [`SwipeError`] and a type alias
//! [`Result`] used throughout the crate. Domain failures (voting, replying,
//! marking read) are recoverable: they surface as a transient notification and
//! never tear down the gesture state. Storage failures are logged and swallowed
//! by the settings worker.

use thiserror::Error;

/// The main error type for swipe settings and sliding action operations.
///
/// # Examples
///
/// ```
/// use swipekit::SwipeError;
///
/// fn cast_vote() -> Result<(), SwipeError> {
///     Err(SwipeError::Vote("instance unreachable".to_string()))
/// }
///
/// assert!(cast_vote().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SwipeError {
    /// Reading or writing the settings store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Communication with the settings worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// The vote service rejected or failed to apply a vote.
    #[error("Vote error: {0}")]
    Vote(String),

    /// The reply composer failed to submit a reply.
    #[error("Reply error: {0}")]
    Reply(String),

    /// The read-state service failed to mark an inbox item.
    #[error("Read state error: {0}")]
    ReadState(String),
}

impl SwipeError {
    /// Returns the message shown to the user when a committed swipe action fails.
    ///
    /// Storage and worker failures never reach the user directly, but a
    /// generic message is provided so every variant can be surfaced.
    #[must_use]
    pub const fn notification_message(&self) -> &'static str {
        match self {
            Self::Vote(_) => "Problem voting. Please try again.",
            Self::Reply(_) => "Problem posting your reply. Please try again.",
            Self::ReadState(_) => "Failed to mark item as unread",
            Self::Storage(_) | Self::Io(_) | Self::Config(_) | Self::Worker(_) => {
                "Something went wrong. Please try again."
            }
        }
    }
}

/// A specialized `Result` type for swipe operations.
pub type Result<T> = std::result::Result<T, SwipeError>;
