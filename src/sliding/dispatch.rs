//! Running committed actions and surfacing their failures.

use crate::domain::error::SwipeError;
use crate::sliding::action::{SemanticColor, SlidingAction};
use std::time::Duration;

/// How long a failure toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    Bottom,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
    pub position: ToastPosition,
    pub color: SemanticColor,
}

impl Toast {
    /// The toast shown when a swipe action fails.
    #[must_use]
    pub fn failure(error: &SwipeError) -> Self {
        Self {
            message: error.notification_message().to_string(),
            duration: TOAST_DURATION,
            position: ToastPosition::Bottom,
            color: SemanticColor::Danger,
        }
    }
}

/// Presents toasts to the user.
pub trait Notifier {
    fn present(&self, toast: Toast);
}

/// Runs a committed action. A failure is reported through `notifier` and
/// never propagates to the caller. Returns whether the action succeeded.
pub async fn dispatch_commit(action: &SlidingAction, notifier: &dyn Notifier) -> bool {
    match action.trigger().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "swipe action failed");
            notifier.present(Toast::failure(&e));
            false
        }
    }
}
