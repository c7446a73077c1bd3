//! Event handling for the gesture mapping store.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from settings screens or from the settings worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. In-memory state is mutated immediately
//! 4. Persistence actions are collected and returned for execution
//!
//! A persistence failure arrives later as a worker response and is only
//! logged; it never reverts the in-memory value.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::settings::{SettingChange, SwipeSettings};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events that may change the settings state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Requests persisted settings from the worker.
    LoadSettings,

    /// A settings screen changed one toggle or one direction.
    Change(SettingChange),

    /// Restores every default and clears persisted settings.
    ResetSettings,

    /// Wraps a response from the settings worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that validate input.
///
/// # Example
///
/// ```rust
/// use swipekit::app::{handle_event, Action, AppState, Event};
/// use swipekit::domain::Side;
/// use swipekit::settings::SettingChange;
///
/// let mut state = AppState::new();
/// let (render, actions) = handle_event(
///     &mut state,
///     &Event::Change(SettingChange::SwipeEnabled { side: Side::Start, enabled: false }),
/// )?;
///
/// assert!(render);
/// assert!(!state.toggles().left_enabled);
/// assert_eq!(actions.len(), 1);
/// # Ok::<(), swipekit::SwipeError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::LoadSettings => {
            state.begin_load();
            Ok((false, vec![Action::PostToWorker(WorkerMessage::LoadSettings)]))
        }
        Event::Change(change) => {
            let (key, value) = state.settings_mut().apply(*change);
            state.record_change(*change);

            tracing::debug!(
                key = %key,
                value = %value,
                version = state.settings().version(),
                "setting changed"
            );

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::SetSetting { key, value })],
            ))
        }
        Event::ResetSettings => {
            tracing::debug!("resetting swipe settings to defaults");
            state.settings_mut().replace_with(SwipeSettings::default());
            state.record_reset();
            state.ready = true;

            Ok((true, vec![Action::PostToWorker(WorkerMessage::ResetSettings)]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::SettingsLoaded { settings } => {
                let replayed = state.finish_load(settings);
                tracing::debug!(
                    stored_keys = settings.len(),
                    replayed,
                    "applying persisted settings"
                );
                Ok((true, vec![]))
            }
            WorkerResponse::LoadFailed { message } => {
                tracing::warn!(error = %message, "settings load failed, rendering with defaults");
                state.abandon_load();
                Ok((true, vec![]))
            }
            WorkerResponse::SettingSaved { key } => {
                tracing::trace!(key = %key, "setting persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::SettingsReset => Ok((false, vec![])),
            WorkerResponse::Error { message } => {
                tracing::warn!(error = %message, "settings persistence failed, keeping in-memory value");
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommentGesture, Direction, InboxGesture, Side};
    use serde_json::Value;
    use std::collections::HashMap;

    #[test]
    fn change_is_visible_before_persistence() {
        let mut state = AppState::new();
        let change = SettingChange::Comment {
            direction: Direction::ShortRight,
            gesture: CommentGesture::Reply,
        };

        let (render, actions) = handle_event(&mut state, &Event::Change(change)).unwrap();

        assert!(render);
        assert_eq!(state.settings().comment_gestures().short_right, CommentGesture::Reply);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::SetSetting {
                key: "short_right_comment_action".into(),
                value: Value::from("reply"),
            })]
        );
    }

    #[test]
    fn persistence_error_keeps_memory_state() {
        let mut state = AppState::new();
        let change = SettingChange::SwipeEnabled { side: Side::End, enabled: false };
        handle_event(&mut state, &Event::Change(change)).unwrap();

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error { message: "disk full".into() }),
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.toggles().right_enabled);
    }

    #[test]
    fn loaded_settings_replace_defaults_and_mark_ready() {
        let mut state = AppState::new();
        assert!(!state.ready);

        let mut stored = HashMap::new();
        stored.insert("right_inbox_action".to_string(), Value::from("none"));

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SettingsLoaded { settings: stored }),
        )
        .unwrap();

        assert!(state.ready);
        assert_eq!(state.settings().inbox_gestures().right, InboxGesture::None);
        assert_eq!(state.settings().inbox_gestures().left, InboxGesture::Downvote);
    }

    #[test]
    fn change_during_load_survives_loaded_snapshot() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::LoadSettings).unwrap();
        assert!(state.is_loading());

        let change = SettingChange::Comment {
            direction: Direction::Right,
            gesture: CommentGesture::Collapse,
        };
        handle_event(&mut state, &Event::Change(change)).unwrap();

        // Read by the worker before it saw the write above.
        let mut stored = HashMap::new();
        stored.insert("right_comment_action".to_string(), Value::from("reply"));
        stored.insert("left_comment_action".to_string(), Value::from("none"));
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SettingsLoaded { settings: stored }),
        )
        .unwrap();

        assert!(state.ready);
        assert!(!state.is_loading());
        let comment = state.settings().comment_gestures();
        assert_eq!(comment.right, CommentGesture::Collapse);
        assert_eq!(comment.left, CommentGesture::None);
    }

    #[test]
    fn reset_during_load_discards_loaded_snapshot() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::LoadSettings).unwrap();
        handle_event(&mut state, &Event::ResetSettings).unwrap();
        handle_event(
            &mut state,
            &Event::Change(SettingChange::SwipeEnabled { side: Side::End, enabled: false }),
        )
        .unwrap();

        let mut stored = HashMap::new();
        stored.insert("right_inbox_action".to_string(), Value::from("none"));
        stored.insert("left_swipe_enabled".to_string(), Value::from(false));
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SettingsLoaded { settings: stored }),
        )
        .unwrap();

        assert_eq!(state.settings().inbox_gestures(), SwipeSettings::default().inbox_gestures());
        assert!(state.toggles().left_enabled);
        assert!(!state.toggles().right_enabled);
    }

    #[test]
    fn failed_load_still_marks_ready() {
        let mut state = AppState::new();
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::LoadFailed { message: "locked".into() }),
        )
        .unwrap();

        assert!(render);
        assert!(state.ready);
        assert_eq!(state.settings(), &SwipeSettings::default());
    }

    #[test]
    fn reset_restores_defaults_and_clears_storage() {
        let mut state = AppState::new();
        handle_event(
            &mut state,
            &Event::Change(SettingChange::SwipeEnabled { side: Side::Start, enabled: false }),
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::ResetSettings).unwrap();

        assert!(state.toggles().left_enabled);
        assert!(state.ready);
        assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::ResetSettings)]);
    }
}
