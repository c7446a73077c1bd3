//! The swipe settings snapshot and its single mutation entry point.
//!
//! [`SwipeSettings`] is the in-memory authority for gesture mappings and the
//! global swipe toggles. Reads are plain accessor calls on a snapshot; every
//! write goes through [`SwipeSettings::apply`], which bumps the version and
//! returns the persisted key/value pair for the caller to hand to storage.

use crate::domain::{
    CommentGesture, ContentKind, Direction, DirectionalGestures, InboxGesture, PostGesture, Side,
    SwipeGesture,
};
use serde_json::Value;
use std::collections::HashMap;

/// Persisted key of the left swipe toggle.
pub const LEFT_SWIPE_ENABLED_KEY: &str = "left_swipe_enabled";

/// Persisted key of the right swipe toggle.
pub const RIGHT_SWIPE_ENABLED_KEY: &str = "right_swipe_enabled";

/// Global kill-switches for each swipe side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeToggles {
    /// Left swipes reveal the start side.
    pub left_enabled: bool,
    /// Right swipes reveal the end side.
    pub right_enabled: bool,
}

impl Default for SwipeToggles {
    fn default() -> Self {
        Self {
            left_enabled: true,
            right_enabled: true,
        }
    }
}

impl SwipeToggles {
    #[must_use]
    pub const fn is_enabled(&self, side: Side) -> bool {
        match side {
            Side::Start => self.left_enabled,
            Side::End => self.right_enabled,
        }
    }
}

/// Persisted key for the toggle of one side.
#[must_use]
pub const fn toggle_key(side: Side) -> &'static str {
    match side {
        Side::Start => LEFT_SWIPE_ENABLED_KEY,
        Side::End => RIGHT_SWIPE_ENABLED_KEY,
    }
}

/// Persisted key for one direction of one content kind, e.g. `short_left_comment_action`.
#[must_use]
pub fn gesture_key(kind: ContentKind, direction: Direction) -> String {
    format!("{}_{}_action", direction.as_str(), kind.as_str())
}

/// Every persisted setting key, toggles first.
#[must_use]
pub fn all_keys() -> Vec<String> {
    let mut keys = vec![
        LEFT_SWIPE_ENABLED_KEY.to_string(),
        RIGHT_SWIPE_ENABLED_KEY.to_string(),
    ];
    for kind in [ContentKind::Comment, ContentKind::Post, ContentKind::Inbox] {
        keys.extend(Direction::ALL.iter().map(|d| gesture_key(kind, *d)));
    }
    keys
}

/// A single settings mutation, as issued by a settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    SwipeEnabled { side: Side, enabled: bool },
    Comment { direction: Direction, gesture: CommentGesture },
    Post { direction: Direction, gesture: PostGesture },
    Inbox { direction: Direction, gesture: InboxGesture },
}

impl SettingChange {
    /// Persisted key this change writes.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::SwipeEnabled { side, .. } => toggle_key(*side).to_string(),
            Self::Comment { direction, .. } => gesture_key(ContentKind::Comment, *direction),
            Self::Post { direction, .. } => gesture_key(ContentKind::Post, *direction),
            Self::Inbox { direction, .. } => gesture_key(ContentKind::Inbox, *direction),
        }
    }

    /// Persisted value this change writes.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::SwipeEnabled { enabled, .. } => Value::Bool(*enabled),
            Self::Comment { gesture, .. } => Value::from(gesture.as_str()),
            Self::Post { gesture, .. } => Value::from(gesture.as_str()),
            Self::Inbox { gesture, .. } => Value::from(gesture.as_str()),
        }
    }
}

/// Snapshot of all swipe settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeSettings {
    version: u64,
    toggles: SwipeToggles,
    comment: DirectionalGestures<CommentGesture>,
    post: DirectionalGestures<PostGesture>,
    inbox: DirectionalGestures<InboxGesture>,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            version: 0,
            toggles: SwipeToggles::default(),
            comment: DirectionalGestures::default(),
            post: DirectionalGestures::default(),
            inbox: DirectionalGestures::default(),
        }
    }
}

impl SwipeSettings {
    /// Builds a snapshot from persisted values.
    ///
    /// Missing keys and values of the wrong JSON type fall back to the default
    /// for that key. Unknown gesture strings decode to `None`.
    #[must_use]
    pub fn from_stored(values: &HashMap<String, Value>) -> Self {
        let defaults = Self::default();

        let toggle = |side: Side| {
            values
                .get(toggle_key(side))
                .and_then(Value::as_bool)
                .unwrap_or_else(|| defaults.toggles.is_enabled(side))
        };

        Self {
            version: 0,
            toggles: SwipeToggles {
                left_enabled: toggle(Side::Start),
                right_enabled: toggle(Side::End),
            },
            comment: load_mapping(values, defaults.comment),
            post: load_mapping(values, defaults.post),
            inbox: load_mapping(values, defaults.inbox),
        }
    }

    /// Monotonic counter bumped on every applied change.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub const fn toggles(&self) -> SwipeToggles {
        self.toggles
    }

    #[must_use]
    pub const fn comment_gestures(&self) -> DirectionalGestures<CommentGesture> {
        self.comment
    }

    #[must_use]
    pub const fn post_gestures(&self) -> DirectionalGestures<PostGesture> {
        self.post
    }

    #[must_use]
    pub const fn inbox_gestures(&self) -> DirectionalGestures<InboxGesture> {
        self.inbox
    }

    /// Applies one change in memory and returns the key/value to persist.
    pub fn apply(&mut self, change: SettingChange) -> (String, Value) {
        match change {
            SettingChange::SwipeEnabled { side, enabled } => match side {
                Side::Start => self.toggles.left_enabled = enabled,
                Side::End => self.toggles.right_enabled = enabled,
            },
            SettingChange::Comment { direction, gesture } => self.comment.set(direction, gesture),
            SettingChange::Post { direction, gesture } => self.post.set(direction, gesture),
            SettingChange::Inbox { direction, gesture } => self.inbox.set(direction, gesture),
        }
        self.version = self.version.saturating_add(1);

        (change.key(), change.value())
    }

    /// Replaces every value with the loaded snapshot, keeping the version moving forward.
    pub fn replace_with(&mut self, loaded: Self) {
        let version = self.version.saturating_add(1);
        *self = Self { version, ..loaded };
    }
}

fn load_mapping<G: SwipeGesture>(
    values: &HashMap<String, Value>,
    defaults: DirectionalGestures<G>,
) -> DirectionalGestures<G> {
    let load = |direction: Direction| {
        values
            .get(&gesture_key(G::KIND, direction))
            .and_then(Value::as_str)
            .map_or_else(|| defaults.get(direction), G::from_setting)
    };

    DirectionalGestures {
        short_left: load(Direction::ShortLeft),
        left: load(Direction::Left),
        short_right: load(Direction::ShortRight),
        right: load(Direction::Right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_persisted_names() {
        assert_eq!(
            gesture_key(ContentKind::Comment, Direction::ShortLeft),
            "short_left_comment_action"
        );
        assert_eq!(gesture_key(ContentKind::Inbox, Direction::Right), "right_inbox_action");
        assert_eq!(toggle_key(Side::End), "right_swipe_enabled");
        assert_eq!(all_keys().len(), 14);
    }

    #[test]
    fn defaults_enable_both_sides() {
        let settings = SwipeSettings::default();
        assert!(settings.toggles().left_enabled);
        assert!(settings.toggles().right_enabled);
        assert_eq!(settings.comment_gestures().right, CommentGesture::Reply);
    }

    #[test]
    fn apply_updates_memory_and_reports_persisted_pair() {
        let mut settings = SwipeSettings::default();
        let (key, value) = settings.apply(SettingChange::Post {
            direction: Direction::Right,
            gesture: PostGesture::None,
        });

        assert_eq!(key, "right_post_action");
        assert_eq!(value, Value::from("none"));
        assert_eq!(settings.post_gestures().right, PostGesture::None);
        assert_eq!(settings.version(), 1);
    }

    #[test]
    fn toggle_change_flips_one_side() {
        let mut settings = SwipeSettings::default();
        let (key, value) = settings.apply(SettingChange::SwipeEnabled {
            side: Side::Start,
            enabled: false,
        });

        assert_eq!(key, "left_swipe_enabled");
        assert_eq!(value, Value::Bool(false));
        assert!(!settings.toggles().left_enabled);
        assert!(settings.toggles().right_enabled);
    }

    #[test]
    fn stored_values_override_defaults_per_key() {
        let mut values = HashMap::new();
        values.insert("right_swipe_enabled".to_string(), Value::Bool(false));
        values.insert("short_right_inbox_action".to_string(), Value::from("reply"));
        values.insert("left_comment_action".to_string(), Value::from("teleport"));
        values.insert("right_comment_action".to_string(), Value::from(3));

        let settings = SwipeSettings::from_stored(&values);

        assert!(settings.toggles().left_enabled);
        assert!(!settings.toggles().right_enabled);
        assert_eq!(settings.inbox_gestures().short_right, InboxGesture::Reply);
        assert_eq!(settings.inbox_gestures().right, InboxGesture::Reply);
        assert_eq!(settings.comment_gestures().left, CommentGesture::None);
        assert_eq!(settings.comment_gestures().right, CommentGesture::Reply);
    }

    #[test]
    fn replace_keeps_version_monotonic() {
        let mut settings = SwipeSettings::default();
        settings.apply(SettingChange::SwipeEnabled { side: Side::End, enabled: false });
        settings.replace_with(SwipeSettings::default());

        assert_eq!(settings.version(), 2);
        assert!(settings.toggles().right_enabled);
    }
}
