//! Swipe directions and the closed set of gestures per content type.
//!
//! Every list item exposes four swipe directions. Dragging toward the start
//! side (a left swipe) reveals the `short_left` action first and the `left`
//! action at the far stop; dragging toward the end side (a right swipe)
//! reveals `short_right` then `right`.
//!
//! Each content type has its own closed gesture enumeration. `None` is an
//! explicit "no action" value, and any unrecognized persisted value decodes to
//! `None` so stale settings never fail to load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of list item a gesture mapping applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Comment,
    Post,
    Inbox,
}

impl ContentKind {
    /// Every content kind, in settings screen order.
    pub const ALL: [Self; 3] = [Self::Post, Self::Comment, Self::Inbox];

    /// Key fragment used when building persisted setting keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Post => "post",
            Self::Inbox => "inbox",
        }
    }
}

/// One side of a sliding item.
///
/// `Start` is revealed by a left swipe (negative sliding ratio), `End` by a
/// right swipe (positive sliding ratio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Start,
    End,
}

/// One of the four configurable swipe directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ShortLeft,
    Left,
    ShortRight,
    Right,
}

impl Direction {
    /// Every direction, in settings screen order.
    pub const ALL: [Self; 4] = [Self::ShortLeft, Self::Left, Self::ShortRight, Self::Right];

    /// The item side this direction's action is shown on.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::ShortLeft | Self::Left => Side::Start,
            Self::ShortRight | Self::Right => Side::End,
        }
    }

    /// Slot index within the side: `0` for the near stop, `1` for the far stop.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::ShortLeft | Self::ShortRight => 0,
            Self::Left | Self::Right => 1,
        }
    }

    /// Key fragment used when building persisted setting keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortLeft => "short_left",
            Self::Left => "left",
            Self::ShortRight => "short_right",
            Self::Right => "right",
        }
    }

    /// Human-readable direction title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ShortLeft => "Short Left",
            Self::Left => "Left",
            Self::ShortRight => "Short Right",
            Self::Right => "Right",
        }
    }
}

/// A value stored per swipe direction.
///
/// Used for gesture mappings, but also by settings screens that attach a
/// title or callback to each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionalGestures<T> {
    pub short_left: T,
    pub left: T,
    pub short_right: T,
    pub right: T,
}

impl<T: Copy> DirectionalGestures<T> {
    #[must_use]
    pub const fn get(&self, direction: Direction) -> T {
        match direction {
            Direction::ShortLeft => self.short_left,
            Direction::Left => self.left,
            Direction::ShortRight => self.short_right,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, value: T) {
        match direction {
            Direction::ShortLeft => self.short_left = value,
            Direction::Left => self.left = value,
            Direction::ShortRight => self.short_right = value,
            Direction::Right => self.right = value,
        }
    }

    /// Returns the `[near, far]` pair for one side.
    #[must_use]
    pub const fn side_pair(&self, side: Side) -> [T; 2] {
        match side {
            Side::Start => [self.short_left, self.left],
            Side::End => [self.short_right, self.right],
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> DirectionalGestures<U> {
        DirectionalGestures {
            short_left: f(self.short_left),
            left: f(self.left),
            short_right: f(self.short_right),
            right: f(self.right),
        }
    }
}

/// Behaviour shared by the per-content gesture enumerations.
pub trait SwipeGesture: Copy + Eq + fmt::Debug + 'static {
    /// The content kind this enumeration belongs to.
    const KIND: ContentKind;

    /// Every selectable gesture, in picker order.
    fn all() -> &'static [Self];

    /// Persisted representation.
    fn as_str(self) -> &'static str;

    /// Label shown in gesture pickers.
    fn label(self) -> &'static str;

    /// Decodes a persisted value. Unknown values decode to the `None` gesture.
    fn from_setting(value: &str) -> Self;

    /// Whether this gesture binds no action.
    fn is_none(self) -> bool;
}

/// Generates a closed gesture enum with its persisted keys and labels.
macro_rules! gesture_enum {
    (
        $(#[$meta:meta])*
        $name:ident for $kind:ident {
            $( $variant:ident => $key:literal, $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $variant ),*
        }

        impl SwipeGesture for $name {
            const KIND: ContentKind = ContentKind::$kind;

            fn all() -> &'static [Self] {
                &[$( Self::$variant ),*]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),*
                }
            }

            fn from_setting(value: &str) -> Self {
                match value {
                    $( $key => Self::$variant, )*
                    _ => Self::None,
                }
            }

            fn is_none(self) -> bool {
                matches!(self, Self::None)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                <Self as SwipeGesture>::from_setting(&value)
            }
        }

        impl From<$name> for String {
            fn from(gesture: $name) -> Self {
                gesture.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

gesture_enum! {
    /// Actions a comment swipe can be bound to.
    CommentGesture for Comment {
        None => "none", "None",
        Upvote => "upvote", "Upvote",
        Downvote => "downvote", "Downvote",
        Collapse => "collapse", "Collapse",
        Reply => "reply", "Reply",
    }
}

gesture_enum! {
    /// Actions a post swipe can be bound to.
    PostGesture for Post {
        None => "none", "None",
        Upvote => "upvote", "Upvote",
        Downvote => "downvote", "Downvote",
        Reply => "reply", "Reply",
        Hide => "hide", "Hide",
    }
}

gesture_enum! {
    /// Actions an inbox item swipe can be bound to.
    InboxGesture for Inbox {
        None => "none", "None",
        Upvote => "upvote", "Upvote",
        Downvote => "downvote", "Downvote",
        MarkReadUnread => "mark_read_unread", "Mark Read/Unread",
        Reply => "reply", "Reply",
    }
}

impl Default for DirectionalGestures<CommentGesture> {
    fn default() -> Self {
        Self {
            short_left: CommentGesture::Upvote,
            left: CommentGesture::Downvote,
            short_right: CommentGesture::Collapse,
            right: CommentGesture::Reply,
        }
    }
}

impl Default for DirectionalGestures<PostGesture> {
    fn default() -> Self {
        Self {
            short_left: PostGesture::Upvote,
            left: PostGesture::Downvote,
            short_right: PostGesture::Reply,
            right: PostGesture::Hide,
        }
    }
}

impl Default for DirectionalGestures<InboxGesture> {
    fn default() -> Self {
        Self {
            short_left: InboxGesture::Upvote,
            left: InboxGesture::Downvote,
            short_right: InboxGesture::MarkReadUnread,
            right: InboxGesture::Reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_map_to_side_slots() {
        assert_eq!((Direction::ShortLeft.side(), Direction::ShortLeft.slot()), (Side::Start, 0));
        assert_eq!((Direction::Left.side(), Direction::Left.slot()), (Side::Start, 1));
        assert_eq!((Direction::ShortRight.side(), Direction::ShortRight.slot()), (Side::End, 0));
        assert_eq!((Direction::Right.side(), Direction::Right.slot()), (Side::End, 1));
    }

    #[test]
    fn side_pair_follows_near_far_order() {
        let comments = DirectionalGestures::<CommentGesture>::default();
        assert_eq!(
            comments.side_pair(Side::Start),
            [CommentGesture::Upvote, CommentGesture::Downvote]
        );
        assert_eq!(
            comments.side_pair(Side::End),
            [CommentGesture::Collapse, CommentGesture::Reply]
        );
    }

    #[test]
    fn default_mappings_are_well_known() {
        let posts = DirectionalGestures::<PostGesture>::default();
        assert_eq!(posts.short_right, PostGesture::Reply);
        assert_eq!(posts.right, PostGesture::Hide);

        let inbox = DirectionalGestures::<InboxGesture>::default();
        assert_eq!(inbox.short_right, InboxGesture::MarkReadUnread);
        assert_eq!(inbox.right, InboxGesture::Reply);
    }

    #[test]
    fn set_replaces_a_single_direction() {
        let mut posts = DirectionalGestures::<PostGesture>::default();
        posts.set(Direction::Left, PostGesture::None);
        assert_eq!(posts.get(Direction::Left), PostGesture::None);
        assert_eq!(posts.get(Direction::ShortLeft), PostGesture::Upvote);
    }

    #[test]
    fn unknown_values_decode_to_none() {
        assert_eq!(CommentGesture::from_setting("explode"), CommentGesture::None);
        assert_eq!(InboxGesture::from_setting("mark_read_unread"), InboxGesture::MarkReadUnread);

        let decoded: PostGesture = serde_json::from_str("\"save\"").unwrap();
        assert_eq!(decoded, PostGesture::None);
    }

    #[test]
    fn gestures_serialize_as_plain_strings() {
        let json = serde_json::to_string(&InboxGesture::MarkReadUnread).unwrap();
        assert_eq!(json, "\"mark_read_unread\"");
        assert_eq!(InboxGesture::MarkReadUnread.to_string(), "Mark Read/Unread");
    }
}
