//! Identifiers, vote values, and per-item context for sliding actions.
//!
//! Resolvers never read global state. Everything an action needs to render
//! and trigger (the current vote, whether a post is hidden, whether an inbox
//! item is read) is captured in a context value built fresh for each render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub i64);

/// Identifier of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub i64);

/// Which inbox list an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboxKind {
    Mention,
    Reply,
}

/// Identifier of an inbox entry. Mentions and replies have separate id spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InboxItemId {
    pub kind: InboxKind,
    pub id: i64,
}

impl fmt::Display for InboxItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InboxKind::Mention => write!(f, "mention_{}", self.id),
            InboxKind::Reply => write!(f, "reply_{}", self.id),
        }
    }
}

/// The acting user's vote on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vote {
    Down,
    #[default]
    Neutral,
    Up,
}

impl Vote {
    /// Score as sent to the vote service.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            Self::Down => -1,
            Self::Neutral => 0,
            Self::Up => 1,
        }
    }

    /// Vote resulting from pressing `pressed` while currently at `self`.
    ///
    /// Pressing the vote already cast clears it; anything else casts `pressed`.
    ///
    /// ```
    /// use swipekit::domain::Vote;
    ///
    /// assert_eq!(Vote::Up.toggled(Vote::Up), Vote::Neutral);
    /// assert_eq!(Vote::Down.toggled(Vote::Up), Vote::Up);
    /// ```
    #[must_use]
    pub fn toggled(self, pressed: Self) -> Self {
        if self == pressed {
            Self::Neutral
        } else {
            pressed
        }
    }
}

/// Item a vote is cast on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteTarget {
    Post(PostId),
    Comment(CommentId),
}

/// Item a reply is composed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyTarget {
    Post(PostId),
    Comment(CommentId),
    Inbox {
        item: InboxItemId,
        comment: CommentId,
    },
}

/// The comment created by a submitted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyResult {
    pub comment_id: CommentId,
    pub content: String,
}

/// Live state of a comment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentContext {
    pub comment_id: CommentId,
    pub my_vote: Vote,
    pub collapsed: bool,
    /// Position of this comment's thread root, when it is part of a loaded thread.
    pub root_index: Option<usize>,
}

/// Live state of a post row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostContext {
    pub post_id: PostId,
    pub my_vote: Vote,
    pub hidden: bool,
}

/// Live state of an inbox row (a mention or a reply to the user).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxContext {
    pub item_id: InboxItemId,
    pub comment_id: CommentId,
    pub my_vote: Vote,
    pub read: bool,
}
