//! Domain layer: gestures, item identifiers, and errors.
//!
//! This module holds the types shared by the settings store, the action
//! resolvers, and the sliding widget. It has no knowledge of storage or of
//! how actions are rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`gesture`]: Swipe directions and per-content gesture enumerations
//! - [`item`]: Item identifiers, vote values, and per-row context

pub mod error;
pub mod gesture;
pub mod item;

pub use error::{Result, SwipeError};
pub use gesture::{
    CommentGesture, ContentKind, Direction, DirectionalGestures, InboxGesture, PostGesture, Side,
    SwipeGesture,
};
pub use item::{
    CommentContext, CommentId, InboxContext, InboxItemId, InboxKind, PostContext, PostId,
    ReplyResult, ReplyTarget, Vote, VoteTarget,
};
