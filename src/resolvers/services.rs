//! Collaborators that swipe actions call into.
//!
//! These are provided by the host application. Network-backed operations
//! return a [`ServiceFuture`]; list mutations are synchronous.

use crate::domain::error::Result;
use crate::domain::{CommentId, InboxItemId, PostId, ReplyResult, ReplyTarget, Vote, VoteTarget};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

pub type ServiceFuture<T> = LocalBoxFuture<'static, Result<T>>;

/// Casts votes. Fails with [`SwipeError::Vote`](crate::SwipeError::Vote).
pub trait VoteService {
    fn vote_on(&self, target: VoteTarget, vote: Vote) -> ServiceFuture<()>;
}

/// Opens the reply composer. Resolves to `None` when the user dismisses it.
pub trait ReplyComposer {
    fn present_reply(&self, target: ReplyTarget) -> ServiceFuture<Option<ReplyResult>>;
}

/// The comment list currently on screen.
pub trait CommentThread {
    /// Toggles collapse of the thread rooted at `root_index`.
    fn collapse_root(&self, comment: CommentId, root_index: Option<usize>);

    /// Shows freshly created comments above the existing ones.
    fn prepend_comments(&self, comments: Vec<ReplyResult>);

    /// Reloads the thread from the server.
    fn refresh(&self);
}

pub trait PostVisibility {
    fn set_hidden(&self, post: PostId, hidden: bool);
}

/// Marks inbox items. Fails with [`SwipeError::ReadState`](crate::SwipeError::ReadState).
pub trait ReadStateService {
    fn set_read(&self, item: InboxItemId, read: bool) -> ServiceFuture<()>;
}

/// Gate for actions that need a signed-in user.
pub trait AuthGuard {
    /// Returns `true` when the user is signed out. A login prompt has then
    /// been presented and the caller must abort.
    fn require_auth(&self) -> bool;
}

/// Everything the resolvers need, shared by every row of a list.
#[derive(Clone)]
pub struct Collaborators {
    pub votes: Rc<dyn VoteService>,
    pub replies: Rc<dyn ReplyComposer>,
    pub thread: Rc<dyn CommentThread>,
    pub visibility: Rc<dyn PostVisibility>,
    pub read_state: Rc<dyn ReadStateService>,
    pub auth: Rc<dyn AuthGuard>,
}
