//! Swipe actions for comment rows.

use crate::domain::{CommentContext, CommentGesture, DirectionalGestures, ReplyTarget, VoteTarget};
use crate::resolvers::services::Collaborators;
use crate::resolvers::{action_pairs, gated, votes};
use crate::sliding::{ActionPairs, Icon, SemanticColor, SlidingAction, Visual};
use futures_util::future::{ready, FutureExt};
use std::rc::Rc;

/// Resolves one comment gesture against the comment's live state.
#[must_use]
pub fn resolve(
    gesture: CommentGesture,
    ctx: &CommentContext,
    services: &Collaborators,
) -> Option<SlidingAction> {
    let target = VoteTarget::Comment(ctx.comment_id);
    match gesture {
        CommentGesture::None => None,
        CommentGesture::Upvote => Some(votes::upvote(target, ctx.my_vote, services)),
        CommentGesture::Downvote => Some(votes::downvote(target, ctx.my_vote, services)),
        CommentGesture::Collapse => Some(collapse(ctx, services)),
        CommentGesture::Reply => Some(reply(ctx, services)),
    }
}

/// Action pairs for a comment row under `mapping`.
#[must_use]
pub fn actions(
    mapping: &DirectionalGestures<CommentGesture>,
    ctx: &CommentContext,
    services: &Collaborators,
) -> ActionPairs {
    action_pairs(mapping, |gesture| resolve(gesture, ctx, services))
}

fn collapse(ctx: &CommentContext, services: &Collaborators) -> SlidingAction {
    let icon = if ctx.collapsed {
        Icon::ChevronExpand
    } else {
        Icon::ChevronCollapse
    };
    let comment = ctx.comment_id;
    let root_index = ctx.root_index;
    let thread = Rc::clone(&services.thread);

    SlidingAction::new(Visual::Icon(icon), SemanticColor::Tertiary, move || {
        thread.collapse_root(comment, root_index);
        ready(Ok(())).boxed_local()
    })
}

fn reply(ctx: &CommentContext, services: &Collaborators) -> SlidingAction {
    let target = ReplyTarget::Comment(ctx.comment_id);
    let replies = Rc::clone(&services.replies);
    let thread = Rc::clone(&services.thread);

    let trigger = gated(&services.auth, move || {
        let composing = replies.present_reply(target);
        let thread = Rc::clone(&thread);
        async move {
            if let Some(reply) = composing.await? {
                thread.prepend_comments(vec![reply]);
            }
            Ok(())
        }
        .boxed_local()
    });

    SlidingAction::new(Visual::Icon(Icon::ArrowUndo), SemanticColor::Primary, trigger)
}
