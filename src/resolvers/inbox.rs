//! Swipe actions for inbox rows (mentions and replies to the user).
//!
//! Votes on an inbox row apply to the underlying comment.

use crate::domain::{DirectionalGestures, InboxContext, InboxGesture, ReplyTarget, VoteTarget};
use crate::resolvers::services::Collaborators;
use crate::resolvers::{action_pairs, gated, votes};
use crate::sliding::{ActionPairs, Icon, SemanticColor, SlidingAction, Visual};
use futures_util::future::FutureExt;
use std::rc::Rc;

/// Resolves one inbox gesture against the row's live state.
///
/// Votes target `ctx.comment_id`, not the inbox item.
#[must_use]
pub fn resolve(
    gesture: InboxGesture,
    ctx: &InboxContext,
    services: &Collaborators,
) -> Option<SlidingAction> {
    let target = VoteTarget::Comment(ctx.comment_id);
    match gesture {
        InboxGesture::None => None,
        InboxGesture::Upvote => Some(votes::upvote(target, ctx.my_vote, services)),
        InboxGesture::Downvote => Some(votes::downvote(target, ctx.my_vote, services)),
        InboxGesture::MarkReadUnread => Some(mark_read_unread(ctx, services)),
        InboxGesture::Reply => Some(reply(ctx, services)),
    }
}

/// Action pairs for an inbox row under `mapping`.
#[must_use]
pub fn actions(
    mapping: &DirectionalGestures<InboxGesture>,
    ctx: &InboxContext,
    services: &Collaborators,
) -> ActionPairs {
    action_pairs(mapping, |gesture| resolve(gesture, ctx, services))
}

fn mark_read_unread(ctx: &InboxContext, services: &Collaborators) -> SlidingAction {
    let icon = if ctx.read {
        Icon::MailUnread
    } else {
        Icon::MailOpen
    };
    let item = ctx.item_id;
    let read = !ctx.read;
    let read_state = Rc::clone(&services.read_state);

    let trigger = gated(&services.auth, move || {
        tracing::debug!(%item, read, "marking inbox item");
        read_state.set_read(item, read)
    });

    SlidingAction::new(Visual::Icon(icon), SemanticColor::Tertiary, trigger)
}

fn reply(ctx: &InboxContext, services: &Collaborators) -> SlidingAction {
    let target = ReplyTarget::Inbox {
        item: ctx.item_id,
        comment: ctx.comment_id,
    };
    let replies = Rc::clone(&services.replies);
    let thread = Rc::clone(&services.thread);

    let trigger = gated(&services.auth, move || {
        let composing = replies.present_reply(target);
        let thread = Rc::clone(&thread);
        async move {
            if composing.await?.is_some() {
                thread.refresh();
            }
            Ok(())
        }
        .boxed_local()
    });

    SlidingAction::new(Visual::Icon(Icon::ArrowUndo), SemanticColor::Primary, trigger)
}
