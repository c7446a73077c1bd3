//! Swipe actions for post rows.

use crate::domain::{DirectionalGestures, PostContext, PostGesture, ReplyTarget, VoteTarget};
use crate::resolvers::services::Collaborators;
use crate::resolvers::{action_pairs, gated, votes};
use crate::sliding::{ActionPairs, Icon, SemanticColor, SlidingAction, Visual};
use futures_util::future::{ready, FutureExt};
use std::rc::Rc;

/// Resolves one post gesture against the row's live state.
///
/// Hide toggles the row against its current `hidden` flag.
#[must_use]
pub fn resolve(
    gesture: PostGesture,
    ctx: &PostContext,
    services: &Collaborators,
) -> Option<SlidingAction> {
    let target = VoteTarget::Post(ctx.post_id);
    match gesture {
        PostGesture::None => None,
        PostGesture::Upvote => Some(votes::upvote(target, ctx.my_vote, services)),
        PostGesture::Downvote => Some(votes::downvote(target, ctx.my_vote, services)),
        PostGesture::Reply => Some(reply(ctx, services)),
        PostGesture::Hide => Some(hide(ctx, services)),
    }
}

/// Action pairs for a post row under `mapping`.
#[must_use]
pub fn actions(
    mapping: &DirectionalGestures<PostGesture>,
    ctx: &PostContext,
    services: &Collaborators,
) -> ActionPairs {
    action_pairs(mapping, |gesture| resolve(gesture, ctx, services))
}

fn hide(ctx: &PostContext, services: &Collaborators) -> SlidingAction {
    let (icon, color) = if ctx.hidden {
        (Icon::Eye, SemanticColor::Tertiary)
    } else {
        (Icon::EyeOff, SemanticColor::Danger)
    };
    let post = ctx.post_id;
    let hidden = !ctx.hidden;
    let visibility = Rc::clone(&services.visibility);

    let trigger = gated(&services.auth, move || {
        tracing::debug!(post = post.0, hidden, "toggling post visibility");
        visibility.set_hidden(post, hidden);
        ready(Ok(())).boxed_local()
    });

    SlidingAction::new(Visual::Icon(icon), color, trigger)
}

fn reply(ctx: &PostContext, services: &Collaborators) -> SlidingAction {
    let target = ReplyTarget::Post(ctx.post_id);
    let replies = Rc::clone(&services.replies);

    let trigger = gated(&services.auth, move || {
        let composing = replies.present_reply(target);
        async move {
            composing.await?;
            Ok(())
        }
        .boxed_local()
    });

    SlidingAction::new(Visual::Icon(Icon::ArrowUndo), SemanticColor::Primary, trigger)
}
