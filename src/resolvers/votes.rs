//! Upvote and downvote actions, shared by every content type.

use crate::domain::{Vote, VoteTarget};
use crate::resolvers::services::Collaborators;
use crate::resolvers::gated;
use crate::sliding::{Icon, RenderedIcon, SemanticColor, SlidingAction, Visual};
use std::rc::Rc;

/// Upvote action. Pressing it while upvoted clears the vote.
#[must_use]
pub fn upvote(target: VoteTarget, current: Vote, services: &Collaborators) -> SlidingAction {
    vote_action(target, current, Vote::Up, services)
}

/// Downvote action. Pressing it while downvoted clears the vote.
#[must_use]
pub fn downvote(target: VoteTarget, current: Vote, services: &Collaborators) -> SlidingAction {
    vote_action(target, current, Vote::Down, services)
}

fn vote_action(
    target: VoteTarget,
    current: Vote,
    pressed: Vote,
    services: &Collaborators,
) -> SlidingAction {
    let (icon, color) = if pressed == Vote::Up {
        (Icon::ArrowUp, SemanticColor::Primary)
    } else {
        (Icon::ArrowDown, SemanticColor::Danger)
    };
    let slashed = current == pressed;
    let next = current.toggled(pressed);

    let votes = Rc::clone(&services.votes);
    let trigger = gated(&services.auth, move || {
        tracing::debug!(?target, score = next.score(), "casting vote");
        votes.vote_on(target, next)
    });

    SlidingAction::new(
        Visual::Render(Rc::new(move || RenderedIcon { icon, slashed })),
        color,
        trigger,
    )
}
