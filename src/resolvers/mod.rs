//! Action resolvers: from a configured gesture to a concrete sliding action.
//!
//! Each content type has its own resolver. Resolvers are pure: they read the
//! row context passed in, capture the collaborators they need, and return a
//! fresh [`SlidingAction`]. Matching is exhaustive so a new gesture cannot be
//! added without deciding what it does.
//!
//! # Modules
//!
//! - [`services`]: Collaborator traits provided by the host
//! - [`votes`]: Upvote and downvote, shared by every content type
//! - [`comment`], [`post`], [`inbox`]: Per content type resolvers

pub mod comment;
pub mod inbox;
pub mod post;
pub mod services;
pub mod votes;

pub use services::{
    AuthGuard, Collaborators, CommentThread, PostVisibility, ReadStateService, ReplyComposer,
    ServiceFuture, VoteService,
};

use crate::domain::{DirectionalGestures, Side, SwipeGesture};
use crate::sliding::{ActionPairs, SlidingAction, TriggerFuture};
use futures_util::future::{ready, FutureExt};
use std::rc::Rc;

/// Resolves all four directions of `mapping` into start and end pairs.
pub fn action_pairs<G: SwipeGesture>(
    mapping: &DirectionalGestures<G>,
    mut resolve: impl FnMut(G) -> Option<SlidingAction>,
) -> ActionPairs {
    let [short_left, left] = mapping.side_pair(Side::Start);
    let [short_right, right] = mapping.side_pair(Side::End);

    ActionPairs {
        start: [resolve(short_left), resolve(left)],
        end: [resolve(short_right), resolve(right)],
    }
}

/// Wraps `trigger` so it only runs for a signed-in user. When the guard
/// presents a login prompt the trigger is skipped and resolves successfully.
pub(crate) fn gated(
    auth: &Rc<dyn AuthGuard>,
    trigger: impl Fn() -> TriggerFuture + 'static,
) -> impl Fn() -> TriggerFuture + 'static {
    let auth = Rc::clone(auth);
    move || {
        if auth.require_auth() {
            tracing::debug!("login required, skipping swipe action");
            return ready(Ok(())).boxed_local();
        }
        trigger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SwipeError;
    use crate::domain::{
        CommentContext, CommentGesture, CommentId, InboxContext, InboxGesture, InboxItemId,
        InboxKind, PostContext, PostGesture, PostId, ReplyResult, ReplyTarget, Vote, VoteTarget,
    };
    use crate::sliding::{Icon, SemanticColor};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Vote(VoteTarget, Vote),
        Reply(ReplyTarget),
        Collapse(CommentId, Option<usize>),
        Prepend(Vec<ReplyResult>),
        Refresh,
        Hide(PostId, bool),
        Read(InboxItemId, bool),
    }

    #[derive(Default)]
    struct Fake {
        calls: RefCell<Vec<Call>>,
        signed_out: Cell<bool>,
        reply: RefCell<Option<ReplyResult>>,
        fail_votes: Cell<bool>,
    }

    impl Fake {
        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl VoteService for Fake {
        fn vote_on(&self, target: VoteTarget, vote: Vote) -> ServiceFuture<()> {
            self.record(Call::Vote(target, vote));
            let result = if self.fail_votes.get() {
                Err(SwipeError::Vote("offline".into()))
            } else {
                Ok(())
            };
            ready(result).boxed_local()
        }
    }

    impl ReplyComposer for Fake {
        fn present_reply(&self, target: ReplyTarget) -> ServiceFuture<Option<ReplyResult>> {
            self.record(Call::Reply(target));
            ready(Ok(self.reply.borrow().clone())).boxed_local()
        }
    }

    impl CommentThread for Fake {
        fn collapse_root(&self, comment: CommentId, root_index: Option<usize>) {
            self.record(Call::Collapse(comment, root_index));
        }

        fn prepend_comments(&self, comments: Vec<ReplyResult>) {
            self.record(Call::Prepend(comments));
        }

        fn refresh(&self) {
            self.record(Call::Refresh);
        }
    }

    impl PostVisibility for Fake {
        fn set_hidden(&self, post: PostId, hidden: bool) {
            self.record(Call::Hide(post, hidden));
        }
    }

    impl ReadStateService for Fake {
        fn set_read(&self, item: InboxItemId, read: bool) -> ServiceFuture<()> {
            self.record(Call::Read(item, read));
            ready(Ok(())).boxed_local()
        }
    }

    impl AuthGuard for Fake {
        fn require_auth(&self) -> bool {
            self.signed_out.get()
        }
    }

    fn services() -> (Rc<Fake>, Collaborators) {
        let fake = Rc::new(Fake::default());
        let collaborators = Collaborators {
            votes: fake.clone(),
            replies: fake.clone(),
            thread: fake.clone(),
            visibility: fake.clone(),
            read_state: fake.clone(),
            auth: fake.clone(),
        };
        (fake, collaborators)
    }

    fn comment() -> CommentContext {
        CommentContext {
            comment_id: CommentId(11),
            my_vote: Vote::Neutral,
            collapsed: false,
            root_index: Some(2),
        }
    }

    fn inbox() -> InboxContext {
        InboxContext {
            item_id: InboxItemId { kind: InboxKind::Reply, id: 5 },
            comment_id: CommentId(40),
            my_vote: Vote::Neutral,
            read: false,
        }
    }

    fn run(action: Option<SlidingAction>) -> crate::domain::error::Result<()> {
        let action = action.expect("gesture should resolve to an action");
        block_on(action.trigger())
    }

    #[test]
    fn none_resolves_to_nothing() {
        let (_, services) = services();
        assert!(comment::resolve(CommentGesture::None, &comment(), &services).is_none());
        assert!(inbox::resolve(InboxGesture::None, &inbox(), &services).is_none());
    }

    #[test]
    fn upvote_toggles_off_when_already_upvoted() {
        let (fake, services) = services();
        let ctx = CommentContext { my_vote: Vote::Up, ..comment() };

        let action = comment::resolve(CommentGesture::Upvote, &ctx, &services);
        assert!(action.as_ref().is_some_and(|a| a.render().slashed));
        run(action).unwrap();

        assert_eq!(
            *fake.calls.borrow(),
            vec![Call::Vote(VoteTarget::Comment(CommentId(11)), Vote::Neutral)]
        );
    }

    #[test]
    fn downvote_from_upvoted_casts_downvote() {
        let (fake, services) = services();
        let ctx = PostContext { post_id: PostId(3), my_vote: Vote::Up, hidden: false };

        let action = post::resolve(PostGesture::Downvote, &ctx, &services);
        assert!(action.as_ref().is_some_and(|a| {
            a.color() == SemanticColor::Danger && !a.render().slashed
        }));
        run(action).unwrap();

        assert_eq!(*fake.calls.borrow(), vec![Call::Vote(VoteTarget::Post(PostId(3)), Vote::Down)]);
    }

    #[test]
    fn vote_failure_propagates_to_caller() {
        let (fake, services) = services();
        fake.fail_votes.set(true);

        let result = run(comment::resolve(CommentGesture::Upvote, &comment(), &services));
        assert!(matches!(result, Err(SwipeError::Vote(_))));
    }

    #[test]
    fn collapse_uses_root_index_and_is_not_gated() {
        let (fake, services) = services();
        fake.signed_out.set(true);

        let action = comment::resolve(CommentGesture::Collapse, &comment(), &services);
        assert_eq!(action.as_ref().map(|a| a.render().icon), Some(Icon::ChevronCollapse));
        run(action).unwrap();

        assert_eq!(*fake.calls.borrow(), vec![Call::Collapse(CommentId(11), Some(2))]);
    }

    #[test]
    fn comment_reply_prepends_new_comment() {
        let (fake, services) = services();
        let created = ReplyResult { comment_id: CommentId(99), content: "agreed".into() };
        *fake.reply.borrow_mut() = Some(created.clone());

        run(comment::resolve(CommentGesture::Reply, &comment(), &services)).unwrap();

        assert_eq!(
            *fake.calls.borrow(),
            vec![
                Call::Reply(ReplyTarget::Comment(CommentId(11))),
                Call::Prepend(vec![created]),
            ]
        );
    }

    #[test]
    fn cancelled_reply_does_nothing_more() {
        let (fake, services) = services();

        run(inbox::resolve(InboxGesture::Reply, &inbox(), &services)).unwrap();

        assert_eq!(fake.calls.borrow().len(), 1);
        assert!(!fake.calls.borrow().contains(&Call::Refresh));
    }

    #[test]
    fn inbox_reply_refreshes_thread() {
        let (fake, services) = services();
        *fake.reply.borrow_mut() =
            Some(ReplyResult { comment_id: CommentId(41), content: "thanks".into() });

        run(inbox::resolve(InboxGesture::Reply, &inbox(), &services)).unwrap();

        assert_eq!(fake.calls.borrow().last(), Some(&Call::Refresh));
    }

    #[test]
    fn signed_out_user_is_not_replied_for() {
        let (fake, services) = services();
        fake.signed_out.set(true);

        let ctx = PostContext { post_id: PostId(1), my_vote: Vote::Neutral, hidden: false };
        run(post::resolve(PostGesture::Reply, &ctx, &services)).unwrap();
        run(post::resolve(PostGesture::Hide, &ctx, &services)).unwrap();
        run(inbox::resolve(InboxGesture::MarkReadUnread, &inbox(), &services)).unwrap();

        assert!(fake.calls.borrow().is_empty());
    }

    #[test]
    fn hide_toggles_and_shows_state() {
        let (fake, services) = services();
        let hidden = PostContext { post_id: PostId(8), my_vote: Vote::Neutral, hidden: true };

        let action = post::resolve(PostGesture::Hide, &hidden, &services);
        assert!(action.as_ref().is_some_and(|a| {
            a.render().icon == Icon::Eye && a.color() == SemanticColor::Tertiary
        }));
        run(action).unwrap();

        assert_eq!(*fake.calls.borrow(), vec![Call::Hide(PostId(8), false)]);
    }

    #[test]
    fn mark_read_flips_read_state() {
        let (fake, services) = services();

        run(inbox::resolve(InboxGesture::MarkReadUnread, &inbox(), &services)).unwrap();

        assert_eq!(
            *fake.calls.borrow(),
            vec![Call::Read(InboxItemId { kind: InboxKind::Reply, id: 5 }, true)]
        );
    }

    #[test]
    fn action_pairs_follow_direction_slots() {
        let (_, services) = services();
        let mapping = DirectionalGestures {
            short_left: CommentGesture::Upvote,
            left: CommentGesture::None,
            short_right: CommentGesture::Collapse,
            right: CommentGesture::Reply,
        };

        let pairs = comment::actions(&mapping, &comment(), &services);

        assert_eq!(pairs.start[0].as_ref().map(|a| a.render().icon), Some(Icon::ArrowUp));
        assert!(pairs.start[1].is_none());
        assert_eq!(pairs.end[0].as_ref().map(|a| a.render().icon), Some(Icon::ChevronCollapse));
        assert_eq!(pairs.end[1].as_ref().map(|a| a.render().icon), Some(Icon::ArrowUndo));
    }
}
