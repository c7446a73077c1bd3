//! Action descriptors shown behind a sliding item.
//!
//! A [`SlidingAction`] is what a resolver hands the widget: how to draw the
//! action, what color its region uses, and what to run when it is committed.
//! Descriptors are rebuilt on every render from live item state and are never
//! cached across state changes.

use crate::domain::error::Result;
use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

/// Icons an action region can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowUp,
    ArrowDown,
    ArrowUndo,
    ChevronCollapse,
    ChevronExpand,
    EyeOff,
    Eye,
    MailUnread,
    MailOpen,
}

/// Semantic background color of an action region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    Primary,
    Danger,
    Tertiary,
}

/// Fully resolved visual of an action region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderedIcon {
    pub icon: Icon,
    /// Drawn with a slash through it, e.g. an upvote arrow when already upvoted.
    pub slashed: bool,
}

impl From<Icon> for RenderedIcon {
    fn from(icon: Icon) -> Self {
        Self {
            icon,
            slashed: false,
        }
    }
}

/// How an action is drawn: a plain icon, or a renderer evaluated lazily.
#[derive(Clone)]
pub enum Visual {
    Icon(Icon),
    Render(Rc<dyn Fn() -> RenderedIcon>),
}

impl Visual {
    #[must_use]
    pub fn render(&self) -> RenderedIcon {
        match self {
            Self::Icon(icon) => (*icon).into(),
            Self::Render(render) => render(),
        }
    }
}

impl fmt::Debug for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Icon(icon) => f.debug_tuple("Icon").field(icon).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Future returned by a committed action.
pub type TriggerFuture = LocalBoxFuture<'static, Result<()>>;

/// A resolved action: visual, region color, and trigger.
#[derive(Clone)]
pub struct SlidingAction {
    visual: Visual,
    color: SemanticColor,
    trigger: Rc<dyn Fn() -> TriggerFuture>,
}

impl SlidingAction {
    pub fn new(
        visual: Visual,
        color: SemanticColor,
        trigger: impl Fn() -> TriggerFuture + 'static,
    ) -> Self {
        Self {
            visual,
            color,
            trigger: Rc::new(trigger),
        }
    }

    #[must_use]
    pub const fn visual(&self) -> &Visual {
        &self.visual
    }

    #[must_use]
    pub const fn color(&self) -> SemanticColor {
        self.color
    }

    #[must_use]
    pub fn render(&self) -> RenderedIcon {
        self.visual.render()
    }

    /// Starts the action. Synchronous work happens before this returns.
    #[must_use]
    pub fn trigger(&self) -> TriggerFuture {
        (self.trigger)()
    }
}

impl fmt::Debug for SlidingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingAction")
            .field("visual", &self.visual)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Near/far action candidates for both sides of an item, before reconciliation.
#[derive(Debug, Clone, Default)]
pub struct ActionPairs {
    pub start: [Option<SlidingAction>; 2],
    pub end: [Option<SlidingAction>; 2],
}

/// Reconciles an optional `[near, far]` pair into a full pair.
///
/// A lone action fills both slots so the far stop always has something to
/// arm. Returns `None` when neither slot is bound, which disables the side.
///
/// ```
/// use swipekit::sliding::compose_actions;
///
/// assert_eq!(compose_actions([Some(1), Some(2)]), Some([1, 2]));
/// assert_eq!(compose_actions([None, Some(2)]), Some([2, 2]));
/// assert_eq!(compose_actions::<i32>([None, None]), None);
/// ```
pub fn compose_actions<A: Clone>(pair: [Option<A>; 2]) -> Option<[A; 2]> {
    let [first, second] = pair;
    match (first, second) {
        (Some(first), Some(second)) => Some([first, second]),
        (Some(only), None) | (None, Some(only)) => Some([only.clone(), only]),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{ready, FutureExt};
    use std::cell::Cell;

    #[test]
    fn both_slots_are_kept_in_order() {
        assert_eq!(compose_actions([Some('a'), Some('b')]), Some(['a', 'b']));
    }

    #[test]
    fn lone_slot_is_duplicated() {
        assert_eq!(compose_actions([Some('a'), None]), Some(['a', 'a']));
        assert_eq!(compose_actions([None, Some('b')]), Some(['b', 'b']));
    }

    #[test]
    fn empty_pair_disables_side() {
        assert_eq!(compose_actions::<char>([None, None]), None);
    }

    #[test]
    fn lazy_visual_runs_on_each_render() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let action = SlidingAction::new(
            Visual::Render(Rc::new(move || {
                counter.set(counter.get() + 1);
                RenderedIcon { icon: Icon::ArrowUp, slashed: true }
            })),
            SemanticColor::Primary,
            || ready(Ok(())).boxed_local(),
        );

        assert_eq!(calls.get(), 0);
        assert!(action.render().slashed);
        assert_eq!(calls.get(), 1);
    }
}
