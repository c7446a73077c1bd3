//! Drag tracking and commit selection for a single swipeable list item.
//!
//! The host reports the drag ratio as the item moves: negative ratios reveal
//! the start side, positive ratios the end side. Crossing
//! [`FIRST_ACTION_RATIO`] arms the near action of the revealed side and
//! crossing [`SECOND_ACTION_RATIO`] arms the far one. Releasing commits the
//! armed action, if any, and always closes the item.

use crate::domain::Side;
use crate::settings::SwipeToggles;
use crate::sliding::action::{compose_actions, ActionPairs, RenderedIcon, SlidingAction};
use crate::sliding::viewmodel::{ActionRegion, SlidingViewModel};

/// Drag magnitude at which the near action becomes armed.
pub const FIRST_ACTION_RATIO: f64 = 1.0;

/// Drag magnitude at which the far action becomes armed.
pub const SECOND_ACTION_RATIO: f64 = 1.75;

/// Live drag state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub ratio: f64,
    pub is_dragging: bool,
}

/// Index of the armed slot for a drag of this magnitude: 0 is near, 1 is far.
#[must_use]
pub fn armed_index(ratio: f64) -> usize {
    usize::from(ratio.abs() >= SECOND_ACTION_RATIO)
}

/// Which side a ratio reveals, or `None` at rest.
#[must_use]
pub fn revealed_side(ratio: f64) -> Option<Side> {
    if ratio < 0.0 {
        Some(Side::Start)
    } else if ratio > 0.0 {
        Some(Side::End)
    } else {
        None
    }
}

/// An action selected on release.
#[derive(Debug, Clone)]
pub struct Commit {
    pub side: Side,
    pub index: usize,
    pub action: SlidingAction,
}

#[derive(Debug, Default)]
struct RenderCache {
    index: Option<usize>,
    icon: Option<RenderedIcon>,
    renders: usize,
}

impl RenderCache {
    fn get(&mut self, actions: &[SlidingAction; 2], index: usize) -> RenderedIcon {
        match self.icon {
            Some(icon) if self.index == Some(index) => icon,
            _ => {
                let icon = actions[index].render();
                self.index = Some(index);
                self.icon = Some(icon);
                self.renders += 1;
                icon
            }
        }
    }

    fn invalidate(&mut self) {
        self.index = None;
        self.icon = None;
    }
}

#[derive(Debug, Default)]
struct SideSlot {
    actions: Option<[SlidingAction; 2]>,
    cache: RenderCache,
}

impl SideSlot {
    fn new(pair: [Option<SlidingAction>; 2], enabled: bool) -> Self {
        Self {
            actions: if enabled { compose_actions(pair) } else { None },
            cache: RenderCache::default(),
        }
    }
}

/// A swipeable item with at least one interactive side.
#[derive(Debug)]
pub struct SlidingItem<C> {
    content: C,
    start: SideSlot,
    end: SideSlot,
    drag: DragState,
}

impl<C> SlidingItem<C> {
    #[must_use]
    pub const fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub const fn is_side_enabled(&self, side: Side) -> bool {
        self.slot(side).actions.is_some()
    }

    /// Armed slot of `side` for the current drag. A side that is not being
    /// revealed rests at its near slot.
    #[must_use]
    pub fn armed_index(&self, side: Side) -> usize {
        if revealed_side(self.drag.ratio) == Some(side) {
            armed_index(self.drag.ratio)
        } else {
            0
        }
    }

    /// Records a drag update. Returns whether the drag state changed.
    ///
    /// Integral and non-finite ratios are ignored: the host reports whole
    /// numbers while an item animates to rest. A drag toward a side with no
    /// actions is held at rest.
    pub fn on_drag(&mut self, ratio: f64) -> bool {
        if !ratio.is_finite() || ratio.fract() == 0.0 {
            tracing::trace!(ratio, "ignoring settle ratio");
            return false;
        }

        let ratio = match revealed_side(ratio) {
            Some(side) if !self.is_side_enabled(side) => 0.0,
            _ => ratio,
        };

        let next = DragState {
            ratio,
            is_dragging: true,
        };
        if next == self.drag {
            return false;
        }

        self.drag = next;
        true
    }

    /// Ends the drag and closes the item. Returns the armed action, if any.
    pub fn release(&mut self) -> Option<Commit> {
        let drag = std::mem::take(&mut self.drag);
        if !drag.is_dragging {
            return None;
        }

        let side = if drag.ratio <= -FIRST_ACTION_RATIO {
            Side::Start
        } else if drag.ratio >= FIRST_ACTION_RATIO {
            Side::End
        } else {
            tracing::trace!(ratio = drag.ratio, "released below threshold");
            return None;
        };

        let index = armed_index(drag.ratio);
        let action = self.slot(side).actions.as_ref()?[index].clone();
        tracing::debug!(?side, index, ratio = drag.ratio, "committing swipe action");

        Some(Commit {
            side,
            index,
            action,
        })
    }

    /// Ends the drag at the ratio reported by the release event.
    ///
    /// Unlike [`on_drag`](Self::on_drag), an integral ratio is accepted here
    /// so a release resting exactly on a threshold still commits.
    pub fn release_at(&mut self, ratio: f64) -> Option<Commit> {
        if self.drag.is_dragging && ratio.is_finite() {
            self.drag.ratio = match revealed_side(ratio) {
                Some(side) if !self.is_side_enabled(side) => 0.0,
                _ => ratio,
            };
        }
        self.release()
    }

    /// Replaces the action pairs after the item's live state changed,
    /// keeping the current drag. Cached visuals are recomputed on next view.
    ///
    /// The side enablement chosen at construction is kept.
    pub fn update_actions(&mut self, pairs: ActionPairs) {
        let ActionPairs { start, end } = pairs;
        if self.start.actions.is_some() {
            self.start.actions = compose_actions(start);
        }
        if self.end.actions.is_some() {
            self.end.actions = compose_actions(end);
        }
        self.start.cache.invalidate();
        self.end.cache.invalidate();
    }

    /// Builds the view of both action regions. The armed visual of each side
    /// is only re-rendered when its armed index changes.
    pub fn view(&mut self) -> SlidingViewModel {
        let drag = self.drag;
        let start_index = self.armed_index(Side::Start);
        let end_index = self.armed_index(Side::End);

        SlidingViewModel {
            start: Self::region(&mut self.start, Side::Start, start_index, drag.ratio),
            end: Self::region(&mut self.end, Side::End, end_index, drag.ratio),
            drag,
        }
    }

    /// How many times the visual of `side` has been rendered.
    #[must_use]
    pub const fn render_count(&self, side: Side) -> usize {
        self.slot(side).cache.renders
    }

    fn region(slot: &mut SideSlot, side: Side, index: usize, ratio: f64) -> Option<ActionRegion> {
        let actions = slot.actions.as_ref()?;
        let content = slot.cache.get(actions, index);
        let active = match side {
            Side::Start => ratio <= -FIRST_ACTION_RATIO,
            Side::End => ratio >= FIRST_ACTION_RATIO,
        };

        Some(ActionRegion {
            side,
            color: actions[index].color(),
            content,
            active,
        })
    }

    const fn slot(&self, side: Side) -> &SideSlot {
        match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        }
    }
}

/// A list item container, plain or sliding.
///
/// The kind is chosen once at construction from which sides have actions
/// and are enabled. It does not change while the item is mounted.
#[derive(Debug)]
pub enum SlidingContainer<C> {
    Plain(C),
    Sliding(SlidingItem<C>),
}

impl<C> SlidingContainer<C> {
    /// Wraps `content`, choosing the container kind from `pairs` and `toggles`.
    ///
    /// Start-side actions need `left_enabled`; end-side actions need
    /// `right_enabled`.
    pub fn new(content: C, pairs: ActionPairs, toggles: SwipeToggles) -> Self {
        let ActionPairs { start, end } = pairs;
        let start = SideSlot::new(start, toggles.is_enabled(Side::Start));
        let end = SideSlot::new(end, toggles.is_enabled(Side::End));

        if start.actions.is_none() && end.actions.is_none() {
            return Self::Plain(content);
        }

        Self::Sliding(SlidingItem {
            content,
            start,
            end,
            drag: DragState::default(),
        })
    }

    #[must_use]
    pub const fn is_sliding(&self) -> bool {
        matches!(self, Self::Sliding(_))
    }

    #[must_use]
    pub const fn content(&self) -> &C {
        match self {
            Self::Plain(content) => content,
            Self::Sliding(item) => item.content(),
        }
    }

    #[must_use]
    pub const fn as_sliding(&self) -> Option<&SlidingItem<C>> {
        match self {
            Self::Plain(_) => None,
            Self::Sliding(item) => Some(item),
        }
    }

    pub fn as_sliding_mut(&mut self) -> Option<&mut SlidingItem<C>> {
        match self {
            Self::Plain(_) => None,
            Self::Sliding(item) => Some(item),
        }
    }

    /// Forwards a drag update. Plain containers never move.
    pub fn on_drag(&mut self, ratio: f64) -> bool {
        self.as_sliding_mut().is_some_and(|item| item.on_drag(ratio))
    }

    /// Forwards a release. Plain containers never commit.
    pub fn release(&mut self) -> Option<Commit> {
        self.as_sliding_mut().and_then(SlidingItem::release)
    }

    /// Forwards a release with its final ratio. Plain containers never commit.
    pub fn release_at(&mut self, ratio: f64) -> Option<Commit> {
        self.as_sliding_mut().and_then(|item| item.release_at(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sliding::action::{Icon, SemanticColor, Visual};
    use futures_util::future::{ready, FutureExt};
    use std::cell::Cell;
    use std::rc::Rc;

    fn action(icon: Icon) -> SlidingAction {
        SlidingAction::new(Visual::Icon(icon), SemanticColor::Primary, || {
            ready(Ok(())).boxed_local()
        })
    }

    fn pairs() -> ActionPairs {
        ActionPairs {
            start: [Some(action(Icon::ArrowUp)), Some(action(Icon::ArrowDown))],
            end: [Some(action(Icon::ChevronCollapse)), Some(action(Icon::ArrowUndo))],
        }
    }

    fn sliding(pairs: ActionPairs, toggles: SwipeToggles) -> SlidingItem<()> {
        match SlidingContainer::new((), pairs, toggles) {
            SlidingContainer::Sliding(item) => item,
            SlidingContainer::Plain(()) => panic!("expected a sliding container"),
        }
    }

    fn committed_icon(item: &mut SlidingItem<()>) -> Option<Icon> {
        item.release().map(|commit| commit.action.render().icon)
    }

    #[test]
    fn armed_index_depends_on_magnitude_only() {
        for ratio in [0.1, -0.1, 1.2, -1.2, 1.7499, -1.7499] {
            assert_eq!(armed_index(ratio), 0, "ratio {ratio}");
        }
        for ratio in [1.75, -1.75, 2.5, -3.1] {
            assert_eq!(armed_index(ratio), 1, "ratio {ratio}");
        }
    }

    #[test]
    fn no_enabled_side_makes_plain_container() {
        let toggles = SwipeToggles { left_enabled: false, right_enabled: false };
        assert!(!SlidingContainer::new((), pairs(), toggles).is_sliding());

        assert!(!SlidingContainer::new((), ActionPairs::default(), SwipeToggles::default())
            .is_sliding());
    }

    #[test]
    fn integral_ratios_are_ignored() {
        let mut item = sliding(pairs(), SwipeToggles::default());
        assert!(item.on_drag(1.3));
        assert!(!item.on_drag(2.0));
        assert!(!item.on_drag(f64::NAN));
        assert_eq!(item.drag().ratio, 1.3);
    }

    #[test]
    fn release_commits_near_and_far_actions() {
        let mut item = sliding(pairs(), SwipeToggles::default());

        item.on_drag(-1.2);
        assert_eq!(committed_icon(&mut item), Some(Icon::ArrowUp));

        item.on_drag(-1.9);
        assert_eq!(committed_icon(&mut item), Some(Icon::ArrowDown));

        item.on_drag(1.1);
        assert_eq!(committed_icon(&mut item), Some(Icon::ChevronCollapse));

        item.on_drag(1.8);
        assert_eq!(committed_icon(&mut item), Some(Icon::ArrowUndo));
    }

    #[test]
    fn release_below_threshold_commits_nothing_and_resets() {
        let mut item = sliding(pairs(), SwipeToggles::default());
        item.on_drag(0.5);

        assert!(item.release().is_none());
        assert_eq!(item.drag(), DragState::default());
    }

    #[test]
    fn release_exactly_on_threshold_commits() {
        let mut item = sliding(pairs(), SwipeToggles::default());

        item.on_drag(-0.8);
        let commit = item.release_at(-1.0);
        assert_eq!(commit.as_ref().map(|c| (c.side, c.index)), Some((Side::Start, 0)));
        assert_eq!(item.drag(), DragState::default());

        item.on_drag(1.3);
        let commit = item.release_at(1.75);
        assert_eq!(commit.map(|c| c.action.render().icon), Some(Icon::ArrowUndo));
    }

    #[test]
    fn release_at_without_drag_commits_nothing() {
        let mut item = sliding(pairs(), SwipeToggles::default());
        assert!(item.release_at(-1.5).is_none());
    }

    #[test]
    fn release_without_drag_is_a_no_op() {
        let mut item = sliding(pairs(), SwipeToggles::default());
        assert!(item.release().is_none());
    }

    #[test]
    fn disabled_side_never_commits() {
        let toggles = SwipeToggles { left_enabled: false, right_enabled: true };
        let mut item = sliding(pairs(), toggles);

        assert!(!item.is_side_enabled(Side::Start));
        item.on_drag(-1.9);
        assert!(item.release().is_none());
    }

    #[test]
    fn lone_action_fills_far_slot() {
        let pairs = ActionPairs {
            start: [None, None],
            end: [None, Some(action(Icon::ArrowUndo))],
        };
        let mut item = sliding(pairs, SwipeToggles::default());

        item.on_drag(1.1);
        assert_eq!(committed_icon(&mut item), Some(Icon::ArrowUndo));
    }

    #[test]
    fn visual_renders_only_when_armed_index_changes() {
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        let lazy = SlidingAction::new(
            Visual::Render(Rc::new(move || {
                counter.set(counter.get() + 1);
                RenderedIcon { icon: Icon::ArrowUp, slashed: false }
            })),
            SemanticColor::Primary,
            || ready(Ok(())).boxed_local(),
        );
        let pairs = ActionPairs {
            start: [None, None],
            end: [Some(lazy), Some(action(Icon::ArrowUndo))],
        };
        let mut item = sliding(pairs, SwipeToggles::default());

        for ratio in [0.2, 0.6, 1.1, 1.5] {
            item.on_drag(ratio);
            item.view();
        }
        assert_eq!(item.render_count(Side::End), 1);
        assert_eq!(renders.get(), 1);

        item.on_drag(1.8);
        let view = item.view();
        assert_eq!(item.render_count(Side::End), 2);
        assert_eq!(view.end.map(|region| region.content.icon), Some(Icon::ArrowUndo));
    }

    fn vote_action(slashed: bool) -> SlidingAction {
        SlidingAction::new(
            Visual::Render(Rc::new(move || RenderedIcon { icon: Icon::ArrowUp, slashed })),
            SemanticColor::Primary,
            || ready(Ok(())).boxed_local(),
        )
    }

    #[test]
    fn update_actions_rerenders_live_state_at_same_index() {
        let pairs = ActionPairs {
            start: [Some(vote_action(false)), Some(action(Icon::ArrowDown))],
            end: [Some(action(Icon::ChevronCollapse)), None],
        };
        let mut item = sliding(pairs, SwipeToggles::default());

        let before = item.view().start.expect("start region");
        assert!(!before.content.slashed);
        assert_eq!(item.armed_index(Side::Start), 0);
        assert_eq!(item.render_count(Side::Start), 1);

        item.update_actions(ActionPairs {
            start: [Some(vote_action(true)), Some(action(Icon::ArrowDown))],
            end: [Some(action(Icon::ChevronCollapse)), None],
        });

        let after = item.view().start.expect("start region");
        assert_eq!(after.content.icon, Icon::ArrowUp);
        assert!(after.content.slashed);
        assert_eq!(item.armed_index(Side::Start), 0);
        assert_eq!(item.render_count(Side::Start), 2);
    }

    #[test]
    fn update_actions_with_empty_side_drops_its_region() {
        let mut item = sliding(pairs(), SwipeToggles::default());
        item.on_drag(-1.2);
        assert!(item.view().start.is_some());

        item.update_actions(ActionPairs {
            start: [None, None],
            end: [Some(action(Icon::ChevronCollapse)), None],
        });

        let view = item.view();
        assert!(view.start.is_none());
        assert!(!item.is_side_enabled(Side::Start));
        assert!(item.release().is_none());
        assert_eq!(view.end.map(|region| region.content.icon), Some(Icon::ChevronCollapse));
    }

    #[test]
    fn update_actions_keeps_disabled_side_disabled() {
        let toggles = SwipeToggles { left_enabled: false, right_enabled: true };
        let mut item = sliding(pairs(), toggles);

        item.update_actions(pairs());

        assert!(!item.is_side_enabled(Side::Start));
        assert!(item.view().start.is_none());
    }

    #[test]
    fn region_is_active_past_first_threshold() {
        let mut item = sliding(pairs(), SwipeToggles::default());

        item.on_drag(-0.4);
        let view = item.view();
        assert!(!view.start.as_ref().is_some_and(|region| region.active));

        item.on_drag(-1.01);
        let view = item.view();
        assert!(view.start.is_some_and(|region| region.active));
        assert!(view.end.is_some_and(|region| !region.active));
    }
}
