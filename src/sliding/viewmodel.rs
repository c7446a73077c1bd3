//! Render-ready view of a sliding item.

use crate::domain::Side;
use crate::sliding::action::{RenderedIcon, SemanticColor};
use crate::sliding::item::DragState;

/// The revealed region behind one side of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRegion {
    pub side: Side,
    /// Color of the currently armed action.
    pub color: SemanticColor,
    /// Visual of the currently armed action.
    pub content: RenderedIcon,
    /// The drag has passed the first threshold toward this side.
    pub active: bool,
}

/// Both regions of an item plus its drag state. A disabled side has no region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingViewModel {
    pub start: Option<ActionRegion>,
    pub end: Option<ActionRegion>,
    pub drag: DragState,
}

impl SlidingViewModel {
    #[must_use]
    pub const fn region(&self, side: Side) -> Option<&ActionRegion> {
        match side {
            Side::Start => self.start.as_ref(),
            Side::End => self.end.as_ref(),
        }
    }
}
