//! Direction and gesture metadata for settings screens.
//!
//! Settings screens render one row per visible swipe direction, showing the
//! direction title and the label of the gesture currently bound to it, and
//! offer the full list of gestures for that content kind when a row is opened.

use super::model::SwipeToggles;
use crate::domain::{Direction, DirectionalGestures, SwipeGesture};

/// One selectable entry in a gesture picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOption<G> {
    pub label: &'static str,
    pub gesture: G,
}

/// One row of the swipe settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRow<G> {
    pub direction: Direction,
    pub title: &'static str,
    pub current: G,
    pub current_label: &'static str,
}

/// Every gesture selectable for a content kind, in picker order.
#[must_use]
pub fn gesture_options<G: SwipeGesture>() -> Vec<GestureOption<G>> {
    G::all()
        .iter()
        .map(|gesture| GestureOption {
            label: gesture.label(),
            gesture: *gesture,
        })
        .collect()
}

/// Directions whose side is enabled. Disabled sides get no picker rows.
#[must_use]
pub fn visible_directions(toggles: SwipeToggles) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|direction| toggles.is_enabled(direction.side()))
        .collect()
}

/// Settings rows for one content kind's mapping.
#[must_use]
pub fn direction_rows<G: SwipeGesture>(
    mapping: &DirectionalGestures<G>,
    toggles: SwipeToggles,
) -> Vec<DirectionRow<G>> {
    visible_directions(toggles)
        .into_iter()
        .map(|direction| {
            let current = mapping.get(direction);
            DirectionRow {
                direction,
                title: direction.title(),
                current,
                current_label: current.label(),
            }
        })
        .collect()
}
