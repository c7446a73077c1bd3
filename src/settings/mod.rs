//! Gesture mapping store contents.
//!
//! - [`model`]: The versioned [`SwipeSettings`] snapshot, setting keys, and changes
//! - [`catalog`]: Direction titles, gesture labels, and settings rows

pub mod catalog;
pub mod model;

pub use catalog::{direction_rows, gesture_options, visible_directions, DirectionRow, GestureOption};
pub use model::{gesture_key, toggle_key, SettingChange, SwipeSettings, SwipeToggles};
