//! The sliding list item widget.
//!
//! # Modules
//!
//! - [`action`]: Action descriptors and pair reconciliation
//! - [`item`]: Drag tracking, thresholds, and commit selection
//! - [`viewmodel`]: Render-ready action regions
//! - [`dispatch`]: Running committed actions and reporting failures

pub mod action;
pub mod dispatch;
pub mod item;
pub mod viewmodel;

pub use action::{
    compose_actions, ActionPairs, Icon, RenderedIcon, SemanticColor, SlidingAction, TriggerFuture,
    Visual,
};
pub use dispatch::{dispatch_commit, Notifier, Toast, ToastPosition, TOAST_DURATION};
pub use item::{
    armed_index, revealed_side, Commit, DragState, SlidingContainer, SlidingItem,
    FIRST_ACTION_RATIO, SECOND_ACTION_RATIO,
};
pub use viewmodel::{ActionRegion, SlidingViewModel};
