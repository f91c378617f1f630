//! Editable play-queue view.
//!
//! Edits go to the engine through [`QueueEditCoordinator`], which records the
//! row to reselect. [`QueueListController`] then re-queries the engine's queue
//! and reconciles selection and scroll once the snapshot arrives.

mod editor;
mod list;
pub mod row;
mod selection;
mod view;

pub use editor::QueueEditCoordinator;
pub use list::{Completion, QueueListController};
pub use selection::SelectionState;
pub use view::NowPlayingView;
