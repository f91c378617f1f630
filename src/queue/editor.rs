use crate::engine::PlaybackEngine;

/// Applies move/delete edits to the engine's queue and remembers which row
/// should be selected once the list has been re-queried.
///
/// Callers must not edit a shuffled queue; the view checks
/// [`PlaybackEngine::is_shuffled`] before calling in here.
#[derive(Debug, Default)]
pub struct QueueEditCoordinator {
    pending_reselect: Option<usize>,
}

impl QueueEditCoordinator {
    /// Move the entry at `selected` one row up. No-op on the first row.
    pub fn move_up(&mut self, engine: &dyn PlaybackEngine, selected: usize) -> bool {
        if selected == 0 {
            return false;
        }
        self.move_entry(engine, selected, selected - 1)
    }

    /// Move the entry at `selected` one row down. No-op on the last row.
    pub fn move_down(&mut self, engine: &dyn PlaybackEngine, selected: usize, len: usize) -> bool {
        if selected + 1 >= len {
            return false;
        }
        self.move_entry(engine, selected, selected + 1)
    }

    /// Reselects `to` after the next requery.
    pub fn move_entry(&mut self, engine: &dyn PlaybackEngine, from: usize, to: usize) -> bool {
        if !engine.move_entry(from, to) {
            return false;
        }
        tracing::debug!(target: "queue", from, to, "move");
        self.pending_reselect = Some(to);
        true
    }

    /// Reselects the same position, now holding the following entry.
    pub fn delete(&mut self, engine: &dyn PlaybackEngine, index: usize) -> bool {
        if !engine.delete_entry(index) {
            return false;
        }
        tracing::debug!(target: "queue", index, "delete");
        self.pending_reselect = Some(index);
        true
    }

    pub fn pending_reselect(&self) -> Option<usize> {
        self.pending_reselect
    }

    /// Hand out the reselect target and clear it.
    pub fn take_reselect(&mut self) -> Option<usize> {
        self.pending_reselect.take()
    }
}
