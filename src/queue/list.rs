use std::sync::Arc;

use crate::library::{QueryCompletion, QueryDispatch, QueryTicket, Track};

use super::selection::SelectionState;

/// What happened to a query completion handed to
/// [`QueueListController::accept`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The list now shows the snapshot; reconcile next.
    Applied,
    /// A newer query was issued after this one.
    Stale,
    /// The fetch failed; the previous list stays on screen.
    Failed,
}

/// The displayed copy of the play queue.
///
/// Every [`requery`](Self::requery) bumps a generation counter, and only the
/// completion carrying the latest generation is applied.
#[derive(Debug, Default)]
pub struct QueueListController {
    tracks: Vec<Arc<Track>>,
    playing: Option<usize>,
    selection: SelectionState,
    generation: u64,
    visible: bool,
}

impl QueueListController {
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> usize {
        self.selection.selected
    }

    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a fresh fetch, superseding any still in flight.
    pub fn requery(&mut self, dispatch: &dyn QueryDispatch) -> QueryTicket {
        self.generation += 1;
        let ticket = QueryTicket {
            generation: self.generation,
        };
        tracing::debug!(target: "queue", generation = ticket.generation, "requery");
        dispatch.dispatch(ticket);
        ticket
    }

    /// Take in a finished query.
    pub fn accept(&mut self, completion: QueryCompletion) -> Completion {
        if completion.ticket.generation != self.generation || !self.visible {
            tracing::debug!(
                target: "queue",
                generation = completion.ticket.generation,
                current = self.generation,
                "dropping stale queue snapshot"
            );
            return Completion::Stale;
        }

        match completion.result {
            Ok(snapshot) => {
                self.tracks = snapshot.tracks;
                self.playing = snapshot.playing;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(target: "queue", "queue query failed: {e}");
                Completion::Failed
            }
        }
    }

    /// Settle selection and scroll after a snapshot was applied.
    ///
    /// An explicit `reselect` (from an edit) scrolls only as far as needed to
    /// show it. Otherwise the playing row (or row 0) is selected and becomes
    /// the first visible row.
    pub fn reconcile(&mut self, reselect: Option<usize>) {
        let len = self.tracks.len();
        if len == 0 {
            self.selection.select(0, 0);
            return;
        }

        match reselect {
            Some(target) => self.selection.select(target, len),
            None => {
                let target = self.playing.filter(|&i| i < len).unwrap_or(0);
                self.selection.selected = target;
                // Row 0 leaves the window at offset 0.
                self.selection.first_visible = target;
            }
        }
    }

    /// Engine moved to another entry; no requery needed.
    pub fn set_playing(&mut self, index: Option<usize>) {
        self.playing = index.filter(|&i| i < self.tracks.len());
    }

    pub fn on_shown(&mut self, dispatch: &dyn QueryDispatch) {
        self.visible = true;
        self.requery(dispatch);
    }

    /// Drop the displayed rows; the engine's queue is untouched.
    pub fn on_hidden(&mut self) {
        self.visible = false;
        self.tracks.clear();
        self.playing = None;
        // Anything still in flight belongs to the old view.
        self.generation += 1;
    }

    pub fn set_visible_count(&mut self, count: usize) {
        self.selection.set_visible_count(count);
    }

    pub fn select_previous(&mut self) {
        self.selection.select_previous(self.tracks.len());
    }

    pub fn select_next(&mut self) {
        self.selection.select_next(self.tracks.len());
    }

    pub fn select_first(&mut self) {
        self.selection.select_first(self.tracks.len());
    }

    pub fn select_last(&mut self) {
        self.selection.select_last(self.tracks.len());
    }
}
