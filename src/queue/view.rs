use crate::engine::{EngineEvent, PlaybackEngine};
use crate::keys::Action;
use crate::library::{QueryCompletion, QueryDispatch};

use super::editor::QueueEditCoordinator;
use super::list::{Completion, QueueListController};

/// The play-queue view: list controller plus edit coordinator, with the
/// input boundary that decides which actions reach them.
#[derive(Debug, Default)]
pub struct NowPlayingView {
    list: QueueListController,
    editor: QueueEditCoordinator,
}

impl NowPlayingView {
    pub fn list(&self) -> &QueueListController {
        &self.list
    }

    pub fn editor(&self) -> &QueueEditCoordinator {
        &self.editor
    }

    pub fn is_visible(&self) -> bool {
        self.list.is_visible()
    }

    pub fn on_shown(&mut self, dispatch: &dyn QueryDispatch) {
        self.list.on_shown(dispatch);
    }

    pub fn on_hidden(&mut self) {
        self.list.on_hidden();
    }

    pub fn set_visible_count(&mut self, count: usize) {
        self.list.set_visible_count(count);
    }

    /// Handle a queue action. Returns `true` if it was consumed.
    pub fn handle_action(
        &mut self,
        action: Action,
        engine: &dyn PlaybackEngine,
        dispatch: &dyn QueryDispatch,
    ) -> bool {
        if !self.list.is_visible() {
            return false;
        }
        if action.is_edit() && engine.is_shuffled() {
            tracing::debug!(target: "queue", ?action, "ignoring edit on shuffled queue");
            return true;
        }

        let selected = self.list.selected();
        let len = self.list.len();
        match action {
            Action::SelectPrevious => self.list.select_previous(),
            Action::SelectNext => self.list.select_next(),
            Action::SelectFirst => self.list.select_first(),
            Action::SelectLast => self.list.select_last(),
            Action::Activate => {
                if selected < len {
                    engine.play_at(selected);
                }
            }
            Action::MoveUp => {
                if len > 0 && self.editor.move_up(engine, selected) {
                    self.list.requery(dispatch);
                }
            }
            Action::MoveDown => {
                if self.editor.move_down(engine, selected, len) {
                    self.list.requery(dispatch);
                }
            }
            Action::Delete => {
                if selected < len && self.editor.delete(engine, selected) {
                    self.list.requery(dispatch);
                }
            }
            _ => return false,
        }
        true
    }

    pub fn handle_event(&mut self, event: &EngineEvent, dispatch: &dyn QueryDispatch) {
        if !self.list.is_visible() {
            return;
        }
        match event {
            EngineEvent::TrackChanged { index } => self.list.set_playing(*index),
            EngineEvent::ShuffleChanged(_) => {
                self.list.requery(dispatch);
            }
            EngineEvent::VolumeChanged(_) | EngineEvent::PositionChanged(_) => {}
        }
    }

    /// Apply a finished query and settle the selection.
    pub fn on_query_completed(&mut self, completion: QueryCompletion) {
        if self.list.accept(completion) == Completion::Applied {
            let reselect = self.editor.take_reselect();
            self.list.reconcile(reselect);
        }
    }
}
