use std::sync::Arc;
use std::time::Duration;

use crate::library::Track;

use super::events::Subscription;

/// Transport state reported by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Everything the front end needs from a playback engine.
///
/// Methods take `&self`; implementations keep their state behind a lock so a
/// handle can be shared with the query worker.
pub trait PlaybackEngine {
    /// Queue index of the playing (or paused) entry.
    fn current_index(&self) -> Option<usize>;
    fn queue_count(&self) -> usize;
    fn current_track(&self) -> Option<Arc<Track>>;
    /// Output volume in `[0, 1]`.
    fn volume(&self) -> f64;
    /// Elapsed time in the current track.
    fn position(&self) -> Duration;
    fn playback_state(&self) -> PlaybackState;
    fn is_shuffled(&self) -> bool;

    fn play_at(&self, index: usize);
    /// Move a queue entry. Returns `false` if nothing changed.
    fn move_entry(&self, from: usize, to: usize) -> bool;
    /// Remove a queue entry. Returns `false` if nothing changed.
    fn delete_entry(&self, index: usize) -> bool;

    fn toggle_pause(&self);
    fn stop(&self);
    fn next(&self);
    fn previous(&self);
    fn seek_by(&self, seconds: i64);
    fn set_volume(&self, volume: f64);
    fn set_shuffled(&self, shuffled: bool);

    fn subscribe(&self) -> Subscription;
}
