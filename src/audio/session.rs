//! Playback session shared between the audio thread and the front end.
//!
//! The session is the engine's authoritative copy of the queue. Front-end
//! reads and queue edits lock it directly; the audio thread locks it to find
//! the track to decode and to record transport changes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::{PlaybackState, edit};
use crate::library::{QueueSnapshot, Track};

/// Elapsed-time bookkeeping for the current track.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionClock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl PositionClock {
    /// Start counting from `at` into the track.
    pub fn start(&mut self, now: Instant, at: Duration) {
        self.accumulated = at;
        self.started_at = Some(now);
    }

    /// Hold the clock at `at` without counting.
    pub fn hold(&mut self, at: Duration) {
        self.accumulated = at;
        self.started_at = None;
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(st);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |st| now.saturating_duration_since(st))
    }
}

/// Why a queue edit was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRefused {
    Shuffled,
    OutOfRange,
}

#[derive(Debug)]
pub struct Session {
    pub queue: Vec<Arc<Track>>,
    pub current: Option<usize>,
    pub state: PlaybackState,
    pub volume: f64,
    pub clock: PositionClock,
    /// Unshuffled order, kept while shuffle is on so it can be restored.
    saved_order: Option<Vec<Arc<Track>>>,
}

impl Session {
    pub fn new(tracks: Vec<Track>, volume: f64) -> Self {
        Self {
            queue: tracks.into_iter().map(Arc::new).collect(),
            current: None,
            state: PlaybackState::Stopped,
            volume: volume.clamp(0.0, 1.0),
            clock: PositionClock::default(),
            saved_order: None,
        }
    }

    pub fn is_shuffled(&self) -> bool {
        self.saved_order.is_some()
    }

    pub fn current_track(&self) -> Option<Arc<Track>> {
        self.current.and_then(|i| self.queue.get(i).cloned())
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            tracks: self.queue.clone(),
            playing: self.current,
        }
    }

    pub fn position(&self, now: Instant) -> Duration {
        self.clock.elapsed(now)
    }

    /// Move an entry, keeping `current` on the same track.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), EditRefused> {
        if self.is_shuffled() {
            return Err(EditRefused::Shuffled);
        }
        if edit::move_entry(&mut self.queue, &mut self.current, from, to) {
            Ok(())
        } else {
            Err(EditRefused::OutOfRange)
        }
    }

    /// Remove an entry. Returns `true` when the removed entry was the one
    /// playing; the caller is responsible for stopping the output.
    pub fn delete_entry(&mut self, index: usize) -> Result<bool, EditRefused> {
        if self.is_shuffled() {
            return Err(EditRefused::Shuffled);
        }
        let was_current = self.current == Some(index);
        match edit::delete_entry(&mut self.queue, &mut self.current, index) {
            Some(_) => {
                if was_current {
                    self.mark_stopped();
                }
                Ok(was_current)
            }
            None => Err(EditRefused::OutOfRange),
        }
    }

    /// Turn shuffle on or off. The playing track keeps playing and `current`
    /// follows it to its new position.
    pub fn set_shuffled<R: Rng + ?Sized>(&mut self, shuffled: bool, rng: &mut R) -> bool {
        if shuffled == self.is_shuffled() {
            return false;
        }

        let playing = self.current_track();
        if shuffled {
            self.saved_order = Some(self.queue.clone());
            self.queue.shuffle(rng);
        } else if let Some(order) = self.saved_order.take() {
            self.queue = order;
        }

        self.current = playing.and_then(|t| self.queue.iter().position(|q| Arc::ptr_eq(q, &t)));
        true
    }

    /// Entry after the current one, `None` past the end.
    pub fn next_index(&self) -> Option<usize> {
        match self.current {
            Some(i) if i + 1 < self.queue.len() => Some(i + 1),
            Some(_) => None,
            None if !self.queue.is_empty() => Some(0),
            None => None,
        }
    }

    /// Entry before the current one, staying on the first.
    pub fn previous_index(&self) -> Option<usize> {
        match self.current {
            Some(i) => Some(i.saturating_sub(1)),
            None if !self.queue.is_empty() => Some(0),
            None => None,
        }
    }

    pub fn mark_playing(&mut self, index: usize, now: Instant, at: Duration) {
        self.current = Some(index);
        self.state = PlaybackState::Playing;
        self.clock.start(now, at);
    }

    pub fn mark_stopped(&mut self) {
        self.current = None;
        self.state = PlaybackState::Stopped;
        self.clock.reset();
    }
}
