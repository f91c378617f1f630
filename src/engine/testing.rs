//! In-memory engine used by tests across the crate.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::library::{
    FetchError, QueryCompletion, QueryDispatch, QueryTicket, QueueSnapshot, QueueSource, Track,
};

use super::edit;
use super::events::{EngineEvent, EventBus, Subscription};
use super::types::{PlaybackEngine, PlaybackState};

#[derive(Debug, Default)]
pub struct FakeState {
    pub queue: Vec<Arc<Track>>,
    pub current: Option<usize>,
    pub playback: PlaybackState,
    pub volume: f64,
    pub position: Duration,
    pub shuffled: bool,
    pub fail_fetch: bool,
    pub edits: usize,
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    state: Mutex<FakeState>,
    bus: EventBus,
}

pub fn track(title: &str) -> Arc<Track> {
    Arc::new(Track {
        title: title.to_string(),
        ..Track::default()
    })
}

impl FakeEngine {
    pub fn with_titles(titles: &[&str]) -> Self {
        let engine = Self::default();
        {
            let mut s = engine.state();
            s.queue = titles.iter().map(|t| track(t)).collect();
            s.volume = 1.0;
        }
        engine
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn titles(&self) -> Vec<String> {
        self.state().queue.iter().map(|t| t.title.clone()).collect()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        let s = self.state();
        QueueSnapshot {
            tracks: s.queue.clone(),
            playing: s.current,
        }
    }
}

/// Records dispatched tickets instead of running them, so a test decides
/// when (and in which order) completions arrive.
#[derive(Debug, Default)]
pub struct RecordingDispatch {
    tickets: RefCell<Vec<QueryTicket>>,
}

impl RecordingDispatch {
    pub fn tickets(&self) -> Vec<QueryTicket> {
        self.tickets.borrow().clone()
    }

    pub fn last(&self) -> Option<QueryTicket> {
        self.tickets.borrow().last().copied()
    }

    /// Run the newest ticket against `source` right now.
    pub fn complete_last(&self, source: &dyn QueueSource) -> QueryCompletion {
        let ticket = self.last().expect("no query was dispatched");
        complete(ticket, source)
    }
}

impl QueryDispatch for RecordingDispatch {
    fn dispatch(&self, ticket: QueryTicket) {
        self.tickets.borrow_mut().push(ticket);
    }
}

pub fn complete(ticket: QueryTicket, source: &dyn QueueSource) -> QueryCompletion {
    QueryCompletion {
        ticket,
        result: source.fetch_queue_snapshot(),
    }
}

impl QueueSource for FakeEngine {
    fn fetch_queue_snapshot(&self) -> Result<QueueSnapshot, FetchError> {
        if self.state().fail_fetch {
            return Err(FetchError::Unavailable);
        }
        Ok(self.snapshot())
    }
}

impl PlaybackEngine for FakeEngine {
    fn current_index(&self) -> Option<usize> {
        self.state().current
    }

    fn queue_count(&self) -> usize {
        self.state().queue.len()
    }

    fn current_track(&self) -> Option<Arc<Track>> {
        let s = self.state();
        s.current.and_then(|i| s.queue.get(i).cloned())
    }

    fn volume(&self) -> f64 {
        self.state().volume
    }

    fn position(&self) -> Duration {
        self.state().position
    }

    fn playback_state(&self) -> PlaybackState {
        self.state().playback
    }

    fn is_shuffled(&self) -> bool {
        self.state().shuffled
    }

    fn play_at(&self, index: usize) {
        {
            let mut s = self.state();
            if index >= s.queue.len() {
                return;
            }
            s.current = Some(index);
            s.playback = PlaybackState::Playing;
            s.position = Duration::ZERO;
        }
        self.bus.publish(EngineEvent::TrackChanged { index: Some(index) });
    }

    fn move_entry(&self, from: usize, to: usize) -> bool {
        let mut s = self.state();
        let FakeState { queue, current, .. } = &mut *s;
        let moved = edit::move_entry(queue, current, from, to);
        if moved {
            s.edits += 1;
        }
        moved
    }

    fn delete_entry(&self, index: usize) -> bool {
        let mut s = self.state();
        let FakeState { queue, current, .. } = &mut *s;
        let deleted = edit::delete_entry(queue, current, index).is_some();
        if deleted {
            s.edits += 1;
        }
        deleted
    }

    fn toggle_pause(&self) {
        let mut s = self.state();
        s.playback = match s.playback {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Stopped => PlaybackState::Stopped,
        };
    }

    fn stop(&self) {
        {
            let mut s = self.state();
            s.playback = PlaybackState::Stopped;
            s.current = None;
        }
        self.bus.publish(EngineEvent::TrackChanged { index: None });
    }

    fn next(&self) {}

    fn previous(&self) {}

    fn seek_by(&self, seconds: i64) {
        let mut s = self.state();
        let secs = (s.position.as_secs() as i64 + seconds).max(0) as u64;
        s.position = Duration::from_secs(secs);
    }

    fn set_volume(&self, volume: f64) {
        let v = volume.clamp(0.0, 1.0);
        self.state().volume = v;
        self.bus.publish(EngineEvent::VolumeChanged(v));
    }

    fn set_shuffled(&self, shuffled: bool) {
        self.state().shuffled = shuffled;
        self.bus.publish(EngineEvent::ShuffleChanged(shuffled));
    }

    fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }
}
