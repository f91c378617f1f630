use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::engine::{EngineEvent, EventBus, PlaybackEngine, PlaybackState, Subscription};
use crate::error::{Error, Result};
use crate::library::{FetchError, QueueSnapshot, QueueSource, Track};

use super::session::{EditRefused, Session};
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, SessionHandle};

/// rodio-backed [`PlaybackEngine`].
///
/// Queue edits and reads go straight to the shared session; anything that
/// touches the output device is forwarded to the audio thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    session: SessionHandle,
    bus: EventBus,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Open the default output device and start the audio thread.
    pub fn start(tracks: Vec<Track>, volume: f64) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);
        let session: SessionHandle = Arc::new(Mutex::new(Session::new(tracks, volume)));
        let bus = EventBus::default();

        let join = spawn_audio_thread(rx, session.clone(), bus.clone(), ready_tx)?;
        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = join.join();
                return Err(e);
            }
            Err(_) => {
                return Err(Error::AudioOutput("audio thread exited during startup".into()));
            }
        }

        Ok(Self {
            tx,
            session,
            bus,
            join: Mutex::new(Some(join)),
        })
    }

    /// Handle for the queue-query worker.
    pub fn queue_source(&self) -> SessionSource {
        SessionSource {
            session: self.session.clone(),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if self.tx.send(cmd).is_err() {
            tracing::warn!(target: "audio", "audio thread is gone; command dropped");
        }
    }

    fn session(&self) -> Option<MutexGuard<'_, Session>> {
        self.session.lock().ok()
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.tx.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn log_refused(op: &str, refused: EditRefused) {
        tracing::debug!(target: "queue", "{op} refused: {refused:?}");
    }
}

impl PlaybackEngine for AudioPlayer {
    fn current_index(&self) -> Option<usize> {
        self.session().and_then(|s| s.current)
    }

    fn queue_count(&self) -> usize {
        self.session().map_or(0, |s| s.queue.len())
    }

    fn current_track(&self) -> Option<Arc<Track>> {
        self.session().and_then(|s| s.current_track())
    }

    fn volume(&self) -> f64 {
        self.session().map_or(0.0, |s| s.volume)
    }

    fn position(&self) -> Duration {
        self.session()
            .map_or(Duration::ZERO, |s| s.position(Instant::now()))
    }

    fn playback_state(&self) -> PlaybackState {
        self.session().map_or(PlaybackState::Stopped, |s| s.state)
    }

    fn is_shuffled(&self) -> bool {
        self.session().is_some_and(|s| s.is_shuffled())
    }

    fn play_at(&self, index: usize) {
        self.send(AudioCmd::Play(index));
    }

    fn move_entry(&self, from: usize, to: usize) -> bool {
        let Some(mut s) = self.session() else {
            return false;
        };
        match s.move_entry(from, to) {
            Ok(()) => {
                tracing::debug!(target: "queue", "moved entry {from} -> {to}");
                true
            }
            Err(refused) => {
                Self::log_refused("move", refused);
                false
            }
        }
    }

    fn delete_entry(&self, index: usize) -> bool {
        let removed_playing = {
            let Some(mut s) = self.session() else {
                return false;
            };
            match s.delete_entry(index) {
                Ok(was_playing) => was_playing,
                Err(refused) => {
                    Self::log_refused("delete", refused);
                    return false;
                }
            }
        };

        tracing::debug!(target: "queue", "deleted entry {index}");
        if removed_playing {
            self.send(AudioCmd::Stop);
        }
        true
    }

    fn toggle_pause(&self) {
        self.send(AudioCmd::TogglePause);
    }

    fn stop(&self) {
        self.send(AudioCmd::Stop);
    }

    fn next(&self) {
        self.send(AudioCmd::Next);
    }

    fn previous(&self) {
        self.send(AudioCmd::Prev);
    }

    fn seek_by(&self, seconds: i64) {
        self.send(AudioCmd::SeekBy(seconds));
    }

    fn set_volume(&self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        if let Some(mut s) = self.session() {
            s.volume = volume;
        }
        self.send(AudioCmd::SyncVolume);
        self.bus.publish(EngineEvent::VolumeChanged(volume));
    }

    fn set_shuffled(&self, shuffled: bool) {
        let changed = self
            .session()
            .is_some_and(|mut s| s.set_shuffled(shuffled, &mut rand::rng()));
        if changed {
            tracing::info!(target: "queue", "shuffle {}", if shuffled { "on" } else { "off" });
            self.bus.publish(EngineEvent::ShuffleChanged(shuffled));
        }
    }

    fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }
}

/// [`QueueSource`] view of the session, safe to hand to worker threads.
#[derive(Clone)]
pub struct SessionSource {
    session: SessionHandle,
}

impl QueueSource for SessionSource {
    fn fetch_queue_snapshot(&self) -> std::result::Result<QueueSnapshot, FetchError> {
        self.session
            .lock()
            .map(|s| s.snapshot())
            .map_err(|_| FetchError::Unavailable)
    }
}

#[cfg(test)]
impl SessionSource {
    pub(super) fn for_tests(session: SessionHandle) -> Self {
        Self { session }
    }
}
