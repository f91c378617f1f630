//! Audio-related small types and handles.
//!
//! Commands sent from the front end to the audio thread, and the shared
//! session handle both sides lock.

use std::sync::{Arc, Mutex};

use super::session::Session;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the queue entry at the given index.
    Play(usize),
    /// Stop playback immediately.
    Stop,
    /// Toggle pause/resume.
    TogglePause,
    /// Skip to the next entry.
    Next,
    /// Go to the previous entry.
    Prev,
    /// Apply the session volume to the active sink.
    SyncVolume,
    /// Seek by the specified number of seconds (positive or negative).
    SeekBy(i64),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

pub type SessionHandle = Arc<Mutex<Session>>;
