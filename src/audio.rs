//! Audio playback backend.
//!
//! `AudioPlayer` implements the engine interface on top of a dedicated rodio
//! thread. The queue itself lives in a shared `Session` so edits apply
//! synchronously and the next queue query sees them.

mod player;
mod session;
mod sink;
mod thread;
mod types;

pub use player::{AudioPlayer, SessionSource};
pub use session::{EditRefused, PositionClock, Session};

#[cfg(test)]
mod tests;
