//! Playback-engine collaborator interface.
//!
//! The readout and queue view only talk to the engine through
//! [`PlaybackEngine`]; change notifications arrive over a [`Subscription`]
//! that unregisters itself when dropped.

pub mod edit;
mod events;
mod types;

pub use events::*;
pub use types::*;

#[cfg(test)]
pub mod testing;
