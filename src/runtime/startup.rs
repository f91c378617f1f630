use crate::config;
use crate::engine::PlaybackEngine;

/// Apply configured playback defaults to a freshly started engine.
pub fn apply_playback_defaults(engine: &dyn PlaybackEngine, settings: &config::Settings) {
    engine.set_volume(settings.playback.volume);
    if settings.playback.shuffle {
        engine.set_shuffled(true);
    }
}
