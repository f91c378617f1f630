use super::startup::apply_playback_defaults;
use crate::config::Settings;
use crate::engine::PlaybackEngine;
use crate::engine::testing::FakeEngine;

#[test]
fn playback_defaults_set_volume_and_shuffle() {
    let engine = FakeEngine::with_titles(&["A", "B"]);
    let mut settings = Settings::default();
    settings.playback.volume = 0.25;
    settings.playback.shuffle = true;

    apply_playback_defaults(&engine, &settings);
    assert_eq!(engine.volume(), 0.25);
    assert!(engine.is_shuffled());
}

#[test]
fn playback_defaults_leave_queue_order_alone_without_shuffle() {
    let engine = FakeEngine::with_titles(&["A", "B"]);
    apply_playback_defaults(&engine, &Settings::default());
    assert!(!engine.is_shuffled());
    assert_eq!(engine.titles(), vec!["A", "B"]);
}
