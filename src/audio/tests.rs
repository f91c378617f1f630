use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::engine::PlaybackState;
use crate::library::{QueueSource, Track};

fn session(titles: &[&str]) -> Session {
    let tracks = titles
        .iter()
        .map(|t| Track {
            title: t.to_string(),
            ..Track::default()
        })
        .collect();
    Session::new(tracks, 0.8)
}

fn titles(s: &Session) -> Vec<&str> {
    s.queue.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn clock_counts_only_while_running() {
    let t0 = Instant::now();
    let mut clock = PositionClock::default();
    clock.start(t0, Duration::from_secs(10));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(3)), Duration::from_secs(13));

    clock.pause(t0 + Duration::from_secs(3));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(60)), Duration::from_secs(13));

    clock.resume(t0 + Duration::from_secs(60));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(62)), Duration::from_secs(15));

    clock.hold(Duration::from_secs(4));
    assert_eq!(clock.elapsed(t0 + Duration::from_secs(100)), Duration::from_secs(4));
}

#[test]
fn move_keeps_current_on_same_track() {
    let mut s = session(&["A", "B", "C"]);
    s.mark_playing(0, Instant::now(), Duration::ZERO);

    assert_eq!(s.move_entry(0, 2), Ok(()));
    assert_eq!(titles(&s), vec!["B", "C", "A"]);
    assert_eq!(s.current, Some(2));
}

#[test]
fn move_past_the_end_is_refused() {
    let mut s = session(&["A", "B"]);
    assert_eq!(s.move_entry(1, 2), Err(EditRefused::OutOfRange));
    assert_eq!(titles(&s), vec!["A", "B"]);
}

#[test]
fn deleting_the_playing_entry_stops() {
    let mut s = session(&["A", "B", "C"]);
    s.mark_playing(1, Instant::now(), Duration::ZERO);

    assert_eq!(s.delete_entry(1), Ok(true));
    assert_eq!(titles(&s), vec!["A", "C"]);
    assert_eq!(s.current, None);
    assert_eq!(s.state, PlaybackState::Stopped);
}

#[test]
fn deleting_before_the_playing_entry_shifts_current() {
    let mut s = session(&["A", "B", "C"]);
    s.mark_playing(2, Instant::now(), Duration::ZERO);

    assert_eq!(s.delete_entry(0), Ok(false));
    assert_eq!(s.current, Some(1));
    assert_eq!(s.state, PlaybackState::Playing);
}

#[test]
fn edits_are_refused_while_shuffled() {
    let mut s = session(&["A", "B", "C"]);
    let mut rng = StdRng::seed_from_u64(7);
    assert!(s.set_shuffled(true, &mut rng));
    let before = titles(&s).into_iter().map(String::from).collect::<Vec<_>>();

    assert_eq!(s.move_entry(0, 1), Err(EditRefused::Shuffled));
    assert_eq!(s.delete_entry(0), Err(EditRefused::Shuffled));
    assert_eq!(titles(&s), before);
}

#[test]
fn shuffle_round_trip_restores_order_and_follows_current() {
    let mut s = session(&["A", "B", "C", "D", "E"]);
    s.mark_playing(3, Instant::now(), Duration::ZERO);
    let playing = s.current_track().unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    assert!(s.set_shuffled(true, &mut rng));
    assert!(s.is_shuffled());
    assert!(Arc::ptr_eq(&s.current_track().unwrap(), &playing));
    assert!(!s.set_shuffled(true, &mut rng));

    assert!(s.set_shuffled(false, &mut rng));
    assert_eq!(titles(&s), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(s.current, Some(3));
}

#[test]
fn next_and_previous_stay_in_bounds() {
    let mut s = session(&["A", "B"]);
    assert_eq!(s.next_index(), Some(0));
    assert_eq!(s.previous_index(), Some(0));

    s.mark_playing(1, Instant::now(), Duration::ZERO);
    assert_eq!(s.next_index(), None);
    assert_eq!(s.previous_index(), Some(0));

    s.mark_playing(0, Instant::now(), Duration::ZERO);
    assert_eq!(s.previous_index(), Some(0));

    assert_eq!(session(&[]).next_index(), None);
}

#[test]
fn volume_is_clamped_on_creation() {
    let s = Session::new(Vec::new(), 3.0);
    assert_eq!(s.volume, 1.0);
}

#[test]
fn snapshot_reports_queue_and_playing_index() {
    let mut s = session(&["A", "B"]);
    s.mark_playing(1, Instant::now(), Duration::ZERO);
    let snap = s.snapshot();
    assert_eq!(snap.tracks.len(), 2);
    assert_eq!(snap.playing, Some(1));
}

#[test]
fn session_source_reads_shared_session() {
    let shared = Arc::new(std::sync::Mutex::new(session(&["A", "B", "C"])));
    let source = player::SessionSource::for_tests(shared.clone());

    shared.lock().unwrap().move_entry(2, 0).unwrap();
    let snap = source.fetch_queue_snapshot().unwrap();
    let got: Vec<&str> = snap.tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(got, vec!["C", "A", "B"]);
}
