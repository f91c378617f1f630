use std::sync::mpsc::{Receiver, RecvTimeoutError, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::engine::{EngineEvent, EventBus, PlaybackState};
use crate::error::{Error, Result};

use super::sink::create_sink_at;
use super::types::{AudioCmd, SessionHandle};

/// How often the thread wakes up without commands to check for track end.
const TICK: Duration = Duration::from_millis(200);

/// State owned by the audio thread.
struct Player {
    stream: OutputStream,
    sink: Option<Sink>,
    session: SessionHandle,
    bus: EventBus,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    session: SessionHandle,
    bus: EventBus,
    ready: SyncSender<Result<()>>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new().name("audio".into()).spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let _ = ready.send(Err(Error::AudioOutput(e.to_string())));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the terminal UI.
        stream.log_on_drop(false);
        let _ = ready.send(Ok(()));

        let mut player = Player {
            stream,
            sink: None,
            session,
            bus,
        };

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    player.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => player.handle(cmd),
                Err(RecvTimeoutError::Timeout) => player.auto_advance(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        tracing::debug!(target: "audio", "audio thread exiting");
    })
}

impl Player {
    fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Play(i) => self.play(i),
            AudioCmd::Stop => self.stop(),
            AudioCmd::TogglePause => self.toggle_pause(),
            AudioCmd::Next => {
                let next = self.with_session(|s| s.next_index()).flatten();
                if let Some(i) = next {
                    self.play(i);
                }
            }
            AudioCmd::Prev => {
                let prev = self.with_session(|s| s.previous_index()).flatten();
                if let Some(i) = prev {
                    self.play(i);
                }
            }
            AudioCmd::SyncVolume => {
                let volume = self.with_session(|s| s.volume).unwrap_or(1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(volume as f32);
                }
            }
            AudioCmd::SeekBy(secs) => self.seek_by(secs),
            AudioCmd::Quit { .. } => {}
        }
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut super::session::Session) -> T) -> Option<T> {
        match self.session.lock() {
            Ok(mut s) => Some(f(&mut s)),
            Err(_) => {
                tracing::warn!(target: "audio", "session lock poisoned");
                None
            }
        }
    }

    fn play(&mut self, index: usize) {
        let Some((track, volume)) = self
            .with_session(|s| s.queue.get(index).cloned().map(|t| (t, s.volume)))
            .flatten()
        else {
            return;
        };

        if let Some(old) = self.sink.take() {
            old.stop();
        }

        match create_sink_at(&self.stream, &track, Duration::ZERO, volume) {
            Ok(sink) => {
                sink.play();
                self.sink = Some(sink);
                self.with_session(|s| s.mark_playing(index, Instant::now(), Duration::ZERO));
                tracing::info!(target: "audio", "playing {:?}", track.path);
                self.bus.publish(EngineEvent::TrackChanged { index: Some(index) });
            }
            Err(e) => {
                tracing::warn!(target: "audio", "cannot play {:?}: {e}", track.path);
                self.stop();
            }
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.with_session(|s| s.mark_stopped());
        self.bus.publish(EngineEvent::TrackChanged { index: None });
    }

    fn toggle_pause(&mut self) {
        let Some(sink) = &self.sink else {
            return;
        };
        let now = Instant::now();
        let state = self.with_session(|s| {
            match s.state {
                PlaybackState::Playing => {
                    s.clock.pause(now);
                    s.state = PlaybackState::Paused;
                }
                PlaybackState::Paused => {
                    s.clock.resume(now);
                    s.state = PlaybackState::Playing;
                }
                PlaybackState::Stopped => {}
            }
            (s.state, s.clock.elapsed(now))
        });

        if let Some((state, position)) = state {
            match state {
                PlaybackState::Playing => sink.play(),
                PlaybackState::Paused => sink.pause(),
                PlaybackState::Stopped => {}
            }
            self.bus.publish(EngineEvent::PositionChanged(position));
        }
    }

    /// Rebuild the current sink and skip into the file.
    fn seek_by(&mut self, secs: i64) {
        if self.sink.is_none() {
            return;
        }
        let now = Instant::now();
        let Some((track, state, volume, elapsed)) = self
            .with_session(|s| {
                s.current_track()
                    .map(|t| (t, s.state, s.volume, s.clock.elapsed(now)))
            })
            .flatten()
        else {
            return;
        };

        let cur = elapsed.as_secs() as i64;
        let mut target = Duration::from_secs((cur + secs).max(0) as u64);
        if let Some(total) = track.duration {
            target = target.min(total);
        }

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        match create_sink_at(&self.stream, &track, target, volume) {
            Ok(sink) => {
                let paused = state == PlaybackState::Paused;
                if !paused {
                    sink.play();
                }
                self.sink = Some(sink);
                self.with_session(|s| {
                    if paused {
                        s.clock.hold(target);
                    } else {
                        s.clock.start(now, target);
                    }
                });
                self.bus.publish(EngineEvent::PositionChanged(target));
            }
            Err(e) => {
                tracing::warn!(target: "audio", "seek failed for {:?}: {e}", track.path);
                self.stop();
            }
        }
    }

    /// Move on when the current sink has drained; stop after the last entry.
    fn auto_advance(&mut self) {
        let finished = self.sink.as_ref().is_some_and(|s| s.empty());
        if !finished {
            return;
        }
        let playing = self.with_session(|s| s.state == PlaybackState::Playing);
        if playing != Some(true) {
            return;
        }

        match self.with_session(|s| s.next_index()).flatten() {
            Some(i) => self.play(i),
            None => {
                tracing::debug!(target: "audio", "end of queue");
                self.stop();
            }
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(sink) = self.sink.take() {
            let volume = self.with_session(|s| s.volume).unwrap_or(1.0) as f32;
            fade_out_sink(&sink, volume, fade_out_ms);
            sink.stop();
        }
        self.with_session(|s| s.mark_stopped());
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
