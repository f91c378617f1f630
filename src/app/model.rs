//! Application model types: `App` and `Focus`.
//!
//! `App` wires the transport readout and the queue view to one engine and one
//! query dispatcher, and owns the event subscription for their lifetime.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::{ControlsSettings, Settings};
use crate::engine::{PlaybackEngine, PlaybackState, Subscription};
use crate::keys::{Action, action_for};
use crate::library::{QueryCompletion, QueryDispatch};
use crate::queue::NowPlayingView;
use crate::transport::TransportReadout;

/// Which pane receives queue keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Queue,
    Transport,
}

/// The main application model.
pub struct App<E, D> {
    engine: E,
    dispatch: D,
    controls: ControlsSettings,
    readout: TransportReadout,
    queue: NowPlayingView,
    focus: Focus,
    quit: bool,
    // Dropped with the app, which unregisters it from the engine.
    events: Subscription,
}

impl<E: PlaybackEngine, D: QueryDispatch> App<E, D> {
    /// Build the app with both panes shown.
    pub fn new(engine: E, dispatch: D, settings: &Settings, now: Instant) -> Self {
        let events = engine.subscribe();
        let mut app = Self {
            engine,
            dispatch,
            controls: settings.controls.clone(),
            readout: TransportReadout::new(&settings.transport),
            queue: NowPlayingView::default(),
            focus: Focus::Queue,
            quit: false,
            events,
        };
        app.readout.show(now);
        app.queue.on_shown(&app.dispatch);
        app
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn dispatch(&self) -> &D {
        &self.dispatch
    }

    pub fn readout(&self) -> &TransportReadout {
        &self.readout
    }

    pub fn queue(&self) -> &NowPlayingView {
        &self.queue
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(action) = action_for(key) {
            self.handle_action(action, now);
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.quit = true,
            Action::ToggleFocus => self.toggle_focus(now),
            Action::ToggleQueueView => {
                if self.queue.is_visible() {
                    self.queue.on_hidden();
                } else {
                    self.queue.on_shown(&self.dispatch);
                }
            }
            Action::ToggleTransport => {
                if self.readout.is_visible() {
                    self.readout.hide(now);
                } else {
                    self.readout.show(now);
                }
            }

            Action::TogglePause => {
                if self.engine.playback_state() == PlaybackState::Stopped {
                    let selected = self.queue.list().selected();
                    if selected < self.engine.queue_count() {
                        self.engine.play_at(selected);
                    }
                } else {
                    self.engine.toggle_pause();
                }
            }
            Action::Stop => self.engine.stop(),
            Action::Next => self.engine.next(),
            Action::Previous => self.engine.previous(),
            Action::ScrubForward => self.engine.seek_by(self.scrub_seconds()),
            Action::ScrubBackward => self.engine.seek_by(-self.scrub_seconds()),
            Action::VolumeUp => {
                let v = self.engine.volume() + self.controls.volume_step;
                self.engine.set_volume(v.min(1.0));
            }
            Action::VolumeDown => {
                let v = self.engine.volume() - self.controls.volume_step;
                self.engine.set_volume(v.max(0.0));
            }
            Action::ToggleShuffle => self.engine.set_shuffled(!self.engine.is_shuffled()),

            queue_action => {
                if self.focus == Focus::Queue {
                    self.queue
                        .handle_action(queue_action, &self.engine, &self.dispatch);
                }
            }
        }
    }

    fn scrub_seconds(&self) -> i64 {
        self.controls.scrub_seconds.min(i64::MAX as u64) as i64
    }

    fn toggle_focus(&mut self, now: Instant) {
        self.focus = match self.focus {
            Focus::Queue => {
                self.readout.focus(now);
                Focus::Transport
            }
            Focus::Transport => {
                self.readout.blur(now);
                Focus::Queue
            }
        };
    }

    /// Deliver everything the engine published since the last call.
    pub fn pump_engine_events(&mut self, now: Instant) {
        let events: Vec<_> = self.events.try_iter().collect();
        for event in events {
            tracing::trace!(target: "transport", ?event, "engine event");
            self.readout.handle_event(&event, now);
            self.queue.handle_event(&event, &self.dispatch);
        }
    }

    pub fn on_query_completed(&mut self, completion: QueryCompletion) {
        self.queue.on_query_completed(completion);
    }

    /// Fire due timers. Returns `true` if anything needs redrawing.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        self.readout.poll(now, &self.engine)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.readout.next_deadline()
    }

    /// Terminal geometry as laid out by the UI.
    pub fn set_viewport(&mut self, now: Instant, transport_width: usize, list_rows: usize) {
        self.readout.set_width(now, transport_width);
        self.queue.set_visible_count(list_rows);
    }
}
