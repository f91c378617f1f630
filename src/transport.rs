//! Live "now playing" readout.
//!
//! Two lines: the title line (the compiled template, or the stopped message)
//! and the volume/time line. Engine events and focus changes only request a
//! refresh; the actual render happens when the scheduler fires, pulling fresh
//! values from the engine.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::TransportSettings;
use crate::engine::{EngineEvent, PlaybackEngine, PlaybackState};
use crate::format::text::{display_width, ellipsize, format_duration};
use crate::format::{FormatTemplate, Values};
use crate::refresh::{Blink, RefreshScheduler, next_deadline};
use crate::slider::{Slider, progress_fraction};

const TITLE_FALLBACK: &str = "[song]";
const ALBUM_FALLBACK: &str = "[album]";
const ARTIST_FALLBACK: &str = "[artist]";

/// Gap between the volume bar and the elapsed time.
const VOLUME_GAP: &str = "  ";

pub struct TransportReadout {
    template: FormatTemplate,
    stopped_text: String,
    volume_label: String,
    volume_width: usize,
    slider: Slider,
    scheduler: RefreshScheduler,
    blink: Blink,
    focused: bool,
    width: usize,
    lines: Vec<Line<'static>>,
}

impl TransportReadout {
    pub fn new(settings: &TransportSettings) -> Self {
        Self {
            template: FormatTemplate::compile(&settings.playing_format),
            stopped_text: settings.stopped_text.clone(),
            volume_label: settings.volume_label.clone(),
            volume_width: settings.volume_width,
            slider: Slider::new(settings.thumb_char(), settings.track_char()),
            scheduler: RefreshScheduler::new(Duration::from_millis(settings.refresh_interval_ms)),
            blink: Blink::new(Duration::from_millis(settings.blink_interval_ms)),
            focused: false,
            width: 0,
            lines: Vec::new(),
        }
    }

    /// Replace the owned template; the next render uses it.
    pub fn set_template(&mut self, now: Instant, template: FormatTemplate) {
        self.template = template;
        self.scheduler.request_refresh(now, Duration::ZERO);
    }

    pub fn handle_event(&mut self, event: &EngineEvent, now: Instant) {
        match event {
            EngineEvent::TrackChanged { .. }
            | EngineEvent::VolumeChanged(_)
            | EngineEvent::PositionChanged(_) => {
                self.scheduler.request_refresh(now, Duration::ZERO);
            }
            EngineEvent::ShuffleChanged(_) => {}
        }
    }

    pub fn focus(&mut self, now: Instant) {
        self.set_focused(now, true);
    }

    pub fn blur(&mut self, now: Instant) {
        self.set_focused(now, false);
    }

    fn set_focused(&mut self, now: Instant, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.scheduler.request_refresh(now, Duration::ZERO);
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn show(&mut self, now: Instant) {
        self.scheduler.set_visible(now, true);
    }

    pub fn hide(&mut self, now: Instant) {
        self.scheduler.set_visible(now, false);
        self.blink.set_active(now, false);
    }

    pub fn is_visible(&self) -> bool {
        self.scheduler.is_visible()
    }

    /// Content width in cells. A change re-renders.
    pub fn set_width(&mut self, now: Instant, width: usize) {
        if self.width != width {
            self.width = width;
            self.scheduler.request_refresh(now, Duration::ZERO);
        }
    }

    /// Fire due timers. Returns `true` if the lines were re-rendered.
    pub fn poll(&mut self, now: Instant, engine: &dyn PlaybackEngine) -> bool {
        let blinked = self.blink.poll(now);
        let refreshed = self.scheduler.poll(now);
        if (blinked || refreshed) && self.is_visible() {
            self.update(engine, now);
            return true;
        }
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        next_deadline(&self.scheduler, &self.blink)
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    fn highlight(&self) -> Style {
        let color = if self.focused { Color::Red } else { Color::Green };
        Style::default().fg(color)
    }

    /// Pull the current engine state and rebuild both lines.
    fn update(&mut self, engine: &dyn PlaybackEngine, now: Instant) {
        let state = engine.playback_state();
        self.blink.set_active(now, state == PlaybackState::Paused);

        let track = engine.current_track();
        let title_line = match (state, &track) {
            (PlaybackState::Stopped, _) => Line::from(Span::styled(
                ellipsize(&self.stopped_text, self.width),
                self.highlight(),
            )),
            (_, track) => {
                let title = track
                    .as_ref()
                    .map(|t| t.title.as_str())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(TITLE_FALLBACK);
                let album = track
                    .as_ref()
                    .and_then(|t| t.album.as_deref())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(ALBUM_FALLBACK);
                let artist = track
                    .as_ref()
                    .and_then(|t| t.artist.as_deref())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(ARTIST_FALLBACK);

                let values: Values = [("title", title), ("album", album), ("artist", artist)]
                    .into_iter()
                    .collect();
                Line::from(self.template.render(&values, self.width, self.highlight()).spans)
            }
        };

        let (elapsed_secs, total_secs) = match (state, &track) {
            (PlaybackState::Stopped, _) | (_, None) => (0, 0),
            (_, Some(t)) => {
                let total = t.duration_secs();
                (engine.position().as_secs().min(total), total)
            }
        };

        let volume = format!(
            "{}{}{VOLUME_GAP}",
            self.volume_label,
            self.slider.render(engine.volume(), self.volume_width)
        );
        let elapsed = format_duration(elapsed_secs);
        let total = format_duration(total_secs);
        let bar_width = self.width.saturating_sub(
            display_width(&volume) + display_width(&elapsed) + display_width(&total) + 2,
        );
        let bar = self
            .slider
            .render(progress_fraction(elapsed_secs, total_secs), bar_width);

        let elapsed_style = if self.blink.hidden() {
            Style::default().add_modifier(Modifier::HIDDEN)
        } else {
            Style::default()
        };

        let time_line = Line::from(vec![
            Span::raw(volume),
            Span::styled(elapsed, elapsed_style),
            Span::raw(" "),
            Span::raw(bar),
            Span::raw(" "),
            Span::raw(total),
        ]);

        tracing::trace!(target: "transport", ?state, elapsed_secs, total_secs, "render");
        self.lines = vec![title_line, time_line];
    }
}
