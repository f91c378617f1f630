use std::io::Stdout;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::app::App;
use crate::config;
use crate::engine::PlaybackEngine;
use crate::error::Result;
use crate::library::{QueryCompletion, QueryDispatch};
use crate::ui;

/// Longest the loop sleeps waiting for input when no timer is due sooner.
const MAX_WAIT: Duration = Duration::from_millis(50);

/// Main terminal event loop: drains engine events and query completions,
/// fires due timers, draws, then waits for input until the next deadline.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<E: PlaybackEngine, D: QueryDispatch>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App<E, D>,
    completions: &Receiver<QueryCompletion>,
) -> Result<()> {
    loop {
        let now = Instant::now();

        app.pump_engine_events(now);
        while let Ok(done) = completions.try_recv() {
            app.on_query_completed(done);
        }

        let size = terminal.size()?;
        let regions = ui::layout(
            Rect::new(0, 0, size.width, size.height),
            app.readout().is_visible(),
        );
        app.set_viewport(
            now,
            regions.transport_inner.width as usize,
            regions.list_inner.height as usize,
        );
        app.poll_timers(now);

        terminal.draw(|f| ui::draw(f, app, settings.controls.scrub_seconds))?;

        let timeout = app.next_deadline().map_or(MAX_WAIT, |deadline| {
            deadline
                .saturating_duration_since(Instant::now())
                .min(MAX_WAIT)
        });
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }

        if app.should_quit() {
            tracing::info!(target: "transport", "quit requested");
            return Ok(());
        }
    }
}
