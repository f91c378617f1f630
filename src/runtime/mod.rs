use std::env;
use std::path::Path;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::library::{QueryRunner, scan};

mod event_loop;
mod logging;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> anyhow::Result<()> {
    let (settings, settings_problem) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(Some(path)) => tracing::info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("marquee: {e}"),
    }
    if let Some(problem) = settings_problem {
        tracing::warn!("{problem}");
        eprintln!("marquee: {problem}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    let player = AudioPlayer::start(tracks, settings.playback.volume)
        .context("could not open the audio output")?;
    startup::apply_playback_defaults(&player, &settings);

    let (completions_tx, completions_rx) = mpsc::channel();
    let runner = QueryRunner::new(Arc::new(player.queue_source()), completions_tx);
    let fade_out = Duration::from_millis(settings.playback.quit_fade_out_ms);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(player, runner, &settings, Instant::now());
    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &completions_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.engine().quit_softly(fade_out);
    run_result.context("event loop failed")
}
