mod app;
mod audio;
mod config;
mod engine;
mod error;
mod format;
mod keys;
mod library;
mod queue;
mod refresh;
mod runtime;
mod slider;
mod timer;
mod transport;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
