use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LoggingSettings, default_log_path};
use crate::error::{Error, Result};

/// Install the global subscriber, writing to the configured log file.
///
/// The terminal owns stdout and stderr while the UI runs, so logs only ever go
/// to a file. Returns the file in use, or `None` when logging is disabled.
pub fn init(settings: &LoggingSettings) -> Result<Option<PathBuf>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(Some(path))
}
