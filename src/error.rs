//! Crate-wide error types.
//!
//! Library modules return [`Error`] through [`Result`]; the binary entry point
//! wraps everything in `anyhow` for reporting.

use std::path::PathBuf;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Config was read but holds values we can't use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No usable audio output device
    #[error("Audio output error: {0}")]
    AudioOutput(String),

    /// A track could not be opened for playback
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
