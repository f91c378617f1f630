use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/marquee/config.toml` or `~/.config/marquee/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MARQUEE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub transport: TransportSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Template for the "now playing" line. `$title` and `$album` are
    /// substituted; `$$` is a literal dollar sign.
    pub playing_format: String,
    /// Shown instead of the template while nothing is playing.
    pub stopped_text: String,
    /// Prefix before the volume bar.
    pub volume_label: String,
    /// Cells in the volume bar.
    pub volume_width: usize,
    /// Redraw interval while visible and idle (milliseconds).
    pub refresh_interval_ms: u64,
    /// On/off period of the elapsed time while paused (milliseconds).
    pub blink_interval_ms: u64,
    /// Single character marking the slider position.
    pub thumb: String,
    /// Single character filling the rest of a slider.
    pub track: String,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            playing_format: "playing $title from $album".to_string(),
            stopped_text: "playback is stopped".to_string(),
            volume_label: "vol ".to_string(),
            volume_width: 10,
            refresh_interval_ms: 500,
            blink_interval_ms: 1000,
            thumb: "■".to_string(),
            track: "─".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: f64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether the queue starts shuffled.
    pub shuffle: bool,
    /// Initial output volume in `[0, 1]`.
    pub volume: f64,
    /// Fade-out duration when quitting (milliseconds). `0` stops immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            volume: 1.0,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub enabled: bool,
    /// Log file; defaults to `$XDG_STATE_HOME/marquee/marquee.log`.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
            filter: "warn,marquee=info,queue=info,transport=info,audio=info,library=info".to_string(),
        }
    }
}

impl TransportSettings {
    pub fn thumb_char(&self) -> char {
        single_char(&self.thumb).unwrap_or('■')
    }

    pub fn track_char(&self) -> char {
        single_char(&self.track).unwrap_or('─')
    }
}

pub(super) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
