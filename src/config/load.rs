use std::{env, path::PathBuf};

use crate::error::{Error, Result};

use super::schema::{Settings, single_char};

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment variables
/// (prefix `MARQUEE__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MARQUEE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the readout or engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let t = &self.transport;
        if t.playing_format.trim().is_empty() {
            return Err(invalid("transport.playing_format must not be empty"));
        }
        if t.volume_width == 0 {
            return Err(invalid("transport.volume_width must be >= 1"));
        }
        if t.refresh_interval_ms == 0 {
            return Err(invalid("transport.refresh_interval_ms must be >= 1"));
        }
        if t.blink_interval_ms == 0 {
            return Err(invalid("transport.blink_interval_ms must be >= 1"));
        }
        if single_char(&t.thumb).is_none() || single_char(&t.track).is_none() {
            return Err(invalid("transport.thumb and transport.track must be one character each"));
        }
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(invalid("playback.volume must be between 0 and 1"));
        }
        if !(self.controls.volume_step > 0.0 && self.controls.volume_step <= 1.0) {
            return Err(invalid("controls.volume_step must be in (0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}

/// Resolve the config path from `MARQUEE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MARQUEE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/marquee/config.toml`
/// or `~/.config/marquee/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("marquee").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/marquee/marquee.log`
/// or `~/.local/state/marquee/marquee.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("marquee").join("marquee.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
