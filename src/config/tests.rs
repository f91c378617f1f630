use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_marquee_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MARQUEE_CONFIG_PATH", "/tmp/marquee-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/marquee-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("marquee")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("marquee")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/marquee/marquee.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/marquee/marquee.log")
    );
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.transport.playing_format, "playing $title from $album");
    assert_eq!(s.transport.thumb_char(), '■');
    assert_eq!(s.transport.track_char(), '─');
    assert_eq!(s.transport.refresh_interval_ms, 500);
}

#[test]
fn validate_rejects_unusable_values() {
    let mut s = Settings::default();
    s.transport.volume_width = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.transport.thumb = "ab".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.transport.playing_format = "  ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[transport]
playing_format = "$title / $album"
stopped_text = "idle"
volume_label = "v "
volume_width = 6
refresh_interval_ms = 250
blink_interval_ms = 800
thumb = "o"
track = "-"

[controls]
scrub_seconds = 9
volume_step = 0.1

[playback]
shuffle = true
volume = 0.5
quit_fade_out_ms = 0

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false

[logging]
enabled = false
file = "/tmp/marquee.log"
filter = "marquee=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MARQUEE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MARQUEE__TRANSPORT__VOLUME_WIDTH");

    let s = Settings::load().unwrap();
    assert!(s.validate().is_ok());
    assert_eq!(s.transport.playing_format, "$title / $album");
    assert_eq!(s.transport.stopped_text, "idle");
    assert_eq!(s.transport.volume_label, "v ");
    assert_eq!(s.transport.volume_width, 6);
    assert_eq!(s.transport.refresh_interval_ms, 250);
    assert_eq!(s.transport.blink_interval_ms, 800);
    assert_eq!(s.transport.thumb_char(), 'o');
    assert_eq!(s.transport.track_char(), '-');
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 0.1);
    assert!(s.playback.shuffle);
    assert_eq!(s.playback.volume, 0.5);
    assert_eq!(s.playback.quit_fade_out_ms, 0);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert!(!s.logging.enabled);
    assert_eq!(s.logging.file, Some(std::path::PathBuf::from("/tmp/marquee.log")));
    assert_eq!(s.logging.filter, "marquee=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[transport]
volume_width = 10
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MARQUEE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MARQUEE__TRANSPORT__VOLUME_WIDTH", "4");

    let s = Settings::load().unwrap();
    assert_eq!(s.transport.volume_width, 4);
}
