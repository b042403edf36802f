use std::path::{Path, PathBuf};
use std::time::Duration;

use super::load::CONFIG_PATH_ENV;
use super::*;
use crate::paths::testenv::{EnvGuard, env_lock};

#[test]
fn resolve_config_path_prefers_env() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set(CONFIG_PATH_ENV, "/tmp/zoneout-test-config.toml");
    assert_eq!(
        resolve_config_path(Path::new("/home/u/.zoneout/config.toml")),
        PathBuf::from("/tmp/zoneout-test-config.toml")
    );
}

#[test]
fn resolve_config_path_falls_back_to_default() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove(CONFIG_PATH_ENV);
    assert_eq!(
        resolve_config_path(Path::new("/home/u/.zoneout/config.toml")),
        PathBuf::from("/home/u/.zoneout/config.toml")
    );
}

#[test]
fn missing_file_yields_defaults() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove(CONFIG_PATH_ENV);
    let dir = tempfile::tempdir().unwrap();

    let s = Settings::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(s.session.focus_minutes, 25);
    assert_eq!(s.session.break_minutes, 5);
    assert_eq!(s.session.total_sessions, 3);
    assert!(s.audio.effects);
    assert_eq!(s.ui.tick_ms, 100);
    assert!(s.validate().is_ok());
    assert_eq!(s.plan().unwrap(), crate::engine::SessionPlan::default());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[session]
focus_minutes = 50
break_minutes = 10
total_sessions = 4

[audio]
volume_step = 0.05
effects = false

[ui]
tick_ms = 250
header_text = "hello"
show_motd = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set(CONFIG_PATH_ENV, &cfg_path);
    let _g2 = EnvGuard::remove("ZONEOUT__SESSION__FOCUS_MINUTES");

    let s = Settings::load(Path::new("/nonexistent/config.toml")).unwrap();
    assert_eq!(s.session.focus_minutes, 50);
    assert_eq!(s.session.break_minutes, 10);
    assert_eq!(s.session.total_sessions, 4);
    assert_eq!(s.audio.volume_step, 0.05);
    assert!(!s.audio.effects);
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_motd);
    assert_eq!(s.tick_interval(), Duration::from_millis(250));

    let plan = s.plan().unwrap();
    assert_eq!(plan.focus_duration(), Duration::from_secs(50 * 60));
    assert_eq!(plan.total_sessions(), 4);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[session]
focus_minutes = 50
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set(CONFIG_PATH_ENV, &cfg_path);
    let _g2 = EnvGuard::set("ZONEOUT__SESSION__FOCUS_MINUTES", "15");

    let s = Settings::load(&cfg_path).unwrap();
    assert_eq!(s.session.focus_minutes, 15);
}

#[test]
fn validate_rejects_zero_lengths_and_bad_steps() {
    let mut s = Settings::default();
    s.session.break_minutes = 0;
    assert!(s.validate().unwrap_err().contains("break"));

    let mut s = Settings::default();
    s.session.total_sessions = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().unwrap_err().contains("volume_step"));

    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());
}
