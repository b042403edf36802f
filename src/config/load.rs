use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::schema::Settings;
use crate::engine::SessionPlan;
use crate::error::PlanError;

pub const CONFIG_PATH_ENV: &str = "ZONEOUT_CONFIG_PATH";

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, lets environment variables
/// (prefix `ZONEOUT__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings, using `default_path` unless `ZONEOUT_CONFIG_PATH` is set.
    pub fn load(default_path: &Path) -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path(default_path);

        let cfg = ::config::Config::builder()
            .add_source(
                ::config::File::from(config_path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix("ZONEOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        self.plan().map_err(|e| format!("session: {e}"))?;
        if !(self.audio.volume_step > 0.0 && self.audio.volume_step <= 1.0) {
            return Err("audio.volume_step must be in (0, 1]".to_string());
        }
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        Ok(())
    }

    pub fn plan(&self) -> Result<SessionPlan, PlanError> {
        SessionPlan::new(
            Duration::from_secs(self.session.focus_minutes * 60),
            Duration::from_secs(self.session.break_minutes * 60),
            self.session.total_sessions,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }
}

/// The config file named by `ZONEOUT_CONFIG_PATH`, else `default_path`.
pub fn resolve_config_path(default_path: &Path) -> PathBuf {
    match env::var_os(CONFIG_PATH_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => default_path.to_path_buf(),
    }
}
