//! Layout of the per-user data directory.
//!
//! The base directory is `$ZONEOUT_HOME` when set, otherwise `$HOME/.zoneout`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

pub const HOME_ENV: &str = "ZONEOUT_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub base: PathBuf,
    /// User ambient tracks, scanned non-recursively.
    pub whitenoise: PathBuf,
    /// User message files (`*.txt`).
    pub motd: PathBuf,
    pub stats_file: PathBuf,
    pub prefs_file: PathBuf,
    pub log_file: PathBuf,
    pub config_file: PathBuf,
}

impl Paths {
    pub fn resolve() -> Result<Self, SetupError> {
        base_dir().map(|base| Self::under(&base))
    }

    pub fn under(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
            whitenoise: base.join("whitenoise"),
            motd: base.join("motd"),
            stats_file: base.join(".zoneout_stats"),
            prefs_file: base.join(".zoneout_config"),
            log_file: base.join("zoneout.log"),
            config_file: base.join("config.toml"),
        }
    }

    /// Create the base directory and its subdirectories if missing.
    pub fn ensure(&self) -> Result<(), SetupError> {
        for dir in [&self.base, &self.whitenoise, &self.motd] {
            fs::create_dir_all(dir).map_err(|source| SetupError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn base_dir() -> Result<PathBuf, SetupError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".zoneout"))
        .ok_or(SetupError::NoHome)
}
