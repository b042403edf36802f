use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audio::DEFAULT_VOLUME;
use crate::error::PersistenceError;

use super::json;

/// User preferences persisted at `<base>/.zoneout_config`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub volume: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PrefsStore {
    /// Open the store; out-of-range volumes on disk are clamped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let mut prefs: Preferences = json::read(&path)?;
        prefs.volume = prefs.volume.clamp(0.0, 1.0);
        Ok(Self { path, prefs })
    }

    pub fn volume(&self) -> f32 {
        self.prefs.volume
    }

    /// Clamp, remember and persist the volume. The new value is kept even if
    /// the write fails.
    pub fn set_volume(&mut self, volume: f32) -> Result<(), PersistenceError> {
        self.prefs.volume = volume.clamp(0.0, 1.0);
        json::write(&self.path, &self.prefs)
    }
}
