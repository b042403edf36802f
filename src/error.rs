//! Error types shared across the crate.
//!
//! Only `SetupError` is fatal, and only before the terminal UI starts.
//! Everything else is reported as a warning and the session keeps running.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while preparing the user directory and bundled assets.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("cannot locate a home directory (set HOME or ZONEOUT_HOME)")]
    NoHome,

    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to extract embedded asset {name}: {source}")]
    Extract {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// A session plan with a zero-length phase or no sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("focus duration must be positive")]
    ZeroFocus,
    #[error("break duration must be positive")]
    ZeroBreak,
    #[error("total sessions must be at least 1")]
    ZeroSessions,
}

/// Neither bundled nor user ambient tracks are available.
#[derive(Debug, Clone, Copy, Error)]
#[error("no ambient tracks available")]
pub struct NoAudioAssetsError;

/// The audio backend could not be launched.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio player could be started for {path} ({attempts})")]
    Unavailable { path: PathBuf, attempts: String },
}

/// Reading or writing one of the JSON stores failed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
