//! Assets bundled into the binary and their extraction to scratch files.
//!
//! The audio backend is an external player that needs real paths, so the
//! bundled MP3s are written to the OS temp directory at startup and removed
//! again by `AudioController::close`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::SetupError;
use crate::library::Track;

pub struct EmbeddedTrack {
    pub name: &'static str,
    bytes: &'static [u8],
}

/// Bundled ambient tracks, in the order they appear in the audio menu.
pub const WHITENOISE: &[EmbeddedTrack] = &[EmbeddedTrack {
    name: "rain-and-thunder",
    bytes: include_bytes!("../assets/whitenoise/rain-and-thunder.mp3"),
}];

const START_SOUND: &[u8] = include_bytes!("../assets/sounds/start.mp3");
const STOP_SOUND: &[u8] = include_bytes!("../assets/sounds/stop.mp3");

/// Bundled motivational messages, one per line.
pub const MESSAGES: &str = include_str!("../assets/motd/messages.txt");

const TRACK_PREFIX: &str = "zoneout-whitenoise-";
const SOUND_PREFIX: &str = "zoneout-sound-";

/// Paths of the transition cues.
#[derive(Clone, Debug, Default)]
pub struct Effects {
    pub start: Option<PathBuf>,
    pub stop: Option<PathBuf>,
}

/// Result of writing every bundled asset to disk.
#[derive(Debug)]
pub struct Extracted {
    pub tracks: Vec<Track>,
    pub effects: Effects,
    /// Every file written, for cleanup.
    pub scratch: Vec<PathBuf>,
}

fn write_scratch(dir: &Path, prefix: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".mp3")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Write the bundled tracks and cues into `dir`.
///
/// On failure any file already written is removed before returning.
pub fn extract(dir: &Path) -> Result<Extracted, SetupError> {
    let mut scratch = Vec::new();
    match extract_into(dir, &mut scratch) {
        Ok((tracks, effects)) => Ok(Extracted {
            tracks,
            effects,
            scratch,
        }),
        Err(e) => {
            remove_scratch(&scratch);
            Err(e)
        }
    }
}

fn extract_into(
    dir: &Path,
    scratch: &mut Vec<PathBuf>,
) -> Result<(Vec<Track>, Effects), SetupError> {
    let mut tracks = Vec::with_capacity(WHITENOISE.len());
    for asset in WHITENOISE {
        let path = write_scratch(dir, TRACK_PREFIX, asset.bytes).map_err(|source| {
            SetupError::Extract {
                name: asset.name,
                source,
            }
        })?;
        scratch.push(path.clone());
        tracks.push(Track::embedded(path, asset.name));
    }

    let mut cue = |name: &'static str, bytes: &[u8]| -> Result<PathBuf, SetupError> {
        let path = write_scratch(dir, SOUND_PREFIX, bytes)
            .map_err(|source| SetupError::Extract { name, source })?;
        scratch.push(path.clone());
        Ok(path)
    };
    let effects = Effects {
        start: Some(cue("start", START_SOUND)?),
        stop: Some(cue("stop", STOP_SOUND)?),
    };

    Ok((tracks, effects))
}

/// Best-effort removal of extracted files.
pub fn remove_scratch(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            log::debug!("could not remove {}: {e}", path.display());
        }
    }
}
