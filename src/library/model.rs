use std::path::{Path, PathBuf};
use std::time::Duration;

/// A selectable ambient audio file.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    /// Name shown in the audio menu.
    pub display: String,
    pub duration: Option<Duration>,
    /// Extracted from the bundled assets rather than found in the user directory.
    pub embedded: bool,
}

impl Track {
    /// A bundled track extracted to `path`, shown under its asset name.
    pub fn embedded(path: PathBuf, name: &str) -> Self {
        Self {
            path,
            display: name.to_string(),
            duration: None,
            embedded: true,
        }
    }

    pub fn file_stem(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    }
}
