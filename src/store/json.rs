use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::PersistenceError;

/// Read `path` as JSON. A missing file yields `T::default()`.
pub(super) fn read<T: DeserializeOwned + Default>(path: &Path) -> Result<T, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` to `path` as indented JSON.
///
/// The text goes to a sibling temp file that is then renamed over `path`, so
/// readers see either the old record or the new one, never a partial write.
pub(super) fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    replace(path, text.as_bytes()).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
