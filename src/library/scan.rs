use std::io;
use std::path::Path;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use walkdir::WalkDir;

use super::model::Track;

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

fn read_track(path: &Path) -> Track {
    let mut display = Track::file_stem(path);
    let mut duration = None;

    // Tags are optional; an unreadable file still shows up under its file name.
    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag())
            && let Some(title) = tag.title()
            && !title.trim().is_empty()
        {
            display = title.trim().to_string();
        }
    }

    Track {
        path: path.to_path_buf(),
        display,
        duration,
        embedded: false,
    }
}

/// List the `*.mp3` files directly inside `dir`, ordered by file name.
///
/// Subdirectories are not descended into. The extension match is
/// case-insensitive.
pub fn scan(dir: &Path) -> io::Result<Vec<Track>> {
    let mut tracks = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if path.is_file() && is_mp3(path) {
            tracks.push(read_track(path));
        }
    }

    Ok(tracks)
}

/// Bundled tracks first, in registration order, followed by the user's files.
pub fn catalog(embedded: Vec<Track>, user_dir: &Path) -> io::Result<Vec<Track>> {
    let mut tracks = embedded;
    tracks.extend(scan(user_dir)?);
    Ok(tracks)
}
