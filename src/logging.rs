//! File-backed logging. The terminal belongs to the UI, so records go to
//! `<base>/zoneout.log` instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

pub const FILTER_ENV: &str = "ZONEOUT_LOG";

/// Initialise the global logger, appending to `path`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::new().filter_or(FILTER_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}
