//! Audio subsystem: one long-running ambient playback plus fire-and-forget
//! transition cues, both backed by an external command-line player.
//!
//! `audio::backend` decides which player to launch and with which flags,
//! `audio::controller` owns the playback state behind a single lock, and
//! `audio::reaper` watches launched processes exit.

mod backend;
mod controller;
mod reaper;

pub use backend::*;
pub use controller::*;

#[cfg(test)]
pub(crate) mod fake;
