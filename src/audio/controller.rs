use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::assets::remove_scratch;
use crate::error::PlaybackError;
use crate::library::Track;

use super::backend::{Backend, PlaybackProcess, Purpose, SystemBackend};
use super::reaper;

pub const DEFAULT_VOLUME: f32 = 0.5;

/// The background playback currently owned by the controller.
pub(super) struct Live<P> {
    pub(super) process: Arc<Mutex<P>>,
    pub(super) generation: u64,
}

pub(super) struct AudioState<P> {
    /// The track the user chose last; survives pause and stop.
    pub(super) active_selection: Option<Track>,
    pub(super) playback: Option<Live<P>>,
    pub(super) is_playing: bool,
    pub(super) is_paused: bool,
    /// Bumped on every successful start so a stale reaper can tell it was superseded.
    pub(super) generation: u64,
    pub(super) volume: f32,
}

pub(super) type SharedState<P> = Arc<Mutex<AudioState<P>>>;

pub(super) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns at most one ambient playback and fires one-shot effects.
///
/// Every state change goes through one lock; reaper threads take the same
/// lock before touching the flags.
pub struct AudioController<B: Backend = SystemBackend> {
    backend: B,
    state: SharedState<B::Process>,
    tracks: Vec<Track>,
    scratch: Vec<PathBuf>,
}

impl<B: Backend> AudioController<B> {
    /// `scratch` lists extracted files to delete on `close`.
    pub fn new(backend: B, tracks: Vec<Track>, scratch: Vec<PathBuf>, volume: f32) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(AudioState {
                active_selection: None,
                playback: None,
                is_playing: false,
                is_paused: false,
                generation: 0,
                volume: volume.clamp(0.0, 1.0),
            })),
            tracks,
            scratch,
        }
    }

    pub fn list_tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.state).is_playing
    }

    pub fn is_paused(&self) -> bool {
        lock(&self.state).is_paused
    }

    pub fn active_selection(&self) -> Option<Track> {
        lock(&self.state).active_selection.clone()
    }

    /// Identifies the live playback; changes whenever a new one starts.
    pub fn playback_generation(&self) -> Option<u64> {
        lock(&self.state).playback.as_ref().map(|live| live.generation)
    }

    pub fn volume(&self) -> f32 {
        lock(&self.state).volume
    }

    /// Takes effect on the next launch.
    pub fn set_volume(&self, volume: f32) {
        lock(&self.state).volume = volume.clamp(0.0, 1.0);
    }

    /// Remember `track` as the selection without starting it.
    pub fn select(&self, track: &Track) {
        lock(&self.state).active_selection = Some(track.clone());
    }

    /// Replace any live playback with `track`, looping where the player can.
    pub fn play_track(&self, track: &Track) -> Result<(), PlaybackError> {
        let mut state = lock(&self.state);
        terminate(&mut state);

        state.active_selection = Some(track.clone());
        state.is_paused = false;
        state.is_playing = false;

        let process = self
            .backend
            .start(Purpose::Ambient, &track.path, state.volume)?;

        state.generation += 1;
        let generation = state.generation;
        let process = Arc::new(Mutex::new(process));
        state.playback = Some(Live {
            process: Arc::clone(&process),
            generation,
        });
        state.is_playing = true;
        drop(state);

        reaper::watch(Arc::clone(&self.state), process, generation);
        log::info!("ambient track: {}", track.display);
        Ok(())
    }

    /// Interrupt the live playback; `resume` restarts it from the top.
    pub fn pause(&self) {
        let mut state = lock(&self.state);
        let interrupted = match state.playback.as_ref() {
            Some(live) => {
                lock(&live.process).interrupt();
                true
            }
            None => false,
        };
        if interrupted {
            state.is_paused = true;
            state.is_playing = false;
        }
    }

    /// Restart the selection if a pause is pending. The player cannot seek.
    pub fn resume(&self) -> Result<(), PlaybackError> {
        let pending = {
            let state = lock(&self.state);
            if state.is_paused {
                state.active_selection.clone()
            } else {
                None
            }
        };
        match pending {
            Some(track) => self.play_track(&track),
            None => Ok(()),
        }
    }

    /// Kill any live playback. The selection is kept.
    pub fn stop(&self) {
        let mut state = lock(&self.state);
        terminate(&mut state);
        state.is_playing = false;
        state.is_paused = false;
    }

    /// Launch a one-shot cue alongside the ambient track. Failures are ignored.
    pub fn play_effect(&self, path: &Path) {
        let volume = self.volume();
        match self.backend.start(Purpose::Effect, path, volume) {
            Ok(process) => reaper::detach(process),
            Err(e) => log::debug!("sound effect skipped: {e}"),
        }
    }

    /// Stop playback and delete the extracted scratch files.
    pub fn close(&mut self) {
        self.stop();
        remove_scratch(&self.scratch);
        self.scratch.clear();
    }
}

/// Kill the live process and wait until it is reaped.
fn terminate<P: PlaybackProcess>(state: &mut AudioState<P>) {
    if let Some(live) = state.playback.take() {
        let mut process = lock(&live.process);
        process.kill();
        process.wait();
    }
}
