use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::PlaybackError;

use super::backend::{Backend, PlaybackProcess, Purpose};

/// Observable flags for one fake player.
#[derive(Debug, Default)]
pub(crate) struct Handle {
    exited: AtomicBool,
    interrupted: AtomicBool,
    killed: AtomicBool,
}

impl Handle {
    /// Make the player exit on its own, as a finished track would.
    pub(crate) fn finish(&self) {
        self.exited.store(true, Ordering::SeqCst);
    }

    pub(crate) fn exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }

    pub(crate) fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    pub(crate) fn killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}

pub(crate) struct FakeProcess {
    handle: Arc<Handle>,
}

impl PlaybackProcess for FakeProcess {
    fn try_wait(&mut self) -> io::Result<bool> {
        Ok(self.handle.exited())
    }

    fn interrupt(&mut self) {
        self.handle.interrupted.store(true, Ordering::SeqCst);
        self.handle.exited.store(true, Ordering::SeqCst);
    }

    fn kill(&mut self) {
        self.handle.killed.store(true, Ordering::SeqCst);
        self.handle.exited.store(true, Ordering::SeqCst);
    }

    // Effects only need reaping once they finish; tests call `finish` or
    // leave them running, so never block here.
    fn wait(&mut self) {}
}

#[derive(Clone, Debug)]
pub(crate) struct Launch {
    pub(crate) purpose: Purpose,
    pub(crate) path: PathBuf,
    pub(crate) volume: f32,
    pub(crate) handle: Arc<Handle>,
}

#[derive(Default)]
struct Inner {
    launches: Vec<Launch>,
    failing: bool,
    failures: usize,
}

/// Backend that records launches instead of spawning anything.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every later `start` fail as if no player were installed.
    pub(crate) fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    /// Number of `start` calls rejected while failing.
    pub(crate) fn failures(&self) -> usize {
        self.inner.lock().unwrap().failures
    }

    pub(crate) fn launches(&self) -> Vec<Launch> {
        self.inner.lock().unwrap().launches.clone()
    }

    pub(crate) fn ambient_launches(&self) -> Vec<Launch> {
        self.launches()
            .into_iter()
            .filter(|l| l.purpose == Purpose::Ambient)
            .collect()
    }

    pub(crate) fn effect_paths(&self) -> Vec<PathBuf> {
        self.launches()
            .into_iter()
            .filter(|l| l.purpose == Purpose::Effect)
            .map(|l| l.path)
            .collect()
    }

    pub(crate) fn last_ambient(&self) -> Option<Launch> {
        self.ambient_launches().pop()
    }
}

impl Backend for FakeBackend {
    type Process = FakeProcess;

    fn start(&self, purpose: Purpose, path: &Path, volume: f32) -> Result<FakeProcess, PlaybackError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing {
            inner.failures += 1;
            return Err(PlaybackError::Unavailable {
                path: path.to_path_buf(),
                attempts: "fake: not installed".into(),
            });
        }
        let handle = Arc::new(Handle::default());
        inner.launches.push(Launch {
            purpose,
            path: path.to_path_buf(),
            volume,
            handle: Arc::clone(&handle),
        });
        Ok(FakeProcess { handle })
    }
}
