//! Launching the external player.
//!
//! macOS uses `afplay` (no loop flag, a track plays once). Everywhere else
//! `ffplay` is tried first and `play` (SoX) second.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::error::PlaybackError;

/// A launched player process.
pub trait PlaybackProcess: Send + 'static {
    /// Returns `true` once the process has exited.
    fn try_wait(&mut self) -> io::Result<bool>;
    /// Ask the player to stop gracefully.
    fn interrupt(&mut self);
    /// Forcibly stop the player.
    fn kill(&mut self);
    /// Block until the process has exited and been reaped.
    fn wait(&mut self);
}

/// Something that can start players for a file.
pub trait Backend: Send + Sync + 'static {
    type Process: PlaybackProcess;

    fn start(
        &self,
        purpose: Purpose,
        path: &Path,
        volume: f32,
    ) -> Result<Self::Process, PlaybackError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Purpose {
    /// The looping background track.
    Ambient,
    /// A short one-shot cue.
    Effect,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// One candidate command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

/// Candidate command lines in the order they should be tried.
pub fn invocations(platform: Platform, purpose: Purpose, path: &Path, volume: f32) -> Vec<Invocation> {
    let volume = volume.clamp(0.0, 1.0);
    let factor = OsString::from(format!("{volume:.2}"));

    match platform {
        Platform::MacOs => vec![Invocation {
            program: "afplay",
            args: vec!["-v".into(), factor, path.into()],
        }],
        Platform::Other => {
            let mut ffplay: Vec<OsString> = vec!["-nodisp".into(), "-autoexit".into()];
            if purpose == Purpose::Ambient {
                ffplay.push("-loop".into());
                ffplay.push("0".into());
            }
            let percent = (volume * 100.0).round() as u32;
            ffplay.push("-volume".into());
            ffplay.push(percent.to_string().into());
            ffplay.push(path.into());

            vec![
                Invocation {
                    program: "ffplay",
                    args: ffplay,
                },
                Invocation {
                    program: "play",
                    args: vec!["-q".into(), "-v".into(), factor, path.into()],
                },
            ]
        }
    }
}

/// Backend that spawns real player processes.
#[derive(Debug, Clone, Copy)]
pub struct SystemBackend {
    platform: Platform,
}

impl SystemBackend {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }
}

impl Default for SystemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SystemBackend {
    type Process = ChildProcess;

    fn start(
        &self,
        purpose: Purpose,
        path: &Path,
        volume: f32,
    ) -> Result<ChildProcess, PlaybackError> {
        let mut attempts: Vec<String> = Vec::new();

        for inv in invocations(self.platform, purpose, path, volume) {
            // Player output would scribble over the TUI.
            let spawned = Command::new(inv.program)
                .args(&inv.args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(child) => {
                    log::debug!("{} started (pid {}) for {}", inv.program, child.id(), path.display());
                    return Ok(ChildProcess { child });
                }
                Err(e) => attempts.push(format!("{}: {e}", inv.program)),
            }
        }

        Err(PlaybackError::Unavailable {
            path: path.to_path_buf(),
            attempts: attempts.join("; "),
        })
    }
}

/// A real player subprocess.
pub struct ChildProcess {
    child: Child,
}

impl PlaybackProcess for ChildProcess {
    fn try_wait(&mut self) -> io::Result<bool> {
        Ok(self.child.try_wait()?.is_some())
    }

    #[cfg(unix)]
    fn interrupt(&mut self) {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        if matches!(self.child.try_wait(), Ok(Some(_))) {
            return;
        }
        let pid = Pid::from_raw(self.child.id() as i32);
        if let Err(e) = kill(pid, Signal::SIGINT) {
            log::debug!("SIGINT to pid {pid} failed: {e}");
        }
    }

    #[cfg(not(unix))]
    fn interrupt(&mut self) {
        self.kill();
    }

    fn kill(&mut self) {
        if let Err(e) = self.child.kill() {
            log::debug!("kill of pid {} failed: {e}", self.child.id());
        }
    }

    fn wait(&mut self) {
        if let Err(e) = self.child.wait() {
            log::debug!("wait on pid {} failed: {e}", self.child.id());
        }
    }
}
