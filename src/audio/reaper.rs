use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::backend::PlaybackProcess;
use super::controller::{SharedState, lock};

pub(super) const REAP_INTERVAL: Duration = Duration::from_millis(50);

/// Watch an ambient playback until it exits, then clear the playing flag if
/// it is still the current playback.
pub(super) fn watch<P: PlaybackProcess>(
    state: SharedState<P>,
    process: Arc<Mutex<P>>,
    generation: u64,
) {
    thread::spawn(move || {
        loop {
            thread::sleep(REAP_INTERVAL);

            // Never hold the process lock while taking the state lock.
            let exited = match lock(&process).try_wait() {
                Ok(exited) => exited,
                Err(e) => {
                    log::debug!("lost track of player process: {e}");
                    true
                }
            };
            if !exited {
                continue;
            }

            let mut state = lock(&state);
            let current = state
                .playback
                .as_ref()
                .is_some_and(|live| live.generation == generation);
            if current {
                state.playback = None;
                state.is_playing = false;
                log::debug!("ambient playback {generation} ended");
            }
            break;
        }
    });
}

/// Reap a one-shot process in the background.
pub(super) fn detach<P: PlaybackProcess>(mut process: P) {
    thread::spawn(move || process.wait());
}
