use std::env;

use crate::app::{App, Options, Stores};
use crate::assets::{self, Extracted, MESSAGES};
use crate::audio::{AudioController, SystemBackend};
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::engine::PomodoroEngine;
use crate::error::{NoAudioAssetsError, SetupError};
use crate::library;
use crate::motd::Motd;
use crate::paths::Paths;
use crate::store::{PrefsStore, StatsStore};

/// Extract the bundled assets and wire every component into an `App`.
///
/// Extracted scratch files are removed again if a later step fails.
pub fn build_app(paths: &Paths, settings: &Settings) -> Result<App, SetupError> {
    let extracted = assets::extract(&env::temp_dir())?;
    let scratch = extracted.scratch.clone();

    assemble(paths, settings, extracted).inspect_err(|_| assets::remove_scratch(&scratch))
}

fn assemble(paths: &Paths, settings: &Settings, extracted: Extracted) -> Result<App, SetupError> {
    let tracks = library::catalog(extracted.tracks, &paths.whitenoise).map_err(|source| {
        SetupError::Scan {
            path: paths.whitenoise.clone(),
            source,
        }
    })?;
    if tracks.is_empty() {
        log::warn!("{}", NoAudioAssetsError);
    }
    log::info!("{} ambient tracks available", tracks.len());

    let stats = StatsStore::open(&paths.stats_file)?;
    let prefs = PrefsStore::open(&paths.prefs_file)?;

    let clock = SystemClock;
    let motd = if settings.ui.show_motd {
        Motd::load(MESSAGES, &paths.motd, clock.now())
    } else {
        None
    };

    let plan = settings.plan().unwrap_or_default();
    log::info!(
        "plan: {} x {}m focus / {}m break",
        plan.total_sessions(),
        plan.focus_minutes(),
        plan.break_duration().as_secs() / 60
    );

    let audio = AudioController::new(SystemBackend::new(), tracks, extracted.scratch, prefs.volume());

    let app = App::new(
        PomodoroEngine::new(plan),
        audio,
        Stores { stats, prefs },
        Box::new(clock),
        Options::from_settings(settings),
    )
    .with_motd(motd)
    .with_effects(extracted.effects);

    Ok(app)
}
