//! The session coordinator: `App` owns the engine, the audio controller and
//! the stores, and is the only place that sequences them.

use std::path::Path;
use std::time::Instant;

use crate::assets::Effects;
use crate::audio::{AudioController, Backend, SystemBackend};
use crate::clock::Clock;
use crate::config::Settings;
use crate::engine::{Mode, PomodoroEngine, RunStatus, Transition};
use crate::error::NoAudioAssetsError;
use crate::library::Track;
use crate::motd::Motd;
use crate::store::{PrefsStore, StatsStore};

use super::command::{Command, Flow};

/// Coordinator tunables taken from `Settings`.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub volume_step: f32,
    pub effects: bool,
}

impl Options {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            volume_step: settings.audio.volume_step,
            effects: settings.audio.effects,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// The persistent stores the coordinator writes to.
#[derive(Debug)]
pub struct Stores {
    pub stats: StatsStore,
    pub prefs: PrefsStore,
}

pub struct App<B: Backend = SystemBackend> {
    engine: PomodoroEngine,
    audio: AudioController<B>,
    stores: Stores,
    motd: Option<Motd>,
    effects: Effects,
    clock: Box<dyn Clock>,
    last_tick: Instant,
    options: Options,

    audio_menu: bool,
    help: bool,
    menu_cursor: usize,
    /// Latest warning shown in the status area.
    notice: Option<String>,
    /// Set after an ambient launch fails so reconciliation does not retry every tick.
    playback_failed: bool,
}

impl<B: Backend> App<B> {
    pub fn new(
        engine: PomodoroEngine,
        audio: AudioController<B>,
        stores: Stores,
        clock: Box<dyn Clock>,
        options: Options,
    ) -> Self {
        let last_tick = clock.now();
        Self {
            engine,
            audio,
            stores,
            motd: None,
            effects: Effects::default(),
            clock,
            last_tick,
            options,
            audio_menu: false,
            help: false,
            menu_cursor: 0,
            notice: None,
            playback_failed: false,
        }
    }

    pub fn with_motd(mut self, motd: Option<Motd>) -> Self {
        self.motd = motd;
        self
    }

    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = effects;
        self
    }

    pub fn engine(&self) -> &PomodoroEngine {
        &self.engine
    }

    pub fn audio(&self) -> &AudioController<B> {
        &self.audio
    }

    pub fn stats(&self) -> &StatsStore {
        &self.stores.stats
    }

    pub fn motd(&self) -> Option<&Motd> {
        self.motd.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.stores.prefs.volume()
    }

    pub fn audio_menu_open(&self) -> bool {
        self.audio_menu
    }

    pub fn help_open(&self) -> bool {
        self.help
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn handle(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::StartPause => self.start_pause(),
            Command::ResetCycle => {
                let events = self.engine.reset_cycle();
                self.audio.stop();
                self.audio_menu = false;
                self.help = false;
                self.playback_failed = false;
                self.apply(&events);
            }
            Command::ResetSession => {
                let events = self.engine.reset_session();
                self.cue(self.effects.start.as_deref());
                self.apply(&events);
                self.reconcile_audio();
            }
            Command::Skip => {
                let events = self.engine.skip();
                self.apply(&events);
                self.reconcile_audio();
            }
            Command::ToggleAudioMenu => self.toggle_audio_menu(),
            Command::CursorUp => {
                if self.audio_menu {
                    self.menu_cursor = self.menu_cursor.saturating_sub(1);
                }
            }
            Command::CursorDown => {
                let len = self.audio.list_tracks().len();
                if self.audio_menu && self.menu_cursor + 1 < len {
                    self.menu_cursor += 1;
                }
            }
            Command::Confirm => self.confirm_track(),
            Command::Close => {
                if self.audio_menu {
                    self.audio_menu = false;
                } else {
                    self.help = false;
                }
            }
            Command::ToggleHelp => {
                self.help = !self.help;
                self.audio_menu = false;
            }
            Command::RefreshMotd => {
                let now = self.clock.now();
                if let Some(motd) = self.motd.as_mut() {
                    motd.refresh(now);
                }
            }
            Command::VolumeUp => self.step_volume(self.options.volume_step),
            Command::VolumeDown => self.step_volume(-self.options.volume_step),
            Command::Quit => {
                self.audio.stop();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Advance the engine by the wall-clock time since the last tick.
    pub fn on_tick(&mut self) {
        let now = self.clock.now();
        if let Some(motd) = self.motd.as_mut()
            && motd.needs_refresh(now)
        {
            motd.refresh(now);
        }

        let delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.engine.status() == RunStatus::Running {
            let events = self.engine.tick(delta);
            let completed = events
                .iter()
                .filter(|t| matches!(t, Transition::Completed { mode: Mode::Focus, .. }))
                .count();
            for _ in 0..completed {
                self.record_focus_session();
            }
            self.apply(&events);
        }

        self.reconcile_audio();
    }

    /// Make the ambient track follow the engine: live exactly while focusing.
    pub fn reconcile_audio(&mut self) {
        let focusing = self.engine.state().is_focusing();

        if focusing && !self.audio.is_playing() && !self.playback_failed {
            let track = self
                .audio
                .active_selection()
                .or_else(|| self.audio.list_tracks().first().cloned());
            if let Some(track) = track {
                self.play(&track);
            }
        } else if !focusing && self.audio.is_playing() {
            self.audio.pause();
        }
    }

    fn start_pause(&mut self) {
        match self.engine.status() {
            RunStatus::Stopped => {
                let events = self.engine.start();
                self.last_tick = self.clock.now();
                self.playback_failed = false;
                self.apply(&events);
                self.reconcile_audio();
            }
            RunStatus::Running => {
                let events = self.engine.pause();
                self.audio.pause();
                self.apply(&events);
            }
            RunStatus::Paused => {
                let events = self.engine.resume();
                self.last_tick = self.clock.now();
                if self.engine.mode() == Mode::Focus
                    && let Err(e) = self.audio.resume()
                {
                    self.playback_failed = true;
                    self.report(format!("audio: {e}"));
                }
                self.apply(&events);
                self.reconcile_audio();
            }
        }
    }

    fn toggle_audio_menu(&mut self) {
        if self.audio.list_tracks().is_empty() {
            self.report(NoAudioAssetsError.to_string());
            return;
        }
        self.audio_menu = !self.audio_menu;
        self.help = false;
        if self.audio_menu {
            let selected = self.audio.active_selection();
            self.menu_cursor = self
                .audio
                .list_tracks()
                .iter()
                .position(|t| Some(t) == selected.as_ref())
                .unwrap_or(0);
        }
    }

    fn confirm_track(&mut self) {
        if !self.audio_menu {
            return;
        }
        let Some(track) = self.audio.list_tracks().get(self.menu_cursor).cloned() else {
            return;
        };
        self.audio_menu = false;
        self.playback_failed = false;

        if self.engine.state().is_focusing() {
            self.play(&track);
        } else {
            // Outside a running focus phase reconcile would pause it straight away.
            self.audio.select(&track);
        }
    }

    fn step_volume(&mut self, delta: f32) {
        let volume = ((self.volume() + delta).clamp(0.0, 1.0) * 100.0).round() / 100.0;

        if let Err(e) = self.stores.prefs.set_volume(volume) {
            self.report(format!("saving volume failed: {e}"));
        }
        self.audio.set_volume(volume);

        // The player takes its volume at launch, so restart the live track.
        if self.audio.is_playing()
            && let Some(track) = self.audio.active_selection()
        {
            self.play(&track);
            log::debug!(
                "volume {volume:.2}, ambient restarted (playback {:?})",
                self.audio.playback_generation()
            );
        }
    }

    fn play(&mut self, track: &Track) {
        if let Err(e) = self.audio.play_track(track) {
            self.playback_failed = true;
            self.report(format!("audio: {e}"));
        }
    }

    fn record_focus_session(&mut self) {
        let minutes = self.engine.plan().focus_minutes();
        if let Err(e) = self.stores.stats.add_session(minutes) {
            self.report(format!("saving statistics failed: {e}"));
        }
    }

    /// Map engine transitions to cues and audio side effects.
    fn apply(&mut self, events: &[Transition]) {
        for event in events {
            match event {
                Transition::Entered(Mode::Focus) | Transition::Resumed => {
                    self.cue(self.effects.start.as_deref());
                }
                Transition::Entered(Mode::Break) | Transition::Paused => {
                    self.cue(self.effects.stop.as_deref());
                }
                Transition::Completed { mode, session } => {
                    log::info!("{} {session} completed", mode.label().to_lowercase());
                }
                Transition::CycleCompleted => {
                    log::info!("cycle completed");
                    self.audio.stop();
                }
                Transition::CycleReset => log::info!("cycle reset"),
                Transition::Started | Transition::SessionRestarted | Transition::Entered(Mode::Idle) => {}
            }
        }
    }

    fn cue(&self, path: Option<&Path>) {
        if self.options.effects
            && let Some(path) = path
        {
            self.audio.play_effect(path);
        }
    }

    fn report(&mut self, msg: String) {
        log::warn!("{msg}");
        self.notice = Some(msg);
    }

    /// Stop playback and remove extracted scratch files.
    pub fn shutdown(&mut self) {
        self.audio.close();
    }
}
