use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path: `<base>/config.toml`, where `<base>` is `$ZONEOUT_HOME` or `~/.zoneout`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ZONEOUT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub session: SessionSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Length of each focus phase in minutes.
    pub focus_minutes: u64,
    /// Length of each break in minutes.
    pub break_minutes: u64,
    /// Focus phases per cycle; every one is followed by a break.
    pub total_sessions: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
            total_sessions: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Amount added or removed by one press of `+` / `-`.
    pub volume_step: f32,
    /// Play the start/stop cues on phase transitions.
    pub effects: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume_step: 0.1,
            effects: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Interval between timer ticks (milliseconds).
    pub tick_ms: u64,

    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Whether to render the message of the day.
    pub show_motd: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            header_text: " ~ zoneout ~ ".to_string(),
            show_motd: true,
        }
    }
}
