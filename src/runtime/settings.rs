use crate::config;
use crate::paths::Paths;

pub fn load_settings(paths: &Paths) -> config::Settings {
    match config::Settings::load(&paths.config_file) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Settings are optional; failures should not prevent the app from starting.
            log::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
