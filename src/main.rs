use std::process::ExitCode;

mod app;
mod assets;
mod audio;
mod clock;
mod config;
mod engine;
mod error;
mod library;
mod logging;
mod motd;
mod paths;
mod runtime;
mod store;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("zoneout: {e}");
            ExitCode::FAILURE
        }
    }
}
