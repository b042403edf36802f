use std::io;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::Settings;
use crate::logging;
use crate::paths::Paths;

mod event_loop;
mod settings;
mod startup;

/// Prepare the user directory and assets, run the TUI until quit, then clean up.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let paths = Paths::resolve()?;
    paths.ensure()?;

    if let Err(e) = logging::init(&paths.log_file) {
        eprintln!("zoneout: logging disabled: {e}");
    }
    log::info!("starting in {}", paths.base.display());

    let settings = settings::load_settings(&paths);
    let mut app = startup::build_app(&paths, &settings)?;

    let run_result = run_terminal(&settings, &mut app);

    app.shutdown();
    log::info!("shut down");
    run_result
}

fn run_terminal(settings: &Settings, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, settings, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
