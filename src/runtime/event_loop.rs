use std::io::Stdout;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Flow, command_for};
use crate::config;
use crate::ui;

/// Main terminal event loop: draws, dispatches key presses and drives the
/// timer tick. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let interval = settings.tick_interval();
    let mut next_tick = Instant::now() + interval;

    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(cmd) = command_for(key)
            && app.handle(cmd) == Flow::Quit
        {
            return Ok(());
        }

        if Instant::now() >= next_tick {
            app.on_tick();
            next_tick = Instant::now() + interval;
        }
    }
}
