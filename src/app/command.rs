use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A user intent, independent of the key that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start from idle, or toggle pause.
    StartPause,
    ResetCycle,
    ResetSession,
    Skip,
    ToggleAudioMenu,
    CursorUp,
    CursorDown,
    Confirm,
    /// Close the open overlay.
    Close,
    ToggleHelp,
    RefreshMotd,
    VolumeUp,
    VolumeDown,
    Quit,
}

/// Whether the event loop should keep going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let cmd = match key.code {
        KeyCode::Char(' ') => Command::StartPause,
        KeyCode::Char('R') => Command::ResetCycle,
        KeyCode::Char('r') => Command::ResetSession,
        KeyCode::Char('>') => Command::Skip,
        KeyCode::Char('a') => Command::ToggleAudioMenu,
        KeyCode::Up => Command::CursorUp,
        KeyCode::Down => Command::CursorDown,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Esc => Command::Close,
        KeyCode::Char('h') | KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Char('m') => Command::RefreshMotd,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::VolumeUp,
        KeyCode::Char('-') | KeyCode::Char('_') => Command::VolumeDown,
        KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}
