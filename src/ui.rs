//! UI rendering for the terminal dashboard.
//!
//! This module renders the timer, session info and the help and audio-menu
//! overlays using `ratatui`. It only reads from `App`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::Backend;
use crate::config::UiSettings;
use crate::engine::{Mode, RunStatus};
use crate::store::Badge;

const RED: Color = Color::Rgb(255, 107, 107);
const GREEN: Color = Color::Rgb(107, 207, 127);
const YELLOW: Color = Color::Rgb(255, 217, 61);
const CYAN: Color = Color::Rgb(0, 217, 255);
const TEAL: Color = Color::Rgb(160, 231, 229);
const GREY: Color = Color::Rgb(102, 102, 102);

const CONTROLS: &[(&str, &str)] = &[
    ("space", "start/pause"),
    ("r", "reset session"),
    ("R", "reset cycle"),
    (">", "skip"),
    ("a", "audio"),
    ("+/-", "volume"),
    ("h/?", "help"),
    ("q", "quit"),
];

const HELP: &[(&str, &str)] = &[
    ("space", "Start / pause / resume"),
    ("r", "Restart the current phase"),
    ("R", "Reset the whole cycle"),
    (">", "Skip to the next phase"),
    ("a", "Choose ambient track"),
    ("up/down", "Move in the audio menu"),
    ("enter", "Play the highlighted track"),
    ("esc", "Close menu"),
    ("+/-", "Volume up/down"),
    ("m", "New message of the day"),
    ("h / ?", "Toggle help"),
    ("q", "Quit"),
];

/// 3x5 block glyphs for `0`-`9`.
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

/// Render `text` (digits and colons) as five rows of block characters.
fn big_text(text: &str) -> [String; 5] {
    let mut rows: [String; 5] = Default::default();
    for (i, ch) in text.chars().enumerate() {
        let glyph = match ch {
            ':' => &COLON,
            c => match c.to_digit(10) {
                Some(d) => &DIGITS[d as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => RED,
        Mode::Break => GREEN,
        Mode::Idle => YELLOW,
    }
}

fn status_color(status: RunStatus) -> Color {
    match status {
        RunStatus::Running => GREEN,
        RunStatus::Paused => YELLOW,
        RunStatus::Stopped => TEAL,
    }
}

fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn volume_text(volume: f32) -> String {
    format!("Volume: {}%", (volume * 100.0).round() as u32)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw<B: Backend>(frame: &mut Frame, app: &App<B>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" zoneout ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let state = app.engine().state();
    let color = mode_color(state.mode);

    // Timer
    let timer_lines: Vec<Line> = big_text(&state.remaining_mmss())
        .into_iter()
        .map(|row| Line::from(row).fg(CYAN))
        .collect();
    let timer = Paragraph::new(timer_lines).alignment(Alignment::Center).block(
        Block::bordered()
            .border_style(Style::default().fg(CYAN))
            .title(Line::from(format!(" {} ", state.mode.label())).fg(color).bold())
            .title_alignment(Alignment::Center)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(timer, chunks[1]);

    // Progress
    let gauge_color = if state.mode == Mode::Idle { GREY } else { color };
    let gauge = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Rgb(51, 51, 51)))
        .ratio(state.progress());
    frame.render_widget(gauge, chunks[2]);

    // Info
    let today = app.stats().today_sessions();
    let badge = Badge::for_sessions(today);
    let plan = app.engine().plan();
    let audio = app.audio();

    let track = if audio.list_tracks().is_empty() {
        "no tracks".to_string()
    } else {
        audio
            .active_selection()
            .or_else(|| audio.list_tracks().first().cloned())
            .map(|t| t.display)
            .unwrap_or_default()
    };
    let sound = if audio.is_playing() {
        "♪"
    } else if audio.is_paused() {
        "⏸"
    } else {
        "-"
    };

    let mut lines = vec![
        Line::from(format!(
            "Session {} of {} | Completed Today: {}",
            state.session,
            plan.total_sessions(),
            today
        ))
        .fg(TEAL),
        Line::from(format!("{} {}", badge.emoji(), badge.label())).fg(YELLOW).bold(),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(state.status.label(), Style::default().fg(status_color(state.status))),
            Span::raw(" • "),
            Span::raw(volume_text(app.volume())),
            Span::raw(" • "),
            Span::raw(format!("Ambient {sound} {track}")),
        ]),
    ];

    if ui_settings.show_motd
        && let Some(motd) = app.motd()
    {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("“{}”", motd.message())).fg(YELLOW).italic());
    }
    if let Some(notice) = app.notice() {
        lines.push(Line::from(notice.to_string()).fg(RED));
    }
    lines.push(Line::from("Press 'h' or '?' for help").fg(GREY));

    let info = Paragraph::new(lines)
        .block(padded(" session "))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[3]);

    let footer_text = CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let footer = Paragraph::new(footer_text)
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    if app.help_open() {
        draw_help(frame, chunks[3]);
    } else if app.audio_menu_open() {
        draw_audio_menu(frame, app, chunks[3]);
    }
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect_sized(48, HELP.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = HELP
        .iter()
        .map(|(k, v)| {
            Line::from(vec![
                Span::styled(format!("{k:<9}"), Style::default().fg(CYAN)),
                Span::raw(*v),
            ])
        })
        .collect();
    let help = Paragraph::new(lines).block(padded(" help (esc closes) "));
    frame.render_widget(help, popup);
}

fn draw_audio_menu<B: Backend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let tracks = app.audio().list_tracks();
    let popup = centered_rect_sized(56, tracks.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let active = app.audio().active_selection();
    let items: Vec<ListItem> = tracks
        .iter()
        .map(|t| {
            let marker = if active.as_ref() == Some(t) { "♪ " } else { "  " };
            let tag = if t.embedded { " (bundled)" } else { "" };
            let length = t
                .duration
                .map(|d| format!(" [{}]", format_mmss(d.as_secs())))
                .unwrap_or_default();
            ListItem::new(format!("{marker}{}{length}{tag}", t.display))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CYAN))
                .title(" ambient tracks "),
        )
        .highlight_style(Style::default().fg(YELLOW).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.menu_cursor()));
    frame.render_stateful_widget(list, popup, &mut state);
}
