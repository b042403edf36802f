//! Message of the day: one line picked at random from the bundled messages
//! plus any `*.txt` files in the user's motd directory, reselected daily.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use walkdir::WalkDir;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct Motd {
    messages: Vec<String>,
    current: String,
    selected_at: Instant,
}

impl Motd {
    /// Build the pool from `embedded` and `user_dir`, then pick a first message.
    ///
    /// Returns `None` when neither source has a usable line.
    pub fn load(embedded: &str, user_dir: &Path, now: Instant) -> Option<Self> {
        let mut messages = parse_lines(embedded);
        messages.extend(read_dir_messages(user_dir));
        Self::from_messages(messages, now)
    }

    pub fn from_messages(messages: Vec<String>, now: Instant) -> Option<Self> {
        if messages.is_empty() {
            log::warn!("no motd messages available");
            return None;
        }
        let mut motd = Self {
            messages,
            current: String::new(),
            selected_at: now,
        };
        motd.refresh(now);
        Some(motd)
    }

    pub fn message(&self) -> &str {
        &self.current
    }

    pub fn needs_refresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.selected_at) >= REFRESH_INTERVAL
    }

    /// Pick a new message uniformly at random and restart the 24 h timer.
    pub fn refresh(&mut self, now: Instant) {
        if let Some(msg) = self.messages.choose(&mut rand::rng()) {
            self.current = msg.clone();
        }
        self.selected_at = now;
    }
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

/// Lines from every `*.txt` directly inside `dir`. Unreadable files are skipped.
fn read_dir_messages(dir: &Path) -> Vec<String> {
    let mut out = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("motd scan: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_txt(entry.path()) {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(text) => out.extend(parse_lines(&text)),
            Err(e) => log::debug!("motd skip {}: {e}", entry.path().display()),
        }
    }
    out
}
