use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

use super::json;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The on-disk statistics record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_sessions: u32,
    pub today_sessions: u32,
    /// Local date of the last completed session, `YYYY-MM-DD`; empty before the first.
    pub last_session_date: String,
    pub total_focus_minutes: u64,
}

impl Statistics {
    /// Sessions completed on `date`: zero unless the last session was that day.
    pub fn sessions_on(&self, date: NaiveDate) -> u32 {
        if self.last_session_date == format_date(date) {
            self.today_sessions
        } else {
            0
        }
    }

    fn record(&mut self, minutes: u64, date: NaiveDate) {
        let today = format_date(date);
        if self.last_session_date != today {
            self.today_sessions = 0;
        }
        self.total_sessions += 1;
        self.today_sessions += 1;
        self.total_focus_minutes += minutes;
        self.last_session_date = today;
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Statistics persisted at `<base>/.zoneout_stats`.
///
/// Writers are serialized by an internal lock and every update re-reads the
/// file first, so edits made by another process are not lost.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    cached: Mutex<Statistics>,
}

impl StatsStore {
    /// Open the store. A missing file starts from zeros; a corrupt one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let stats = json::read(&path)?;
        Ok(Self {
            path,
            cached: Mutex::new(stats),
        })
    }

    /// Record one completed focus session of `minutes` for today's local date.
    pub fn add_session(&self, minutes: u64) -> Result<Statistics, PersistenceError> {
        self.add_session_on(minutes, Local::now().date_naive())
    }

    /// Record one completed focus session dated `date`.
    ///
    /// The in-memory record is updated even when writing fails.
    pub fn add_session_on(&self, minutes: u64, date: NaiveDate) -> Result<Statistics, PersistenceError> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        match json::read::<Statistics>(&self.path) {
            Ok(on_disk) => *cached = on_disk,
            Err(e) => log::warn!("re-reading statistics failed, using cached copy: {e}"),
        }
        cached.record(minutes, date);

        // Hold the lock until the write lands, or a concurrent caller could
        // re-read the old record and overwrite this session.
        json::write(&self.path, &*cached)?;
        log::info!(
            "focus session recorded ({} today, {} total)",
            cached.today_sessions,
            cached.total_sessions
        );
        Ok(cached.clone())
    }

    pub fn snapshot(&self) -> Statistics {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn today_sessions(&self) -> u32 {
        self.today_sessions_on(Local::now().date_naive())
    }

    pub fn today_sessions_on(&self, date: NaiveDate) -> u32 {
        self.snapshot().sessions_on(date)
    }
}
