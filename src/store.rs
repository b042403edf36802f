//! Small JSON records kept under the user directory: session statistics and
//! user preferences. Both are rewritten in full on every change.

mod badge;
mod json;
mod prefs;
mod stats;

pub use badge::Badge;
pub use prefs::PrefsStore;
pub use stats::{Statistics, StatsStore};
