//! Pomodoro session engine.
//!
//! `engine::model` holds the plain data types (mode, run status, plan,
//! transitions) and `engine::machine` the `PomodoroEngine` state machine that
//! turns commands and time deltas into an ordered transition stream.

mod machine;
mod model;

pub use machine::*;
pub use model::*;

#[cfg(test)]
mod tests;
