//! Application module: the session coordinator used by the TUI and runtime.
//!
//! `app::command` turns key presses into `Command`s, and `app::model` holds
//! the `App` that sequences engine commands, audio policy and statistics.

mod command;
mod model;

pub use command::*;
pub use model::*;
