//! Settings loader and schema types.
//!
//! Settings are read-only user configuration (`config.toml`). Values the app
//! writes back, such as the volume, live in `store::PrefsStore` instead.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
