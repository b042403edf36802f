//! Ambient track library: the `Track` model and the whitenoise directory scanner.

mod model;
mod scan;

pub use model::Track;
pub use scan::{catalog, scan};
