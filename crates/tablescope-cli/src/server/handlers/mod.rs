//! API request handlers.

mod analysis;
mod dataset;

pub use analysis::*;
pub use dataset::*;
