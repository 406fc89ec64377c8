//! Report module - Grouped presentation of results and exit codes.

mod grouping;
mod render;

pub use grouping::*;
pub use render::*;
