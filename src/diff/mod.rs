//! Diff module - Pairwise structural comparison.
//!
//! Produces a flat list of typed change records with location paths.

mod engine;


pub use engine::*;
