//! Fieldpath module - Paths locating values inside a document tree.

mod path;

pub use path::*;
