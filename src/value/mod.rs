//! Value module - In-memory representation of JSON/YAML documents.
//!
//! This module provides the tree model shared by the diff and merge engines.

mod value;

pub use value::*;
