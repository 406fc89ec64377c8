//! Merge module - Three-way reconciliation of document trees.
//!
//! Reconciles a locally modified copy and a fresh upstream revision
//! against their common ancestor, keeping local edits on conflict.

mod outcome;
mod three_way;

#[cfg(test)]
mod merge_test;

pub use outcome::*;
pub use three_way::*;
