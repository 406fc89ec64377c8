//! # Spec Reconcile
//!
//! Structural diff and three-way merge for API spec documents that evolve
//! independently: an upstream baseline, a locally customized copy, and a
//! freshly fetched upstream revision.
//!
//! The diff reports every structural difference between two trees, grouped
//! by schema or endpoint rather than raw lines. The merge preserves local
//! customizations, adopts non-conflicting upstream changes, and flags
//! genuine conflicts for review while keeping the local value at each
//! conflict site.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of parsed JSON/YAML documents
//! - [`fieldpath`] - Paths locating values inside a document tree
//! - [`diff`] - Pairwise structural comparison producing change records
//! - [`merge`] - Three-way reconciliation with a conflict outcome record
//! - [`report`] - Grouped text rendering and exit-code derivation
//! - [`document`] - File loading/writing at the I/O boundary

pub mod diff;
pub mod document;
pub mod fieldpath;
pub mod merge;
pub mod report;
pub mod value;

pub use diff::{diff, ChangeKind, ChangeRecord};
pub use document::DocumentError;
pub use fieldpath::{Path, PathElement};
pub use merge::{merge, MergeOutcome};
pub use report::{group_changes, render_diff, render_merge, GroupLabel};
pub use value::Value;
