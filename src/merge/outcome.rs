//! Merge outcome bookkeeping.

use crate::fieldpath::Path;

/// MergeOutcome accumulates what a three-way merge pass decided at each
/// key it had to reconcile.
///
/// Paths here are dotted object-key sequences only; arrays are merged as
/// whole units so no index ever appears. A conflict means both sides
/// diverged from base and `ours` was kept; it is flagged for review, not
/// treated as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Keys added only locally and preserved.
    pub ours_kept: Vec<Path>,
    /// Keys added only upstream and pulled in.
    pub theirs_added: Vec<Path>,
    /// Keys removed upstream that we had left untouched; removal applied.
    pub theirs_removed: Vec<Path>,
    /// Keys where both sides diverged; `ours` kept.
    pub conflicts: Vec<Path>,
}

impl MergeOutcome {
    /// Creates a new empty outcome.
    pub fn new() -> Self {
        MergeOutcome::default()
    }

    /// Returns true if no conflicts were recorded.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns true if the merge recorded nothing at all, i.e. the three
    /// inputs required no reconciliation beyond equal subtrees.
    pub fn is_noop(&self) -> bool {
        self.ours_kept.is_empty()
            && self.theirs_added.is_empty()
            && self.theirs_removed.is_empty()
            && self.conflicts.is_empty()
    }

    /// Total number of recorded entries across all categories.
    pub fn len(&self) -> usize {
        self.ours_kept.len()
            + self.theirs_added.len()
            + self.theirs_removed.len()
            + self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_noop()
    }
}
