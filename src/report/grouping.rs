//! Grouping of change paths into display buckets.

use crate::diff::ChangeRecord;
use crate::fieldpath::{Path, PathElement};
use std::collections::BTreeMap;
use std::fmt;

/// GroupLabel is the display bucket a change path falls into.
///
/// Variant order matches the alphabetical order of the rendered labels
/// (`Endpoint: ...` < `Other` < `Schema: ...`), so the derived `Ord` sorts
/// groups exactly as they are displayed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupLabel {
    /// A path under `paths.<endpoint>...`, labelled by its first two segments.
    Endpoint(String),
    /// Everything that is neither a schema nor an endpoint path.
    Other,
    /// A path under `components.schemas.<name>...`, labelled by the name.
    Schema(String),
}

impl GroupLabel {
    /// Classifies a change path into its display bucket.
    ///
    /// `components.schemas.<X>` needs a third segment to name the schema;
    /// a bare `components.schemas` falls through to `Other`, as does a
    /// bare `paths` with no endpoint segment.
    pub fn classify(path: &Path) -> GroupLabel {
        match path.as_slice() {
            [PathElement::Field(a), PathElement::Field(b), PathElement::Field(name), ..]
                if a == "components" && b == "schemas" =>
            {
                GroupLabel::Schema(name.clone())
            }
            [PathElement::Field(first), endpoint, ..] if first == "paths" => {
                GroupLabel::Endpoint(format!("{}.{}", first, endpoint))
            }
            _ => GroupLabel::Other,
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Schema(name) => write!(f, "Schema: {}", name),
            GroupLabel::Endpoint(endpoint) => write!(f, "Endpoint: {}", endpoint),
            GroupLabel::Other => write!(f, "Other"),
        }
    }
}

/// Groups change records by display bucket, buckets sorted by label and
/// records within each bucket sorted lexicographically by dotted path.
pub fn group_changes(records: &[ChangeRecord]) -> BTreeMap<GroupLabel, Vec<&ChangeRecord>> {
    let mut grouped: BTreeMap<GroupLabel, Vec<&ChangeRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(GroupLabel::classify(&record.path))
            .or_default()
            .push(record);
    }
    for bucket in grouped.values_mut() {
        bucket.sort_by_key(|r| r.path.dotted());
    }
    grouped
}
