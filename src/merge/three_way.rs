//! Three-way structural reconciliation.

use crate::fieldpath::Path;
use crate::merge::MergeOutcome;
use crate::value::{Map, Value};
use std::collections::BTreeSet;

/// Merges `ours` and `theirs` against their common ancestor `base`.
///
/// Recursion happens only while all three values are objects; arrays,
/// scalars, and type-mismatched subtrees are reconciled as whole units
/// (ordered collections are not safe to merge key-by-key). Where both
/// sides diverged from base the local value wins and the path is recorded
/// as a conflict for review.
pub fn merge(base: &Value, ours: &Value, theirs: &Value) -> (Value, MergeOutcome) {
    let mut outcome = MergeOutcome::new();
    let merged = reconcile(base, ours, theirs, &Path::new(), &mut outcome);
    (merged, outcome)
}

fn reconcile(
    base: &Value,
    ours: &Value,
    theirs: &Value,
    path: &Path,
    outcome: &mut MergeOutcome,
) -> Value {
    // Identical on all three sides: nothing to reconcile at any depth.
    if base == ours && ours == theirs {
        return ours.clone();
    }

    if let (Value::Map(b), Value::Map(o), Value::Map(t)) = (base, ours, theirs) {
        return reconcile_maps(b, o, t, path, outcome);
    }

    // Opaque atom: scalar, array, or a triple that is not uniformly an
    // object. Whole-unit resolution with ours-wins bias.
    if ours == theirs {
        ours.clone()
    } else if base == ours {
        theirs.clone()
    } else if base == theirs {
        ours.clone()
    } else {
        outcome.conflicts.push(path.clone());
        ours.clone()
    }
}

fn reconcile_maps(
    base: &Map,
    ours: &Map,
    theirs: &Map,
    path: &Path,
    outcome: &mut MergeOutcome,
) -> Value {
    let mut merged = Map::new();
    let keys: BTreeSet<&String> = base
        .keys()
        .chain(ours.keys())
        .chain(theirs.keys())
        .collect();

    for key in keys {
        let child = path.with_field(key.clone());
        match (base.get(key), ours.get(key), theirs.get(key)) {
            // Present everywhere: recurse.
            (Some(bv), Some(ov), Some(tv)) => {
                merged.set(key.clone(), reconcile(bv, ov, tv, &child, outcome));
            }
            // Added only in ours: keep our addition.
            (None, Some(ov), None) => {
                merged.set(key.clone(), ov.clone());
                outcome.ours_kept.push(child);
            }
            // Added only in theirs: pull in their addition.
            (None, None, Some(tv)) => {
                merged.set(key.clone(), tv.clone());
                outcome.theirs_added.push(child);
            }
            // Added on both sides.
            (None, Some(ov), Some(tv)) => {
                merged.set(key.clone(), ov.clone());
                if ov != tv {
                    outcome.conflicts.push(child);
                }
            }
            // Removed in theirs.
            (Some(bv), Some(ov), None) => {
                if bv == ov {
                    // We left it untouched; their removal stands.
                    outcome.theirs_removed.push(child);
                } else {
                    merged.set(key.clone(), ov.clone());
                    outcome.conflicts.push(child);
                }
            }
            // Removed in ours; the key stays dropped either way.
            (Some(bv), None, Some(tv)) => {
                if bv != tv {
                    outcome.conflicts.push(child);
                }
            }
            // Removed on both sides.
            (Some(_), None, None) => {}
            (None, None, None) => unreachable!("key came from the union"),
        }
    }

    Value::Map(merged)
}
