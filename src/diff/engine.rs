//! Pairwise structural comparison of two document trees.

use crate::fieldpath::Path;
use crate::value::Value;
use std::collections::BTreeSet;

/// ChangeKind classifies a single structural difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Object key present only in the right-hand document.
    Added,
    /// Object key present only in the left-hand document.
    Removed,
    /// Scalars of the same tag with different values.
    ValueChanged,
    /// Values of different tags; the subtree is not compared further.
    TypeChanged,
    /// Array position present only in the right-hand document.
    ArrayItemAdded,
    /// Array position present only in the left-hand document.
    ArrayItemRemoved,
}

/// ChangeRecord is one structural difference at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub path: Path,
    /// Old and new values, present for `ValueChanged` and `TypeChanged`.
    pub detail: Option<(Value, Value)>,
}

impl ChangeRecord {
    fn new(kind: ChangeKind, path: Path) -> Self {
        ChangeRecord {
            kind,
            path,
            detail: None,
        }
    }

    fn with_detail(kind: ChangeKind, path: Path, old: &Value, new: &Value) -> Self {
        ChangeRecord {
            kind,
            path,
            detail: Some((old.clone(), new.clone())),
        }
    }
}

/// Compares two trees and returns every structural difference going from
/// `a` to `b`.
///
/// Objects are walked over the sorted union of their keys, arrays by
/// position up to the longer length, and scalars by tag-aware equality.
/// The record set is deterministic for fixed inputs; presentation order
/// is imposed later by the grouping layer.
pub fn diff(a: &Value, b: &Value) -> Vec<ChangeRecord> {
    let mut records = Vec::new();
    walk(a, b, &Path::new(), &mut records);
    records
}

fn walk(a: &Value, b: &Value, path: &Path, out: &mut Vec<ChangeRecord>) {
    if a == b {
        return;
    }

    match (a, b) {
        (Value::Map(ma), Value::Map(mb)) => {
            let keys: BTreeSet<&String> = ma.keys().chain(mb.keys()).collect();
            for key in keys {
                let child = path.with_field(key.clone());
                match (ma.get(key), mb.get(key)) {
                    (Some(va), Some(vb)) => walk(va, vb, &child, out),
                    (Some(_), None) => out.push(ChangeRecord::new(ChangeKind::Removed, child)),
                    (None, Some(_)) => out.push(ChangeRecord::new(ChangeKind::Added, child)),
                    (None, None) => unreachable!("key came from the union"),
                }
            }
        }
        (Value::List(la), Value::List(lb)) => {
            for i in 0..la.len().max(lb.len()) {
                let child = path.with_index(i);
                match (la.get(i), lb.get(i)) {
                    (Some(va), Some(vb)) => walk(va, vb, &child, out),
                    (Some(_), None) => {
                        out.push(ChangeRecord::new(ChangeKind::ArrayItemRemoved, child));
                    }
                    (None, Some(_)) => {
                        out.push(ChangeRecord::new(ChangeKind::ArrayItemAdded, child));
                    }
                    (None, None) => unreachable!("index below max length"),
                }
            }
        }
        _ if a.same_type(b) => {
            out.push(ChangeRecord::with_detail(
                ChangeKind::ValueChanged,
                path.clone(),
                a,
                b,
            ));
        }
        _ => {
            out.push(ChangeRecord::with_detail(
                ChangeKind::TypeChanged,
                path.clone(),
                a,
                b,
            ));
        }
    }
}
