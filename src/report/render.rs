//! Text rendering of diff and merge results, and exit-code derivation.

use crate::diff::{ChangeKind, ChangeRecord};
use crate::fieldpath::Path;
use crate::merge::MergeOutcome;
use crate::report::group_changes;
use crate::value::{to_json, Value};
use std::fmt::Write;

/// How many example paths each merge category prints before eliding.
/// Conflicts are always listed in full.
const MERGE_EXAMPLE_LIMIT: usize = 20;

fn symbol(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added | ChangeKind::ArrayItemAdded => "+",
        ChangeKind::Removed | ChangeKind::ArrayItemRemoved => "-",
        ChangeKind::ValueChanged | ChangeKind::TypeChanged => "~",
    }
}

fn label(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added | ChangeKind::ArrayItemAdded => "ADDED",
        ChangeKind::Removed | ChangeKind::ArrayItemRemoved => "REMOVED",
        ChangeKind::ValueChanged | ChangeKind::TypeChanged => "CHANGED",
    }
}

fn json_text(value: &Value) -> String {
    to_json(value).unwrap_or_default()
}

fn detail(record: &ChangeRecord) -> Option<String> {
    let (old, new) = record.detail.as_ref()?;
    match record.kind {
        ChangeKind::ValueChanged => Some(format!("{} → {}", json_text(old), json_text(new))),
        ChangeKind::TypeChanged => {
            Some(format!("type {} → {}", old.type_name(), new.type_name()))
        }
        _ => None,
    }
}

/// Renders a diff as text: a header, the total count, then one section per
/// display bucket with its changes sorted by path.
pub fn render_diff(a_name: &str, b_name: &str, records: &[ChangeRecord]) -> String {
    if records.is_empty() {
        return format!("✓ No differences between {} and {}\n", a_name, b_name);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Comparing {} → {}", a_name, b_name);
    let _ = writeln!(out, "Found {} difference(s):", records.len());
    let _ = writeln!(out);

    for (group, bucket) in group_changes(records) {
        let _ = writeln!(out, "  {} ({} changes)", group, bucket.len());
        for record in bucket {
            let suffix = detail(record)
                .map(|d| format!("  ({})", d))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {} {:>8}  {}{}",
                symbol(record.kind),
                label(record.kind),
                record.path,
                suffix
            );
        }
        let _ = writeln!(out);
    }

    out
}

fn category(out: &mut String, heading: &str, marker: &str, paths: &[Path], limit: usize) {
    if paths.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}: {}", heading, paths.len());
    for path in paths.iter().take(limit) {
        let _ = writeln!(out, "    {} {}", marker, path);
    }
    if paths.len() > limit {
        let _ = writeln!(out, "    ... and {} more", paths.len() - limit);
    }
}

/// Renders a merge outcome: per-category counts with example paths, the
/// non-conflict categories elided past a bound, conflicts listed in full.
pub fn render_merge(outcome: &MergeOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Merge results:");

    category(
        &mut out,
        "Upstream additions pulled in",
        "+",
        &outcome.theirs_added,
        MERGE_EXAMPLE_LIMIT,
    );
    category(
        &mut out,
        "Local additions preserved",
        "●",
        &outcome.ours_kept,
        MERGE_EXAMPLE_LIMIT,
    );
    category(
        &mut out,
        "Upstream removals applied",
        "-",
        &outcome.theirs_removed,
        MERGE_EXAMPLE_LIMIT,
    );
    category(
        &mut out,
        "⚠ CONFLICTS (ours kept)",
        "✗",
        &outcome.conflicts,
        usize::MAX,
    );

    if outcome.is_noop() {
        let _ = writeln!(out, "  No changes needed.");
    }

    out
}

/// Exit code for a diff run: 0 when the trees are identical, 1 otherwise.
pub fn diff_exit_code(records: &[ChangeRecord]) -> u8 {
    if records.is_empty() {
        0
    } else {
        1
    }
}

/// Exit code for a merge run: 0 for a clean merge, 1 when conflicts were
/// recorded (the merged tree is still usable, with ours kept at each
/// conflict site).
pub fn merge_exit_code(outcome: &MergeOutcome) -> u8 {
    if outcome.is_clean() {
        0
    } else {
        1
    }
}
