//! Tests for three-way merge.
//!
//! Exercises every membership case of the key table plus the whole-unit
//! rules for scalars, arrays, and type-mismatched subtrees.

#[cfg(test)]
mod tests {
    use crate::fieldpath::Path;
    use crate::merge::{merge, MergeOutcome};
    use crate::value::{from_json, Value};
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Value {
        from_json(json).unwrap()
    }

    fn paths(dotted: &[&str]) -> Vec<Path> {
        dotted.iter().map(|d| Path::from_dotted(d)).collect()
    }

    /// Runs a merge and asserts the merged tree plus all four categories.
    fn check(
        base: &str,
        ours: &str,
        theirs: &str,
        expected: &str,
        ours_kept: &[&str],
        theirs_added: &[&str],
        theirs_removed: &[&str],
        conflicts: &[&str],
    ) {
        let (merged, outcome) = merge(&parse(base), &parse(ours), &parse(theirs));
        assert_eq!(merged, parse(expected));
        assert_eq!(outcome.ours_kept, paths(ours_kept));
        assert_eq!(outcome.theirs_added, paths(theirs_added));
        assert_eq!(outcome.theirs_removed, paths(theirs_removed));
        assert_eq!(outcome.conflicts, paths(conflicts));
    }

    #[test]
    fn test_identical_inputs_are_a_noop() {
        for json in [
            "null",
            "42",
            r#""text""#,
            "[1, 2, 3]",
            r#"{"a": {"b": [1, {"c": null}]}}"#,
        ] {
            let t = parse(json);
            let (merged, outcome) = merge(&t, &t, &t);
            assert_eq!(merged, t);
            assert_eq!(outcome, MergeOutcome::new());
        }
    }

    #[test]
    fn test_pure_upstream_addition() {
        check("{}", "{}", r#"{"x": 1}"#, r#"{"x": 1}"#, &[], &["x"], &[], &[]);
    }

    #[test]
    fn test_pure_local_addition_preserved() {
        check("{}", r#"{"x": 1}"#, "{}", r#"{"x": 1}"#, &["x"], &[], &[], &[]);
    }

    #[test]
    fn test_both_added_same_value_is_silent() {
        check("{}", r#"{"x": 1}"#, r#"{"x": 1}"#, r#"{"x": 1}"#, &[], &[], &[], &[]);
    }

    #[test]
    fn test_both_added_different_values_conflict_ours_wins() {
        check("{}", r#"{"x": 1}"#, r#"{"x": 2}"#, r#"{"x": 1}"#, &[], &[], &[], &["x"]);
    }

    #[test]
    fn test_unmodified_upstream_removal_applied() {
        check(r#"{"x": 1}"#, r#"{"x": 1}"#, "{}", "{}", &[], &[], &["x"], &[]);
    }

    #[test]
    fn test_locally_edited_key_removed_upstream_conflicts() {
        check(r#"{"x": 1}"#, r#"{"x": 2}"#, "{}", r#"{"x": 2}"#, &[], &[], &[], &["x"]);
    }

    #[test]
    fn test_our_removal_of_untouched_key_stands() {
        check(r#"{"x": 1}"#, "{}", r#"{"x": 1}"#, "{}", &[], &[], &[], &[]);
    }

    #[test]
    fn test_our_removal_of_upstream_edited_key_conflicts_and_stays_dropped() {
        check(r#"{"x": 1}"#, "{}", r#"{"x": 2}"#, "{}", &[], &[], &[], &["x"]);
    }

    #[test]
    fn test_both_removed_is_silent() {
        check(r#"{"x": 1}"#, "{}", "{}", "{}", &[], &[], &[], &[]);
    }

    #[test]
    fn test_divergent_edit_conflict_ours_wins() {
        check(
            r#"{"x": 1}"#,
            r#"{"x": 2}"#,
            r#"{"x": 3}"#,
            r#"{"x": 2}"#,
            &[],
            &[],
            &[],
            &["x"],
        );
    }

    #[test]
    fn test_single_sided_edits_flow_through() {
        // Only theirs changed: take theirs.
        check(
            r#"{"x": 1}"#,
            r#"{"x": 1}"#,
            r#"{"x": 9}"#,
            r#"{"x": 9}"#,
            &[],
            &[],
            &[],
            &[],
        );
        // Only ours changed: keep ours.
        check(
            r#"{"x": 1}"#,
            r#"{"x": 9}"#,
            r#"{"x": 1}"#,
            r#"{"x": 9}"#,
            &[],
            &[],
            &[],
            &[],
        );
    }

    #[test]
    fn test_array_is_an_opaque_atom() {
        // Only ours appended: our whole array wins, no conflict.
        check(
            r#"{"a": [1, 2]}"#,
            r#"{"a": [1, 2, 3]}"#,
            r#"{"a": [1, 2]}"#,
            r#"{"a": [1, 2, 3]}"#,
            &[],
            &[],
            &[],
            &[],
        );
    }

    #[test]
    fn test_array_appended_on_both_sides_is_a_whole_value_conflict() {
        // The merge never decomposes arrays element-wise, so divergent
        // appends conflict as a unit and ours is kept.
        check(
            r#"{"a": [1, 2]}"#,
            r#"{"a": [1, 2, 3]}"#,
            r#"{"a": [1, 2, 4]}"#,
            r#"{"a": [1, 2, 3]}"#,
            &[],
            &[],
            &[],
            &["a"],
        );
    }

    #[test]
    fn test_type_mismatched_subtree_is_an_opaque_atom() {
        // Theirs replaced an object with an array; we left it alone, so
        // their replacement flows through without object recursion.
        check(
            r#"{"x": {"a": 1}}"#,
            r#"{"x": {"a": 1}}"#,
            r#"{"x": [1]}"#,
            r#"{"x": [1]}"#,
            &[],
            &[],
            &[],
            &[],
        );
        // Both replaced it differently: conflict, ours kept.
        check(
            r#"{"x": {"a": 1}}"#,
            r#"{"x": "ours"}"#,
            r#"{"x": [1]}"#,
            r#"{"x": "ours"}"#,
            &[],
            &[],
            &[],
            &["x"],
        );
    }

    #[test]
    fn test_scalar_root() {
        // The whole document may be a scalar; the atom rules apply at the
        // root with an empty conflict path.
        let (merged, outcome) = merge(&parse("1"), &parse("2"), &parse("3"));
        assert_eq!(merged, parse("2"));
        assert_eq!(outcome.conflicts, vec![Path::new()]);

        let (merged, outcome) = merge(&parse("1"), &parse("1"), &parse("3"));
        assert_eq!(merged, parse("3"));
        assert!(outcome.is_noop());
    }

    #[test]
    fn test_nested_recursion_records_full_paths() {
        check(
            r#"{"components": {"schemas": {"Work": {"type": "object"}}}}"#,
            r#"{"components": {"schemas": {"Work": {"type": "object"}, "Custom": {"type": "string"}}}}"#,
            r#"{"components": {"schemas": {"Work": {"type": "object"}, "Upstream": {"type": "integer"}}}}"#,
            r#"{"components": {"schemas": {"Work": {"type": "object"}, "Custom": {"type": "string"}, "Upstream": {"type": "integer"}}}}"#,
            &["components.schemas.Custom"],
            &["components.schemas.Upstream"],
            &[],
            &[],
        );
    }

    #[test]
    fn test_mixed_outcome_in_one_pass() {
        check(
            r#"{"keep": 1, "dropped": 2, "edited": 3}"#,
            r#"{"keep": 1, "dropped": 2, "edited": 4, "local": 5}"#,
            r#"{"keep": 1, "edited": 6, "new": 7}"#,
            r#"{"keep": 1, "edited": 4, "local": 5, "new": 7}"#,
            &["local"],
            &["new"],
            &["dropped"],
            &["edited"],
        );
    }

    #[test]
    fn test_outcome_paths_are_sorted_by_key() {
        // Keys are visited over the sorted union, so recorded paths come
        // out in key order regardless of input order.
        let (_, outcome) = merge(
            &parse("{}"),
            &parse("{}"),
            &parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#),
        );
        assert_eq!(outcome.theirs_added, paths(&["alpha", "mid", "zeta"]));
    }

    #[test]
    fn test_merge_result_roundtrips_through_json() {
        let (merged, _) = merge(
            &parse(r#"{"a": {"b": 1}}"#),
            &parse(r#"{"a": {"b": 1, "c": [1, 2]}}"#),
            &parse(r#"{"a": {"b": 2}}"#),
        );
        let text = crate::value::to_json_pretty(&merged).unwrap();
        assert_eq!(from_json(&text).unwrap(), merged);
    }
}
