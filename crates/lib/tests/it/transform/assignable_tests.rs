//! Assignability tests: prefix walking, conflict reporting, and the
//! pre-split segment variant.

use dotmap::{Assignability, Map, Options, transform};

use crate::helpers::map;

fn fixture() -> Map {
    map! {
        "a" => map! { "b" => 1 },
        "leaf" => "scalar",
    }
}

#[test]
fn test_assignable_new_branch() {
    let options = Options::default();

    assert!(transform::is_assignable(&fixture(), "a.x", &options).is_assignable());
    assert!(transform::is_assignable(&fixture(), "c.d.e", &options).is_assignable());
}

#[test]
fn test_conflict_at_scalar_intermediate() {
    let result = transform::is_assignable(&fixture(), "a.b.c", &Options::default());

    assert_eq!(result, Assignability::Conflict("a.b".to_string()));
    assert_eq!(result.conflict(), Some("a.b"));
    assert!(!result.is_assignable());
}

#[test]
fn test_conflict_reports_shortest_prefix() {
    let result = transform::is_assignable(&fixture(), "leaf.deep.deeper", &Options::default());

    assert_eq!(result, Assignability::Conflict("leaf".to_string()));
}

#[test]
fn test_conflict_at_exact_path() {
    // The full path is itself a cumulative prefix
    let result = transform::is_assignable(&fixture(), "a.b", &Options::default());

    assert_eq!(result, Assignability::Conflict("a.b".to_string()));
}

#[test]
fn test_assignable_into_existing_map() {
    // A map at the exact path is not a conflict
    assert!(transform::is_assignable(&fixture(), "a", &Options::default()).is_assignable());
}

#[test]
fn test_assignable_empty_path() {
    let options = Options::default();

    assert!(transform::is_assignable(&fixture(), "", &options).is_assignable());
    assert!(transform::is_assignable(&fixture(), "...", &options).is_assignable());
}

#[test]
fn test_assignable_empty_segments_are_skipped() {
    let result = transform::is_assignable(&fixture(), ".a..b.c", &Options::default());

    assert_eq!(result, Assignability::Conflict("a.b".to_string()));
}

#[test]
fn test_assignable_pre_split_segments() {
    let options = Options::default();

    let result = transform::is_assignable_segments(&fixture(), &["a", "b", "c"], &options);
    assert_eq!(result, Assignability::Conflict("a.b".to_string()));

    let result = transform::is_assignable_segments(&fixture(), &["a", "x"], &options);
    assert!(result.is_assignable());
}

#[test]
fn test_conflict_prefix_uses_configured_separator() {
    let options = Options::with_separator("/");
    let map = map! {
        "a" => map! { "b" => 1 },
    };

    let result = transform::is_assignable(&map, "a/b/c", &options);

    assert_eq!(result, Assignability::Conflict("a/b".to_string()));
}

#[test]
fn test_assignable_does_not_mutate_input() {
    let map = fixture();
    let original = map.clone();

    let _ = transform::is_assignable(&map, "a.b.c.d", &Options::default());
    let _ = transform::is_assignable(&map, "new.path", &Options::default());

    assert_eq!(map, original);
}
