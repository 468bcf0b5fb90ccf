//! Clear-specific tests: empty-branch pruning, cascade behavior, and the
//! first-depth preservation mode.

use dotmap::{Map, Options, Value, transform};

use crate::helpers::map;

#[test]
fn test_clear_drops_empty_nested_map() {
    let map = map! {
        "a" => Map::new(),
        "b" => map! { "c" => 1 },
    };

    let cleared = transform::clear(&map, &Options::default());

    assert_eq!(cleared.len(), 1);
    assert!(!cleared.contains_key("a"));
    assert_eq!(cleared, map! { "b" => map! { "c" => 1 } });
}

#[test]
fn test_clear_cascades_upward() {
    // b empties out, which empties a, which is then dropped too
    let map = map! {
        "a" => map! { "b" => Map::new() },
    };

    let cleared = transform::clear(&map, &Options::default());

    assert!(cleared.is_empty());
}

#[test]
fn test_clear_passes_scalars_through() {
    let map = map! {
        "count" => 3,
        "name" => "x",
        "nested" => map! {
            "kept" => true,
            "dropped" => Map::new(),
        },
    };

    let cleared = transform::clear(&map, &Options::default());

    assert_eq!(cleared.get("count"), Some(&Value::Int(3)));
    assert_eq!(cleared.get("name"), Some(&Value::Text("x".to_string())));
    assert_eq!(cleared, map! {
        "count" => 3,
        "name" => "x",
        "nested" => map! { "kept" => true },
    });
}

#[test]
fn test_clear_empty_input() {
    assert!(transform::clear(&Map::new(), &Options::default()).is_empty());
    assert!(transform::clear(&Map::new(), &Options::with_skip_first_depth()).is_empty());
}

#[test]
fn test_clear_skip_first_depth_preserves_top_level_keys() {
    let map = map! {
        "a" => Map::new(),
        "b" => 1,
    };

    let cleared = transform::clear(&map, &Options::with_skip_first_depth());

    assert_eq!(cleared, map! {
        "a" => Map::new(),
        "b" => Map::new(),
    });
}

#[test]
fn test_clear_skip_first_depth_still_prunes_deeper_levels() {
    let map = map! {
        "en" => map! {
            "translations" => Map::new(),
            "greeting" => "hello",
        },
        "de" => map! {
            "translations" => Map::new(),
        },
    };

    let cleared = transform::clear(&map, &Options::with_skip_first_depth());

    // Both language keys survive; empty branches below them do not
    assert_eq!(cleared, map! {
        "en" => map! { "greeting" => "hello" },
        "de" => Map::new(),
    });
}

#[test]
fn test_clear_skip_first_depth_replaces_lists() {
    let map = map! {
        "items" => Value::List(vec![Value::Int(1)]),
    };

    let cleared = transform::clear(&map, &Options::with_skip_first_depth());

    assert_eq!(cleared, map! { "items" => Map::new() });
}

#[test]
fn test_clear_is_idempotent() {
    let fixture = map! {
        "a" => map! { "b" => Map::new(), "c" => 1 },
        "d" => Map::new(),
        "e" => "leaf",
    };

    for options in [Options::default(), Options::with_skip_first_depth()] {
        let once = transform::clear(&fixture, &options);
        let twice = transform::clear(&once, &options);
        assert_eq!(once, twice, "clear not idempotent with {options:?}");
    }
}

#[test]
fn test_clear_does_not_mutate_input() {
    let map = map! { "a" => Map::new() };
    let original = map.clone();

    let _ = transform::clear(&map, &Options::default());

    assert_eq!(map, original);
}
