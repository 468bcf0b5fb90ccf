//! Pure transformations over nested key-value structures.
//!
//! This module provides the five operations of the crate, all pure functions
//! that leave their input untouched and return freshly built structures:
//!
//! - [`flatten`] - nested map → single-depth map with separator-joined keys
//! - [`unflatten`] - single-depth map with compound keys → nested map
//! - [`clear`] - nested map → same shape with empty branches pruned
//! - [`sort`] - nested map → same data with keys ordered alphabetically at
//!   every depth
//! - [`is_assignable`] - checks whether a dot-path can be assigned into a
//!   map without colliding with an existing leaf value
//!
//! [`flatten`] and [`unflatten`] are inverses of each other as long as they
//! share the same separator and no key contains the separator substring.
//! [`clear`] and [`sort`] are idempotent. No operation recurses into lists;
//! lists are opaque leaves.
//!
//! # Usage
//!
//! ```
//! use dotmap::{Map, Options, Value, transform};
//!
//! let mut inner = Map::new();
//! inner.set("b", 1);
//! inner.set("c", 2);
//! let mut map = Map::new();
//! map.set("a", inner);
//!
//! let flat = transform::flatten(&Value::Map(map.clone()), &Options::default())?;
//! assert_eq!(flat.get("a.b"), Some(&Value::Int(1)));
//! assert_eq!(flat.get("a.c"), Some(&Value::Int(2)));
//!
//! let nested = transform::unflatten(&Value::Map(flat), &Options::default())?;
//! assert_eq!(nested, map);
//! # Ok::<(), dotmap::transform::TransformError>(())
//! ```

use crate::map::{Map, Value};

// Submodules
pub mod errors;

pub use errors::TransformError;

/// Options recognized by the transformation operations.
///
/// `separator` is used by [`flatten`], [`unflatten`], and [`is_assignable`]
/// for joining and splitting compound keys; the same value must be used on
/// both sides for the flatten/unflatten inverse property to hold.
/// `skip_first_depth` is only recognized by [`clear`]; the other operations
/// ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Separator joining path segments in compound keys. Defaults to `"."`.
    pub separator: String,
    /// Preserve top-level keys in [`clear`] instead of pruning them.
    /// Defaults to `false`.
    pub skip_first_depth: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
            skip_first_depth: false,
        }
    }
}

impl Options {
    /// Default options with a custom separator
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    /// Default options with `skip_first_depth` enabled
    pub fn with_skip_first_depth() -> Self {
        Self {
            skip_first_depth: true,
            ..Self::default()
        }
    }
}

/// Result of a path assignability check.
///
/// Returned by [`is_assignable`] and [`is_assignable_segments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignability {
    /// No cumulative prefix of the path holds a leaf value; assigning at the
    /// path will not clobber existing data.
    Assignable,
    /// The shortest cumulative prefix at which the structure already holds a
    /// leaf value. Assigning the full path would require treating that leaf
    /// as a container.
    Conflict(String),
}

impl Assignability {
    /// Returns true if the checked path can be assigned
    pub fn is_assignable(&self) -> bool {
        matches!(self, Assignability::Assignable)
    }

    /// Returns the colliding prefix, if any
    pub fn conflict(&self) -> Option<&str> {
        match self {
            Assignability::Conflict(prefix) => Some(prefix),
            Assignability::Assignable => None,
        }
    }
}

/// Flattens a nested map into a single-depth map with compound keys.
///
/// Every chain of nested map keys becomes one separator-joined key pointing
/// at the leaf value. Leaves (including lists) are copied unchanged. An empty
/// nested map contributes no keys at all. Keys that collide after joining
/// are resolved last-write-wins in iteration order.
///
/// # Errors
/// Returns [`TransformError::InvalidArgument`] if `value` is not a map.
///
/// # Examples
///
/// ```
/// # use dotmap::{Map, Options, Value, transform};
/// let map = Map::from_json_str(r#"{"a": {"b": 1, "c": 2}}"#).unwrap();
/// let flat = transform::flatten(&Value::Map(map), &Options::default())?;
///
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat.get("a.b"), Some(&Value::Int(1)));
/// assert_eq!(flat.get("a.c"), Some(&Value::Int(2)));
/// # Ok::<(), dotmap::transform::TransformError>(())
/// ```
pub fn flatten(value: &Value, options: &Options) -> Result<Map, TransformError> {
    let map = require_map(value, "flatten")?;
    let mut out = Map::new();
    flatten_into(map, &options.separator, None, &mut out);
    Ok(out)
}

fn flatten_into(map: &Map, separator: &str, prefix: Option<&str>, out: &mut Map) {
    for (key, value) in map {
        let flat_key = match prefix {
            Some(prefix) => format!("{prefix}{separator}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Map(child) => flatten_into(child, separator, Some(&flat_key), out),
            leaf => {
                out.set(flat_key, leaf.clone());
            }
        }
    }
}

/// Rebuilds a nested map from a single-depth map with compound keys.
///
/// Each key is split by the separator; empty segments produced by leading,
/// trailing, or doubled separators are discarded, and a key with no
/// remaining segments contributes nothing. Intermediate maps are created as
/// needed, or reused when already present. An intermediate segment holding a
/// leaf value from an earlier key is silently replaced with a fresh map (a
/// debug event is traced when this happens).
///
/// # Errors
/// Returns [`TransformError::InvalidArgument`] if `value` is not a map.
///
/// # Examples
///
/// ```
/// # use dotmap::{Map, Options, Value, transform};
/// let mut flat = Map::new();
/// flat.set("a.b", 1);
/// flat.set("a.c", 2);
///
/// let nested = transform::unflatten(&Value::Map(flat), &Options::default())?;
/// let a = nested.get("a").and_then(|v| v.as_map()).unwrap();
/// assert_eq!(a.get("b"), Some(&Value::Int(1)));
/// assert_eq!(a.get("c"), Some(&Value::Int(2)));
/// # Ok::<(), dotmap::transform::TransformError>(())
/// ```
pub fn unflatten(value: &Value, options: &Options) -> Result<Map, TransformError> {
    let map = require_map(value, "unflatten")?;
    let mut out = Map::new();
    for (flat_key, value) in map {
        let segments = split_path(flat_key, &options.separator);
        let Some((last, intermediate)) = segments.split_last() else {
            // Key made entirely of separators, or empty
            continue;
        };
        let mut current = &mut out;
        for segment in intermediate {
            current = current.map_entry(*segment);
        }
        current.set(*last, value.clone());
    }
    Ok(out)
}

/// Prunes empty nested maps from a structure.
///
/// Leaves below the top level pass through unchanged; a nested map that ends
/// up empty after recursion is dropped from its parent. With
/// `skip_first_depth` enabled, the top call depth preserves every key
/// instead: a top-level map that prunes to empty is kept as an empty map,
/// and a top-level leaf is replaced with an empty map. Deeper levels always
/// use the default pruning.
///
/// Idempotent in both modes.
///
/// # Examples
///
/// ```
/// # use dotmap::{Map, Options, transform};
/// let map = Map::from_json_str(r#"{"a": {}, "b": {"c": 1}}"#).unwrap();
/// let cleared = transform::clear(&map, &Options::default());
///
/// assert!(!cleared.contains_key("a"));
/// assert!(cleared.contains_key("b"));
/// ```
pub fn clear(map: &Map, options: &Options) -> Map {
    if !options.skip_first_depth {
        return prune(map);
    }

    // Top depth keeps every key; deeper levels prune as usual.
    let mut out = Map::new();
    for (key, value) in map {
        match value {
            Value::Map(child) => {
                out.set(key.clone(), prune(child));
            }
            _ => {
                out.set(key.clone(), Map::new());
            }
        }
    }
    out
}

fn prune(map: &Map) -> Map {
    let mut out = Map::new();
    for (key, value) in map {
        match value {
            Value::Map(child) => {
                let pruned = prune(child);
                if !pruned.is_empty() {
                    out.set(key.clone(), pruned);
                }
            }
            leaf => {
                out.set(key.clone(), leaf.clone());
            }
        }
    }
    out
}

/// Reorders keys alphabetically at every depth.
///
/// The ordering is lexicographic on the key strings. All key-value pairs are
/// preserved; leaves (including lists) are copied unchanged. Idempotent.
///
/// # Examples
///
/// ```
/// # use dotmap::{Map, transform};
/// let mut map = Map::new();
/// map.set("b", 1);
/// map.set("a", 2);
///
/// let sorted = transform::sort(&map);
/// let keys: Vec<_> = sorted.keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub fn sort(map: &Map) -> Map {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut out = Map::new();
    for (key, value) in entries {
        let value = match value {
            Value::Map(child) => Value::Map(sort(child)),
            leaf => leaf.clone(),
        };
        out.set(key.clone(), value);
    }
    out
}

/// Checks whether a separator-joined path can be assigned into a map.
///
/// The path is split by the configured separator (empty segments discarded)
/// and every cumulative prefix is checked in order, shortest first. The
/// first prefix at which the map already holds a leaf value is returned as
/// [`Assignability::Conflict`]; if no prefix collides the path is
/// [`Assignability::Assignable`]. The input map is never mutated.
///
/// # Examples
///
/// ```
/// # use dotmap::{Assignability, Map, Options, transform};
/// let map = Map::from_json_str(r#"{"a": {"b": 1}}"#).unwrap();
/// let options = Options::default();
///
/// assert!(transform::is_assignable(&map, "a.x", &options).is_assignable());
/// assert_eq!(
///     transform::is_assignable(&map, "a.b.c", &options),
///     Assignability::Conflict("a.b".to_string()),
/// );
/// ```
pub fn is_assignable(map: &Map, path: &str, options: &Options) -> Assignability {
    let segments = split_path(path, &options.separator);
    is_assignable_segments(map, &segments, options)
}

/// Checks assignability for a pre-split path.
///
/// Identical to [`is_assignable`], but takes the ordered segments directly.
/// The conflicting prefix, if any, is joined with the configured separator.
pub fn is_assignable_segments<S: AsRef<str>>(
    map: &Map,
    segments: &[S],
    options: &Options,
) -> Assignability {
    let mut current = map;
    for (depth, segment) in segments.iter().enumerate() {
        match current.get(segment.as_ref()) {
            // Nothing at this prefix, so nothing deeper can collide
            None => return Assignability::Assignable,
            Some(Value::Map(next)) => current = next,
            Some(_) => {
                let prefix = segments[..=depth]
                    .iter()
                    .map(|s| s.as_ref())
                    .collect::<Vec<_>>()
                    .join(&options.separator);
                return Assignability::Conflict(prefix);
            }
        }
    }
    Assignability::Assignable
}

/// Splits a path by the separator, discarding empty segments.
fn split_path<'a>(path: &'a str, separator: &str) -> Vec<&'a str> {
    path.split(separator)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn require_map<'a>(value: &'a Value, operation: &str) -> Result<&'a Map, TransformError> {
    value.as_map().ok_or_else(|| {
        TransformError::invalid_argument(format!(
            "{operation} expects a map at the top level, found {}",
            value.type_name()
        ))
    })
}
