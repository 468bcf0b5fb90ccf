//! Nested key-value structures.
//!
//! This module provides [`Map`], the structure type every transformation in
//! this crate operates on: a string-keyed mapping whose values are either
//! leaves or further maps. Insertion order is preserved, which is what makes
//! the alphabetical ordering produced by [`crate::transform::sort`]
//! observable, and what gives [`crate::transform::flatten`] and
//! [`crate::transform::unflatten`] deterministic iteration.
//!
//! # Usage
//!
//! ```
//! use dotmap::{Map, Value};
//!
//! let mut map = Map::new();
//! map.set("name", "Alice");
//! map.set("age", 30);
//!
//! let mut profile = Map::new();
//! profile.set("bio", "Software developer");
//! map.set("profile", profile);
//!
//! assert_eq!(map.get("name"), Some(&Value::Text("Alice".to_string())));
//! assert_eq!(map.len(), 3);
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod value;

pub use value::Value;

/// A nested key-value structure.
///
/// `Map` wraps an insertion-ordered mapping from string keys to [`Value`]s.
/// Keys are unique; setting an existing key replaces its value and keeps its
/// position.
///
/// # Equality
///
/// Two maps are equal when they contain the same entries, regardless of
/// order. The structural properties of the transformations (inverse pair,
/// idempotence) are stated in terms of this equality; key order is only
/// meaningful through iteration.
///
/// # Serialization
///
/// The serde representation is transparent: a `Map` serializes as a plain
/// JSON object and deserializes from one, preserving key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns true if this map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets a value by key (immutable reference)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a value by key (mutable reference)
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Sets a key to a value, returning the previous value if the key was
    /// already present. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Later entries shift up to preserve insertion order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns a mutable reference to the nested map stored at `key`.
    ///
    /// An absent key gets an empty map inserted first. A key holding a leaf
    /// value has that value replaced with an empty map; this is the walking
    /// primitive behind [`crate::transform::unflatten`]'s overwrite policy
    /// for scalar intermediates.
    pub fn map_entry(&mut self, key: impl Into<String>) -> &mut Map {
        let key = key.into();
        let slot = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| Value::Map(Map::new()));
        if !slot.is_map() {
            tracing::debug!(%key, replaced = slot.type_name(), "replacing leaf value with an empty map");
            *slot = Value::Map(Map::new());
        }
        match slot {
            Value::Map(map) => map,
            _ => unreachable!(),
        }
    }

    /// Returns an iterator over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns an iterator over key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Parses a map from a JSON object string.
    ///
    /// ```
    /// # use dotmap::Map;
    /// let map = Map::from_json_str(r#"{"a": {"b": 1}}"#)?;
    /// assert!(map.get("a").is_some_and(|v| v.is_map()));
    /// # Ok::<(), dotmap::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this map as a JSON object string.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
