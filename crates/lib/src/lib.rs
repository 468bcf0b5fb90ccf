//!
//! Dotmap: pure transformations over nested key-value structures.
//! This library flattens nested structures to dot-path keys, rebuilds the
//! nested form, prunes empty branches, sorts keys deterministically, and
//! validates dot-path assignability. It performs no I/O and keeps no state.
//!
//! ## Core Concepts
//!
//! * **Maps (`map::Map`)**: The nested structure building block, a string-keyed
//!   insertion-ordered mapping whose values are leaves or further maps.
//! * **Values (`map::Value`)**: The tagged union of everything a map can hold.
//!   Lists are opaque leaves and are never recursed into.
//! * **Transformations (`transform`)**: The five pure operations: `flatten`,
//!   `unflatten`, `clear`, `sort`, and `is_assignable`.
//! * **Options (`transform::Options`)**: Explicit per-call configuration
//!   (separator, first-depth pruning behavior); no process-wide state.
//!
//! ```
//! use dotmap::{Map, Options, Value, transform};
//!
//! let map = Map::from_json_str(r#"{"en": {"greeting": "hello"}}"#)?;
//! let flat = transform::flatten(&Value::Map(map), &Options::default())?;
//! assert_eq!(flat.get("en.greeting"), Some(&Value::Text("hello".to_string())));
//! # Ok::<(), dotmap::Error>(())
//! ```

pub mod map;
pub mod transform;

pub use map::{Map, Value};
pub use transform::{
    Assignability, Options, clear, flatten, is_assignable, is_assignable_segments, sort, unflatten,
};

/// Result type used throughout the dotmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured transformation errors from the transform module
    #[error(transparent)]
    Transform(transform::TransformError),
}

impl Error {
    /// Check if this error indicates an invalid top-level argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Transform(err) => err.is_invalid_argument(),
            _ => false,
        }
    }
}
