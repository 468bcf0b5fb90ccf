//! Error types for structure transformations.
//!
//! The transformation taxonomy is deliberately small: the only failure mode
//! is handing a non-map top-level value to an operation that requires one.
//! Every other operation is total over any map input.

use thiserror::Error;

/// Structured error type for transformation operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransformError {
    /// The top-level input was not a map (e.g. a bare number, string, list,
    /// or null). Raised by [`crate::transform::flatten`] and
    /// [`crate::transform::unflatten`]; no other operation fails.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl TransformError {
    /// Constructs an `InvalidArgument` error with the given reason
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        TransformError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this error is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TransformError::InvalidArgument { .. })
    }
}

// Conversion from TransformError to the main Error type
impl From<TransformError> for crate::Error {
    fn from(err: TransformError) -> Self {
        crate::Error::Transform(err)
    }
}
