//! Error types for value access.
//!
//! Absence is never an error in this crate: missing keys and partial paths
//! resolve to [`Value::Null`](crate::Value::Null) or to a silent no-op. The
//! errors here are raised only where a caller asserts a type at the edge,
//! such as a typed get or building a bag from a value that is not a map.

use thiserror::Error;

/// Structured error types for value conversions.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The stored value does not have the requested runtime type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A bag root must be a map
    #[error("Expected a map as bag root, found {actual}")]
    NotAMap { actual: String },
}

impl ValueError {
    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error was raised for a non-map bag root
    pub fn is_not_a_map(&self) -> bool {
        matches!(self, ValueError::NotAMap { .. })
    }

    /// Get the expected type name if this is a type mismatch
    pub fn expected(&self) -> Option<&str> {
        match self {
            ValueError::TypeMismatch { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Get the type name that was actually found
    pub fn actual(&self) -> &str {
        match self {
            ValueError::TypeMismatch { actual, .. } | ValueError::NotAMap { actual } => actual,
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
