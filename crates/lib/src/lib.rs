//!
//! Databag: immutable key-value bags addressed by dotted paths.
//!
//! A [`Bag`] wraps a map of loosely-typed [`Value`]s (scalars, nested maps and
//! lists). Compound keys such as `"a.b.c"` descend through nested maps
//! transparently, and every operation that looks like a mutation returns a
//! new bag instead of changing the receiver.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tagged union of null, booleans, integers, floats, text, lists and maps. Lists and maps are persistent and share structure between clones.
//! * **Paths (`path::KeyPath`)**: A dotted key split into segments, one per level of map descent.
//! * **Resolution (`resolver::PathResolver`)**: Finds, creates, overwrites or removes the value at a path. Missing or mistyped intermediate segments mean absence, never an error.
//! * **Bags (`bag::Bag`)**: The public immutable container built on top of the resolver.
//!
//! ## Errors
//!
//! Absence is reported as [`Value::Null`] or as a silent no-op. The only hard
//! failure is a type assertion at the edge, such as [`Bag::get_typed`] on a
//! value of the wrong type.

pub mod bag;
pub mod errors;
pub mod path;
pub mod resolver;
pub mod value;

pub use bag::Bag;
pub use errors::ValueError;
pub use path::KeyPath;
pub use resolver::PathResolver;
pub use value::{List, Map, Value};

/// Result type used throughout the Databag library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Databag library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error was raised for a bag root that is not a map.
    pub fn is_not_a_map(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_not_a_map(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
