//! Error types for the LDP4j core
//!
//! Every failure in this crate is a deterministic function of its input:
//! nothing here is transient, and nothing is retried.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::value::ValueType;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for identity encoding and introspection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier does not match the expected scheme, classifier or payload
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The offending identifier, as received
        identifier: String,
        /// Why it was rejected
        reason: String,
    },

    /// Introspected value requested with the wrong expected type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Type requested by the caller
        expected: ValueType,
        /// Type actually stored in the identifier
        actual: ValueType,
    },

    /// A required argument was absent or empty
    #[error("Required argument '{0}' is missing")]
    NullArgument(&'static str),
}

impl Error {
    /// Build an `InvalidIdentifier` error
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports a malformed identifier
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Error::InvalidIdentifier { .. })
    }

    /// Whether this error reports a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}
