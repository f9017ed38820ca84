//! Read-only view over an identifier
//!
//! Introspection never fails up front: a subject that does not decode is
//! reported through `is_valid()`, and accessors return `None`. Asking for the
//! typed value of an invalid subject reports the original decoding error.

use crate::error::{Error, Result};
use crate::identity::{Classifier, Identity};
use crate::value::{Owner, TypedValue, ValueType};

/// Introspection of an identifier produced by
/// [`IdentifierCodec::introspect`](crate::IdentifierCodec::introspect)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introspection {
    subject: String,
    decoded: Result<Identity>,
}

impl Introspection {
    pub(crate) fn new(subject: &str, decoded: Result<Identity>) -> Self {
        Self {
            subject: subject.to_string(),
            decoded,
        }
    }

    /// The identifier as it was given
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Whether the subject is a well-formed identifier
    pub fn is_valid(&self) -> bool {
        self.decoded.is_ok()
    }

    /// Decoded identity, if valid
    pub fn identity(&self) -> Option<&Identity> {
        self.decoded.as_ref().ok()
    }

    /// Reason the subject was rejected, if invalid
    pub fn error(&self) -> Option<&Error> {
        self.decoded.as_ref().err()
    }

    /// Classifier tag, if valid
    pub fn classifier(&self) -> Option<Classifier> {
        self.identity().map(Identity::classifier)
    }

    /// Owner component, if valid
    pub fn owner(&self) -> Option<Owner> {
        self.identity().map(Identity::owner)
    }

    /// Declared type of the stored value, if valid
    pub fn value_type(&self) -> Option<ValueType> {
        self.identity().map(|identity| identity.value().value_type())
    }

    /// Stored value as `T`
    ///
    /// # Errors
    ///
    /// - `Error::InvalidIdentifier` if the subject did not decode
    /// - `Error::TypeMismatch` if the stored value is not a `T`
    pub fn value<T: TypedValue>(&self) -> Result<T> {
        let identity = self.decoded.as_ref().map_err(Clone::clone)?;
        let value = identity.value();
        T::from_value(&value).ok_or(Error::TypeMismatch {
            expected: T::VALUE_TYPE,
            actual: value.value_type(),
        })
    }
}
