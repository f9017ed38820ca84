//! Typed payloads carried by identifiers
//!
//! An identifier stores exactly one value, tagged with its declared type.
//! The classifier of the identity fixes which type is legal:
//!
//! | Classifier | Value type |
//! |------------|------------|
//! | LOCAL      | string     |
//! | MANAGED    | integer    |
//! | EXTERNAL   | uri        |
//! | RELATIVE   | uri        |
//!
//! Callers that introspect an identifier ask for the value with a Rust type
//! (`String`, `i64`, `IriRef<String>`); the [`TypedValue`] trait maps those to
//! the wire-level [`ValueType`].

use crate::identity::ManagedKey;
use oxiri::{Iri, IriRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an identifier value
///
/// The lowercase names are part of the identifier format and MUST NOT change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// UTF-8 string
    String,
    /// Signed 64-bit integer
    Integer,
    /// URI reference (absolute or relative)
    Uri,
}

impl ValueType {
    /// Tag used in the identifier format
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Uri => "uri",
        }
    }

    /// Parse a tag from the identifier format
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(ValueType::String),
            "integer" => Some(ValueType::Integer),
            "uri" => Some(ValueType::Uri),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored in an identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityValue {
    /// String value (local identities)
    String(String),
    /// Integer value (managed identities)
    Integer(i64),
    /// URI value (external locations and relative paths)
    Uri(IriRef<String>),
}

impl IdentityValue {
    /// Declared type of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            IdentityValue::String(_) => ValueType::String,
            IdentityValue::Integer(_) => ValueType::Integer,
            IdentityValue::Uri(_) => ValueType::Uri,
        }
    }
}

impl fmt::Display for IdentityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityValue::String(s) => f.write_str(s),
            IdentityValue::Integer(n) => write!(f, "{}", n),
            IdentityValue::Uri(uri) => f.write_str(uri.as_str()),
        }
    }
}

/// Rust types an introspected value can be extracted as
pub trait TypedValue: Sized {
    /// Wire type this Rust type corresponds to
    const VALUE_TYPE: ValueType;

    /// Extract `Self` from a value, `None` when the stored type differs
    fn from_value(value: &IdentityValue) -> Option<Self>;
}

impl TypedValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn from_value(value: &IdentityValue) -> Option<Self> {
        match value {
            IdentityValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl TypedValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn from_value(value: &IdentityValue) -> Option<Self> {
        match value {
            IdentityValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl TypedValue for IriRef<String> {
    const VALUE_TYPE: ValueType = ValueType::Uri;

    fn from_value(value: &IdentityValue) -> Option<Self> {
        match value {
            IdentityValue::Uri(uri) => Some(uri.clone()),
            _ => None,
        }
    }
}

/// Owner component of an identifier
///
/// What "owns" the value depends on the classifier: nothing for local
/// identities, the managed type for managed ones, the location itself for
/// external ones and the owning resource's key for relative ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Local identities have no owner
    None,
    /// Name of the managed type
    Type(String),
    /// Location of an external resource
    Location(Iri<String>),
    /// Key of the owning managed resource
    Key(ManagedKey),
}

impl Owner {
    /// Whether the owner component is empty
    pub fn is_none(&self) -> bool {
        matches!(self, Owner::None)
    }
}
