//! Resource identity model
//!
//! Every resource known to the kernel is addressed by an [`Identity`].
//! Identities come in four flavours:
//!
//! - **Local**: an opaque, application-chosen string
//! - **Managed**: a native numeric id scoped by a managed type name
//! - **External**: a resource living outside the server, named by its URI
//! - **Relative**: a path resolved against an owning managed resource
//!
//! ## Usage
//!
//! ```
//! use ldp4j_core::{Identity, ManagedKey};
//!
//! let person = Identity::managed("person", 42);
//! let address = Identity::relative(ManagedKey::new("person", 42), "address").unwrap();
//!
//! let id = person.identifier();
//! assert_eq!(id.parse::<Identity>().unwrap(), person);
//! assert!(address.is_relative());
//! ```

use crate::codec::IdentifierCodec;
use crate::error::{Error, Result};
use crate::value::{IdentityValue, Owner};
use oxiri::{Iri, IriRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Classifier tag of an identity
///
/// The uppercase names are part of the identifier format and MUST NOT change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classifier {
    /// Application-chosen string identity
    Local,
    /// Numeric identity scoped by a managed type
    Managed,
    /// Identity of a resource outside the server
    External,
    /// Path relative to an owning managed resource
    Relative,
}

impl Classifier {
    /// All classifiers, in declaration order
    pub const ALL: [Classifier; 4] = [
        Classifier::Local,
        Classifier::Managed,
        Classifier::External,
        Classifier::Relative,
    ];

    /// Tag used in the identifier format
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classifier::Local => "LOCAL",
            Classifier::Managed => "MANAGED",
            Classifier::External => "EXTERNAL",
            Classifier::Relative => "RELATIVE",
        }
    }

    /// Parse a tag from the identifier format (case-sensitive)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "LOCAL" => Some(Classifier::Local),
            "MANAGED" => Some(Classifier::Managed),
            "EXTERNAL" => Some(Classifier::External),
            "RELATIVE" => Some(Classifier::Relative),
            _ => None,
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a managed resource: type name plus native id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ManagedKey {
    /// Managed type name
    pub owner_type: String,
    /// Native id within the type
    pub native_id: i64,
}

impl ManagedKey {
    /// Create a managed key
    pub fn new(owner_type: impl Into<String>, native_id: i64) -> Self {
        Self {
            owner_type: owner_type.into(),
            native_id,
        }
    }

    /// The managed identity this key designates
    pub fn to_identity(&self) -> Identity {
        Identity::Managed {
            owner_type: self.owner_type.clone(),
            native_id: self.native_id,
        }
    }
}

impl fmt::Display for ManagedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.owner_type, self.native_id)
    }
}

/// Identity of a resource
///
/// ## Invariants
///
/// - Every Identity has exactly one classifier
/// - `IdentifierCodec::decode(&identity.identifier()) == Ok(identity)`
/// - Equal identities have byte-identical identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Application-chosen string identity
    Local {
        /// Native id
        native_id: String,
    },

    /// Numeric identity scoped by a managed type
    Managed {
        /// Managed type name
        owner_type: String,
        /// Native id within the type
        native_id: i64,
    },

    /// Resource outside the server
    External {
        /// Absolute location of the resource
        location: Iri<String>,
    },

    /// Path relative to an owning managed resource
    Relative {
        /// Key of the owning resource
        owner: ManagedKey,
        /// Path, resolved against the owner
        path: IriRef<String>,
    },
}

impl Identity {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a local identity
    pub fn local(native_id: impl Into<String>) -> Self {
        Identity::Local {
            native_id: native_id.into(),
        }
    }

    /// Create a managed identity
    pub fn managed(owner_type: impl Into<String>, native_id: i64) -> Self {
        Identity::Managed {
            owner_type: owner_type.into(),
            native_id,
        }
    }

    /// Create an external identity, validating the location as an absolute URI
    pub fn external(location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        let location = Iri::parse(location.clone())
            .map_err(|e| Error::invalid_identifier(location, e.to_string()))?;
        Ok(Identity::External { location })
    }

    /// Create a relative identity, validating the path as a URI reference
    pub fn relative(owner: ManagedKey, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let path = IriRef::parse(path.clone())
            .map_err(|e| Error::invalid_identifier(path, e.to_string()))?;
        Ok(Identity::Relative { owner, path })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Classifier of this identity
    pub fn classifier(&self) -> Classifier {
        match self {
            Identity::Local { .. } => Classifier::Local,
            Identity::Managed { .. } => Classifier::Managed,
            Identity::External { .. } => Classifier::External,
            Identity::Relative { .. } => Classifier::Relative,
        }
    }

    /// Owner component of this identity
    pub fn owner(&self) -> Owner {
        match self {
            Identity::Local { .. } => Owner::None,
            Identity::Managed { owner_type, .. } => Owner::Type(owner_type.clone()),
            Identity::External { location } => Owner::Location(location.clone()),
            Identity::Relative { owner, .. } => Owner::Key(owner.clone()),
        }
    }

    /// Value component of this identity
    pub fn value(&self) -> IdentityValue {
        match self {
            Identity::Local { native_id } => IdentityValue::String(native_id.clone()),
            Identity::Managed { native_id, .. } => IdentityValue::Integer(*native_id),
            Identity::External { location } => IdentityValue::Uri(IriRef::from(location.clone())),
            Identity::Relative { path, .. } => IdentityValue::Uri(path.clone()),
        }
    }

    /// Managed key, if this is a managed identity
    pub fn managed_key(&self) -> Option<ManagedKey> {
        match self {
            Identity::Managed {
                owner_type,
                native_id,
            } => Some(ManagedKey::new(owner_type.clone(), *native_id)),
            _ => None,
        }
    }

    /// The identifier URI of this identity
    pub fn identifier(&self) -> String {
        IdentifierCodec.encode(self)
    }

    // =========================================================================
    // Type Checks
    // =========================================================================

    /// Check if this is a local identity
    pub fn is_local(&self) -> bool {
        matches!(self, Identity::Local { .. })
    }

    /// Check if this is a managed identity
    pub fn is_managed(&self) -> bool {
        matches!(self, Identity::Managed { .. })
    }

    /// Check if this is an external identity
    pub fn is_external(&self) -> bool {
        matches!(self, Identity::External { .. })
    }

    /// Check if this is a relative identity
    pub fn is_relative(&self) -> bool {
        matches!(self, Identity::Relative { .. })
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

impl FromStr for Identity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IdentifierCodec.decode(s)
    }
}

impl From<ManagedKey> for Identity {
    fn from(key: ManagedKey) -> Self {
        Identity::Managed {
            owner_type: key.owner_type,
            native_id: key.native_id,
        }
    }
}

// Persisted forms share the identifier format.
impl Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.identifier())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let identifier = String::deserialize(deserializer)?;
        IdentifierCodec
            .decode(&identifier)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
