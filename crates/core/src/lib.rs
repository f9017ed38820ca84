//! Core identity types for LDP4j
//!
//! This crate defines how resources are identified:
//! - Identity: Tagged union over local, managed, external and relative identities
//! - ManagedKey: Type name plus native id of a managed resource
//! - Classifier: Wire tag of an identity variant
//! - IdentifierCodec: Bijective mapping between identities and `urn:ldp4j:` URIs
//! - Introspection: Read-only view over an identifier
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod identity;
pub mod introspection;
pub mod value;

pub use codec::{IdentifierCodec, FORMAT_VERSION, IDENTIFIER_PREFIX};
pub use error::{Error, Result};
pub use identity::{Classifier, Identity, ManagedKey};
pub use introspection::Introspection;
pub use value::{IdentityValue, Owner, TypedValue, ValueType};

// URI types appear in the public API
pub use oxiri::{Iri, IriParseError, IriRef};
