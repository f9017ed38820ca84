//! Identifier codec
//!
//! Maps an [`Identity`] to and from a single URN scheme.
//!
//! ## Format
//!
//! ```text
//! urn:ldp4j:v1:<CLASSIFIER>:<owner>:<value-type>:<value>
//! ```
//!
//! - `CLASSIFIER`: `LOCAL`, `MANAGED`, `EXTERNAL` or `RELATIVE`
//! - `owner`: empty (local), base64url type name (managed), base64url location
//!   (external), or `<base64url type>.<native id>` (relative)
//! - `value-type`: `string`, `integer` or `uri`, fixed by the classifier
//! - `value`: base64url text, or a canonical decimal integer
//!
//! base64url is the unpadded URL-safe alphabet, so no component can contain
//! the `:` separator and every segment has exactly one canonical spelling.
//!
//! This format is persisted by callers. It is FROZEN: any change must bump
//! the `v1` tag and keep decoding the previous version.

use crate::error::{Error, Result};
use crate::identity::{Classifier, Identity, ManagedKey};
use crate::introspection::Introspection;
use crate::value::{IdentityValue, Owner, ValueType};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use oxiri::{Iri, IriRef};

/// Scheme prefix shared by every identifier
pub const IDENTIFIER_PREFIX: &str = "urn:ldp4j:";

/// Format version written by [`IdentifierCodec::encode`]
pub const FORMAT_VERSION: &str = "v1";

const SEPARATOR: char = ':';
const KEY_SEPARATOR: char = '.';
const SEGMENTS: usize = 5;

/// Stateless encoder/decoder for identity identifiers
///
/// The codec holds no state, so a single instance may be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierCodec;

/// Decoded but not yet cross-checked parts of an identifier
struct Parts {
    classifier: Classifier,
    owner: Owner,
    value: IdentityValue,
}

impl IdentifierCodec {
    /// Create a codec
    pub const fn new() -> Self {
        IdentifierCodec
    }

    /// Encode an identity as its identifier URI
    ///
    /// Pure function of the identity's fields.
    pub fn encode(&self, identity: &Identity) -> String {
        let owner = encode_owner(&identity.owner());
        let value = identity.value();
        format!(
            "{}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            IDENTIFIER_PREFIX,
            FORMAT_VERSION,
            identity.classifier().as_str(),
            owner,
            value.value_type().as_str(),
            encode_value(&value),
            sep = SEPARATOR,
        )
    }

    /// Decode an identifier URI back into an identity
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` when the prefix or version does not
    /// match, the classifier is unknown, or any payload fails to parse as the
    /// type the classifier implies.
    pub fn decode(&self, identifier: &str) -> Result<Identity> {
        let parts = split(identifier)?;
        assemble(identifier, parts)
    }

    /// Read-only view over an identifier
    ///
    /// Never fails; an identifier that does not decode yields an
    /// introspection with `is_valid() == false`.
    pub fn introspect(&self, identifier: &str) -> Introspection {
        Introspection::new(identifier, self.decode(identifier))
    }
}

// =============================================================================
// Encoding
// =============================================================================

fn encode_text(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

fn encode_key(key: &ManagedKey) -> String {
    format!(
        "{}{}{}",
        encode_text(&key.owner_type),
        KEY_SEPARATOR,
        key.native_id
    )
}

fn encode_owner(owner: &Owner) -> String {
    match owner {
        Owner::None => String::new(),
        Owner::Type(owner_type) => encode_text(owner_type),
        Owner::Location(location) => encode_text(location.as_str()),
        Owner::Key(key) => encode_key(key),
    }
}

fn encode_value(value: &IdentityValue) -> String {
    match value {
        IdentityValue::String(s) => encode_text(s),
        IdentityValue::Integer(n) => n.to_string(),
        IdentityValue::Uri(uri) => encode_text(uri.as_str()),
    }
}

// =============================================================================
// Decoding
// =============================================================================

fn invalid(identifier: &str, reason: impl Into<String>) -> Error {
    Error::invalid_identifier(identifier, reason)
}

/// Split an identifier into classifier, owner and value, checking each
/// component against the type the classifier implies.
fn split(identifier: &str) -> Result<Parts> {
    let rest = identifier
        .strip_prefix(IDENTIFIER_PREFIX)
        .ok_or_else(|| invalid(identifier, "unknown scheme"))?;

    let segments: Vec<&str> = rest.split(SEPARATOR).collect();
    if segments.len() != SEGMENTS {
        return Err(invalid(
            identifier,
            format!("expected {} segments, found {}", SEGMENTS, segments.len()),
        ));
    }

    let version = segments[0];
    if version != FORMAT_VERSION {
        return Err(invalid(
            identifier,
            format!("unsupported format version '{}'", version),
        ));
    }

    let classifier = Classifier::from_tag(segments[1])
        .ok_or_else(|| invalid(identifier, format!("unknown classifier '{}'", segments[1])))?;

    let value_type = ValueType::from_tag(segments[3])
        .ok_or_else(|| invalid(identifier, format!("unknown value type '{}'", segments[3])))?;
    let expected = expected_value_type(classifier);
    if value_type != expected {
        return Err(invalid(
            identifier,
            format!(
                "{} identifiers carry {} values, found {}",
                classifier, expected, value_type
            ),
        ));
    }

    let owner = decode_owner(identifier, classifier, segments[2])?;
    let value = decode_value(identifier, value_type, segments[4])?;

    Ok(Parts {
        classifier,
        owner,
        value,
    })
}

/// Build the identity from checked parts, rejecting inconsistent payloads
fn assemble(identifier: &str, parts: Parts) -> Result<Identity> {
    match (parts.classifier, parts.owner, parts.value) {
        (Classifier::Local, Owner::None, IdentityValue::String(native_id)) => {
            Ok(Identity::Local { native_id })
        }
        (Classifier::Managed, Owner::Type(owner_type), IdentityValue::Integer(native_id)) => {
            Ok(Identity::Managed {
                owner_type,
                native_id,
            })
        }
        (Classifier::External, Owner::Location(location), IdentityValue::Uri(value)) => {
            if location.as_str() != value.as_str() {
                return Err(invalid(identifier, "external owner and value disagree"));
            }
            Ok(Identity::External { location })
        }
        (Classifier::Relative, Owner::Key(owner), IdentityValue::Uri(path)) => {
            Ok(Identity::Relative { owner, path })
        }
        (classifier, _, _) => Err(invalid(
            identifier,
            format!("inconsistent payload for {} identifier", classifier),
        )),
    }
}

fn expected_value_type(classifier: Classifier) -> ValueType {
    match classifier {
        Classifier::Local => ValueType::String,
        Classifier::Managed => ValueType::Integer,
        Classifier::External | Classifier::Relative => ValueType::Uri,
    }
}

fn decode_text(identifier: &str, segment: &str, what: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| invalid(identifier, format!("malformed {}: {}", what, e)))?;
    String::from_utf8(bytes).map_err(|_| invalid(identifier, format!("{} is not UTF-8", what)))
}

/// Parse a decimal integer, accepting only its canonical spelling
fn decode_integer(identifier: &str, segment: &str, what: &str) -> Result<i64> {
    let n: i64 = segment
        .parse()
        .map_err(|_| invalid(identifier, format!("malformed {}: '{}'", what, segment)))?;
    if n.to_string() != segment {
        return Err(invalid(
            identifier,
            format!("non-canonical {}: '{}'", what, segment),
        ));
    }
    Ok(n)
}

fn decode_owner(identifier: &str, classifier: Classifier, segment: &str) -> Result<Owner> {
    match classifier {
        Classifier::Local => {
            if segment.is_empty() {
                Ok(Owner::None)
            } else {
                Err(invalid(identifier, "local identifiers have no owner"))
            }
        }
        Classifier::Managed => {
            let owner_type = decode_text(identifier, segment, "owner type")?;
            Ok(Owner::Type(owner_type))
        }
        Classifier::External => {
            let location = decode_text(identifier, segment, "owner location")?;
            let location = Iri::parse(location)
                .map_err(|e| invalid(identifier, format!("owner location: {}", e)))?;
            Ok(Owner::Location(location))
        }
        Classifier::Relative => {
            let (owner_type, native_id) = segment
                .split_once(KEY_SEPARATOR)
                .ok_or_else(|| invalid(identifier, "owner key is not '<type>.<id>'"))?;
            let owner_type = decode_text(identifier, owner_type, "owner key type")?;
            let native_id = decode_integer(identifier, native_id, "owner key id")?;
            Ok(Owner::Key(ManagedKey::new(owner_type, native_id)))
        }
    }
}

fn decode_value(identifier: &str, value_type: ValueType, segment: &str) -> Result<IdentityValue> {
    match value_type {
        ValueType::String => decode_text(identifier, segment, "value").map(IdentityValue::String),
        ValueType::Integer => {
            decode_integer(identifier, segment, "value").map(IdentityValue::Integer)
        }
        ValueType::Uri => {
            let text = decode_text(identifier, segment, "value")?;
            let uri = IriRef::parse(text).map_err(|e| invalid(identifier, format!("value: {}", e)))?;
            Ok(IdentityValue::Uri(uri))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
