//! Identifier Tests
//!
//! Tests for the identifier format through the facade:
//! - Wire layout of every classifier
//! - Round trips and string conversions
//! - Rejection of foreign and tampered identifiers
//! - Introspection

use ldp4j::{
    Classifier, Error, IdentifierCodec, Identity, IdentityValue, ManagedKey, Owner, ValueType,
    FORMAT_VERSION, IDENTIFIER_PREFIX,
};

fn sample_identities() -> Vec<Identity> {
    vec![
        Identity::local("session-1"),
        Identity::local(""),
        Identity::managed("person", 42),
        Identity::managed("person", -7),
        Identity::managed("", 0),
        Identity::external("http://example.org/a?b=c#d").unwrap(),
        Identity::relative(ManagedKey::new("directory", 1), "alice_1").unwrap(),
        Identity::relative(ManagedKey::new("directory", 1), "../x/y").unwrap(),
    ]
}

// ============================================================================
// Wire Layout
// ============================================================================

#[test]
fn identifiers_share_prefix_and_version() {
    for identity in sample_identities() {
        let identifier = identity.identifier();
        let expected = format!("{}{}:", IDENTIFIER_PREFIX, FORMAT_VERSION);
        assert!(identifier.starts_with(&expected), "{}", identifier);
        assert!(identifier.contains(identity.classifier().as_str()));
    }
}

#[test]
fn managed_layout() {
    assert_eq!(
        Identity::managed("person", 42).identifier(),
        "urn:ldp4j:v1:MANAGED:cGVyc29u:integer:42"
    );
}

#[test]
fn local_layout_has_empty_owner() {
    let identifier = Identity::local("a").identifier();
    assert_eq!(identifier, "urn:ldp4j:v1:LOCAL::string:YQ");
}

#[test]
fn relative_owner_is_composite_key() {
    let identity = Identity::relative(ManagedKey::new("person", 3), "x").unwrap();
    assert_eq!(identity.identifier(), "urn:ldp4j:v1:RELATIVE:cGVyc29u.3:uri:eA");
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn decode_inverts_encode() {
    let codec = IdentifierCodec::new();
    for identity in sample_identities() {
        let identifier = codec.encode(&identity);
        assert_eq!(codec.decode(&identifier).unwrap(), identity);
        assert_eq!(codec.encode(&codec.decode(&identifier).unwrap()), identifier);
    }
}

#[test]
fn string_conversions_match_codec() {
    for identity in sample_identities() {
        let text = identity.to_string();
        assert_eq!(text, identity.identifier());
        let parsed: Identity = text.parse().unwrap();
        assert_eq!(parsed, identity);
    }
}

#[test]
fn serde_uses_identifier_string() {
    let identity = Identity::managed("person", 42);
    let json = serde_json::to_string(&identity).unwrap();
    assert_eq!(json, "\"urn:ldp4j:v1:MANAGED:cGVyc29u:integer:42\"");
    let back: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, identity);
}

#[test]
fn distinct_identities_never_collide() {
    let identities = sample_identities();
    let mut identifiers: Vec<_> = identities.iter().map(Identity::identifier).collect();
    identifiers.sort();
    identifiers.dedup();
    assert_eq!(identifiers.len(), identities.len());
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn rejects_foreign_identifiers() {
    let codec = IdentifierCodec::new();
    for identifier in [
        "",
        "not-a-valid-uri",
        "http://example.org/resource",
        "urn:other:v1:MANAGED:cGVyc29u:integer:42",
        "urn:ldp4j:v2:MANAGED:cGVyc29u:integer:42",
        "urn:ldp4j:v1:UNKNOWN:cGVyc29u:integer:42",
    ] {
        let err = codec.decode(identifier).unwrap_err();
        assert!(err.is_invalid_identifier(), "{:?}", identifier);
    }
}

#[test]
fn rejects_tampered_identifiers() {
    let codec = IdentifierCodec::new();
    for identifier in [
        "urn:ldp4j:v1:MANAGED:cGVyc29u:integer:042",
        "urn:ldp4j:v1:MANAGED:cGVyc29u:integer:+42",
        "urn:ldp4j:v1:MANAGED:cGVyc29u:string:NDI",
        "urn:ldp4j:v1:MANAGED:!!!:integer:42",
        "urn:ldp4j:v1:LOCAL:cGVyc29u:string:YQ",
        "urn:ldp4j:v1:RELATIVE:cGVyc29u:uri:eA",
        "urn:ldp4j:v1:MANAGED:cGVyc29u:integer:42:extra",
    ] {
        assert!(
            matches!(
                codec.decode(identifier),
                Err(Error::InvalidIdentifier { .. })
            ),
            "{:?}",
            identifier
        );
    }
}

#[test]
fn rejects_external_with_disagreeing_payloads() {
    let codec = IdentifierCodec::new();
    let a = Identity::external("http://example.org/a").unwrap().identifier();
    let b = Identity::external("http://example.org/b").unwrap().identifier();
    let a_parts: Vec<_> = a.split(':').collect();
    let b_parts: Vec<_> = b.split(':').collect();
    let mixed = format!(
        "{}:{}:{}:{}:{}:{}:{}",
        a_parts[0], a_parts[1], a_parts[2], a_parts[3], a_parts[4], a_parts[5], b_parts[6]
    );
    assert!(codec.decode(&mixed).unwrap_err().is_invalid_identifier());
}

// ============================================================================
// Introspection
// ============================================================================

#[test]
fn introspection_of_managed_identifier() {
    let codec = IdentifierCodec::new();
    let view = codec.introspect("urn:ldp4j:v1:MANAGED:cGVyc29u:integer:42");
    assert!(view.is_valid());
    assert_eq!(view.classifier(), Some(Classifier::Managed));
    assert_eq!(view.owner(), Some(Owner::Type("person".to_string())));
    assert_eq!(view.value_type(), Some(ValueType::Integer));
    assert_eq!(view.value::<i64>().unwrap(), 42);
    assert!(view.value::<String>().unwrap_err().is_type_mismatch());
}

#[test]
fn introspection_of_garbage() {
    let view = IdentifierCodec::new().introspect("urn:ldp4j:v1:nope");
    assert!(!view.is_valid());
    assert_eq!(view.subject(), "urn:ldp4j:v1:nope");
    assert_eq!(view.classifier(), None);
    assert!(view.error().unwrap().is_invalid_identifier());
    assert!(view.value::<i64>().unwrap_err().is_invalid_identifier());
}

#[test]
fn identity_value_matches_classifier() {
    for identity in sample_identities() {
        let expected = match identity.classifier() {
            Classifier::Local => ValueType::String,
            Classifier::Managed => ValueType::Integer,
            Classifier::External | Classifier::Relative => ValueType::Uri,
        };
        assert_eq!(identity.value().value_type(), expected);
        if let IdentityValue::Integer(n) = identity.value() {
            assert!(identity.is_managed(), "only managed identities carry {}", n);
        }
    }
}
