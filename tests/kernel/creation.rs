//! Resource Creation Tests
//!
//! End-to-end tests for the creation call path:
//! - Container registration from templates
//! - Member creation from Slug hints
//! - Identity of created members
//! - Container teardown

use crate::common::*;
use ldp4j::{Classifier, IdentityValue, KernelError, Owner, TemplateKind};

// ============================================================================
// Containers
// ============================================================================

#[test]
fn every_container_kind_accepts_members() {
    let creator = directory_creator();
    for (n, template) in ["people", "friends", "contacts"].iter().enumerate() {
        let owner = ManagedKey::new("directory", n as i64);
        creator.create_container(&owner, &tid(template)).unwrap();
        let created = creator.create_member(&owner, Some("bob")).unwrap();
        assert_eq!(created.path, "bob");
        assert_eq!(created.template, tid("person"));
    }
    assert_eq!(creator.containers().len(), 3);
}

#[test]
fn templates_load_with_relations() {
    let creator = directory_creator();
    let templates = creator.templates();
    assert_eq!(templates.len(), 4);

    let friends = templates.get(&tid("friends")).unwrap();
    assert_eq!(friends.kind(), TemplateKind::DirectContainer);
    assert_eq!(
        friends.membership_relation().unwrap().as_str(),
        "http://xmlns.com/foaf/0.1/knows"
    );

    let contacts = templates.get(&tid("contacts")).unwrap();
    assert_eq!(
        contacts.membership_relation().unwrap().as_str(),
        "http://www.w3.org/ns/ldp#member"
    );
}

#[test]
fn container_id_is_owner_identifier() {
    let creator = directory_creator();
    let owner = ManagedKey::new("directory", 1);
    let id = creator.create_container(&owner, &tid("people")).unwrap();
    assert_eq!(id.as_str(), Identity::managed("directory", 1).identifier());
}

#[test]
fn create_container_is_idempotent() {
    let (creator, owner) = with_people_container();
    creator.create_member(&owner, Some("alice")).unwrap();
    creator.create_container(&owner, &tid("people")).unwrap();

    // Existing container keeps its members and slug records
    let again = creator.create_member(&owner, Some("alice")).unwrap();
    assert_eq!(again.path, "alice_1");
}

#[test]
fn resource_template_is_not_a_container() {
    let creator = directory_creator();
    let err = creator
        .create_container(&ManagedKey::new("directory", 1), &tid("person"))
        .unwrap_err();
    assert_eq!(err, KernelError::NotAContainer("person".to_string()));
}

// ============================================================================
// Members
// ============================================================================

#[test]
fn member_identity_is_relative_to_owner() {
    let (creator, owner) = with_people_container();
    let created = creator.create_member(&owner, Some("alice")).unwrap();

    assert_eq!(created.identity.classifier(), Classifier::Relative);
    assert_eq!(created.identity.owner(), Owner::Key(owner));
    match created.identity.value() {
        IdentityValue::Uri(path) => assert_eq!(path.as_str(), "alice"),
        other => panic!("expected a URI value, got {:?}", other),
    }
}

#[test]
fn member_identifier_resolves() {
    let (creator, owner) = with_people_container();
    let created = creator.create_member(&owner, None).unwrap();
    assert_eq!(created.path, "resource");

    let resolved = creator.resolve(&created.identifier).unwrap();
    assert_eq!(resolved, created.identity);
}

#[test]
fn repeated_hints_version_up() {
    let (creator, owner) = with_people_container();
    let paths: Vec<_> = ["alice", "alice", "alice_7", "alice", "bob"]
        .iter()
        .map(|hint| creator.create_member(&owner, Some(hint)).unwrap().path)
        .collect();
    assert_eq!(paths, vec!["alice", "alice_1", "alice_7", "alice_8", "bob"]);
}

#[test]
fn removed_member_path_is_not_reused() {
    let (creator, owner) = with_people_container();
    let created = creator.create_member(&owner, Some("alice")).unwrap();

    let id = ContainerId::for_owner(&owner);
    assert!(creator
        .containers()
        .remove_member(&id, &created.path)
        .unwrap());

    let next = creator.create_member(&owner, Some("alice")).unwrap();
    assert_eq!(next.path, "alice_1");
}

#[test]
fn member_of_unknown_container_fails() {
    let creator = directory_creator();
    let err = creator
        .create_member(&ManagedKey::new("directory", 404), Some("x"))
        .unwrap_err();
    assert!(matches!(err, KernelError::UnknownContainer(_)));
}

#[test]
fn invalid_path_is_released() {
    let (creator, owner) = with_people_container();
    assert!(creator.create_member(&owner, Some("not a path")).is_err());

    let id = ContainerId::for_owner(&owner);
    let handle = creator.containers().get(&id).unwrap();
    assert_eq!(handle.lock().member_count(), 0);
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn destroyed_container_forgets_slugs() {
    let (creator, owner) = with_people_container();
    creator.create_member(&owner, Some("alice")).unwrap();
    creator.create_member(&owner, Some("alice")).unwrap();

    assert!(creator.destroy_container(&owner));
    assert!(!creator.destroy_container(&owner));

    creator.create_container(&owner, &tid("people")).unwrap();
    let fresh = creator.create_member(&owner, Some("alice")).unwrap();
    assert_eq!(fresh.path, "alice");
}
