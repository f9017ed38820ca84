//! LDP4j - Identifier codec and slug allocation for Linked Data Platform servers
//!
//! Two pieces of an LDP server's kernel that decide how resources are named:
//!
//! - the **identifier codec** turns a resource identity (local, managed,
//!   external or relative) into a self-describing URN and back
//! - the **slug allocator** turns a client's `Slug` hint into a member path
//!   that is unique within its container
//!
//! # Quick Start
//!
//! ```
//! use ldp4j::{Identity, KernelConfig, ManagedKey, ResourceCreator, TemplateId};
//!
//! let config = KernelConfig::from_toml(r#"
//! [[templates]]
//! id = "people"
//! kind = "basic_container"
//! member = "person"
//!
//! [[templates]]
//! id = "person"
//! kind = "resource"
//! "#)?;
//! let creator = ResourceCreator::from_config(&config)?;
//!
//! let owner = ManagedKey::new("directory", 1);
//! creator.create_container(&owner, &TemplateId::new("people")?)?;
//!
//! let alice = creator.create_member(&owner, Some("alice"))?;
//! let again = creator.create_member(&owner, Some("alice"))?;
//! assert_eq!(alice.path, "alice");
//! assert_eq!(again.path, "alice_1");
//!
//! let decoded: Identity = alice.identifier.parse()?;
//! assert_eq!(decoded, alice.identity);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - `ldp4j-core`: identity model, identifier codec, introspection
//! - `ldp4j-kernel`: slugs, containers, templates, configuration, creation

pub use ldp4j_core::{
    Classifier, Error, IdentifierCodec, Identity, IdentityValue, Introspection, Iri, IriRef,
    ManagedKey, Owner, Result, TypedValue, ValueType, FORMAT_VERSION, IDENTIFIER_PREFIX,
};
pub use ldp4j_kernel::{
    split_slug, Container, ContainerId, ContainerRegistry, ContainerState, CreatedResource,
    KernelConfig, KernelError, KernelResult, ResourceCreator, Slug, SlugAllocator, Template,
    TemplateConfig, TemplateId, TemplateKind, TemplateRegistry, CONFIG_FILE_NAME, DEFAULT_SLUG,
};
