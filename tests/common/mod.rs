//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use ldp4j::{
    ContainerId, Identity, KernelConfig, ManagedKey, ResourceCreator, TemplateId,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route kernel logs to the test harness, once per test binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Config with one container template of each kind, all holding `person`.
pub const DIRECTORY_TOML: &str = r#"
default_slug = "resource"

[[templates]]
id = "people"
kind = "basic_container"
member = "person"

[[templates]]
id = "friends"
kind = "direct_container"
member = "person"
membership_relation = "http://xmlns.com/foaf/0.1/knows"

[[templates]]
id = "contacts"
kind = "indirect_container"
member = "person"

[[templates]]
id = "person"
kind = "resource"
"#;

/// Creator built from [`DIRECTORY_TOML`].
pub fn directory_creator() -> ResourceCreator {
    init_tracing();
    let config = KernelConfig::from_toml(DIRECTORY_TOML).expect("fixture config is valid");
    ResourceCreator::from_config(&config).expect("fixture templates are consistent")
}

/// Template id shorthand.
pub fn tid(id: &str) -> TemplateId {
    TemplateId::new(id).expect("template id is not empty")
}

/// Creator with a `people` container owned by `directory#1`.
pub fn with_people_container() -> (ResourceCreator, ManagedKey) {
    let creator = directory_creator();
    let owner = ManagedKey::new("directory", 1);
    creator
        .create_container(&owner, &tid("people"))
        .expect("people is a container template");
    (creator, owner)
}
