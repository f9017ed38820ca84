//! Configuration File Tests
//!
//! Tests for `ldp4j.toml` handling:
//! - Default file generation
//! - Loading into a working resource creator
//! - Rejection of inconsistent template sets

use crate::common::*;
use ldp4j::{KernelError, SlugAllocator, TemplateConfig, TemplateKind, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn default_file_drives_allocator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    KernelConfig::write_default_if_missing(&path).unwrap();

    let config = KernelConfig::from_file(&path).unwrap();
    let allocator = SlugAllocator::from_config(&config);
    assert_eq!(allocator.default_slug(), "resource");
}

#[test]
fn written_config_builds_same_creator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let config = KernelConfig::from_toml(DIRECTORY_TOML).unwrap();
    config.write_to_file(&path).unwrap();
    let loaded = KernelConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let creator = ResourceCreator::from_config(&loaded).unwrap();
    assert_eq!(creator.templates().len(), 4);
}

#[test]
fn custom_default_slug_names_members() {
    let config = KernelConfig::from_toml(
        r#"
default_slug = "entry"

[[templates]]
id = "blog"
kind = "basic_container"
member = "post"

[[templates]]
id = "post"
kind = "resource"
"#,
    )
    .unwrap();
    let creator = ResourceCreator::from_config(&config).unwrap();
    let owner = ManagedKey::new("blog", 1);
    creator.create_container(&owner, &tid("blog")).unwrap();

    assert_eq!(creator.create_member(&owner, None).unwrap().path, "entry");
    assert_eq!(creator.create_member(&owner, Some(" ")).unwrap().path, "entry_1");
}

#[test]
fn container_without_member_is_rejected() {
    let config = KernelConfig {
        templates: vec![TemplateConfig {
            id: "blog".to_string(),
            kind: TemplateKind::BasicContainer,
            member: None,
            membership_relation: None,
            inserted_content_relation: None,
        }],
        ..KernelConfig::default()
    };
    assert!(matches!(config.validate(), Err(KernelError::Config(_))));
}

#[test]
fn duplicate_template_ids_are_rejected() {
    let err = KernelConfig::from_toml(
        r#"
[[templates]]
id = "post"
kind = "resource"

[[templates]]
id = "post"
kind = "resource"
"#,
    )
    .unwrap_err();
    assert_eq!(err, KernelError::DuplicateTemplate("post".to_string()));
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "default_slug = [").unwrap();

    let err = KernelConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME), "{}", err);
}
