//! Kernel configuration via `ldp4j.toml`
//!
//! The configuration names the fallback slug and declares the templates the
//! application serves. It is read once at startup; the template registry and
//! slug allocator are built from it and handed to the resource creator.

use crate::allocator::DEFAULT_SLUG;
use crate::error::{KernelError, KernelResult};
use crate::template::{TemplateKind, TemplateRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "ldp4j.toml";

/// One `[[templates]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateConfig {
    /// Template id
    pub id: String,
    /// Template kind
    pub kind: TemplateKind,
    /// Member template id (containers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    /// Membership relation IRI (direct and indirect containers, default `ldp:member`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_relation: Option<String>,
    /// Inserted content relation IRI (indirect containers, default `ldp:MemberSubject`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_content_relation: Option<String>,
}

/// Kernel configuration loaded from `ldp4j.toml`.
///
/// # Example
///
/// ```toml
/// default_slug = "resource"
///
/// [[templates]]
/// id = "people"
/// kind = "basic_container"
/// member = "person"
///
/// [[templates]]
/// id = "person"
/// kind = "resource"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KernelConfig {
    /// Slug used when a client supplies none
    #[serde(default = "default_slug")]
    pub default_slug: String,
    /// Templates to register at startup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateConfig>,
}

fn default_slug() -> String {
    DEFAULT_SLUG.to_string()
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_slug: default_slug(),
            templates: Vec::new(),
        }
    }
}

impl KernelConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# LDP4j kernel configuration
#
# Slug used for new resources when the client sends no Slug header.
# Repeated creations continue as resource_1, resource_2, ...
default_slug = "resource"

# Templates served by the application. Container templates name the
# template of their members; direct and indirect containers may override
# the LDP membership relations.
#
# [[templates]]
# id = "people"
# kind = "basic_container"          # resource | basic_container | direct_container | indirect_container
# member = "person"
#
# [[templates]]
# id = "person"
# kind = "resource"
"#
    }

    /// Parse and validate config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `KernelError::Config` if the text does not parse, and any
    /// template registry error if the declared templates are inconsistent.
    pub fn from_toml(content: &str) -> KernelResult<Self> {
        let config: KernelConfig = toml::from_str(content)
            .map_err(|e| KernelError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> KernelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KernelError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            KernelError::Config(msg) => {
                KernelError::config(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Check the configuration eagerly
    ///
    /// # Errors
    ///
    /// Returns `KernelError::Config` for an empty default slug, and any
    /// template registry error for inconsistent templates.
    pub fn validate(&self) -> KernelResult<()> {
        if self.default_slug.trim().is_empty() {
            return Err(KernelError::config("default_slug must not be empty"));
        }
        TemplateRegistry::from_config(self)?;
        Ok(())
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> KernelResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                KernelError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> KernelResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KernelError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            KernelError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
