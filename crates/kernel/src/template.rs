//! Resource templates
//!
//! A template describes what kind of resource a handler manages. Containers
//! additionally name the template of their members and, for direct and
//! indirect containers, the LDP membership relations.
//!
//! Templates are registered explicitly in a [`TemplateRegistry`] when the
//! application starts, usually from the `[[templates]]` section of the
//! kernel configuration.

use crate::config::{KernelConfig, TemplateConfig};
use crate::error::{KernelError, KernelResult};
use ldp4j_core::{Error, Iri};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// `ldp:member`, the default membership relation
pub const LDP_MEMBER: &str = "http://www.w3.org/ns/ldp#member";

/// `ldp:MemberSubject`, the default inserted content relation
pub const LDP_MEMBER_SUBJECT: &str = "http://www.w3.org/ns/ldp#MemberSubject";

/// Identifier of a template
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateId(String);

impl TemplateId {
    /// Create a template id
    ///
    /// # Errors
    ///
    /// Returns `Error::NullArgument` if the id is empty.
    pub fn new(id: impl Into<String>) -> ldp4j_core::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::NullArgument("template"));
        }
        Ok(TemplateId(id))
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TemplateId {
    type Error = Error;

    fn try_from(id: String) -> ldp4j_core::Result<Self> {
        Self::new(id)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a template, without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Plain RDF source
    Resource,
    /// LDP basic container
    BasicContainer,
    /// LDP direct container
    DirectContainer,
    /// LDP indirect container
    IndirectContainer,
}

impl TemplateKind {
    /// Whether templates of this kind hold members
    pub const fn is_container(&self) -> bool {
        !matches!(self, TemplateKind::Resource)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Resource => "resource",
            TemplateKind::BasicContainer => "basic_container",
            TemplateKind::DirectContainer => "direct_container",
            TemplateKind::IndirectContainer => "indirect_container",
        };
        f.write_str(name)
    }
}

/// A resource template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Plain RDF source
    Resource,

    /// Basic container
    BasicContainer {
        /// Template of the members
        member: TemplateId,
    },

    /// Direct container
    DirectContainer {
        /// Template of the members
        member: TemplateId,
        /// Predicate linking the membership resource to each member
        membership_relation: Iri<String>,
    },

    /// Indirect container
    IndirectContainer {
        /// Template of the members
        member: TemplateId,
        /// Predicate linking the membership resource to each member
        membership_relation: Iri<String>,
        /// Predicate whose object in the created content is the member
        inserted_content_relation: Iri<String>,
    },
}

impl Template {
    /// Kind of this template
    pub fn kind(&self) -> TemplateKind {
        match self {
            Template::Resource => TemplateKind::Resource,
            Template::BasicContainer { .. } => TemplateKind::BasicContainer,
            Template::DirectContainer { .. } => TemplateKind::DirectContainer,
            Template::IndirectContainer { .. } => TemplateKind::IndirectContainer,
        }
    }

    /// Template of the members, for containers
    pub fn member_template(&self) -> Option<&TemplateId> {
        match self {
            Template::Resource => None,
            Template::BasicContainer { member }
            | Template::DirectContainer { member, .. }
            | Template::IndirectContainer { member, .. } => Some(member),
        }
    }

    /// Membership relation, for direct and indirect containers
    pub fn membership_relation(&self) -> Option<&Iri<String>> {
        match self {
            Template::DirectContainer {
                membership_relation,
                ..
            }
            | Template::IndirectContainer {
                membership_relation,
                ..
            } => Some(membership_relation),
            Template::Resource | Template::BasicContainer { .. } => None,
        }
    }

    /// Whether this template holds members
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }
}

/// Registration table of templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, Template>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate a registry from the kernel configuration
    ///
    /// # Errors
    ///
    /// - `KernelError::Config` if a template entry is malformed
    /// - `KernelError::DuplicateTemplate` if an id appears twice
    /// - `KernelError::UnknownTemplate` if a member template is not declared
    pub fn from_config(config: &KernelConfig) -> KernelResult<Self> {
        let mut registry = Self::new();
        for entry in &config.templates {
            let (id, template) = entry.to_template()?;
            registry.register(id, template)?;
        }
        registry.validate()?;
        info!(templates = registry.len(), "Built template registry");
        Ok(registry)
    }

    /// Register a template
    ///
    /// # Errors
    ///
    /// Returns `KernelError::DuplicateTemplate` if the id is already taken.
    pub fn register(&mut self, id: TemplateId, template: Template) -> KernelResult<()> {
        if self.templates.contains_key(&id) {
            return Err(KernelError::DuplicateTemplate(id.to_string()));
        }
        self.templates.insert(id, template);
        Ok(())
    }

    /// Look a template up
    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Look a template up, failing if it is not registered
    ///
    /// # Errors
    ///
    /// Returns `KernelError::UnknownTemplate` if the id is not registered.
    pub fn require(&self, id: &TemplateId) -> KernelResult<&Template> {
        self.get(id)
            .ok_or_else(|| KernelError::UnknownTemplate(id.to_string()))
    }

    /// Whether a template is registered
    pub fn contains(&self, id: &TemplateId) -> bool {
        self.templates.contains_key(id)
    }

    /// Registered templates, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&TemplateId, &Template)> {
        self.templates.iter()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no template is registered
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Check that every container's member template is registered
    ///
    /// # Errors
    ///
    /// Returns `KernelError::UnknownTemplate` naming the first missing member
    /// template, in id order.
    pub fn validate(&self) -> KernelResult<()> {
        let mut ids: Vec<_> = self.templates.keys().collect();
        ids.sort();
        for id in ids {
            if let Some(member) = self.templates[id].member_template() {
                if !self.contains(member) {
                    return Err(KernelError::UnknownTemplate(member.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl TemplateConfig {
    /// Convert a configuration entry into a registrable template
    ///
    /// # Errors
    ///
    /// Returns `KernelError::Config` if the id is empty, a container entry has
    /// no `member`, or a relation is not an absolute IRI.
    pub fn to_template(&self) -> KernelResult<(TemplateId, Template)> {
        let id = TemplateId::new(self.id.clone())
            .map_err(|_| KernelError::config("template entry with empty id"))?;

        let member = || -> KernelResult<TemplateId> {
            let member = self.member.as_deref().unwrap_or_default();
            TemplateId::new(member).map_err(|_| {
                KernelError::config(format!("container template '{}' has no member", id))
            })
        };
        let relation = |value: Option<&String>, default: &str| -> KernelResult<Iri<String>> {
            let value = value.map(String::as_str).unwrap_or(default);
            Iri::parse(value.to_string()).map_err(|e| {
                KernelError::config(format!(
                    "template '{}' has invalid relation '{}': {}",
                    id, value, e
                ))
            })
        };

        let template = match self.kind {
            TemplateKind::Resource => Template::Resource,
            TemplateKind::BasicContainer => Template::BasicContainer { member: member()? },
            TemplateKind::DirectContainer => Template::DirectContainer {
                member: member()?,
                membership_relation: relation(self.membership_relation.as_ref(), LDP_MEMBER)?,
            },
            TemplateKind::IndirectContainer => Template::IndirectContainer {
                member: member()?,
                membership_relation: relation(self.membership_relation.as_ref(), LDP_MEMBER)?,
                inserted_content_relation: relation(
                    self.inserted_content_relation.as_ref(),
                    LDP_MEMBER_SUBJECT,
                )?,
            },
        };
        Ok((id, template))
    }
}

// ============================================================================
// Tests
// ============================================================================
