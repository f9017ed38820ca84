//! Container membership
//!
//! A container tracks the paths of its live members and the slug records of
//! every stem a client has suggested. The [`Container`] trait is the seam the
//! slug allocator works against; [`ContainerState`] is the in-memory
//! implementation held by the [`ContainerRegistry`](crate::ContainerRegistry).

use crate::slug::Slug;
use crate::template::TemplateId;
use ldp4j_core::{Error, Identity, ManagedKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identifier of a container
///
/// Any non-empty string. Containers created through the
/// [`ResourceCreator`](crate::ResourceCreator) use the identifier of their
/// owner's managed identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerId(String);

impl ContainerId {
    /// Create a container id
    ///
    /// # Errors
    ///
    /// Returns `Error::NullArgument` if the id is empty.
    pub fn new(id: impl Into<String>) -> ldp4j_core::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::NullArgument("container"));
        }
        Ok(ContainerId(id))
    }

    /// Container id of the container owned by a managed resource
    pub fn for_owner(owner: &ManagedKey) -> Self {
        ContainerId(owner.to_identity().identifier())
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContainerId {
    type Error = Error;

    fn try_from(id: String) -> ldp4j_core::Result<Self> {
        Self::new(id)
    }
}

impl From<ContainerId> for String {
    fn from(id: ContainerId) -> Self {
        id.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&Identity> for ContainerId {
    fn from(identity: &Identity) -> Self {
        ContainerId(identity.identifier())
    }
}

/// Membership view the slug allocator works against
///
/// Implementations are not required to be thread-safe; callers serialise
/// access per container.
pub trait Container {
    /// Id of the container
    fn id(&self) -> &ContainerId;

    /// Whether `path` is taken by a live member
    fn contains(&self, path: &str) -> bool;

    /// Stems that own a slug record
    fn existing_stems(&self) -> BTreeSet<String>;

    /// Slug record of `stem`, if any
    fn slug(&self, stem: &str) -> Option<&Slug>;

    /// Store a slug record under its stem, replacing any previous one
    fn store_slug(&mut self, slug: Slug);

    /// Register a live member; `false` if the path was already taken
    fn add_member(&mut self, path: String) -> bool;
}

/// In-memory state of one container
#[derive(Debug, Clone)]
pub struct ContainerState {
    id: ContainerId,
    template: Option<TemplateId>,
    members: BTreeSet<String>,
    slugs: BTreeMap<String, Slug>,
}

impl ContainerState {
    /// Create an empty container
    pub fn new(id: ContainerId) -> Self {
        Self {
            id,
            template: None,
            members: BTreeSet::new(),
            slugs: BTreeMap::new(),
        }
    }

    /// Create an empty container bound to a template
    pub fn with_template(id: ContainerId, template: TemplateId) -> Self {
        Self {
            template: Some(template),
            ..Self::new(id)
        }
    }

    /// Template the container was created from
    pub fn template(&self) -> Option<&TemplateId> {
        self.template.as_ref()
    }

    /// Live member paths, in order
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of live members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Free a member path
    ///
    /// The slug record of its stem is kept, so later allocations continue
    /// from the last used version.
    pub fn remove_member(&mut self, path: &str) -> bool {
        self.members.remove(path)
    }
}

impl Container for ContainerState {
    fn id(&self) -> &ContainerId {
        &self.id
    }

    fn contains(&self, path: &str) -> bool {
        self.members.contains(path)
    }

    fn existing_stems(&self) -> BTreeSet<String> {
        self.slugs.keys().cloned().collect()
    }

    fn slug(&self, stem: &str) -> Option<&Slug> {
        self.slugs.get(stem)
    }

    fn store_slug(&mut self, slug: Slug) {
        self.slugs.insert(slug.path().to_string(), slug);
    }

    fn add_member(&mut self, path: String) -> bool {
        self.members.insert(path)
    }
}
