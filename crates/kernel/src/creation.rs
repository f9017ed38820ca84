//! Resource creation
//!
//! The resource creator is the call path that turns a client's creation
//! request into a new member: it resolves the container, allocates a unique
//! path from the Slug hint and mints the member's relative identity.
//!
//! Every collaborator is passed in when the creator is built; nothing is
//! looked up from process-wide state.

use crate::allocator::SlugAllocator;
use crate::config::KernelConfig;
use crate::container::ContainerId;
use crate::error::{KernelError, KernelResult};
use crate::registry::ContainerRegistry;
use crate::template::{TemplateId, TemplateRegistry};
use ldp4j_core::{IdentifierCodec, Identity, ManagedKey};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a successful member creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedResource {
    /// Path allocated within the container
    pub path: String,
    /// Relative identity of the new member
    pub identity: Identity,
    /// Identifier of `identity`
    pub identifier: String,
    /// Template of the new member
    pub template: TemplateId,
}

/// Creates containers and their members
#[derive(Debug, Clone)]
pub struct ResourceCreator {
    codec: IdentifierCodec,
    allocator: SlugAllocator,
    templates: Arc<TemplateRegistry>,
    containers: Arc<ContainerRegistry>,
}

impl ResourceCreator {
    /// Create a resource creator from its collaborators
    pub fn new(
        codec: IdentifierCodec,
        allocator: SlugAllocator,
        templates: Arc<TemplateRegistry>,
        containers: Arc<ContainerRegistry>,
    ) -> Self {
        Self {
            codec,
            allocator,
            templates,
            containers,
        }
    }

    /// Build every collaborator from the kernel configuration
    ///
    /// # Errors
    ///
    /// Returns any error raised while building the template registry.
    pub fn from_config(config: &KernelConfig) -> KernelResult<Self> {
        Ok(Self::new(
            IdentifierCodec::new(),
            SlugAllocator::from_config(config),
            Arc::new(TemplateRegistry::from_config(config)?),
            Arc::new(ContainerRegistry::new()),
        ))
    }

    /// Template registry in use
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Container registry in use
    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    /// Register the container owned by a managed resource
    ///
    /// Idempotent: creating an existing container returns its id unchanged.
    ///
    /// # Errors
    ///
    /// - `KernelError::UnknownTemplate` if the template is not registered
    /// - `KernelError::NotAContainer` if the template holds no members
    pub fn create_container(
        &self,
        owner: &ManagedKey,
        template: &TemplateId,
    ) -> KernelResult<ContainerId> {
        if !self.templates.require(template)?.is_container() {
            return Err(KernelError::NotAContainer(template.to_string()));
        }
        let id = ContainerId::for_owner(owner);
        self.containers
            .create_with_template(id.clone(), template.clone());
        debug!(owner = %owner, template = %template, "Registered container");
        Ok(id)
    }

    /// Create a member of the container owned by `owner`
    ///
    /// # Errors
    ///
    /// - `KernelError::UnknownContainer` if the owner has no container
    /// - `KernelError::UnknownTemplate` if the container's template vanished
    /// - `Error::InvalidIdentifier` (wrapped) if the allocated path is not a
    ///   URI reference; the path is released again
    pub fn create_member(
        &self,
        owner: &ManagedKey,
        slug: Option<&str>,
    ) -> KernelResult<CreatedResource> {
        let id = ContainerId::for_owner(owner);
        let handle = self.containers.require(&id)?;
        let mut state = handle.lock();

        let template = self.member_template(state.template())?;
        let path = self.allocator.allocate(&mut *state, slug);
        let identity = match Identity::relative(owner.clone(), path.clone()) {
            Ok(identity) => identity,
            Err(e) => {
                // Paths must be URI references; release the one just taken
                state.remove_member(&path);
                return Err(e.into());
            }
        };
        drop(state);

        let identifier = self.codec.encode(&identity);
        debug!(owner = %owner, path = %path, identifier = %identifier, "Created member");

        Ok(CreatedResource {
            path,
            identity,
            identifier,
            template,
        })
    }

    fn member_template(&self, container_template: Option<&TemplateId>) -> KernelResult<TemplateId> {
        let Some(container_template) = container_template else {
            return Err(KernelError::UnknownTemplate("<none>".to_string()));
        };
        let member = self
            .templates
            .get(container_template)
            .and_then(|template| template.member_template());
        match member {
            Some(member) => Ok(member.clone()),
            None => {
                warn!(template = %container_template, "Container template is not registered");
                Err(KernelError::UnknownTemplate(container_template.to_string()))
            }
        }
    }

    /// Destroy the container owned by `owner`, with all of its slug records
    pub fn destroy_container(&self, owner: &ManagedKey) -> bool {
        self.containers.destroy(&ContainerId::for_owner(owner))
    }

    /// Decode a member identifier issued by this creator
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` (wrapped) if it does not decode.
    pub fn resolve(&self, identifier: &str) -> KernelResult<Identity> {
        Ok(self.codec.decode(identifier)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
