//! Container registry
//!
//! Holds the state of every live container. Each container sits behind its
//! own `parking_lot::Mutex`, so allocations against one container serialise
//! while different containers never contend. The map itself is a `DashMap`,
//! so looking a container up does not block on unrelated ones.
//!
//! Destroying a container drops its slug records with it.

use crate::container::{ContainerId, ContainerState};
use crate::error::{KernelError, KernelResult};
use crate::template::TemplateId;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to one container's state
pub type ContainerHandle = Arc<Mutex<ContainerState>>;

/// Registry of live containers
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: DashMap<ContainerId, ContainerHandle>,
}

impl ContainerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container, or return the existing one with the same id
    pub fn create(&self, id: ContainerId) -> ContainerHandle {
        self.insert_with(id, ContainerState::new)
    }

    /// Create a container bound to a template, or return the existing one
    pub fn create_with_template(&self, id: ContainerId, template: TemplateId) -> ContainerHandle {
        self.insert_with(id, |id| ContainerState::with_template(id, template))
    }

    fn insert_with(
        &self,
        id: ContainerId,
        init: impl FnOnce(ContainerId) -> ContainerState,
    ) -> ContainerHandle {
        let entry = self.containers.entry(id.clone()).or_insert_with(|| {
            debug!(container = %id, "Created container");
            Arc::new(Mutex::new(init(id)))
        });
        Arc::clone(entry.value())
    }

    /// Look a container up
    pub fn get(&self, id: &ContainerId) -> Option<ContainerHandle> {
        self.containers
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Look a container up, failing if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `KernelError::UnknownContainer` if no container has this id.
    pub fn require(&self, id: &ContainerId) -> KernelResult<ContainerHandle> {
        self.get(id)
            .ok_or_else(|| KernelError::UnknownContainer(id.to_string()))
    }

    /// Whether a container exists
    pub fn contains(&self, id: &ContainerId) -> bool {
        self.containers.contains_key(id)
    }

    /// Destroy a container and all of its slug records
    ///
    /// Returns `false` if the container did not exist.
    pub fn destroy(&self, id: &ContainerId) -> bool {
        let removed = self.containers.remove(id).is_some();
        if removed {
            debug!(container = %id, "Destroyed container");
        }
        removed
    }

    /// Free a member path of a container
    ///
    /// # Errors
    ///
    /// Returns `KernelError::UnknownContainer` if no container has this id.
    pub fn remove_member(&self, id: &ContainerId, path: &str) -> KernelResult<bool> {
        let handle = self.require(id)?;
        let removed = handle.lock().remove_member(path);
        Ok(removed)
    }

    /// Ids of all live containers
    pub fn ids(&self) -> Vec<ContainerId> {
        self.containers
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of live containers
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Whether there are no live containers
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
