//! LDP4j kernel
//!
//! Container bookkeeping for an LDP server:
//! - Slug: Versioned record of a client-suggested path within a container
//! - SlugAllocator: Resolves slug hints into unique member paths
//! - Container / ContainerState: Membership of one container
//! - ContainerRegistry: Per-container locking over all live containers
//! - Template / TemplateRegistry: Explicit registration table of resource templates
//! - KernelConfig: `ldp4j.toml` configuration
//! - ResourceCreator: Creation call path with injected collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocator;
pub mod config;
pub mod container;
pub mod creation;
pub mod error;
pub mod registry;
pub mod slug;
pub mod template;

pub use allocator::{SlugAllocator, DEFAULT_SLUG};
pub use config::{KernelConfig, TemplateConfig, CONFIG_FILE_NAME};
pub use container::{Container, ContainerId, ContainerState};
pub use creation::{CreatedResource, ResourceCreator};
pub use error::{KernelError, KernelResult};
pub use registry::{ContainerHandle, ContainerRegistry};
pub use slug::{split_slug, Slug, VERSION_SEPARATOR};
pub use template::{Template, TemplateId, TemplateKind, TemplateRegistry};
