//! Error types for the kernel
//!
//! Wraps the core identity errors and adds the failures of template and
//! container bookkeeping. All of them are deterministic and never retried.

use thiserror::Error;

/// Result type alias for kernel operations
pub type KernelResult<T> = std::result::Result<T, KernelError>;

/// Error types for the LDP4j kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Identity, identifier or argument error from the core
    #[error(transparent)]
    Core(#[from] ldp4j_core::Error),

    /// Template id is not registered
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Template id registered twice
    #[error("Template already registered: {0}")]
    DuplicateTemplate(String),

    /// Template cannot hold members
    #[error("Template '{0}' is not a container template")]
    NotAContainer(String),

    /// Container does not exist (or was destroyed)
    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    /// Configuration file could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KernelError {
    /// Build a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        KernelError::Config(msg.into())
    }
}
