//! Slug allocation
//!
//! Turns a client's slug hint into a path that is unique within a container.
//!
//! ## Allocation Sequence
//!
//! ```text
//! 1. Fall back to the default slug if the hint is absent or blank
//! 2. split_slug() - hint -> (stem, suggested version)
//! 3. Look up the stem's slug record, creating it at the suggested version
//! 4. If the record exists and the suggestion is ahead of it, raise the counter
//! 5. next_path() until the path is not a live member
//! 6. Register the path as a member and return it
//! ```
//!
//! A record whose counter is exhausted hands over to the record of its last
//! path, `stem_18446744073709551615`, taken as a stem of its own and starting
//! at version 1. Stems only grow along that chain, so allocation terminates.
//!
//! Steps 3-6 run on a single container; callers going through
//! [`SlugAllocator::allocate_in`] hold that container's lock for all of them.

use crate::config::KernelConfig;
use crate::container::{Container, ContainerId};
use crate::error::KernelResult;
use crate::registry::ContainerRegistry;
use crate::slug::{split_slug, Slug};
use tracing::{debug, trace};

/// Default stem used when the client gives no hint
pub const DEFAULT_SLUG: &str = "resource";

/// Allocates unique member paths from slug hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAllocator {
    default_slug: String,
}

impl Default for SlugAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG)
    }
}

impl SlugAllocator {
    /// Create an allocator with the given fallback slug
    pub fn new(default_slug: impl Into<String>) -> Self {
        Self {
            default_slug: default_slug.into(),
        }
    }

    /// Create an allocator from the kernel configuration
    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.default_slug.clone())
    }

    /// Slug used when the client gives no hint
    pub fn default_slug(&self) -> &str {
        &self.default_slug
    }

    /// Allocate a unique path in `container`
    ///
    /// Never fails: any string is a legal slug. The returned path is
    /// registered as a member before returning.
    pub fn allocate<C>(&self, container: &mut C, hint: Option<&str>) -> String
    where
        C: Container + ?Sized,
    {
        let hint = match hint {
            Some(h) if !h.trim().is_empty() => h,
            _ => self.default_slug.as_str(),
        };
        let (stem, suggested) = split_slug(hint);
        let container_id = container.id().clone();

        let mut slug = match container.slug(stem) {
            Some(existing) => {
                let mut slug = existing.clone();
                if let Some(version) = suggested {
                    if version > slug.version() {
                        slug.set_version(version);
                    }
                }
                slug
            }
            None => Slug::for_container(hint, container_id.clone()),
        };

        let candidate = loop {
            match slug.next_path() {
                Some(candidate) if container.contains(&candidate) => {
                    trace!(container = %container_id, path = %candidate, "Slug path taken");
                }
                Some(candidate) => break candidate,
                None => {
                    let overflow = slug.current_path();
                    debug!(
                        container = %container_id,
                        stem = slug.path(),
                        overflow = %overflow,
                        "Slug counter exhausted"
                    );
                    container.store_slug(slug);
                    slug = Self::overflow_record(container, overflow);
                }
            }
        };

        debug!(
            container = %container_id,
            hint,
            stem,
            version = slug.version(),
            path = %candidate,
            "Allocated slug path"
        );
        container.store_slug(slug);
        container.add_member(candidate.clone());
        candidate
    }

    /// Record continuing an exhausted stem
    ///
    /// Its bare path was already issued, so it never resolves to version 0.
    fn overflow_record<C>(container: &C, stem: String) -> Slug
    where
        C: Container + ?Sized,
    {
        match container.slug(&stem) {
            Some(existing) => {
                let mut slug = existing.clone();
                if slug.version() == 0 {
                    slug.set_version(1);
                }
                slug
            }
            None => Slug::with_stem(stem, container.id().clone(), 1),
        }
    }

    /// Allocate a unique path in a registered container, under its lock
    ///
    /// # Errors
    ///
    /// Returns `KernelError::UnknownContainer` if no container has this id.
    pub fn allocate_in(
        &self,
        registry: &ContainerRegistry,
        id: &ContainerId,
        hint: Option<&str>,
    ) -> KernelResult<String> {
        let handle = registry.require(id)?;
        let mut state = handle.lock();
        Ok(self.allocate(&mut *state, hint))
    }
}

// ============================================================================
// Tests
// ============================================================================
