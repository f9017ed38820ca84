//! Slug records
//!
//! A slug is the path a client suggests for a resource it is creating. Within
//! one container the suggestion is split into a *stem* and an optional numeric
//! *version*, and the container keeps one [`Slug`] record per stem so that
//! repeated suggestions keep counting up instead of starting over.
//!
//! ## Splitting rule
//!
//! The path is split at its **last** `_` when that underscore is not the first
//! character and everything after it is a non-empty run of ASCII digits that
//! fits in a `u64`. Otherwise the whole path is the stem.
//!
//! | input        | stem      | version |
//! |--------------|-----------|---------|
//! | `slug`       | `slug`    | 0       |
//! | `slug_23`    | `slug`    | 23      |
//! | `slug_23_24` | `slug_23` | 24      |
//! | `_23`        | `_23`     | 0       |
//! | `__23`       | `_`       | 23      |
//! | `__`         | `__`      | 0       |

use crate::container::ContainerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a stem and its version
pub const VERSION_SEPARATOR: char = '_';

/// Split a path into its stem and suggested version
///
/// # Examples
///
/// ```
/// use ldp4j_kernel::slug::split_slug;
///
/// assert_eq!(split_slug("slug_23_24"), ("slug_23", Some(24)));
/// assert_eq!(split_slug("__23"), ("_", Some(23)));
/// assert_eq!(split_slug("_23"), ("_23", None));
/// ```
pub fn split_slug(path: &str) -> (&str, Option<u64>) {
    let Some(index) = path.rfind(VERSION_SEPARATOR) else {
        return (path, None);
    };
    if index == 0 {
        return (path, None);
    }
    let digits = &path[index + VERSION_SEPARATOR.len_utf8()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (path, None);
    }
    match digits.parse::<u64>() {
        Ok(version) => (&path[..index], Some(version)),
        Err(_) => (path, None),
    }
}

/// Versioned slug record of one stem within one container
///
/// ## Invariants
///
/// - `version` is the version the next call to `next_path()` will use
/// - version 0 resolves to the bare stem, any other to `stem_version`
/// - once `stem_18446744073709551615` is issued the record is exhausted and
///   `next_path()` yields `None` until the counter is reset
/// - the record lives exactly as long as its container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    container_id: ContainerId,
    path: String,
    version: u64,
    #[serde(default)]
    exhausted: bool,
}

impl Slug {
    /// Create a slug record from a suggested path
    ///
    /// The path is split with [`split_slug`]; the record starts at the
    /// suggested version, or 0 when there is none.
    ///
    /// # Errors
    ///
    /// Returns `Error::NullArgument` if the container id is empty.
    pub fn create(path: &str, container_id: &str) -> ldp4j_core::Result<Self> {
        let container_id = ContainerId::new(container_id)?;
        Ok(Self::for_container(path, container_id))
    }

    /// Create a slug record for an already validated container
    pub fn for_container(path: &str, container_id: ContainerId) -> Self {
        let (stem, version) = split_slug(path);
        Self::with_stem(stem, container_id, version.unwrap_or(0))
    }

    /// Create a slug record for a stem taken verbatim, without splitting
    pub fn with_stem(stem: impl Into<String>, container_id: ContainerId, version: u64) -> Self {
        Self {
            container_id,
            path: stem.into(),
            version,
            exhausted: false,
        }
    }

    /// Stem of the slug
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Version the next allocation will use
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Container this record belongs to
    #[inline]
    pub fn container_id(&self) -> &ContainerId {
        &self.container_id
    }

    /// Whether every version of this stem has been issued
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Path for the current version, without consuming it
    ///
    /// On an exhausted record this is the last path issued.
    pub fn current_path(&self) -> String {
        if self.version == 0 {
            self.path.clone()
        } else {
            format!("{}{}{}", self.path, VERSION_SEPARATOR, self.version)
        }
    }

    /// Resolve the current version and advance the counter
    ///
    /// Returns `None` once the version after `u64::MAX` is requested.
    pub fn next_path(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let path = self.current_path();
        match self.version.checked_add(1) {
            Some(next) => self.version = next,
            None => self.exhausted = true,
        }
        Some(path)
    }

    /// Reset the counter so the next path uses `version`
    pub fn set_version(&mut self, version: u64) {
        self.version = version;
        self.exhausted = false;
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} (v{})", self.path, self.container_id, self.version)
    }
}

// ============================================================================
// Tests
// ============================================================================
