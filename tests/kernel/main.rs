//! Kernel Integration Tests
//!
//! End-to-end tests for identifier encoding, slug allocation and resource
//! creation through the public `ldp4j` facade.

#[path = "../common/mod.rs"]
mod common;

mod config_files;
mod creation;
mod identifiers;
