//! Shared test utilities for the file-storage workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`permissions`]: privilege detection and self-restoring permission changes
//! - [`store`]: [`TestStore`] builder for populated scratch storages

pub mod permissions;
pub mod store;

pub use permissions::{PermissionGuard, is_root};
pub use store::TestStore;
