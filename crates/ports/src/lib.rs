//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`metadata`]: `stat` and directory reads against the filesystem
//!
//! Keeping the filesystem behind a trait lets the listing use case run
//! against in-memory fixtures in tests.

#![allow(clippy::multiple_crate_versions)]

pub mod metadata;
