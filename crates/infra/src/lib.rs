#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod platform;

pub use filesystem::FsMetadataSource;
