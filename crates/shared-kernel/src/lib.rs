#![allow(clippy::multiple_crate_versions)]

pub use error::{InfrastructureError, LlError, Result};

pub mod error;
pub mod humanize;
pub mod path;
pub mod value_objects;

pub use value_objects::{FileExtension, FileName, FileSize, ModificationTime};
