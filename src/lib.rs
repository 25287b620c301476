#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logging;

pub use ll_core::VERSION;
