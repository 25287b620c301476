#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;

pub use bootstrap::{run, run_with_config};
pub use config::{ListConfig, ListConfigBuilder, ListConfigBuilderError};
pub use ll_domain::{Layout, LayoutBuilder};
pub use ll_shared_kernel::{LlError, Result};
pub use ll_usecase::{ListingKind, ListingSummary};

pub use ll_domain::classify::rules::ERROR as ERROR_GLYPH;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
