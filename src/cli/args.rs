use std::path::PathBuf;

use clap::{Parser, ValueHint};
use ll_core::{ListConfig, ListConfigBuilder, ListConfigBuilderError};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ll",
    version = crate::VERSION,
    about = "List the contents of a directory, with pretty icons and human-readable sizes and dates."
)]
pub struct Args {
    /// The directory (or file) to view
    #[arg(default_value = ".", value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,
}

impl TryFrom<Args> for ListConfig {
    type Error = ListConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ListConfigBuilder::default().target(args.path).build()
    }
}
