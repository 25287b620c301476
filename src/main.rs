use std::process::ExitCode;

use clap::Parser;
use ll::cli::Args;
use ll_core::{ERROR_GLYPH, ListConfig};

fn main() -> ExitCode {
    ll::logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{ERROR_GLYPH} {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    log::debug!("ll v{} listing {}", ll::VERSION, args.path.display());
    let config = ListConfig::try_from(args)?;
    ll_core::run(&config)?;
    Ok(())
}
