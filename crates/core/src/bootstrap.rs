use std::io::{self, BufWriter, Write};

use chrono::Local;
use ll_domain::{Classifier, Formatter};
use ll_infra::FsMetadataSource;
use ll_shared_kernel::Result;
use ll_usecase::{ListPath, ListingKind, ListingSummary};

use crate::config::ListConfig;

/// Lists `config.target` to stdout.
pub fn run(config: &ListConfig) -> Result<ListingSummary> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run_with_config(config, &mut out)?;
    out.flush()?;
    Ok(summary)
}

/// Lists `config.target` from the real filesystem into `out`.
pub fn run_with_config(config: &ListConfig, out: &mut dyn Write) -> Result<ListingSummary> {
    log::debug!("listing {} with {:?}", config.target.display(), config.layout);

    let source = FsMetadataSource::new();
    let formatter = Formatter::new(config.layout, Local::now());
    let command = ListPath::new(&source, Classifier::default(), &formatter);

    let summary = command.run(&config.target, out)?;
    match summary.kind {
        ListingKind::Directory => log::debug!(
            "listed {} entries, {:#} in total",
            summary.entries,
            summary.total_size
        ),
        ListingKind::SingleEntry => log::debug!("listed a single entry of {:#}", summary.total_size),
    }
    Ok(summary)
}
