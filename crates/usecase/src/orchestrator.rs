use std::{io::Write, path::Path, time::UNIX_EPOCH};

use chrono::{DateTime, Local};
use ll_domain::{Classifier, FileRecord, Formatter};
use ll_ports::metadata::{EntryMetadataDto, MetadataSource};
use ll_shared_kernel::{FileName, FileSize, ModificationTime, Result, path::logical_absolute};

use crate::dto::{ListingKind, ListingSummary};

/// Lists one path: a directory becomes header, rows and footer; anything else a
/// single row.
pub struct ListPath<'a> {
    source: &'a dyn MetadataSource,
    classifier: Classifier,
    formatter: &'a Formatter,
}

impl<'a> ListPath<'a> {
    pub fn new(source: &'a dyn MetadataSource, classifier: Classifier, formatter: &'a Formatter) -> Self {
        Self { source, classifier, formatter }
    }

    /// Metadata errors are returned untouched; nothing has been written by then.
    pub fn run(&self, path: &Path, out: &mut dyn Write) -> Result<ListingSummary> {
        let target = port_to_domain_record(self.source.stat(path)?);
        if !target.is_dir {
            log::debug!("{} is not a directory, printing a single row", path.display());
            self.write_row(&target, out)?;
            return Ok(ListingSummary {
                kind: ListingKind::SingleEntry,
                entries: 1,
                total_size: target.size,
            });
        }

        let records: Vec<FileRecord> =
            self.source.read_dir(path)?.into_iter().map(port_to_domain_record).collect();
        log::debug!("{} entries under {}", records.len(), path.display());

        writeln!(out, "{}", self.formatter.render_header(&logical_absolute(path)))?;
        for record in &records {
            self.write_row(record, out)?;
        }
        let total_size: FileSize = records.iter().map(|r| r.size).sum();
        writeln!(out, "{}", self.formatter.render_footer(records.len(), total_size))?;

        Ok(ListingSummary {
            kind: ListingKind::Directory,
            entries: records.len(),
            total_size,
        })
    }

    fn write_row(&self, record: &FileRecord, out: &mut dyn Write) -> Result<()> {
        let classification = self.classifier.classify(record);
        writeln!(out, "{}", self.formatter.render_row(record, classification))?;
        Ok(())
    }
}

fn port_to_domain_record(entry: EntryMetadataDto) -> FileRecord {
    let modified = entry.mtime.unwrap_or_else(|| DateTime::<Local>::from(UNIX_EPOCH));
    FileRecord {
        name: FileName::new(entry.name),
        size: FileSize::new(entry.size),
        modified: ModificationTime::new(modified),
        is_dir: entry.is_dir,
        is_symlink: entry.is_symlink,
        executable: entry.owner_executable,
    }
}
