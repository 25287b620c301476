use std::{
    fs::{self, DirEntry, Metadata},
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local, Utc};
use ll_ports::metadata::{EntryMetadataDto, MetadataSource};
use ll_shared_kernel::{InfrastructureError, Result};

use crate::platform;

/// Filesystem adapter implementing the `MetadataSource` port with `std::fs`.
///
/// Directory entries come back sorted by name so listings are stable across
/// platforms whose `readdir` order differs.
#[derive(Debug, Default)]
pub struct FsMetadataSource;

impl FsMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for FsMetadataSource {
    fn stat(&self, path: &Path) -> Result<EntryMetadataDto> {
        let metadata =
            fs::metadata(path).map_err(|source| InfrastructureError::filesystem("stat", path, source))?;
        Ok(to_dto(display_name(path), &metadata))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<EntryMetadataDto>> {
        let reader =
            fs::read_dir(path).map_err(|source| InfrastructureError::filesystem("open", path, source))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|source| InfrastructureError::filesystem("readdirent", path, source))?;
            let Some(metadata) = entry_metadata(&entry)? else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            log::trace!("read {name} ({} bytes)", metadata.len());
            entries.push(to_dto(name, &metadata));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

fn to_dto(name: String, metadata: &Metadata) -> EntryMetadataDto {
    let file_type = metadata.file_type();
    EntryMetadataDto {
        name,
        size: metadata.len(),
        mtime: metadata.modified().ok().map(to_local),
        is_dir: file_type.is_dir(),
        is_symlink: file_type.is_symlink(),
        owner_executable: platform::is_owner_executable(metadata),
    }
}

/// lstat of a directory entry: a symlink is reported as a link, not as its
/// target. `None` when the entry was removed after `readdir` returned it.
fn entry_metadata(entry: &DirEntry) -> Result<Option<Metadata>> {
    match entry.metadata() {
        Ok(metadata) => Ok(Some(metadata)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            log::debug!("skipping vanished entry {}", entry.path().display());
            Ok(None)
        }
        Err(source) => Err(InfrastructureError::filesystem("lstat", entry.path(), source).into()),
    }
}

/// Converts a filesystem timestamp, clamping instants chrono cannot represent
/// to its minimum or maximum.
fn to_local(time: SystemTime) -> DateTime<Local> {
    let utc = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, after.subsec_nanos()))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        Err(err) => {
            let before = err.duration();
            i64::try_from(before.as_secs())
                .ok()
                .and_then(|secs| match before.subsec_nanos() {
                    0 => DateTime::from_timestamp(-secs, 0),
                    nanos => DateTime::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
                })
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        }
    };
    utc.with_timezone(&Local)
}

/// Last component of `path`, or the path itself for `/`, `..` and friends.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}
