use std::path::Path;

use chrono::{DateTime, Local};
use ll_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO describing one filesystem entry as reported by a metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadataDto {
    pub name: String,
    pub size: u64,
    /// `None` when the platform cannot report a modification time.
    pub mtime: Option<DateTime<Local>>,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub owner_executable: bool,
}

/// Port for reading entry metadata.
pub trait MetadataSource {
    /// Describes `path` itself, following symlinks.
    fn stat(&self, path: &Path) -> Result<EntryMetadataDto>;

    /// Describes the immediate children of `path` without following symlinks.
    fn read_dir(&self, path: &Path) -> Result<Vec<EntryMetadataDto>>;
}
