use chrono::{DateTime, Local};
use ll_shared_kernel::{FileExtension, FileName, FileSize, ModificationTime};

/// Snapshot of one directory entry, taken when the directory was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: FileName,
    pub size: FileSize,
    pub modified: ModificationTime,
    pub is_dir: bool,
    pub is_symlink: bool,
    /// Owner execute permission (`0o100`).
    pub executable: bool,
}

impl FileRecord {
    /// A plain, non-executable regular file.
    pub fn file(name: impl Into<FileName>, size: u64, modified: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            size: FileSize::new(size),
            modified: ModificationTime::new(modified),
            is_dir: false,
            is_symlink: false,
            executable: false,
        }
    }

    pub fn directory(name: impl Into<FileName>, size: u64, modified: DateTime<Local>) -> Self {
        Self { is_dir: true, ..Self::file(name, size, modified) }
    }

    pub fn symlink(name: impl Into<FileName>, size: u64, modified: DateTime<Local>) -> Self {
        Self { is_symlink: true, ..Self::file(name, size, modified) }
    }

    #[must_use]
    pub fn with_executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    pub fn extension(&self) -> Option<FileExtension> {
        self.name.extension()
    }
}
