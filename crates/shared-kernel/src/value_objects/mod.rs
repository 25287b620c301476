pub mod file_info;

pub use file_info::{FileExtension, FileName, FileSize, ModificationTime};
