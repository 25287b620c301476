use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LlError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, LlError>;

impl LlError {
    /// The underlying I/O error, if any.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Infrastructure(InfrastructureError::FileSystemOperation { source, .. }) => {
                Some(source)
            }
            Self::Infrastructure(InfrastructureError::OutputError { source, .. }) => Some(source),
        }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// `stat` / `read_dir` failures: the path is missing or inaccessible.
    #[error("{operation} {}: {source}", .path.display())]
    FileSystemOperation {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    pub fn filesystem(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystemOperation { operation, path: path.into(), source }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(source: std::io::Error) -> Self {
        Self::OutputError { source }
    }
}

impl From<std::io::Error> for LlError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}
