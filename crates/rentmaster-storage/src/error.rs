//! Storage error types for RentMaster

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Directory creation failed
    #[error("Directory creation failed for {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File read/write failed
    #[error("IO error on {path} ({operation}): {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        source: std::io::Error,
    },

    /// A stored document could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A document could not be serialized for writing
    #[error("Failed to serialize {collection}: {message}")]
    Serialize { collection: String, message: String },

    /// Path resolution failed
    #[error("Path resolution failed: {message}")]
    PathResolution { message: String },
}

impl StorageError {
    pub(crate) fn io(path: PathBuf, operation: IoOperation, source: std::io::Error) -> Self {
        StorageError::Io {
            path,
            operation,
            source,
        }
    }
}

/// IO operation type for error context
#[derive(Debug, Clone, Copy)]
pub enum IoOperation {
    Read,
    Write,
    Delete,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IoOperation::Read => "read",
            IoOperation::Write => "write",
            IoOperation::Delete => "delete",
        };
        write!(f, "{s}")
    }
}
