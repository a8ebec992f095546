//! Base-path resolution for the document store

use std::path::PathBuf;

use crate::error::{StorageError, StorageResult};

/// Resolve the base directory for stored documents.
///
/// Priority:
/// 1. `RENTMASTER_HOME` environment variable
/// 2. `~/Documents/rentmaster/` (where the original app kept its files)
/// 3. `~/.rentmaster/` (fallback if no Documents directory exists)
pub fn resolve_base_path() -> StorageResult<PathBuf> {
    if let Ok(home_override) = std::env::var("RENTMASTER_HOME") {
        return Ok(PathBuf::from(home_override));
    }

    if let Some(docs_dir) = dirs::document_dir() {
        return Ok(docs_dir.join("rentmaster"));
    }

    if let Some(home_dir) = dirs::home_dir() {
        return Ok(home_dir.join(".rentmaster"));
    }

    Err(StorageError::PathResolution {
        message: "Could not determine home directory".to_string(),
    })
}
