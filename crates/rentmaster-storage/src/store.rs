//! JSON document codec over the base directory
//!
//! One file per collection. A missing file reads as `None` — the original
//! store returned null for anything it could not read, and first-run seeding
//! depends on that. Malformed JSON, by contrast, is surfaced as a parse
//! error rather than silently treated as empty.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{IoOperation, StorageError, StorageResult};

/// The stored collections, one JSON document each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Properties,
    Owners,
    Schedule,
}

impl Collection {
    /// File name of the collection's document
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Properties => "properties.json",
            Collection::Owners => "owners.json",
            Collection::Schedule => "schedule.json",
        }
    }
}

/// Thin file codec for collection documents
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_path: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `base_path`; the directory is created on the
    /// first write, not here.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// The directory holding the collection documents
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of a collection's document
    pub fn document_path(&self, collection: Collection) -> PathBuf {
        self.base_path.join(collection.file_name())
    }

    /// Read a collection document; a missing file is `Ok(None)`
    pub fn read<T: DeserializeOwned>(&self, collection: Collection) -> StorageResult<Option<T>> {
        let path = self.document_path(collection);
        if !path.exists() {
            debug!(path = %path.display(), "collection document missing");
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| StorageError::io(path.clone(), IoOperation::Read, e))?;
        let value = serde_json::from_str(&raw).map_err(|e| StorageError::Parse {
            path,
            message: e.to_string(),
        })?;
        Ok(Some(value))
    }

    /// Write a collection document, creating the base directory on demand
    pub fn save<T: Serialize>(&self, collection: Collection, value: &T) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).map_err(|e| StorageError::DirectoryCreationFailed {
            path: self.base_path.clone(),
            source: e,
        })?;

        let path = self.document_path(collection);
        let json = serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
            collection: collection.file_name().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|e| StorageError::io(path.clone(), IoOperation::Write, e))?;

        debug!(path = %path.display(), "collection document written");
        Ok(())
    }

    /// Whether a collection document exists on disk
    pub fn exists(&self, collection: Collection) -> bool {
        self.document_path(collection).exists()
    }

    /// Remove a collection document if present
    pub fn delete(&self, collection: Collection) -> StorageResult<()> {
        let path = self.document_path(collection);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| StorageError::io(path, IoOperation::Delete, e))?;
        }
        Ok(())
    }
}
