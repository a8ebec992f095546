//! Cached repository over the document store
//!
//! The original app kept module-level mutable arrays as an ambient cache.
//! Here the cache is owned by an explicit `Repository` value constructed at
//! the application root and passed by reference to pages; dropping it drops
//! the cache. Freshness across separate `Repository` instances is the
//! caller's concern — surfaces refetch before deriving if it matters.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use rentmaster_domain::entities::{Owner, Property, ScheduleEvent};

use crate::error::StorageResult;
use crate::paths::resolve_base_path;
use crate::store::{Collection, JsonStore};

/// Repository with one write-through cache slot per collection
#[derive(Debug)]
pub struct Repository {
    store: JsonStore,
    properties: RwLock<Option<Vec<Property>>>,
    owners: RwLock<Option<Vec<Owner>>>,
    schedule: RwLock<Option<Vec<ScheduleEvent>>>,
}

impl Repository {
    /// Open a repository rooted at `base_path`
    pub fn open(base_path: PathBuf) -> Self {
        debug!(base = %base_path.display(), "repository opened");
        Self {
            store: JsonStore::new(base_path),
            properties: RwLock::new(None),
            owners: RwLock::new(None),
            schedule: RwLock::new(None),
        }
    }

    /// Open a repository at the default resolved base path
    pub fn with_default_path() -> StorageResult<Self> {
        Ok(Self::open(resolve_base_path()?))
    }

    /// The underlying document store
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Current property list; loaded from disk on first call, cached after
    pub fn properties(&self) -> StorageResult<Vec<Property>> {
        self.cached(&self.properties, Collection::Properties)
    }

    /// Replace the property list, writing through to disk
    pub fn save_properties(&self, properties: Vec<Property>) -> StorageResult<()> {
        self.write_through(&self.properties, Collection::Properties, properties)
    }

    /// Current owner list
    pub fn owners(&self) -> StorageResult<Vec<Owner>> {
        self.cached(&self.owners, Collection::Owners)
    }

    /// Replace the owner list, writing through to disk
    pub fn save_owners(&self, owners: Vec<Owner>) -> StorageResult<()> {
        self.write_through(&self.owners, Collection::Owners, owners)
    }

    /// Current schedule events
    pub fn schedule(&self) -> StorageResult<Vec<ScheduleEvent>> {
        self.cached(&self.schedule, Collection::Schedule)
    }

    /// Replace the schedule events, writing through to disk
    pub fn save_schedule(&self, events: Vec<ScheduleEvent>) -> StorageResult<()> {
        self.write_through(&self.schedule, Collection::Schedule, events)
    }

    /// Drop every cached collection; the next read reloads from disk
    pub fn invalidate(&self) {
        *write_guard(&self.properties) = None;
        *write_guard(&self.owners) = None;
        *write_guard(&self.schedule) = None;
        info!("repository cache invalidated");
    }

    fn cached<T>(&self, slot: &RwLock<Option<Vec<T>>>, collection: Collection) -> StorageResult<Vec<T>>
    where
        T: Clone + serde::de::DeserializeOwned,
    {
        if let Some(cached) = read_guard(slot).as_ref() {
            return Ok(cached.clone());
        }

        let loaded: Vec<T> = self.store.read(collection)?.unwrap_or_default();
        debug!(
            collection = collection.file_name(),
            count = loaded.len(),
            "collection loaded from disk"
        );
        *write_guard(slot) = Some(loaded.clone());
        Ok(loaded)
    }

    fn write_through<T>(
        &self,
        slot: &RwLock<Option<Vec<T>>>,
        collection: Collection,
        value: Vec<T>,
    ) -> StorageResult<()>
    where
        T: Clone + serde::Serialize,
    {
        self.store.save(collection, &value)?;
        *write_guard(slot) = Some(value);
        Ok(())
    }
}

fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
