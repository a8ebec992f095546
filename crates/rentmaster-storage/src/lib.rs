//! RentMaster storage
//!
//! Thin persistence over the on-device JSON document store: one document per
//! collection (`properties.json`, `owners.json`, `schedule.json`) under an
//! OS-appropriate base directory. The [`Repository`](repository::Repository)
//! is the single owner of the in-memory cache; the application root
//! constructs one and passes it by reference to pages.

pub mod error;
pub mod paths;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use repository::Repository;
