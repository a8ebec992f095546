//! Core domain entities with business logic and validation
//!
//! Organized by aggregate:
//! - `property`: rental unit, its assets and utility codes
//! - `tenant`: current occupant, payment schedule, paid flags
//! - `owner`: property owner record
//! - `schedule`: manually created schedule events

mod owner;
mod property;
mod schedule;
mod tenant;

pub use owner::*;
pub use property::*;
pub use schedule::*;
pub use tenant::*;
