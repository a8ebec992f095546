//! RentMaster domain model
//!
//! Entities, value objects, and domain errors for the property-rental
//! management system. This crate has no I/O: persistence lives in
//! `rentmaster-storage`, and all derived views (alerts, calendar, dashboard)
//! live in `rentmaster-alerts`.

pub mod dates;
pub mod entities;
pub mod errors;
pub mod value_objects;
