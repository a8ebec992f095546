//! RentMaster alert derivation engine
//!
//! Converts a snapshot of [`Property`](rentmaster_domain::entities::Property)
//! records plus a current date into time-sensitive, deduplicated notifications.
//! The derivation is a pure function: no I/O, no stored alert state, and
//! identical input always yields identical output (same ids, same order), so
//! every surface (dashboard, notification feed, calendar) recomputes from
//! current truth instead of reconciling against persisted alerts.
//!
//! - [`derive_alerts`] / [`property_alerts`]: the derivation entry points
//! - [`rules`]: the threshold table and per-field evaluators
//! - [`calendar`]: projection of alerts onto a displayed month
//! - [`summary`]: the dashboard aggregate

pub mod calendar;
mod derive;
pub mod rules;
pub mod summary;
pub mod types;

pub use derive::{derive_alerts, property_alerts};
pub use types::{AlertKind, AlertState, AppNotification};
