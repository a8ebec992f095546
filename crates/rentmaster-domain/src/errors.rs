//! Domain errors for RentMaster

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid payment day: {day} (expected 1..=31)")]
    InvalidPaymentDay { day: u8 },

    #[error("Invalid event title: {reason}")]
    InvalidEventTitle { reason: String },

    #[error("Invalid event time {value:?} (expected HH:mm)")]
    InvalidEventTime { value: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
