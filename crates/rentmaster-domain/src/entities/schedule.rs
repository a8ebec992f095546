//! Manually created schedule events
//!
//! These are the user's own tasks (maintenance, viewings, contract signings).
//! System-generated calendar entries are derived, not stored; see the
//! calendar module of `rentmaster-alerts`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{EventId, PropertyId};

/// Kind of schedule event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Collection,
    Maintenance,
    Viewing,
    Contract,
    Other,
}

/// Priority bucket for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Recurrence of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A user-created schedule event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    /// Start time as "HH:mm", the way the forms store it
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<PropertyId>,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<u32>,
    #[serde(default)]
    pub repeat: RepeatType,
}

impl ScheduleEvent {
    /// Create an event, validating the title and the "HH:mm" time format
    pub fn new(
        title: String,
        date: NaiveDate,
        time: String,
        event_type: EventType,
        priority: Priority,
    ) -> DomainResult<Self> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidEventTitle {
                reason: "title must not be empty".to_string(),
            });
        }
        if NaiveTime::parse_from_str(&time, "%H:%M").is_err() {
            return Err(DomainError::InvalidEventTime { value: time });
        }
        Ok(Self {
            id: EventId::new(),
            title,
            description: String::new(),
            date,
            time,
            event_type,
            priority,
            property_id: None,
            is_completed: false,
            reminder_minutes: None,
            repeat: RepeatType::None,
        })
    }

    /// Flip the completion state
    pub fn toggle_completed(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
