//! Serde helpers for the date and day-of-month fields of stored documents
//!
//! Stored documents come from the original on-device JSON files, which were
//! written by hand-rolled forms: date fields may be empty or malformed, and
//! payment days may be `0` for "not configured". A single bad field must
//! degrade to `None` rather than fail the whole collection load.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lenient `Option<NaiveDate>` as a `YYYY-MM-DD` string.
///
/// Deserialization maps a missing field, `null`, the empty string, or an
/// unparseable value to `None`. Serialization writes `None` as `""`, which is
/// what the original forms stored for a cleared date.
pub mod lenient_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| parse_date(&s)))
    }
}

/// Day-of-month fields stored as plain numbers, where `0` means "not set".
///
/// Serialization writes `None` back as `0` so the documents keep the shape
/// the original app reads.
pub mod day_of_month {
    use super::*;

    pub fn serialize<S>(day: &Option<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(day.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<u8>::deserialize(deserializer)?;
        Ok(raw.filter(|d| *d != 0))
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    // Some documents carry full ISO timestamps; keep the date part.
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}
