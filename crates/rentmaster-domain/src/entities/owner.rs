//! Owner entity: the person whose properties are under management

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::OwnerId;

/// Property owner record.
///
/// Avatar and id-card scans in the stored documents belong to the excluded
/// media layer and are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub address: String,
    pub management_start_date: NaiveDate,
}

impl Owner {
    /// Create an owner record managed from `start`
    pub fn new(name: String, start: NaiveDate) -> Self {
        Self {
            id: OwnerId::new(),
            name,
            phones: Vec::new(),
            address: String::new(),
            management_start_date: start,
        }
    }
}
