//! Property entity: a managed rental unit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{OwnerId, PropertyId};

use super::Tenant;

/// Occupancy status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    Rented,
    Available,
}

/// Kind of rental unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Hotel,
}

/// Physical condition bucket used by the listing forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCondition {
    New,
    Normal,
    Old,
}

/// An inventoried asset inside a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Utility provider codes and payment links for a property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilities {
    #[serde(default)]
    pub electricity_code: String,
    #[serde(default)]
    pub water_code: String,
    #[serde(default)]
    pub wifi_code: String,
    #[serde(default)]
    pub electricity_link: String,
    #[serde(default)]
    pub water_link: String,
    #[serde(default)]
    pub wifi_link: String,
}

/// A managed rental unit.
///
/// Photo and gallery fields of the stored documents belong to the excluded
/// media-capture layer and are ignored on load (serde skips unknown fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub address: String,
    #[serde(default)]
    pub description: String,
    /// Free-form layout summary, e.g. "2PN, 2WC, 80m2"
    #[serde(default)]
    pub structure: String,
    pub condition: PropertyCondition,
    #[serde(default)]
    pub total_asset_value: i64,
    pub status: PropertyStatus,
    pub owner_id: OwnerId,
    #[serde(default)]
    pub construction_year: u16,
    pub operation_start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
    #[serde(default)]
    pub utilities: Utilities,
}

impl Property {
    /// Whether this property is occupied: status says rented and a tenant
    /// record is actually present. Only such properties are evaluated by the
    /// alert engine.
    pub fn is_rented(&self) -> bool {
        self.status == PropertyStatus::Rented && self.tenant.is_some()
    }

    /// The current tenant, if the property is occupied
    pub fn current_tenant(&self) -> Option<&Tenant> {
        if self.status == PropertyStatus::Rented {
            self.tenant.as_ref()
        } else {
            None
        }
    }

    /// Move a tenant in, flipping the status to rented
    pub fn rent_to(&mut self, tenant: Tenant) {
        self.tenant = Some(tenant);
        self.status = PropertyStatus::Rented;
    }

    /// Move the tenant out, flipping the status to available
    pub fn vacate(&mut self) {
        self.tenant = None;
        self.status = PropertyStatus::Available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> Property {
        Property {
            id: PropertyId::from("p1"),
            name: "Test Apartment".to_string(),
            property_type: PropertyType::Apartment,
            address: "720A Điện Biên Phủ".to_string(),
            description: String::new(),
            structure: String::new(),
            condition: PropertyCondition::New,
            total_asset_value: 0,
            status: PropertyStatus::Available,
            owner_id: OwnerId::from("o1"),
            construction_year: 2020,
            operation_start_date: NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"),
            assets: Vec::new(),
            tenant: None,
            utilities: Utilities::default(),
        }
    }

    #[test]
    fn test_rent_and_vacate_keep_status_consistent() {
        let mut p = property();
        assert!(!p.is_rented());

        let tenant = Tenant::new(
            "Tenant".to_string(),
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        );
        p.rent_to(tenant);
        assert!(p.is_rented());
        assert!(p.current_tenant().is_some());

        p.vacate();
        assert!(!p.is_rented());
        assert_eq!(p.status, PropertyStatus::Available);
    }

    #[test]
    fn test_rented_status_without_tenant_is_not_occupied() {
        let mut p = property();
        p.status = PropertyStatus::Rented;
        assert!(!p.is_rented());
        assert!(p.current_tenant().is_none());
    }

    #[test]
    fn test_unknown_media_fields_are_ignored_on_load() {
        let json = r#"{
            "id": "p1",
            "name": "Vinhomes Central Park - L5.2010",
            "type": "Apartment",
            "address": "720A Điện Biên Phủ, Bình Thạnh",
            "condition": "New",
            "status": "Available",
            "imageUrl": "https://example.com/a.jpg",
            "gallery": ["x", "y"],
            "ownerId": "o1",
            "operationStartDate": "2021-01-01"
        }"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, PropertyId::from("p1"));
        assert_eq!(p.property_type, PropertyType::Apartment);
    }
}
