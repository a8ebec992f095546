//! Property-based tests for the derivation invariants
//!
//! The engine is a pure projection: identical input must yield identical
//! output, ids must be unique per (category, state, property), and distinct
//! properties must never collide in output ids.

use chrono::NaiveDate;
use proptest::prelude::*;
use rentmaster_alerts::derive_alerts;
use rentmaster_domain::entities::{
    Property, PropertyCondition, PropertyStatus, PropertyType, Tenant, Utilities,
};
use rentmaster_domain::value_objects::{OwnerId, PropertyId};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
}

fn build_property(id: String, tenant: Tenant) -> Property {
    let mut property = Property {
        id: PropertyId::from(id.as_str()),
        name: format!("Căn hộ {id}"),
        property_type: PropertyType::Apartment,
        address: String::new(),
        description: String::new(),
        structure: String::new(),
        condition: PropertyCondition::Normal,
        total_asset_value: 0,
        status: PropertyStatus::Available,
        owner_id: OwnerId::from("o1"),
        construction_year: 2020,
        operation_start_date: base_date(),
        assets: Vec::new(),
        tenant: None,
        utilities: Utilities::default(),
    };
    property.rent_to(tenant);
    property
}

prop_compose! {
    fn arb_tenant()(
        rent_day in 0u8..=31,
        electricity_day in 0u8..=31,
        water_day in 0u8..=31,
        management_day in 0u8..=31,
        wifi_day in 0u8..=31,
        rent_paid: bool,
        utilities_paid: bool,
        is_foreigner: bool,
        contract_offset in -40i64..=40,
        has_contract: bool,
        visa_offset in -20i64..=20,
        has_visa: bool,
    ) -> Tenant {
        let mut tenant = Tenant::new("Tenant".to_string(), base_date());
        tenant.rent_payment_day = (rent_day != 0).then_some(rent_day);
        tenant.electricity_payment_day = (electricity_day != 0).then_some(electricity_day);
        tenant.water_payment_day = (water_day != 0).then_some(water_day);
        tenant.management_payment_day = (management_day != 0).then_some(management_day);
        tenant.wifi_payment_day = (wifi_day != 0).then_some(wifi_day);
        tenant.is_rent_paid = rent_paid;
        tenant.is_utilities_paid = utilities_paid;
        tenant.is_foreigner = is_foreigner;
        if has_contract {
            tenant.contract_expiry_date = base_date().checked_add_signed(chrono::Duration::days(contract_offset));
        }
        if has_visa {
            tenant.visa_expiry_date = base_date().checked_add_signed(chrono::Duration::days(visa_offset));
        }
        tenant
    }
}

fn arb_properties() -> impl Strategy<Value = Vec<Property>> {
    prop::collection::vec(arb_tenant(), 0..6).prop_map(|tenants| {
        tenants
            .into_iter()
            .enumerate()
            .map(|(i, tenant)| build_property(format!("p{i}"), tenant))
            .collect()
    })
}

fn arb_today() -> impl Strategy<Value = NaiveDate> {
    (1u32..=28).prop_map(|d| NaiveDate::from_ymd_opt(2025, 1, d).expect("valid date"))
}

proptest! {
    /// Calling twice with the same snapshot yields identical results
    #[test]
    fn derivation_is_idempotent(properties in arb_properties(), today in arb_today()) {
        let first = derive_alerts(&properties, today);
        let second = derive_alerts(&properties, today);
        prop_assert_eq!(first, second);
    }

    /// Ids are unique within one derivation
    #[test]
    fn ids_never_collide(properties in arb_properties(), today in arb_today()) {
        let alerts = derive_alerts(&properties, today);
        let mut ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), alerts.len());
    }

    /// At most one alert per category per property
    #[test]
    fn one_alert_per_category_per_property(properties in arb_properties(), today in arb_today()) {
        let alerts = derive_alerts(&properties, today);
        let mut seen = std::collections::HashSet::new();
        for alert in &alerts {
            prop_assert!(
                seen.insert((alert.property_id.clone(), alert.kind)),
                "duplicate alert for {:?} {:?}", alert.property_id, alert.kind
            );
        }
    }

    /// Every alert points back at a rented property in the snapshot
    #[test]
    fn alerts_reference_rented_properties(properties in arb_properties(), today in arb_today()) {
        let alerts = derive_alerts(&properties, today);
        for alert in &alerts {
            let property = properties.iter().find(|p| p.id == alert.property_id);
            prop_assert!(property.map(|p| p.is_rented()).unwrap_or(false));
        }
    }
}
