//! First-run starter documents
//!
//! A fresh install gets one owner and one fully-populated rented property so
//! every page has something to render before the user enters real data. The
//! content mirrors what the original app shipped.

use chrono::NaiveDate;
use tracing::info;

use rentmaster_domain::entities::{
    Owner, Property, PropertyCondition, PropertyStatus, PropertyType, Tenant, Utilities,
};
use rentmaster_domain::value_objects::{OwnerId, PropertyId, TenantId};

use crate::error::StorageResult;
use crate::repository::Repository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The starter owner records
pub fn starter_owners() -> Vec<Owner> {
    vec![Owner {
        id: OwnerId::from("o1"),
        name: "Nguyễn Văn Hùng".to_string(),
        phones: vec!["0912345678".to_string()],
        address: "123 Lê Lợi, Quận 1, TP.HCM".to_string(),
        management_start_date: date(2024, 1, 10),
    }]
}

/// The starter property records
pub fn starter_properties() -> Vec<Property> {
    let tenant = Tenant {
        id: TenantId::from("t1"),
        name: "David Smith".to_string(),
        is_foreigner: true,
        check_in_date: date(2024, 2, 1),
        rent_payment_day: Some(5),
        electricity_payment_day: Some(10),
        water_payment_day: Some(10),
        management_payment_day: Some(5),
        wifi_payment_day: Some(15),
        rent_amount: 25_000_000,
        service_payment_day: Some(10),
        contract_expiry_date: Some(date(2025, 2, 1)),
        contract_reminder_days: None,
        visa_expiry_date: Some(date(2024, 12, 31)),
        visa_reminder_days: None,
        is_rent_paid: false,
        is_utilities_paid: false,
        family_members: Vec::new(),
    };

    vec![Property {
        id: PropertyId::from("p1"),
        name: "Vinhomes Central Park - L5.2010".to_string(),
        property_type: PropertyType::Apartment,
        address: "720A Điện Biên Phủ, Bình Thạnh".to_string(),
        description: "Căn hộ cao cấp 2 phòng ngủ, view sông, nội thất đầy đủ.".to_string(),
        structure: "2PN, 2WC, 80m2".to_string(),
        condition: PropertyCondition::New,
        total_asset_value: 5_000_000_000,
        status: PropertyStatus::Rented,
        owner_id: OwnerId::from("o1"),
        construction_year: 2020,
        operation_start_date: date(2021, 1, 1),
        assets: Vec::new(),
        tenant: Some(tenant),
        utilities: Utilities {
            electricity_code: "PE010023456".to_string(),
            water_code: "WT998877".to_string(),
            wifi_code: "FPT-VHM-L5".to_string(),
            electricity_link: "https://zalopay.vn/evn".to_string(),
            water_link: "https://sawaco.com.vn".to_string(),
            wifi_link: "https://fpt.vn/pay".to_string(),
        },
    }]
}

/// Seed the starter documents when the property collection is absent or
/// empty. Returns whether seeding happened.
pub fn seed_if_empty(repository: &Repository) -> StorageResult<bool> {
    let existing = repository.properties()?;
    if !existing.is_empty() {
        return Ok(false);
    }

    repository.save_owners(starter_owners())?;
    repository.save_properties(starter_properties())?;
    info!("seeded starter owner and property documents");
    Ok(true)
}
