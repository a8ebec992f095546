//! Unit tests for rentmaster-domain document compatibility

use chrono::NaiveDate;
use rentmaster_domain::entities::{
    PaymentKind, Property, PropertyStatus, PropertyType, Tenant,
};
use rentmaster_domain::value_objects::PropertyId;

/// A property document in the exact shape the original app wrote to disk
const LEGACY_PROPERTY: &str = r#"{
  "id": "p1",
  "name": "Vinhomes Central Park - L5.2010",
  "type": "Apartment",
  "address": "720A Điện Biên Phủ, Bình Thạnh",
  "description": "Căn hộ cao cấp 2 phòng ngủ, view sông, nội thất đầy đủ.",
  "structure": "2PN, 2WC, 80m2",
  "condition": "New",
  "totalAssetValue": 5000000000,
  "status": "Rented",
  "imageUrl": "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800",
  "gallery": [],
  "ownerId": "o1",
  "constructionYear": 2020,
  "operationStartDate": "2021-01-01",
  "assets": [],
  "tenant": {
    "id": "t1",
    "name": "David Smith",
    "isForeigner": true,
    "checkInDate": "2024-02-01",
    "rentPaymentDay": 5,
    "electricityPaymentDay": 10,
    "waterPaymentDay": 10,
    "managementPaymentDay": 5,
    "wifiPaymentDay": 15,
    "rentAmount": 25000000,
    "servicePaymentDay": 10,
    "contractExpiryDate": "2025-02-01",
    "contractImages": [],
    "residencyRegistrationDate": "2024-02-05",
    "isRentPaid": false,
    "isUtilitiesPaid": false,
    "visaExpiryDate": "2024-12-31"
  },
  "utilities": {
    "electricityCode": "PE010023456",
    "waterCode": "WT998877",
    "wifiCode": "FPT-VHM-L5",
    "electricityLink": "https://zalopay.vn/evn",
    "waterLink": "https://sawaco.com.vn",
    "wifiLink": "https://fpt.vn/pay"
  }
}"#;

#[test]
fn legacy_document_loads_fully() {
    let property: Property = serde_json::from_str(LEGACY_PROPERTY).unwrap();

    assert_eq!(property.id, PropertyId::from("p1"));
    assert_eq!(property.property_type, PropertyType::Apartment);
    assert_eq!(property.status, PropertyStatus::Rented);
    assert!(property.is_rented());

    let tenant = property.current_tenant().unwrap();
    assert!(tenant.is_foreigner);
    assert_eq!(tenant.payment_day(PaymentKind::Rent), Some(5));
    assert_eq!(tenant.payment_day(PaymentKind::Wifi), Some(15));
    assert_eq!(
        tenant.contract_expiry_date,
        NaiveDate::from_ymd_opt(2025, 2, 1)
    );
    assert_eq!(
        tenant.visa_expiry_date,
        NaiveDate::from_ymd_opt(2024, 12, 31)
    );
}

#[test]
fn document_round_trips_with_camel_case_names() {
    let property: Property = serde_json::from_str(LEGACY_PROPERTY).unwrap();
    let json = serde_json::to_string(&property).unwrap();

    for field in [
        "\"type\":",
        "\"ownerId\":",
        "\"operationStartDate\":",
        "\"rentPaymentDay\":",
        "\"isRentPaid\":",
        "\"isUtilitiesPaid\":",
        "\"contractExpiryDate\":",
    ] {
        assert!(json.contains(field), "missing {field} in {json}");
    }

    let back: Property = serde_json::from_str(&json).unwrap();
    assert_eq!(back, property);
}

#[test]
fn unset_payment_days_round_trip_as_zero() {
    let mut tenant = Tenant::new(
        "Tenant".to_string(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    );
    tenant.set_payment_day(PaymentKind::Rent, 5).unwrap();

    let json = serde_json::to_string(&tenant).unwrap();
    assert!(json.contains("\"rentPaymentDay\":5"));
    assert!(json.contains("\"wifiPaymentDay\":0"));

    let back: Tenant = serde_json::from_str(&json).unwrap();
    assert_eq!(back.payment_day(PaymentKind::Wifi), None);
    assert_eq!(back, tenant);
}
