//! Tenant entity: the current occupant of a rented property

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{day_of_month, lenient_date};
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::TenantId;

/// The five independently scheduled payment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentKind {
    Rent,
    Electricity,
    Water,
    Management,
    Wifi,
}

impl PaymentKind {
    /// All payment categories, in the order the original app evaluated them
    pub fn all() -> &'static [PaymentKind] {
        &[
            PaymentKind::Rent,
            PaymentKind::Electricity,
            PaymentKind::Water,
            PaymentKind::Management,
            PaymentKind::Wifi,
        ]
    }
}

/// A family member living with the tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub name: String,
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card_or_passport: Option<String>,
}

/// Tenant record embedded in a rented property.
///
/// Field names serialize in camelCase so documents stay readable by the
/// existing on-device JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub is_foreigner: bool,
    pub check_in_date: NaiveDate,

    /// Per-category payment days, each a day-of-month in 1..=31.
    /// `None` (stored as 0) means the category is not scheduled.
    #[serde(default, with = "day_of_month")]
    pub rent_payment_day: Option<u8>,
    #[serde(default, with = "day_of_month")]
    pub electricity_payment_day: Option<u8>,
    #[serde(default, with = "day_of_month")]
    pub water_payment_day: Option<u8>,
    #[serde(default, with = "day_of_month")]
    pub management_payment_day: Option<u8>,
    #[serde(default, with = "day_of_month")]
    pub wifi_payment_day: Option<u8>,

    pub rent_amount: i64,
    /// Combined service collection day used by older documents.
    #[serde(default, with = "day_of_month")]
    pub service_payment_day: Option<u8>,

    #[serde(default, with = "lenient_date")]
    pub contract_expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_reminder_days: Option<u32>,

    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub visa_expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_reminder_days: Option<u32>,

    pub is_rent_paid: bool,
    /// Single paid flag shared by electricity, water, management, and wifi.
    /// The stored schema tracks those four categories with one boolean; keep
    /// all reads behind [`Tenant::is_paid_for`] so the coupling stays in one
    /// place.
    pub is_utilities_paid: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub family_members: Vec<FamilyMember>,
}

impl Tenant {
    /// Create a tenant with an empty payment schedule
    pub fn new(name: String, check_in_date: NaiveDate) -> Self {
        Self {
            id: TenantId::new(),
            name,
            is_foreigner: false,
            check_in_date,
            rent_payment_day: None,
            electricity_payment_day: None,
            water_payment_day: None,
            management_payment_day: None,
            wifi_payment_day: None,
            rent_amount: 0,
            service_payment_day: None,
            contract_expiry_date: None,
            contract_reminder_days: None,
            visa_expiry_date: None,
            visa_reminder_days: None,
            is_rent_paid: false,
            is_utilities_paid: false,
            family_members: Vec::new(),
        }
    }

    /// The scheduled day-of-month for a payment category
    pub fn payment_day(&self, kind: PaymentKind) -> Option<u8> {
        match kind {
            PaymentKind::Rent => self.rent_payment_day,
            PaymentKind::Electricity => self.electricity_payment_day,
            PaymentKind::Water => self.water_payment_day,
            PaymentKind::Management => self.management_payment_day,
            PaymentKind::Wifi => self.wifi_payment_day,
        }
    }

    /// Whether a payment category is already settled for the current cycle.
    ///
    /// Rent has its own flag; the other four categories share
    /// `is_utilities_paid`.
    pub fn is_paid_for(&self, kind: PaymentKind) -> bool {
        match kind {
            PaymentKind::Rent => self.is_rent_paid,
            _ => self.is_utilities_paid,
        }
    }

    /// Set the payment day for a category, validating the 1..=31 range
    pub fn set_payment_day(&mut self, kind: PaymentKind, day: u8) -> DomainResult<()> {
        if !(1..=31).contains(&day) {
            return Err(DomainError::InvalidPaymentDay { day });
        }
        let slot = match kind {
            PaymentKind::Rent => &mut self.rent_payment_day,
            PaymentKind::Electricity => &mut self.electricity_payment_day,
            PaymentKind::Water => &mut self.water_payment_day,
            PaymentKind::Management => &mut self.management_payment_day,
            PaymentKind::Wifi => &mut self.wifi_payment_day,
        };
        *slot = Some(day);
        Ok(())
    }

    /// Mark this cycle's rent as paid or unpaid
    pub fn mark_rent_paid(&mut self, paid: bool) {
        self.is_rent_paid = paid;
    }

    /// Mark this cycle's utilities (all four categories) as paid or unpaid
    pub fn mark_utilities_paid(&mut self, paid: bool) {
        self.is_utilities_paid = paid;
    }
}
