//! Alert record types
//!
//! The category and state of an alert are tagged variants rather than loose
//! strings, so the finite category × state space is checked by the compiler.
//! The wire tokens of the original app (`RENT_DUE`, `c-exp-…`) are rendered
//! from the variants, keeping notification ids byte-identical for UI list
//! reconciliation.

use serde::Serialize;

use rentmaster_domain::entities::PaymentKind;
use rentmaster_domain::value_objects::PropertyId;

/// The seven independent due-date rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    RentDue,
    ElectricityDue,
    WaterDue,
    ManagementDue,
    WifiDue,
    ContractExpiry,
    VisaExpiry,
}

impl AlertKind {
    /// The payment category behind this alert, if it is a payment alert
    pub fn payment(&self) -> Option<PaymentKind> {
        match self {
            AlertKind::RentDue => Some(PaymentKind::Rent),
            AlertKind::ElectricityDue => Some(PaymentKind::Electricity),
            AlertKind::WaterDue => Some(PaymentKind::Water),
            AlertKind::ManagementDue => Some(PaymentKind::Management),
            AlertKind::WifiDue => Some(PaymentKind::Wifi),
            AlertKind::ContractExpiry | AlertKind::VisaExpiry => None,
        }
    }

    /// The notification type token used in payment alert ids
    pub fn type_token(&self) -> &'static str {
        match self {
            AlertKind::RentDue => "RENT_DUE",
            AlertKind::ElectricityDue => "ELECTRICITY_DUE",
            AlertKind::WaterDue => "WATER_DUE",
            AlertKind::ManagementDue => "MANAGEMENT_DUE",
            AlertKind::WifiDue => "WIFI_DUE",
            AlertKind::ContractExpiry => "CONTRACT_EXPIRY",
            AlertKind::VisaExpiry => "VISA_EXPIRY",
        }
    }

    /// The collection label shown in payment messages ("thu Tiền nhà", ...)
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AlertKind::RentDue => Some("Tiền nhà"),
            AlertKind::ElectricityDue => Some("Tiền điện"),
            AlertKind::WaterDue => Some("Tiền nước"),
            AlertKind::ManagementDue => Some("Phí quản lý"),
            AlertKind::WifiDue => Some("Tiền Wifi"),
            AlertKind::ContractExpiry | AlertKind::VisaExpiry => None,
        }
    }
}

impl From<PaymentKind> for AlertKind {
    fn from(kind: PaymentKind) -> Self {
        match kind {
            PaymentKind::Rent => AlertKind::RentDue,
            PaymentKind::Electricity => AlertKind::ElectricityDue,
            PaymentKind::Water => AlertKind::WaterDue,
            PaymentKind::Management => AlertKind::ManagementDue,
            PaymentKind::Wifi => AlertKind::WifiDue,
        }
    }
}

/// How close the obligation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    /// Due tomorrow (one day of notice)
    Pre,
    /// Due today
    Today,
    /// Past due by the given number of days
    Overdue(u32),
}

impl AlertState {
    /// The state token used in payment alert ids
    pub fn token(&self) -> &'static str {
        match self {
            AlertState::Pre => "pre",
            AlertState::Today => "today",
            AlertState::Overdue(_) => "overdue",
        }
    }
}

/// A derived, non-persisted notification.
///
/// Instances exist only within one derivation call; nothing stores, diffs, or
/// deduplicates them across calls beyond recomputation from current truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    /// Deterministic id: category token + state token + property id.
    /// At most one alert per category+state per property, stable across
    /// recomputation.
    pub id: String,
    pub property_id: PropertyId,
    pub property_name: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub state: AlertState,
    /// Human-readable label, not a machine date
    pub due_date: String,
    pub message: String,
}

impl AppNotification {
    /// Assemble a notification, rendering the deterministic id.
    ///
    /// Payment alerts render `"{TOKEN}-{state}-{property_id}"`; contract and
    /// visa expiry keep the original short forms `"c-exp-{property_id}"` and
    /// `"v-exp-{property_id}"`.
    pub fn new(
        kind: AlertKind,
        state: AlertState,
        property_id: PropertyId,
        property_name: String,
        due_date: String,
        message: String,
    ) -> Self {
        let id = match kind {
            AlertKind::ContractExpiry => format!("c-exp-{property_id}"),
            AlertKind::VisaExpiry => format!("v-exp-{property_id}"),
            _ => format!("{}-{}-{property_id}", kind.type_token(), state.token()),
        };
        Self {
            id,
            property_id,
            property_name,
            kind,
            state,
            due_date,
            message,
        }
    }
}
