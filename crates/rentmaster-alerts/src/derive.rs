//! Alert derivation entry points

use chrono::NaiveDate;
use tracing::debug;

use rentmaster_domain::entities::{PaymentKind, Property, Tenant};

use crate::rules::{
    evaluate_payment_day, within_expiry_window, CONTRACT_NOTICE_DAYS, VISA_NOTICE_DAYS,
};
use crate::types::{AlertKind, AlertState, AppNotification};

/// Derive all alerts for a snapshot of properties.
///
/// Pure and synchronous: the result is a function of `(properties, today)`
/// alone, and calling twice with the same arguments yields identical results.
/// No ordering is guaranteed beyond the input order of properties; callers
/// that need a stable presentation order must sort explicitly.
pub fn derive_alerts(properties: &[Property], today: NaiveDate) -> Vec<AppNotification> {
    properties
        .iter()
        .flat_map(|p| property_alerts(p, today))
        .collect()
}

/// Derive the alerts for a single property.
///
/// Only rented properties with a tenant are evaluated; each of the seven
/// category rules contributes at most one alert. A missing or unparseable
/// expiry date skips that one sub-rule, never the whole property.
pub fn property_alerts(property: &Property, today: NaiveDate) -> Vec<AppNotification> {
    let mut alerts = Vec::new();

    let Some(tenant) = property.current_tenant() else {
        return alerts;
    };

    for &kind in PaymentKind::all() {
        if let Some(alert) = payment_alert(property, tenant, kind, today) {
            alerts.push(alert);
        }
    }

    if let Some(alert) = contract_alert(property, tenant, today) {
        alerts.push(alert);
    }
    if let Some(alert) = visa_alert(property, tenant, today) {
        alerts.push(alert);
    }

    alerts
}

fn payment_alert(
    property: &Property,
    tenant: &Tenant,
    kind: PaymentKind,
    today: NaiveDate,
) -> Option<AppNotification> {
    let day = tenant.payment_day(kind)?;
    let state = evaluate_payment_day(Some(day), tenant.is_paid_for(kind), today)?;
    let kind = AlertKind::from(kind);
    let label = kind.label().unwrap_or_default();

    let (due_date, message) = match state {
        AlertState::Pre => (
            format!("Ngày {day}"),
            format!("Sắp tới hạn thu {label} (Còn 1 ngày)"),
        ),
        AlertState::Today => (
            "Hôm nay".to_string(),
            format!("Đến hạn thu {label} hôm nay!"),
        ),
        AlertState::Overdue(days) => (
            format!("Quá hạn {days} ngày"),
            format!("TRỄ HẠN THU {}!", label.to_uppercase()),
        ),
    };

    Some(AppNotification::new(
        kind,
        state,
        property.id.clone(),
        property.name.clone(),
        due_date,
        message,
    ))
}

fn contract_alert(
    property: &Property,
    tenant: &Tenant,
    today: NaiveDate,
) -> Option<AppNotification> {
    let Some(expiry) = tenant.contract_expiry_date else {
        debug!(property = %property.id, "contract expiry date missing, skipping contract rule");
        return None;
    };
    let diff = within_expiry_window(expiry, today, CONTRACT_NOTICE_DAYS)?;

    let state = if diff == 0 {
        AlertState::Today
    } else {
        AlertState::Pre
    };
    let message = if diff == 0 {
        "Hợp đồng hết hạn hôm nay!".to_string()
    } else {
        format!("Hợp đồng hết hạn sau {diff} ngày")
    };

    Some(AppNotification::new(
        AlertKind::ContractExpiry,
        state,
        property.id.clone(),
        property.name.clone(),
        expiry.format("%Y-%m-%d").to_string(),
        message,
    ))
}

fn visa_alert(property: &Property, tenant: &Tenant, today: NaiveDate) -> Option<AppNotification> {
    if !tenant.is_foreigner {
        return None;
    }
    let expiry = tenant.visa_expiry_date?;
    let diff = within_expiry_window(expiry, today, VISA_NOTICE_DAYS)?;

    let state = if diff == 0 {
        AlertState::Today
    } else {
        AlertState::Pre
    };

    Some(AppNotification::new(
        AlertKind::VisaExpiry,
        state,
        property.id.clone(),
        property.name.clone(),
        expiry.format("%Y-%m-%d").to_string(),
        format!("Visa khách sắp hết hạn ({diff} ngày)"),
    ))
}
