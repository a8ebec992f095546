//! Dashboard aggregate

use chrono::NaiveDate;
use serde::Serialize;

use rentmaster_domain::entities::{Owner, Property, PropertyStatus, ScheduleEvent};

use crate::derive::derive_alerts;
use crate::types::AppNotification;

/// The numbers and alerts the dashboard renders, computed from one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub rented: usize,
    pub available: usize,
    pub owner_count: usize,
    pub alerts: Vec<AppNotification>,
    /// Schedule events dated today and not yet completed
    pub today_task_count: usize,
}

impl DashboardSummary {
    /// Compute the summary for a snapshot of the three collections
    pub fn compute(
        properties: &[Property],
        owners: &[Owner],
        schedule: &[ScheduleEvent],
        today: NaiveDate,
    ) -> Self {
        let rented = properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Rented)
            .count();
        let alerts = derive_alerts(properties, today);
        let today_task_count = schedule
            .iter()
            .filter(|e| e.date == today && !e.is_completed)
            .count();

        Self {
            total_properties: properties.len(),
            rented,
            available: properties.len() - rented,
            owner_count: owners.len(),
            alerts,
            today_task_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rentmaster_domain::entities::{
        EventType, PaymentKind, Property, PropertyCondition, PropertyType, Tenant, Utilities,
    };
    use rentmaster_domain::value_objects::{OwnerId, PropertyId};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn property(id: &str) -> Property {
        Property {
            id: PropertyId::from(id),
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
            operation_start_date: day(2021, 1, 1),
            assets: Vec::new(),
            tenant: None,
            utilities: Utilities::default(),
        }
    }

    #[test]
    fn test_counts_and_alerts() {
        let today = day(2025, 3, 5);

        let mut rented = property("p1");
        let mut tenant = Tenant::new("Tenant".to_string(), day(2024, 2, 1));
        tenant.set_payment_day(PaymentKind::Rent, 5).unwrap();
        rented.rent_to(tenant);
        let vacant = property("p2");

        let owner = Owner::new("Nguyễn Văn Hùng".to_string(), day(2024, 1, 10));

        let mut task_today = ScheduleEvent::new(
            "Thu tiền nhà".to_string(),
            today,
            "08:00".to_string(),
            EventType::Collection,
            rentmaster_domain::entities::Priority::High,
        )
        .unwrap();
        let mut done_today = task_today.clone();
        done_today.toggle_completed();
        task_today.is_completed = false;

        let summary = DashboardSummary::compute(
            &[rented, vacant],
            std::slice::from_ref(&owner),
            &[task_today, done_today],
            today,
        );

        assert_eq!(summary.total_properties, 2);
        assert_eq!(summary.rented, 1);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.owner_count, 1);
        assert_eq!(summary.today_task_count, 1);
        assert_eq!(summary.alerts.len(), 1);
        assert_eq!(summary.alerts[0].id, "RENT_DUE-today-p1");
    }
}
