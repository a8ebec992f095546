//! Calendar projection of alerts
//!
//! The calendar page shows a month the user navigated to, which is not
//! necessarily the month containing today. Payment alerts recur monthly, so
//! they are projected onto their category's day within the *viewed* month;
//! contract and visa alerts sit on their actual expiry date regardless of the
//! viewed month.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use rentmaster_domain::entities::{EventType, Priority, Property, ScheduleEvent};
use rentmaster_domain::value_objects::PropertyId;

use crate::derive::property_alerts;
use crate::types::AlertKind;

/// A month in the proleptic Gregorian calendar, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef(NaiveDate);

impl MonthRef {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .0
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.0)
    }

    /// The following month
    pub fn next(&self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// The given day-of-month within this month, clamped to the month's last
    /// day when the day does not exist (e.g. day 31 in a 30-day month).
    pub fn day_clamped(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day)
            .unwrap_or_else(|| self.last_day())
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// One entry on the calendar: either a user-created schedule event or a
/// system entry projected from an alert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// "HH:mm"; system entries are pinned to the morning
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<PropertyId>,
    pub is_completed: bool,
    pub is_system: bool,
}

const SYSTEM_ENTRY_TIME: &str = "08:00";

impl From<&ScheduleEvent> for CalendarEntry {
    fn from(event: &ScheduleEvent) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            event_type: event.event_type,
            priority: event.priority,
            property_id: event.property_id.clone(),
            is_completed: event.is_completed,
            is_system: false,
        }
    }
}

/// Project the alerts of a property snapshot onto calendar entries for the
/// viewed month.
///
/// Completion state is read off the tenant's paid flags (`is_rent_paid` for
/// rent, `is_utilities_paid` for the other payment categories), not tracked
/// per occurrence; expiry entries are never completable.
pub fn project_alerts(
    properties: &[Property],
    viewed: MonthRef,
    today: NaiveDate,
) -> Vec<CalendarEntry> {
    let mut entries = Vec::new();

    for property in properties {
        let Some(tenant) = property.current_tenant() else {
            continue;
        };

        for alert in property_alerts(property, today) {
            let date = match alert.kind.payment() {
                Some(kind) => {
                    let Some(day) = tenant.payment_day(kind) else {
                        continue;
                    };
                    viewed.day_clamped(u32::from(day))
                }
                None => {
                    let expiry = match alert.kind {
                        AlertKind::ContractExpiry => tenant.contract_expiry_date,
                        AlertKind::VisaExpiry => tenant.visa_expiry_date,
                        _ => None,
                    };
                    let Some(date) = expiry else {
                        continue;
                    };
                    date
                }
            };

            let event_type = match alert.kind {
                AlertKind::RentDue => EventType::Collection,
                AlertKind::ContractExpiry => EventType::Contract,
                _ => EventType::Other,
            };
            let is_completed = alert
                .kind
                .payment()
                .map(|kind| tenant.is_paid_for(kind))
                .unwrap_or(false);

            entries.push(CalendarEntry {
                id: alert.id,
                title: alert.message,
                date,
                time: SYSTEM_ENTRY_TIME.to_string(),
                event_type,
                priority: Priority::High,
                property_id: Some(property.id.clone()),
                is_completed,
                is_system: true,
            });
        }
    }

    entries
}

/// The union the calendar page renders for a viewed month: the user's own
/// schedule events plus the system entries projected from alerts.
pub fn merged_month(
    properties: &[Property],
    manual: &[ScheduleEvent],
    viewed: MonthRef,
    today: NaiveDate,
) -> Vec<CalendarEntry> {
    let mut entries: Vec<CalendarEntry> = manual.iter().map(CalendarEntry::from).collect();
    entries.extend(project_alerts(properties, viewed, today));
    entries
}

/// The entries falling on one day, in the order they were produced
pub fn entries_on(entries: &[CalendarEntry], date: NaiveDate) -> Vec<&CalendarEntry> {
    entries.iter().filter(|e| e.date == date).collect()
}
