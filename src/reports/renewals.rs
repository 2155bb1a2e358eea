//! Membership renewal windows and reminders

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::core::entity::EntityId;
use crate::core::error::ValidationError;
use crate::entities::Member;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 30;

/// Reject look-ahead windows outside `1..=30` days
pub fn check_window(days: u32) -> Result<u32, ValidationError> {
    if (1..=MAX_WINDOW_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ValidationError::single(
            "days",
            format!("'days' must be between 1 and {} (value: {})", MAX_WINDOW_DAYS, days),
        ))
    }
}

/// Members whose membership ends within `days` days of `today`, both ends included
pub fn upcoming(
    members: &[Member],
    today: NaiveDate,
    days: u32,
) -> Result<Vec<&Member>, ValidationError> {
    let days = check_window(days)?;
    let horizon = today + Duration::days(i64::from(days));
    Ok(members
        .iter()
        .filter(|m| m.end_date >= today && m.end_date <= horizon)
        .collect())
}

/// Members whose membership ended before `today`
pub fn expired(members: &[Member], today: NaiveDate) -> Vec<&Member> {
    members.iter().filter(|m| m.is_expired(today)).collect()
}

/// Members whose membership ends on `today`
pub fn due_today(members: &[Member], today: NaiveDate) -> Vec<&Member> {
    members.iter().filter(|m| m.end_date == today).collect()
}

/// A row of the upcoming-renewals page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalReminder {
    pub member_id: EntityId,
    pub name: String,
    pub phone: String,
    pub end_date: NaiveDate,
    pub days_left: i64,
}

/// Upcoming renewals, soonest first, then by name
pub fn reminders(
    members: &[Member],
    today: NaiveDate,
    days: u32,
) -> Result<Vec<RenewalReminder>, ValidationError> {
    let mut rows: Vec<RenewalReminder> = upcoming(members, today, days)?
        .into_iter()
        .map(|m| RenewalReminder {
            member_id: m.id,
            name: m.name.clone(),
            phone: m.phone.clone(),
            end_date: m.end_date,
            days_left: m.days_until_expiry(today),
        })
        .collect();
    rows.sort_by(|a, b| a.days_left.cmp(&b.days_left).then_with(|| a.name.cmp(&b.name)));
    Ok(rows)
}

/// Record a reminder for the member. There is no delivery channel; it is logged.
pub fn send_reminder(reminder: &RenewalReminder) {
    tracing::info!(
        member_id = reminder.member_id,
        phone = %reminder.phone,
        end_date = %reminder.end_date,
        days_left = reminder.days_left,
        "renewal reminder for {}",
        reminder.name
    );
}
