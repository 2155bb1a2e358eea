//! Dashboard headline figures

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{Member, Payment};
use crate::reports::renewals;

/// Figures on the admin dashboard, in the backend's key names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "Total_Members")]
    pub total_members: u64,
    #[serde(rename = "Active_Members")]
    pub active_members: u64,
    /// Sum of payments since the first day of the current month
    #[serde(rename = "Total_Payments")]
    pub total_payments: Decimal,
    #[serde(rename = "Upcoming_Renewals")]
    pub upcoming_renewals: u64,
    #[serde(rename = "Expired_Membership")]
    pub expired_memberships: u64,
}

impl DashboardStats {
    /// Compute the dashboard locally from fetched lists, counting renewals
    /// within [`renewals::DEFAULT_WINDOW_DAYS`]
    pub fn compute(members: &[Member], payments: &[Payment], today: NaiveDate) -> Self {
        Self::compute_with_window(members, payments, today, renewals::DEFAULT_WINDOW_DAYS)
    }

    /// Same as [`DashboardStats::compute`] with a custom renewal look-ahead
    pub fn compute_with_window(
        members: &[Member],
        payments: &[Payment],
        today: NaiveDate,
        window_days: u32,
    ) -> Self {
        let total = members.len() as u64;
        let expired = renewals::expired(members, today).len() as u64;
        let upcoming = members
            .iter()
            .filter(|m| {
                m.end_date >= today && m.days_until_expiry(today) <= i64::from(window_days)
            })
            .count() as u64;

        let month_start = today.with_day(1).unwrap_or(today);
        let total_payments = payments
            .iter()
            .filter(|p| p.date.date() >= month_start)
            .map(|p| p.amount)
            .sum();

        Self {
            total_members: total,
            active_members: total.saturating_sub(expired),
            total_payments,
            upcoming_renewals: upcoming,
            expired_memberships: expired,
        }
    }
}
