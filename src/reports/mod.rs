//! Renewal reminders and dashboard figures

pub mod dashboard;
pub mod renewals;

pub use dashboard::DashboardStats;
pub use renewals::{RenewalReminder, due_today, expired, reminders, send_reminder, upcoming};
