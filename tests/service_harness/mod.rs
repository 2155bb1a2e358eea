//! Shared test harness for collection services and list sessions
//!
//! Provides member fixtures, a mock admin backend served by axum on a random
//! local port, and the `collection_service_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod service_harness;
//! use service_harness::*;
//! ```

#![allow(dead_code)]

pub mod collection_service_tests;
pub mod mock_backend;

pub use mock_backend::*;

use chrono::{Duration, Local, NaiveDate};
use gymdesk::core::entity::EntityId;
use gymdesk::entities::{Member, MemberDraft, PlanType};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn member(id: EntityId, name: &str, plan_type: PlanType) -> Member {
    Member {
        id,
        name: name.to_string(),
        phone: format!("98400{:05}", id),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        plan_type,
        start_date: today() - Duration::days(30),
        end_date: today() + Duration::days(335),
        notes: None,
    }
}

/// Alice (Basic), Bob (Premium), Carol (Standard), Dave (Basic), Eve (Premium)
pub fn roster() -> Vec<Member> {
    vec![
        member(1, "Alice", PlanType::Basic),
        member(2, "Bob", PlanType::Premium),
        member(3, "Carol", PlanType::Standard),
        member(4, "Dave", PlanType::Basic),
        member(5, "Eve", PlanType::Premium),
    ]
}

pub fn member_draft(name: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        phone: "9840012345".to_string(),
        email: None,
        plan_type: PlanType::Standard,
        start_date: Some(today()),
        end_date: Some(today() + Duration::days(30)),
        notes: Some("  ".to_string()),
    }
}
