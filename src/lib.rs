//! # gymdesk
//!
//! Typed client and list state machine for a gym-management admin backend.
//!
//! ## Features
//!
//! - **Generic list sessions**: one store, projection and mutation coordinator
//!   shared by the member, payment and plan views
//! - **Search, filter and pagination**: computed client-side after a full fetch
//! - **Reconciliation**: reload after create, patch with the server copy after
//!   update, local removal after a confirmed delete
//! - **Pluggable backends**: REST over `reqwest`, or an in-memory stand-in
//! - **Reports**: renewal windows, reminders and dashboard figures
//! - **Configuration-Based**: base URL, page sizes and business rules from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gymdesk::prelude::*;
//!
//! let client = GymClient::new(ClientConfig::default().with_env_overrides()?)?;
//! client.auth().login("admin", "s3cret").await?;
//!
//! let notices = Arc::new(NoticeQueue::new());
//! let mut members = client.members(notices.clone());
//! members.mount().await?;
//!
//! members.set_search("ali");
//! for member in members.visible().items {
//!     println!("{} ({})", member.name, member.plan_type);
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod list;
pub mod logging;
pub mod reports;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Draft, Entity, EntityId},
        error::{
            FetchError, GymError, ModalError, MutationError, MutationKind, TransportError,
            ValidationError,
        },
        field::FieldValue,
        notice::{Confirm, Notice, NoticeLevel, NoticeQueue, Notifier, TracingNotifier},
        query::{ListQuery, PaginationMeta},
        service::CollectionService,
    };

    // === Entities ===
    pub use crate::entities::{
        GymInfo, GymInfoDraft, Member, MemberDraft, Payment, PaymentDraft, PaymentMethod, Plan,
        PlanDraft, PlanType,
    };

    // === List State Machine ===
    pub use crate::list::{
        CollectionStore, DeleteOutcome, ListSession, ModalState, MutationCoordinator, Projection,
    };

    // === Backends ===
    pub use crate::client::{GymClient, RestClient, RestCollection, TokenStore};
    pub use crate::storage::{FromDraft, InMemoryCollection};

    // === Reports ===
    pub use crate::reports::{DashboardStats, RenewalReminder};

    // === Config ===
    pub use crate::config::{BusinessRules, ClientConfig, PageSizes};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{NaiveDate, NaiveDateTime};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
