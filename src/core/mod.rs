//! Core module containing fundamental traits and types for the client

pub mod entity;
pub mod error;
pub mod field;
pub mod notice;
pub mod query;
pub mod service;
pub mod validation;

pub use entity::{Draft, Entity, EntityId};
pub use error::{
    ErrorSummary, FetchError, GymError, ModalError, MutationError, MutationKind, TransportError,
    ValidationError,
};
pub use field::FieldValue;
pub use notice::{Confirm, Notice, NoticeLevel, NoticeQueue, Notifier, TracingNotifier};
pub use query::{ListQuery, PaginationMeta};
pub use service::CollectionService;
