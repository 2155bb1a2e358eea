//! Backends that satisfy [`CollectionService`](crate::core::service::CollectionService)
//! without a network.
//!
//! The REST backend lives in [`crate::client`]; this module holds the
//! in-process stand-in used by tests, demos and offline sessions.

pub mod in_memory;

pub use in_memory::InMemoryCollection;

use crate::core::entity::{Entity, EntityId};

/// Build a stored entity from a submitted draft, the way the backend would
pub trait FromDraft: Entity {
    fn from_draft(id: EntityId, draft: &Self::Draft) -> Self;
}
