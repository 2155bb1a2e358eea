//! Service trait for collection operations

use async_trait::async_trait;

use crate::core::entity::{Entity, EntityId};
use crate::core::error::TransportError;

/// Capability interface for one backend collection
///
/// Implementations provide the four calls a list session needs for a specific
/// entity type. The list state machine is agnostic to how they are carried out
/// (HTTP, in-memory stand-in, anything else).
#[async_trait]
pub trait CollectionService<T: Entity>: Send + Sync {
    /// Fetch the whole collection, in server order
    async fn fetch_all(&self) -> Result<Vec<T>, TransportError>;

    /// Create an entity from a draft; returns the server's canonical copy
    async fn create(&self, draft: &T::Draft) -> Result<T, TransportError>;

    /// Update an existing entity; returns exactly what the server stored
    async fn update(&self, id: EntityId, draft: &T::Draft) -> Result<T, TransportError>;

    /// Delete an entity
    async fn delete(&self, id: EntityId) -> Result<(), TransportError>;
}
