//! Authoritative in-memory list for one entity type

use crate::core::entity::{Entity, EntityId};
use crate::core::error::FetchError;
use crate::core::service::CollectionService;

/// The session's copy of one backend collection, in fetch order
///
/// Populated by a full fetch and patched locally after mutations. Ids are
/// not checked for uniqueness; `replace` and `remove` act on the first match.
#[derive(Debug, Clone)]
pub struct CollectionStore<T: Entity> {
    entities: Vec<T>,
    loaded: bool,
}

impl<T: Entity> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CollectionStore<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            loaded: false,
        }
    }

    /// Replace the whole list with a fresh fetch
    ///
    /// On failure the previous list is kept as it was.
    pub async fn load(&mut self, service: &dyn CollectionService<T>) -> Result<usize, FetchError> {
        tracing::debug!(resource = T::resource_name(), "fetching collection");

        let fetched = service
            .fetch_all()
            .await
            .map_err(|source| FetchError::new(T::resource_name(), source))?;

        self.entities = fetched;
        self.loaded = true;

        tracing::debug!(
            resource = T::resource_name(),
            count = self.entities.len(),
            "collection loaded"
        );
        Ok(self.entities.len())
    }

    pub fn append(&mut self, entity: T) {
        self.entities.push(entity);
    }

    /// Swap the first entity with `id` for `entity`; `false` if there is none
    pub fn replace(&mut self, id: EntityId, entity: T) -> bool {
        match self.entities.iter_mut().find(|e| e.id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Drop the first entity with `id`; `false` if there is none
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Whether at least one fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
