//! In-memory implementation of CollectionService for testing and development

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::core::entity::{Entity, EntityId};
use crate::core::error::TransportError;
use crate::core::service::CollectionService;
use crate::storage::FromDraft;

/// In-memory collection backend
///
/// Behaves like the REST backend: assigns ids on create, answers 404 for
/// unknown ids and keeps insertion order. Every call is counted, and a
/// failure can be injected to exercise error paths.
#[derive(Clone)]
pub struct InMemoryCollection<T: Entity> {
    records: Arc<RwLock<Vec<T>>>,
    next_id: Arc<AtomicI64>,
    requests: Arc<AtomicUsize>,
    failure: Arc<RwLock<Option<TransportError>>>,
}

fn lock_error(e: impl std::fmt::Display) -> TransportError {
    TransportError::Status {
        status: 500,
        detail: Some(format!("Failed to acquire lock: {}", e)),
    }
}

impl<T: Entity> InMemoryCollection<T> {
    /// Create an empty collection; ids start at 1
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            requests: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a collection holding `records`; new ids continue after the largest one
    pub fn seeded(records: Vec<T>) -> Self {
        let collection = Self::new();
        collection.seed(records);
        collection
    }

    /// Append records as if they already existed on the backend
    pub fn seed(&self, records: Vec<T>) {
        let max_id = records.iter().map(|r| r.id()).max().unwrap_or(0);
        self.next_id.fetch_max(max_id + 1, Ordering::SeqCst);
        match self.records.write() {
            Ok(mut stored) => stored.extend(records),
            Err(poisoned) => poisoned.into_inner().extend(records),
        }
    }

    /// Number of service calls served so far, failed ones included
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Make every following call fail with `failure`, or succeed again with `None`
    pub fn set_failure(&self, failure: Option<TransportError>) {
        match self.failure.write() {
            Ok(mut slot) => *slot = failure,
            Err(poisoned) => *poisoned.into_inner() = failure,
        }
    }

    /// Snapshot of the stored records
    pub fn snapshot(&self) -> Vec<T> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn begin(&self) -> Result<(), TransportError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let failure = self.failure.read().map_err(lock_error)?;
        match failure.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found(id: EntityId) -> TransportError {
        TransportError::not_found(format!(
            "{} not found: {}",
            T::resource_name_singular(),
            id
        ))
    }
}

impl<T: Entity> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: FromDraft> CollectionService<T> for InMemoryCollection<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, TransportError> {
        self.begin()?;
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.clone())
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, TransportError> {
        self.begin()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = T::from_draft(id, draft);

        let mut records = self.records.write().map_err(lock_error)?;
        records.push(entity.clone());

        Ok(entity)
    }

    async fn update(&self, id: EntityId, draft: &T::Draft) -> Result<T, TransportError> {
        self.begin()?;
        let mut records = self.records.write().map_err(lock_error)?;

        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = T::from_draft(id, draft);

        Ok(slot.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<(), TransportError> {
        self.begin()?;
        let mut records = self.records.write().map_err(lock_error)?;

        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(position);

        Ok(())
    }
}
