//! Add/edit modal state machine and backend mutations
//!
//! The coordinator owns the modal and the service handle. Mutations take
//! `&mut self` and `&mut CollectionStore`, so one session cannot have two
//! submissions in flight. The store is only patched after the backend call
//! resolves; a dropped future leaves it untouched.

use std::sync::Arc;

use crate::config::BusinessRules;
use crate::core::entity::{Draft, Entity, EntityId};
use crate::core::error::{GymError, ModalError, MutationError, MutationKind, ValidationError};
use crate::core::notice::{Confirm, Notice, Notifier};
use crate::core::service::CollectionService;
use crate::list::store::CollectionStore;

/// State of the add/edit form
#[derive(Debug, Clone)]
pub enum ModalState<T: Entity> {
    Closed,
    AddOpen {
        draft: T::Draft,
        errors: ValidationError,
    },
    EditOpen {
        id: EntityId,
        original: T,
        draft: T::Draft,
        errors: ValidationError,
    },
}

impl<T: Entity> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent
    Declined,
}

pub struct MutationCoordinator<T: Entity> {
    service: Arc<dyn CollectionService<T>>,
    notifier: Arc<dyn Notifier>,
    rules: BusinessRules,
    modal: ModalState<T>,
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<T: Entity> MutationCoordinator<T> {
    pub fn new(
        service: Arc<dyn CollectionService<T>>,
        notifier: Arc<dyn Notifier>,
        rules: BusinessRules,
    ) -> Self {
        Self {
            service,
            notifier,
            rules,
            modal: ModalState::Closed,
        }
    }

    pub fn service(&self) -> &dyn CollectionService<T> {
        self.service.as_ref()
    }

    pub fn modal(&self) -> &ModalState<T> {
        &self.modal
    }

    /// Whether the add/edit triggers are enabled
    pub fn can_open(&self) -> bool {
        !self.modal.is_open()
    }

    pub fn open_add(&mut self) -> Result<(), ModalError> {
        if self.modal.is_open() {
            return Err(ModalError::AlreadyOpen);
        }
        self.modal = ModalState::AddOpen {
            draft: T::Draft::default(),
            errors: ValidationError::new(),
        };
        Ok(())
    }

    pub fn open_edit(&mut self, entity: &T) -> Result<(), ModalError> {
        if self.modal.is_open() {
            return Err(ModalError::AlreadyOpen);
        }
        self.modal = ModalState::EditOpen {
            id: entity.id(),
            original: entity.clone(),
            draft: entity.to_draft(),
            errors: ValidationError::new(),
        };
        Ok(())
    }

    /// Close the modal and discard the draft
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        match &self.modal {
            ModalState::Closed => None,
            ModalState::AddOpen { draft, .. } | ModalState::EditOpen { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        match &mut self.modal {
            ModalState::Closed => None,
            ModalState::AddOpen { draft, .. } | ModalState::EditOpen { draft, .. } => Some(draft),
        }
    }

    /// Field errors from the last rejected submit of the open modal
    pub fn field_errors(&self) -> Option<&ValidationError> {
        match &self.modal {
            ModalState::Closed => None,
            ModalState::AddOpen { errors, .. } | ModalState::EditOpen { errors, .. } => {
                Some(errors)
            }
        }
    }

    /// Id of the entity being edited
    pub fn editing_id(&self) -> Option<EntityId> {
        match &self.modal {
            ModalState::EditOpen { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Submit the open modal as a create or an update
    pub async fn submit(&mut self, store: &mut CollectionStore<T>) -> Result<T, GymError> {
        match &self.modal {
            ModalState::Closed => Err(ModalError::NotOpen.into()),
            ModalState::AddOpen { draft, .. } => {
                let draft = draft.clone();
                self.create(store, draft).await
            }
            ModalState::EditOpen { id, draft, .. } => {
                let (id, draft) = (*id, draft.clone());
                self.update(store, id, draft).await
            }
        }
    }

    /// Create an entity, then reload the store
    ///
    /// If the reload fails the server echo is appended instead, so the new
    /// row shows up exactly once either way.
    pub async fn create(
        &mut self,
        store: &mut CollectionStore<T>,
        draft: T::Draft,
    ) -> Result<T, GymError> {
        let draft = self.prepare(draft)?;
        tracing::debug!(resource = T::resource_name(), "creating entity");

        let created = match self.service.create(&draft).await {
            Ok(created) => created,
            Err(source) => {
                return Err(self.fail(MutationKind::Create, None, source));
            }
        };

        if let Err(err) = store.load(self.service.as_ref()).await {
            tracing::warn!(
                resource = T::resource_name(),
                id = created.id(),
                error = %err,
                "reload after create failed, appending server copy"
            );
            store.append(created.clone());
        }

        self.modal = ModalState::Closed;
        self.succeed(MutationKind::Create, created.id());
        Ok(created)
    }

    /// Update an entity and store exactly what the server returned
    pub async fn update(
        &mut self,
        store: &mut CollectionStore<T>,
        id: EntityId,
        draft: T::Draft,
    ) -> Result<T, GymError> {
        let draft = self.prepare(draft)?;
        tracing::debug!(resource = T::resource_name(), id, "updating entity");

        let updated = match self.service.update(id, &draft).await {
            Ok(updated) => updated,
            Err(source) => {
                return Err(self.fail(MutationKind::Update, Some(id), source));
            }
        };

        if !store.replace(id, updated.clone()) {
            tracing::debug!(resource = T::resource_name(), id, "updated entity not in store");
        }

        self.modal = ModalState::Closed;
        self.succeed(MutationKind::Update, id);
        Ok(updated)
    }

    /// Delete after confirmation, removing the entity locally without a reload
    pub async fn delete(
        &mut self,
        store: &mut CollectionStore<T>,
        id: EntityId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, GymError> {
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            T::resource_name_singular()
        );
        if !confirm.confirm(&prompt) {
            tracing::debug!(resource = T::resource_name(), id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        tracing::debug!(resource = T::resource_name(), id, "deleting entity");
        if let Err(source) = self.service.delete(id).await {
            return Err(self.fail(MutationKind::Delete, Some(id), source));
        }

        store.remove(id);
        self.succeed(MutationKind::Delete, id);
        Ok(DeleteOutcome::Deleted)
    }

    fn prepare(&mut self, mut draft: T::Draft) -> Result<T::Draft, GymError> {
        draft.normalize();
        if let Err(errors) = draft.validate(&self.rules) {
            tracing::debug!(
                resource = T::resource_name(),
                fields = errors.len(),
                "draft rejected"
            );
            match &mut self.modal {
                ModalState::AddOpen { errors: slot, .. }
                | ModalState::EditOpen { errors: slot, .. } => *slot = errors.clone(),
                ModalState::Closed => {}
            }
            return Err(errors.into());
        }
        Ok(draft)
    }

    fn fail(
        &self,
        kind: MutationKind,
        id: Option<EntityId>,
        source: crate::core::error::TransportError,
    ) -> GymError {
        let err = MutationError {
            resource: T::resource_name_singular(),
            kind,
            id,
            source,
        };
        tracing::warn!(
            resource = T::resource_name(),
            id = ?id,
            error = %err,
            "mutation failed"
        );
        self.notifier.notify(Notice::error(err.user_message()));
        err.into()
    }

    fn succeed(&self, kind: MutationKind, id: EntityId) {
        tracing::info!(
            resource = T::resource_name(),
            id,
            "{} {}",
            T::resource_name_singular(),
            kind.past()
        );
        self.notifier.notify(Notice::success(format!(
            "{} {} successfully.",
            capitalized(T::resource_name_singular()),
            kind.past()
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TransportError;
    use crate::core::notice::NoticeQueue;
    use crate::entities::{Plan, PlanDraft};
    use crate::storage::InMemoryCollection;
    use rust_decimal::Decimal;

    fn setup() -> (
        InMemoryCollection<Plan>,
        Arc<NoticeQueue>,
        MutationCoordinator<Plan>,
    ) {
        let service = InMemoryCollection::new();
        let notices = Arc::new(NoticeQueue::new());
        let coordinator = MutationCoordinator::new(
            Arc::new(service.clone()),
            notices.clone(),
            BusinessRules::default(),
        );
        (service, notices, coordinator)
    }

    fn filled_draft() -> PlanDraft {
        PlanDraft {
            name: "Monthly".to_string(),
            price: Some(Decimal::new(999, 0)),
            duration: Some(30),
            description: Some("Floor access".to_string()),
        }
    }

    #[test]
    fn test_modal_is_exclusive() {
        let (_, _, mut coordinator) = setup();

        coordinator.open_add().unwrap();
        assert!(!coordinator.can_open());
        assert_eq!(coordinator.open_add(), Err(ModalError::AlreadyOpen));

        coordinator.cancel();
        assert!(coordinator.can_open());
        assert!(coordinator.draft().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_modal() {
        let (service, _, mut coordinator) = setup();
        let mut store = CollectionStore::new();

        let err = coordinator.submit(&mut store).await.unwrap_err();
        assert!(matches!(err, GymError::Modal(ModalError::NotOpen)));
        assert_eq!(service.requests(), 0);
    }

    #[tokio::test]
    async fn test_invalid_draft_keeps_modal_open_without_request() {
        let (service, notices, mut coordinator) = setup();
        let mut store = CollectionStore::new();

        coordinator.open_add().unwrap();
        let err = coordinator.submit(&mut store).await.unwrap_err();

        assert!(matches!(err, GymError::Validation(_)));
        assert_eq!(service.requests(), 0);
        assert!(coordinator.modal().is_open());
        assert!(coordinator.field_errors().unwrap().field("name").is_some());
        assert!(notices.drain().is_empty());
    }

    #[tokio::test]
    async fn test_create_reloads_and_closes() {
        let (service, notices, mut coordinator) = setup();
        let mut store = CollectionStore::new();

        coordinator.open_add().unwrap();
        *coordinator.draft_mut().unwrap() = filled_draft();
        let created = coordinator.submit(&mut store).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(created.id), Some(&created));
        assert!(coordinator.can_open());
        assert_eq!(notices.last().unwrap().message, "Plan added successfully.");
        // create + reload
        assert_eq!(service.requests(), 2);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_modal_and_store() {
        let (service, notices, mut coordinator) = setup();
        let mut store = CollectionStore::new();
        coordinator.create(&mut store, filled_draft()).await.unwrap();
        let original = store.entities()[0].clone();

        coordinator.open_edit(&original).unwrap();
        coordinator.draft_mut().unwrap().name = "Renamed".to_string();
        service.set_failure(Some(TransportError::Network("reset".into())));

        let err = coordinator.submit(&mut store).await.unwrap_err();

        assert_eq!(err.error_code(), "UPDATE_FAILED");
        assert_eq!(coordinator.editing_id(), Some(original.id));
        assert_eq!(store.entities()[0], original);
        let last = notices.last().unwrap();
        assert!(last.is_error());
        assert_eq!(last.message, "Could not update plan.");
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let (service, _, mut coordinator) = setup();
        let mut store = CollectionStore::new();
        coordinator.create(&mut store, filled_draft()).await.unwrap();
        let before = service.requests();

        let outcome = coordinator
            .delete(&mut store, 1, &|_: &str| false)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(service.requests(), before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(capitalized("member"), "Member");
        assert_eq!(capitalized(""), "");
    }
}
