//! One list view: store, query state and coordinator for one entity type

use std::sync::Arc;

use crate::config::{BusinessRules, ClientConfig};
use crate::core::entity::{Entity, EntityId};
use crate::core::error::{FetchError, GymError, ModalError};
use crate::core::notice::{Confirm, Notice, Notifier};
use crate::core::query::ListQuery;
use crate::core::service::CollectionService;
use crate::list::coordinator::{DeleteOutcome, ModalState, MutationCoordinator};
use crate::list::projection::{self, Projection};
use crate::list::store::CollectionStore;

/// Everything a member, payment or plan page keeps while it is mounted
///
/// # Example
///
/// ```rust,ignore
/// let mut members = ListSession::<Member>::from_config(service, notifier, &config);
/// members.mount().await?;
/// members.set_search("ali");
/// for member in members.visible().items {
///     println!("{}", member.name);
/// }
/// ```
pub struct ListSession<T: Entity> {
    store: CollectionStore<T>,
    query: ListQuery,
    coordinator: MutationCoordinator<T>,
    notifier: Arc<dyn Notifier>,
}

impl<T: Entity> ListSession<T> {
    pub fn new(
        service: Arc<dyn CollectionService<T>>,
        notifier: Arc<dyn Notifier>,
        rules: BusinessRules,
        page_size: usize,
    ) -> Self {
        Self {
            store: CollectionStore::new(),
            query: ListQuery::new(page_size),
            coordinator: MutationCoordinator::new(service, notifier.clone(), rules),
            notifier,
        }
    }

    /// Page size and business rules come from the client configuration
    pub fn from_config(
        service: Arc<dyn CollectionService<T>>,
        notifier: Arc<dyn Notifier>,
        config: &ClientConfig,
    ) -> Self {
        let page_size = config.page_sizes.for_resource(T::resource_name());
        Self::new(service, notifier, config.rules, page_size)
    }

    /// Initial fetch when the view opens
    ///
    /// A failure raises an error notice and leaves the previous list visible.
    pub async fn mount(&mut self) -> Result<usize, FetchError> {
        match self.store.load(self.coordinator.service()).await {
            Ok(count) => {
                self.settle_page();
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(resource = T::resource_name(), error = %err, "fetch failed");
                self.notifier.notify(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }

    pub async fn refresh(&mut self) -> Result<usize, FetchError> {
        self.mount().await
    }

    /// The current page after search and filter
    pub fn visible(&self) -> Projection<'_, T> {
        projection::project(self.store.entities(), &self.query)
    }

    /// Distinct category values in store order, for the filter dropdown
    pub fn category_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for value in self.store.entities().iter().filter_map(|e| e.category_value()) {
            if !options.contains(&value) {
                options.push(value);
            }
        }
        options
    }

    pub fn store(&self) -> &CollectionStore<T> {
        &self.store
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn set_filter<S: Into<String>>(&mut self, filter: Option<S>) {
        self.query.set_filter(filter);
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn next_page(&mut self) {
        let total_pages = self.visible().meta.total_pages;
        self.query.next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.query.prev_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.set_page_size(page_size);
    }

    // === Modal and mutations ===

    pub fn modal(&self) -> &ModalState<T> {
        self.coordinator.modal()
    }

    pub fn can_open(&self) -> bool {
        self.coordinator.can_open()
    }

    pub fn open_add(&mut self) -> Result<(), ModalError> {
        self.coordinator.open_add()
    }

    /// Open the edit form for an entity currently in the store
    pub fn open_edit(&mut self, id: EntityId) -> Result<(), ModalError> {
        let entity = self.store.get(id).ok_or(ModalError::UnknownEntity(id))?;
        self.coordinator.open_edit(entity)
    }

    pub fn cancel(&mut self) {
        self.coordinator.cancel();
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        self.coordinator.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        self.coordinator.draft_mut()
    }

    pub fn coordinator(&self) -> &MutationCoordinator<T> {
        &self.coordinator
    }

    pub async fn submit(&mut self) -> Result<T, GymError> {
        let result = self.coordinator.submit(&mut self.store).await;
        self.settle_page();
        result
    }

    pub async fn create(&mut self, draft: T::Draft) -> Result<T, GymError> {
        let result = self.coordinator.create(&mut self.store, draft).await;
        self.settle_page();
        result
    }

    pub async fn update(&mut self, id: EntityId, draft: T::Draft) -> Result<T, GymError> {
        let result = self.coordinator.update(&mut self.store, id, draft).await;
        self.settle_page();
        result
    }

    pub async fn delete(
        &mut self,
        id: EntityId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, GymError> {
        let result = self.coordinator.delete(&mut self.store, id, confirm).await;
        self.settle_page();
        result
    }

    /// After the store changes, keep the page inside the new page count
    fn settle_page(&mut self) {
        let total_pages = self.visible().meta.total_pages;
        self.query.clamp_page(total_pages);
    }
}
