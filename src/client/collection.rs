//! REST-backed collection service

use async_trait::async_trait;
use serde::Deserialize;
use std::marker::PhantomData;

use crate::client::http::RestClient;
use crate::core::entity::{Entity, EntityId};
use crate::core::error::TransportError;
use crate::core::service::CollectionService;

/// Create/update responses come either bare or wrapped in `{"details": ...}`
#[derive(Deserialize)]
#[serde(untagged)]
enum Echo<T> {
    Wrapped { details: T },
    Bare(T),
}

impl<T> Echo<T> {
    fn into_inner(self) -> T {
        match self {
            Echo::Wrapped { details } => details,
            Echo::Bare(entity) => entity,
        }
    }
}

/// `GET/POST {base}/{resource}/`, `PUT/DELETE {base}/{resource}/{id}`
pub struct RestCollection<T> {
    client: RestClient,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> RestCollection<T> {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("{}/", T::resource_name())
    }

    fn item_path(id: EntityId) -> String {
        format!("{}/{}", T::resource_name(), id)
    }
}

impl<T> Clone for RestCollection<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity> CollectionService<T> for RestCollection<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, TransportError> {
        self.client.get(&Self::collection_path()).await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, TransportError> {
        let echo: Echo<T> = self.client.post(&Self::collection_path(), draft).await?;
        Ok(echo.into_inner())
    }

    async fn update(&self, id: EntityId, draft: &T::Draft) -> Result<T, TransportError> {
        let echo: Echo<T> = self.client.put(&Self::item_path(id), draft).await?;
        Ok(echo.into_inner())
    }

    async fn delete(&self, id: EntityId) -> Result<(), TransportError> {
        self.client.delete(&Self::item_path(id)).await
    }
}
