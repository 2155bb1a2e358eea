//! Gym profile settings

use crate::client::http::RestClient;
use crate::core::error::{GymError, TransportError};
use crate::entities::{GymInfo, GymInfoDraft};

#[derive(Debug, Clone)]
pub struct GymInfoApi {
    client: RestClient,
}

const PATH: &str = "gym-info/";

impl GymInfoApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// The profile, or `None` before one has been saved
    pub async fn get(&self) -> Result<Option<GymInfo>, GymError> {
        match self.client.get(PATH).await {
            Ok(info) => Ok(Some(info)),
            Err(TransportError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update the profile, creating it on first save
    pub async fn save(&self, draft: &GymInfoDraft) -> Result<GymInfo, GymError> {
        let mut draft = draft.clone();
        draft.normalize();
        draft.validate()?;

        match self.client.put(PATH, &draft).await {
            Ok(info) => Ok(info),
            Err(TransportError::Status { status: 404, .. }) => {
                tracing::debug!("no gym profile yet, creating one");
                Ok(self.client.post(PATH, &draft).await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
