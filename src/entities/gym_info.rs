//! Gym profile shown in settings

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::error::ValidationError;
use crate::core::validation::{DraftValidator, filters, validators};

/// The single gym profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymInfo {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Settings form state for the gym profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GymInfoDraft {
    pub name: String,
    pub logo_url: Option<String>,
}

impl GymInfoDraft {
    pub fn normalize(&mut self) {
        self.name = filters::trimmed(&self.name);
        self.logo_url = filters::optional_text(self.logo_url.take());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        DraftValidator::new()
            .field("name", validators::required())
            .validate(self)
    }
}

impl From<&GymInfo> for GymInfoDraft {
    fn from(info: &GymInfo) -> Self {
        Self {
            name: info.name.clone(),
            logo_url: info.logo_url.clone(),
        }
    }
}
