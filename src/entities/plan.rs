//! Membership plans configured in settings

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BusinessRules;
use crate::core::entity::{Draft, Entity, EntityId};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::validation::{DraftValidator, filters, validators};
use crate::storage::FromDraft;

/// A membership plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: EntityId,
    pub name: String,
    pub price: Decimal,
    /// Length in days
    pub duration: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Add/edit form state for a plan. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    pub price: Option<Decimal>,
    pub duration: Option<u32>,
    pub description: Option<String>,
}

impl Draft for PlanDraft {
    fn normalize(&mut self) {
        self.name = filters::trimmed(&self.name);
        self.description = filters::optional_text(self.description.take());
    }

    fn validate(&self, _rules: &BusinessRules) -> Result<(), ValidationError> {
        DraftValidator::new()
            .field("name", validators::required())
            .field("price", validators::required())
            .field("price", validators::positive())
            .field("duration", validators::required())
            .field("duration", validators::positive())
            .field("description", validators::required())
            .validate(self)
    }
}

impl Entity for Plan {
    type Draft = PlanDraft;

    fn resource_name() -> &'static str {
        "plans"
    }

    fn resource_name_singular() -> &'static str {
        "plan"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn category_field() -> Option<&'static str> {
        Some("duration")
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "price" => Some(self.price.into()),
            "duration" => Some(i64::from(self.duration).into()),
            "description" => Some(self.description.clone().into()),
            _ => None,
        }
    }

    fn to_draft(&self) -> PlanDraft {
        PlanDraft {
            name: self.name.clone(),
            price: Some(self.price),
            duration: Some(self.duration),
            description: self.description.clone(),
        }
    }
}

impl FromDraft for Plan {
    fn from_draft(id: EntityId, draft: &PlanDraft) -> Self {
        Plan {
            id,
            name: draft.name.clone(),
            price: draft.price.unwrap_or_default(),
            duration: draft.duration.unwrap_or_default(),
            description: draft.description.clone(),
        }
    }
}
