//! Gym members

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::BusinessRules;
use crate::core::entity::{Draft, Entity, EntityId};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::validation::{DraftValidator, filters, validators};
use crate::storage::FromDraft;

/// Membership tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    #[default]
    Basic,
    Standard,
    Premium,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::Basic, PlanType::Standard, PlanType::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "Basic",
            PlanType::Standard => "Standard",
            PlanType::Premium => "Premium",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown plan type: {}", s))
    }
}

/// A gym member as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub plan_type: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Member {
    /// Days left until the membership ends; negative once expired
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

/// Add/edit form state for a member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub plan_type: PlanType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Draft for MemberDraft {
    fn normalize(&mut self) {
        self.name = filters::trimmed(&self.name);
        self.phone = filters::trimmed(&self.phone);
        self.email = filters::optional_text(self.email.take());
        self.notes = filters::optional_text(self.notes.take());
    }

    fn validate(&self, rules: &BusinessRules) -> Result<(), ValidationError> {
        let mut validator = DraftValidator::new()
            .field("name", validators::required())
            .field("phone", validators::required())
            .field("start_date", validators::required())
            .field("end_date", validators::required());
        if rules.enforce_date_order {
            validator = validator.check(validators::date_order("start_date", "end_date"));
        }
        validator.validate(self)
    }
}

impl Entity for Member {
    type Draft = MemberDraft;

    fn resource_name() -> &'static str {
        "members"
    }

    fn resource_name_singular() -> &'static str {
        "member"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "phone", "plan_type"]
    }

    fn category_field() -> Option<&'static str> {
        Some("plan_type")
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "email" => Some(self.email.clone().into()),
            "plan_type" => Some(self.plan_type.as_str().into()),
            "start_date" => Some(self.start_date.into()),
            "end_date" => Some(self.end_date.into()),
            "notes" => Some(self.notes.clone().into()),
            _ => None,
        }
    }

    fn to_draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            plan_type: self.plan_type,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            notes: self.notes.clone(),
        }
    }
}

impl FromDraft for Member {
    fn from_draft(id: EntityId, draft: &MemberDraft) -> Self {
        Member {
            id,
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            plan_type: draft.plan_type,
            start_date: draft.start_date.unwrap_or_default(),
            end_date: draft.end_date.unwrap_or_default(),
            notes: draft.notes.clone(),
        }
    }
}
