//! Membership payments

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BusinessRules;
use crate::core::entity::{Draft, Entity, EntityId};
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::validation::{DraftValidator, filters, validators};
use crate::storage::FromDraft;

/// How a payment was made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[default]
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::BankTransfer,
    ];

    /// Wire and display label, also the category filter value
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: EntityId,
    /// Not checked against the member list
    pub member_id: EntityId,
    /// Name of the plan paid for
    #[serde(default)]
    pub plan_type: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    /// Assigned by the server when the payment is recorded
    pub date: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Add form state for a payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub member_id: Option<EntityId>,
    pub plan_type: String,
    pub amount: Option<Decimal>,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

impl PaymentDraft {
    /// Pre-fill plan name and amount from a plan, like picking it in the form
    pub fn select_plan(&mut self, plan: &super::Plan) {
        self.plan_type = plan.name.clone();
        self.amount = Some(plan.price);
    }
}

impl Draft for PaymentDraft {
    fn normalize(&mut self) {
        self.plan_type = filters::trimmed(&self.plan_type);
        self.notes = filters::optional_text(self.notes.take());
    }

    fn validate(&self, rules: &BusinessRules) -> Result<(), ValidationError> {
        let validator = DraftValidator::new()
            .field("member_id", validators::required())
            .field("member_id", validators::positive())
            .field("plan_type", validators::required())
            .field("amount", validators::required());
        let validator = if rules.allow_zero_amount {
            validator.field("amount", validators::non_negative())
        } else {
            validator.field("amount", validators::positive())
        };
        validator.validate(self)
    }
}

impl Entity for Payment {
    type Draft = PaymentDraft;

    fn resource_name() -> &'static str {
        "payments"
    }

    fn resource_name_singular() -> &'static str {
        "payment"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["member_id", "notes", "plan_type"]
    }

    fn category_field() -> Option<&'static str> {
        Some("method")
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.into()),
            "member_id" => Some(self.member_id.into()),
            "plan_type" => Some(self.plan_type.as_str().into()),
            "amount" => Some(self.amount.into()),
            "method" => Some(self.method.as_str().into()),
            "date" => Some(self.date.into()),
            "notes" => Some(self.notes.clone().into()),
            _ => None,
        }
    }

    fn to_draft(&self) -> PaymentDraft {
        PaymentDraft {
            member_id: Some(self.member_id),
            plan_type: self.plan_type.clone(),
            amount: Some(self.amount),
            method: self.method,
            notes: self.notes.clone(),
        }
    }
}

impl FromDraft for Payment {
    fn from_draft(id: EntityId, draft: &PaymentDraft) -> Self {
        Payment {
            id,
            member_id: draft.member_id.unwrap_or_default(),
            plan_type: draft.plan_type.clone(),
            amount: draft.amount.unwrap_or_default(),
            method: draft.method,
            date: chrono::Local::now().naive_local(),
            notes: draft.notes.clone(),
        }
    }
}
