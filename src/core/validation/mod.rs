//! Validation and filtering system
//!
//! Drafts declare their rules through a [`DraftValidator`]; the coordinator
//! runs it before any request is sent, so a `ValidationError` never reaches
//! the network.

pub mod filters;
pub mod validators;

use serde::Serialize;
use serde_json::Value;

use crate::core::error::ValidationError;

type FieldRule = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type PayloadRule = Box<dyn Fn(&Value) -> Result<(), (String, String)> + Send + Sync>;

/// Ordered set of field and cross-field rules for one draft type
///
/// # Example
///
/// ```rust,ignore
/// let validator = DraftValidator::new()
///     .field("name", validators::required())
///     .field("amount", validators::positive())
///     .check(validators::date_order("start_date", "end_date"));
///
/// validator.validate(&draft)?;
/// ```
#[derive(Default)]
pub struct DraftValidator {
    fields: Vec<(&'static str, FieldRule)>,
    checks: Vec<PayloadRule>,
}

impl DraftValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for a single field
    pub fn field<F>(mut self, name: &'static str, rule: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.fields.push((name, Box::new(rule)));
        self
    }

    /// Add a rule that looks at the whole payload
    pub fn check<F>(mut self, rule: F) -> Self
    where
        F: Fn(&Value) -> Result<(), (String, String)> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(rule));
        self
    }

    /// Run every rule against the serialized draft
    pub fn validate<D: Serialize>(&self, draft: &D) -> Result<(), ValidationError> {
        let payload = serde_json::to_value(draft)
            .map_err(|e| ValidationError::single("draft", e.to_string()))?;

        let mut errors = ValidationError::new();
        for (name, rule) in &self.fields {
            let value = payload.get(*name).unwrap_or(&Value::Null);
            if let Err(message) = rule(name, value) {
                errors.add(*name, message);
            }
        }
        for rule in &self.checks {
            if let Err((field, message)) = rule(&payload) {
                errors.add(field, message);
            }
        }
        errors.into_result()
    }
}
