//! Entity traits defining the core abstraction for gym records

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::config::BusinessRules;
use crate::core::error::ValidationError;
use crate::core::field::FieldValue;

/// Server-assigned identifier. Opaque to the client.
pub type EntityId = i64;

/// Base trait for every record type held by a list session.
///
/// An entity knows:
/// - where it lives on the backend (`resource_name`)
/// - its identity (`id`)
/// - which fields search looks at (`searchable_fields`)
/// - which field the category dropdown filters on (`category_field`)
/// - how to turn itself into an editable draft (`to_draft`)
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Editable, unsaved form of this entity
    type Draft: Draft;

    /// The plural resource name used in URLs (e.g., "members", "plans")
    fn resource_name() -> &'static str;

    /// The singular resource name used in notices (e.g., "member")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier for this entity instance
    fn id(&self) -> EntityId;

    /// Fields matched case-insensitively by the search box
    fn searchable_fields() -> &'static [&'static str];

    /// Field compared exactly against the category filter, if the view has one
    fn category_field() -> Option<&'static str>;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Build a draft pre-filled from this entity (edit modal)
    fn to_draft(&self) -> Self::Draft;

    // === Utility Methods ===

    /// Text of the category field, if present and not null
    fn category_value(&self) -> Option<String> {
        Self::category_field()
            .and_then(|field| self.field_value(field))
            .and_then(|value| value.text())
    }

    /// Whether any searchable field contains `needle`.
    ///
    /// `needle` must already be lower-cased. Missing and null fields never match.
    fn matches_search(&self, needle: &str) -> bool {
        Self::searchable_fields().iter().any(|field| {
            self.field_value(field)
                .and_then(|value| value.text())
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }
}

/// Trait for the transient copy of an entity held by an open form.
///
/// Drafts serialize directly to the backend's create/update payload.
pub trait Draft: Clone + Debug + Default + Serialize + Send + Sync + 'static {
    /// Trim text and turn empty optional fields into "no value"
    fn normalize(&mut self);

    /// Check required fields and simple value rules
    fn validate(&self, rules: &BusinessRules) -> Result<(), ValidationError>;
}
