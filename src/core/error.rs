//! Typed error handling for gymdesk
//!
//! Every failure a list session can observe is one of a small set of
//! categories, so callers can decide precisely what to show and what to keep.
//!
//! # Error Categories
//!
//! - [`TransportError`]: the backend call itself failed (leaf error)
//! - [`FetchError`]: a full collection load failed
//! - [`MutationError`]: a create/update/delete was rejected
//! - [`ValidationError`]: a draft was refused before any request was sent
//! - [`ModalError`]: an add/edit modal transition that is not defined
//!
//! # Example
//!
//! ```rust,ignore
//! match session.submit().await {
//!     Ok(member) => println!("saved {}", member.name),
//!     Err(GymError::Validation(errors)) => {
//!         for (field, message) in errors.iter() {
//!             println!("{field}: {message}");
//!         }
//!     }
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::core::entity::EntityId;

/// The main error type for gymdesk
#[derive(Debug)]
pub enum GymError {
    /// Collection load failed
    Fetch(FetchError),

    /// Create/update/delete rejected by the backend
    Mutation(MutationError),

    /// Draft refused locally
    Validation(ValidationError),

    /// Undefined modal transition
    Modal(ModalError),

    /// Non-collection backend call failed (login, reports, settings)
    Transport(TransportError),

    /// Configuration could not be loaded
    Config(String),

    /// Local credential storage failed
    Storage(String),
}

impl fmt::Display for GymError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GymError::Fetch(e) => write!(f, "{}", e),
            GymError::Mutation(e) => write!(f, "{}", e),
            GymError::Validation(e) => write!(f, "{}", e),
            GymError::Modal(e) => write!(f, "{}", e),
            GymError::Transport(e) => write!(f, "{}", e),
            GymError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GymError::Storage(msg) => write!(f, "Credential storage error: {}", msg),
        }
    }
}

impl std::error::Error for GymError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GymError::Fetch(e) => Some(e),
            GymError::Mutation(e) => Some(e),
            GymError::Validation(e) => Some(e),
            GymError::Modal(e) => Some(e),
            GymError::Transport(e) => Some(e),
            GymError::Config(_) | GymError::Storage(_) => None,
        }
    }
}

/// Serializable error summary, handy for logs and UI bridges
#[derive(Debug, Serialize)]
pub struct ErrorSummary {
    /// Error code for programmatic handling
    pub code: String,
    /// Generic message suitable for a user notification
    pub message: String,
    /// Per-field messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, String>>,
}

impl GymError {
    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GymError::Fetch(_) => "FETCH_ERROR",
            GymError::Mutation(e) => e.kind.error_code(),
            GymError::Validation(_) => "VALIDATION_ERROR",
            GymError::Modal(e) => e.error_code(),
            GymError::Transport(e) => e.error_code(),
            GymError::Config(_) => "CONFIG_ERROR",
            GymError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// A generic, user-facing description of the failure.
    ///
    /// Backend details are deliberately left out; they go to the log.
    pub fn user_message(&self) -> String {
        match self {
            GymError::Fetch(e) => e.user_message(),
            GymError::Mutation(e) => e.user_message(),
            GymError::Validation(_) => "Please fill in all required fields.".to_string(),
            GymError::Modal(e) => e.to_string(),
            GymError::Transport(TransportError::Unauthorized) => {
                "Unauthorized. Please log in again.".to_string()
            }
            GymError::Transport(_) => "Request failed. Please try again.".to_string(),
            GymError::Config(_) => "Invalid configuration.".to_string(),
            GymError::Storage(_) => "Could not access saved credentials.".to_string(),
        }
    }

    /// Whether the backend refused the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            GymError::Fetch(FetchError {
                source: TransportError::Unauthorized,
                ..
            }) | GymError::Mutation(MutationError {
                source: TransportError::Unauthorized,
                ..
            }) | GymError::Transport(TransportError::Unauthorized)
        )
    }

    /// Convert to a serializable summary
    pub fn to_summary(&self) -> ErrorSummary {
        ErrorSummary {
            code: self.error_code().to_string(),
            message: self.user_message(),
            fields: match self {
                GymError::Validation(e) => Some(e.fields.clone()),
                _ => None,
            },
        }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// 401/403, or a missing credential the backend refused
    #[error("not authorized")]
    Unauthorized,

    /// Any other non-success status
    #[error("backend returned status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// Connection, DNS, TLS or timeout failure
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Shorthand for a 404 with a detail message
    pub fn not_found(detail: impl Into<String>) -> Self {
        TransportError::Status {
            status: 404,
            detail: Some(detail.into()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::Unauthorized => "UNAUTHORIZED",
            TransportError::Status { .. } => "BACKEND_ERROR",
            TransportError::Network(_) => "NETWORK_ERROR",
            TransportError::Decode(_) => "DECODE_ERROR",
        }
    }
}

impl From<TransportError> for GymError {
    fn from(err: TransportError) -> Self {
        GymError::Transport(err)
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// A full-collection load failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    /// Plural resource name, e.g. "members"
    pub resource: &'static str,
    pub source: TransportError,
}

impl FetchError {
    pub fn new(resource: &'static str, source: TransportError) -> Self {
        Self { resource, source }
    }

    pub fn user_message(&self) -> String {
        match self.source {
            TransportError::Unauthorized => {
                format!("Unauthorized or failed to fetch {}.", self.resource)
            }
            _ => format!("Failed to fetch {}.", self.resource),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch {}: {}", self.resource, self.source)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<FetchError> for GymError {
    fn from(err: FetchError) -> Self {
        GymError::Fetch(err)
    }
}

// =============================================================================
// Mutation Errors
// =============================================================================

/// Which mutation was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    /// Verb used in notices ("add", "update", "delete")
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::Create => "add",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }

    /// Past participle used in notices
    pub fn past(&self) -> &'static str {
        match self {
            MutationKind::Create => "added",
            MutationKind::Update => "updated",
            MutationKind::Delete => "deleted",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            MutationKind::Create => "CREATE_FAILED",
            MutationKind::Update => "UPDATE_FAILED",
            MutationKind::Delete => "DELETE_FAILED",
        }
    }
}

/// A mutation rejected by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationError {
    /// Singular resource name, e.g. "member"
    pub resource: &'static str,
    pub kind: MutationKind,
    /// Target id for update/delete
    pub id: Option<EntityId>,
    pub source: TransportError,
}

impl MutationError {
    pub fn user_message(&self) -> String {
        format!("Could not {} {}.", self.kind.verb(), self.resource)
    }
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "Failed to {} {} '{}': {}",
                self.kind.verb(),
                self.resource,
                id,
                self.source
            ),
            None => write!(
                f,
                "Failed to {} {}: {}",
                self.kind.verb(),
                self.resource,
                self.source
            ),
        }
    }
}

impl std::error::Error for MutationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<MutationError> for GymError {
    fn from(err: MutationError) -> Self {
        GymError::Mutation(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Field-level problems found in a draft, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub fields: IndexMap<String, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an error holding a single field message
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    /// Record a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message recorded for a field, if any
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        let mut first = true;
        for (field, message) in &self.fields {
            write!(f, "{} {}: {}", if first { ":" } else { ";" }, field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for GymError {
    fn from(err: ValidationError) -> Self {
        GymError::Validation(err)
    }
}

// =============================================================================
// Modal Errors
// =============================================================================

/// Add/edit modal transitions that are not defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalError {
    /// A modal is already open; its trigger should be disabled
    AlreadyOpen,

    /// Submit or draft access with no modal open
    NotOpen,

    /// Edit requested for an id the store does not hold
    UnknownEntity(EntityId),
}

impl fmt::Display for ModalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalError::AlreadyOpen => write!(f, "A form is already open"),
            ModalError::NotOpen => write!(f, "No form is open"),
            ModalError::UnknownEntity(id) => write!(f, "No entry with id '{}'", id),
        }
    }
}

impl std::error::Error for ModalError {}

impl ModalError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ModalError::AlreadyOpen => "MODAL_ALREADY_OPEN",
            ModalError::NotOpen => "MODAL_NOT_OPEN",
            ModalError::UnknownEntity(_) => "UNKNOWN_ENTITY",
        }
    }
}

impl From<ModalError> for GymError {
    fn from(err: ModalError) -> Self {
        GymError::Modal(err)
    }
}
