//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry stable codes
//! - User-facing messages stay generic
//! - Error conversions and sources work correctly
//! - Error matching allows callers to handle specific cases

use gymdesk::prelude::*;
use std::error::Error as _;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_fetch_error_code() {
        let err = GymError::from(FetchError::new("members", TransportError::Unauthorized));
        assert_eq!(err.error_code(), "FETCH_ERROR");
    }

    #[test]
    fn test_mutation_codes_follow_kind() {
        for (kind, code) in [
            (MutationKind::Create, "CREATE_FAILED"),
            (MutationKind::Update, "UPDATE_FAILED"),
            (MutationKind::Delete, "DELETE_FAILED"),
        ] {
            let err = GymError::from(MutationError {
                resource: "plan",
                kind,
                id: None,
                source: TransportError::Network("down".into()),
            });
            assert_eq!(err.error_code(), code);
        }
    }

    #[test]
    fn test_transport_codes() {
        assert_eq!(
            GymError::from(TransportError::Unauthorized).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(
            GymError::from(TransportError::not_found("x")).error_code(),
            "BACKEND_ERROR"
        );
        assert_eq!(
            GymError::from(TransportError::Decode("eof".into())).error_code(),
            "DECODE_ERROR"
        );
    }

    #[test]
    fn test_modal_codes() {
        assert_eq!(
            GymError::from(ModalError::AlreadyOpen).error_code(),
            "MODAL_ALREADY_OPEN"
        );
        assert_eq!(
            GymError::from(ModalError::UnknownEntity(3)).error_code(),
            "UNKNOWN_ENTITY"
        );
    }
}

// =============================================================================
// User Message Tests
// =============================================================================

mod user_message_tests {
    use super::*;

    #[test]
    fn test_fetch_messages_hide_detail() {
        let unauthorized = FetchError::new("payments", TransportError::Unauthorized);
        assert_eq!(
            unauthorized.user_message(),
            "Unauthorized or failed to fetch payments."
        );

        let server = FetchError::new(
            "payments",
            TransportError::Status {
                status: 500,
                detail: Some("db is down".into()),
            },
        );
        assert_eq!(server.user_message(), "Failed to fetch payments.");
        assert!(!server.user_message().contains("db is down"));
    }

    #[test]
    fn test_mutation_message() {
        let err = MutationError {
            resource: "member",
            kind: MutationKind::Create,
            id: None,
            source: TransportError::not_found("gone"),
        };
        assert_eq!(err.user_message(), "Could not add member.");
    }

    #[test]
    fn test_validation_display_lists_fields_in_order() {
        let mut err = ValidationError::new();
        err.add("name", "'name' is required");
        err.add("phone", "'phone' is required");
        err.add("name", "ignored");

        assert_eq!(
            err.to_string(),
            "Validation failed: name: 'name' is required; phone: 'phone' is required"
        );
        assert_eq!(
            GymError::from(err).user_message(),
            "Please fill in all required fields."
        );
    }
}

// =============================================================================
// Conversion and Source Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_source_chain_reaches_transport() {
        let err = GymError::from(MutationError {
            resource: "member",
            kind: MutationKind::Update,
            id: Some(2),
            source: TransportError::Network("timed out".into()),
        });

        let mutation = err.source().expect("mutation source");
        let transport = mutation.source().expect("transport source");
        assert_eq!(transport.to_string(), "network error: timed out");
    }

    #[test]
    fn test_display_mentions_id() {
        let err = MutationError {
            resource: "member",
            kind: MutationKind::Delete,
            id: Some(9),
            source: TransportError::Unauthorized,
        };
        assert_eq!(err.to_string(), "Failed to delete member '9': not authorized");
    }

    #[test]
    fn test_is_unauthorized_across_variants() {
        assert!(GymError::from(TransportError::Unauthorized).is_unauthorized());
        assert!(
            GymError::from(FetchError::new("plans", TransportError::Unauthorized))
                .is_unauthorized()
        );
        assert!(!GymError::from(ModalError::NotOpen).is_unauthorized());
    }

    #[test]
    fn test_summary_carries_field_errors() {
        let summary =
            GymError::from(ValidationError::single("amount", "'amount' is required")).to_summary();

        assert_eq!(summary.code, "VALIDATION_ERROR");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["fields"]["amount"], "'amount' is required");
    }
}
