//! Macro-generated test suite for `CollectionService<Member>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod service_harness;
//!
//! use service_harness::*;
//! use gymdesk::storage::InMemoryCollection;
//!
//! collection_service_tests!(InMemoryCollection::<Member>::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_fetch_all_empty`: a fresh service holds nothing
//! - `test_create_assigns_id_and_echoes`: create returns the stored copy with an id
//! - `test_fetch_keeps_creation_order`: fetch order follows creation order
//! - `test_update_returns_server_copy`: update echoes the new state
//! - `test_update_nonexistent`: unknown id answers 404
//! - `test_delete_existing`: delete removes exactly that entity
//! - `test_delete_nonexistent`: unknown id answers 404

/// Generate a `CollectionService<Member>` conformance suite.
///
/// `$factory` must evaluate to a fresh, empty service; it may contain
/// `.await` and is re-evaluated for every test.
#[macro_export]
macro_rules! collection_service_tests {
    ($factory:expr) => {
        mod collection_service_contract_tests {
            use super::*;
            use gymdesk::core::error::TransportError;
            use gymdesk::core::service::CollectionService;
            use gymdesk::entities::{Member, PlanType};

            #[tokio::test]
            async fn test_fetch_all_empty() {
                let service = $factory;
                let all: Vec<Member> = service.fetch_all().await.unwrap();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_create_assigns_id_and_echoes() {
                let service = $factory;
                let mut draft = member_draft("Alice");
                draft.plan_type = PlanType::Premium;

                let created = service.create(&draft).await.unwrap();

                assert!(created.id > 0);
                assert_eq!(created.name, "Alice");
                assert_eq!(created.plan_type, PlanType::Premium);
                assert_eq!(created.end_date, draft.end_date.unwrap());
            }

            #[tokio::test]
            async fn test_fetch_keeps_creation_order() {
                let service = $factory;
                for name in ["Alice", "Bob", "Carol"] {
                    service.create(&member_draft(name)).await.unwrap();
                }

                let names: Vec<String> = service
                    .fetch_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|m| m.name)
                    .collect();
                assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
            }

            #[tokio::test]
            async fn test_update_returns_server_copy() {
                let service = $factory;
                let created = service.create(&member_draft("Bob")).await.unwrap();

                let mut draft = member_draft("Bobby");
                draft.phone = "9840099999".to_string();
                let updated = service.update(created.id, &draft).await.unwrap();

                assert_eq!(updated.id, created.id);
                assert_eq!(updated.name, "Bobby");
                assert_eq!(updated.phone, "9840099999");

                let all = service.fetch_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0], updated);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let err = service
                    .update(4242, &member_draft("Ghost"))
                    .await
                    .unwrap_err();
                assert!(
                    matches!(err, TransportError::Status { status: 404, .. }),
                    "expected 404, got {:?}",
                    err
                );
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let keep = service.create(&member_draft("Keep")).await.unwrap();
                let gone = service.create(&member_draft("Gone")).await.unwrap();

                service.delete(gone.id).await.unwrap();

                let all = service.fetch_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].id, keep.id);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;
                let err = service.delete(4242).await.unwrap_err();
                assert!(matches!(err, TransportError::Status { status: 404, .. }));
            }
        }
    };
}
