//! End-to-end scenarios for profile completion through the public service facade and router.

mod common {
    use std::sync::Arc;

    use csn_profile::profile::{
        CompletionEngine, ConnectionStatus, InMemoryProfileStore, ProfileCompletionService,
    };

    pub(super) const SEED: &str = r#"{
        "users": [
            {
                "id": "u-founder",
                "first_name": "Meera",
                "last_name": "Iyer",
                "profile_photo": "https://cdn.csn.example/u-founder.png",
                "bio": "Bootstrapped two logistics startups.",
                "company": "ShipWise",
                "position": "CEO",
                "city": "Chennai",
                "phone_verified": true,
                "email_verified": true,
                "social_links": [{ "platform": "linkedin", "url": "https://linkedin.com/in/meera" }]
            },
            {
                "id": "u-newcomer",
                "first_name": "Arjun",
                "last_name": "",
                "city": "Kochi"
            }
        ],
        "interests": [
            { "user_id": "u-founder", "interest": "logistics" },
            { "user_id": "u-founder", "interest": "fundraising", "visibility": "connections" },
            { "user_id": "u-founder", "interest": "hiring", "visibility": "private" },
            { "user_id": "u-newcomer", "interest": "logistics" },
            { "user_id": "u-newcomer", "interest": "ecommerce" }
        ],
        "connections": [
            { "requester_id": "u-newcomer", "addressee_id": "u-founder", "status": "PENDING" }
        ]
    }"#;

    pub(super) fn build_service() -> (
        ProfileCompletionService<InMemoryProfileStore>,
        Arc<InMemoryProfileStore>,
    ) {
        let store =
            Arc::new(InMemoryProfileStore::from_reader(SEED.as_bytes()).expect("seed loads"));
        let service =
            ProfileCompletionService::new(store.clone(), Arc::new(CompletionEngine::standard()));
        (service, store)
    }

    pub(super) fn accepted() -> ConnectionStatus {
        ConnectionStatus::Accepted
    }
}

mod scoring {
    use super::common::*;
    use csn_profile::profile::{
        CompletionServiceError, ConnectionRecord, InterestAssociation, InterestVisibility,
        RepositoryError, UserId,
    };

    #[test]
    fn founder_without_connections_misses_only_first_connection() {
        let (service, _) = build_service();

        let result = service
            .compute_completion(&UserId::from("u-founder"))
            .expect("founder scores");

        assert_eq!(result.completion_percentage, 95);
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].key, "firstConnection");
        assert_eq!(
            result.suggestions,
            vec!["Make your first connection to start networking"]
        );
    }

    #[test]
    fn newcomer_progresses_as_profile_fills_in() {
        let (service, store) = build_service();
        let newcomer = UserId::from("u-newcomer");

        let initial = service.compute_completion(&newcomer).expect("scores");
        assert_eq!(initial.completed, vec!["city"]);
        assert_eq!(initial.completion_percentage, 5);
        assert_eq!(initial.suggestions.len(), 5);

        store
            .add_interest(InterestAssociation {
                user_id: newcomer.clone(),
                interest: "supply-chain".to_string(),
                visibility: InterestVisibility::Public,
            })
            .expect("interest added");
        store
            .add_connection(ConnectionRecord {
                requester_id: UserId::from("u-founder"),
                addressee_id: newcomer.clone(),
                status: accepted(),
            })
            .expect("connection added");

        let progressed = service.compute_completion(&newcomer).expect("scores");
        assert_eq!(progressed.completed, vec!["city", "interests", "firstConnection"]);
        assert_eq!(progressed.completion_percentage, 25);
        assert_eq!(
            progressed.suggestions,
            vec![
                "Add a profile picture to boost trust",
                "Write a bio to help others understand your business",
                "Complete your company and position details",
            ]
        );

        let founder = service
            .compute_completion(&UserId::from("u-founder"))
            .expect("founder scores");
        assert_eq!(founder.completion_percentage, 100);
    }

    #[test]
    fn unknown_user_fails_without_partial_result() {
        let (service, _) = build_service();

        let outcome = service.compute_completion(&UserId::from("u-missing"));

        match outcome {
            Err(CompletionServiceError::Repository(RepositoryError::NotFound { user_id })) => {
                assert_eq!(user_id, UserId::from("u-missing"));
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }
}

mod routing {
    use super::common::*;
    use axum::http::{Request, StatusCode};
    use csn_profile::profile::completion_router;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn completion_endpoint_serves_seeded_users() {
        let (service, _) = build_service();
        let router = completion_router(Arc::new(service));

        let response = router
            .oneshot(
                Request::get("/api/v1/profile/u-founder/completion")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["completionPercentage"], 95);
        assert_eq!(payload["completed"].as_array().map(Vec::len), Some(9));
    }

    #[tokio::test]
    async fn completion_endpoint_returns_404_for_unknown_user() {
        let (service, _) = build_service();
        let router = completion_router(Arc::new(service));

        let response = router
            .oneshot(
                Request::get("/api/v1/profile/u-missing/completion")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
