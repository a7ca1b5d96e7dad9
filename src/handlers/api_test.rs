#[cfg(test)]
mod api_tests {
    use axum_test::{TestServer, TestServerConfig};
    use chrono::Duration;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::handlers::AppState;
    use crate::models::event::Event;
    use crate::routes::create_router;
    use crate::services::store::{MockAvailabilityStore, StoreError};

    // Helper function to set up a test server around a mocked store
    fn setup_test_server(store: MockAvailabilityStore) -> TestServer {
        let app_state = Arc::new(AppState::new(Arc::new(store)));
        let app = create_router(app_state);

        let config = TestServerConfig::builder().mock_transport().build();
        TestServer::new_with_config(app, config).unwrap()
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let mut store = MockAvailabilityStore::new();
        store
            .expect_get_event()
            .withf(|event_id: &str| event_id == "7")
            .times(1)
            .returning(|_| Ok(None));

        let server = setup_test_server(store);
        let response = server.get("/events/7").await;

        assert_eq!(response.status_code().as_u16(), 404);
        let body: Value = response.json();
        assert_eq!(body["message"], "Event not found");
    }

    #[tokio::test]
    async fn test_get_event_found() {
        let mut store = MockAvailabilityStore::new();
        store.expect_get_event().times(1).returning(|event_id| {
            Ok(Some(Event {
                id: event_id.to_string(),
                title: "Design review".to_string(),
                slots: Vec::new(),
                estimated_time: Duration::minutes(30),
                participants: vec!["alice".to_string()],
            }))
        });

        let server = setup_test_server(store);
        let response = server.get("/events/3").await;

        assert_eq!(response.status_code().as_u16(), 200);
        let body: Value = response.json();
        assert_eq!(body["id"], "3");
        assert_eq!(body["title"], "Design review");
        assert_eq!(body["estimatedTime"], 1800);
    }

    #[tokio::test]
    async fn test_lock_poisoned_maps_to_internal_error() {
        let mut store = MockAvailabilityStore::new();
        store
            .expect_matching_snapshot()
            .times(1)
            .returning(|_| Err(StoreError::LockPoisoned));

        let server = setup_test_server(store);
        let response = server.get("/event/1/find-common-slots").await;

        assert_eq!(response.status_code().as_u16(), 500);
        let body: Value = response.json();
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_store() {
        // No expectations: any store call would panic the mock
        let server = setup_test_server(MockAvailabilityStore::new());

        let response = server
            .post("/event")
            .text("{not json")
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code().as_u16(), 400);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid input");
    }

    #[tokio::test]
    async fn test_inverted_slot_rejected() {
        let server = setup_test_server(MockAvailabilityStore::new());

        let response = server
            .post("/participant")
            .json(&json!({
                "participant_id": "alice",
                "event_id": "1",
                "slots": [
                    {"start_time": "2025-04-01T11:00:00Z", "end_time": "2025-04-01T10:00:00Z"}
                ]
            }))
            .await;

        assert_eq!(response.status_code().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_negative_estimated_time_rejected() {
        let server = setup_test_server(MockAvailabilityStore::new());

        let response = server
            .put("/event/1")
            .json(&json!({"title": "x", "slots": [], "estimatedTime": -60}))
            .await;

        assert_eq!(response.status_code().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_duplicate_availability_conflict() {
        let mut store = MockAvailabilityStore::new();
        store.expect_create_availability().times(1).returning(|record| {
            Err(StoreError::AvailabilityExists {
                participant_id: record.participant_id,
                event_id: record.event_id,
            })
        });

        let server = setup_test_server(store);
        let response = server
            .post("/participant")
            .json(&json!({"participant_id": "alice", "event_id": "1", "slots": []}))
            .await;

        assert_eq!(response.status_code().as_u16(), 409);
        let body: Value = response.json();
        assert_eq!(body["message"], "This availability has already been recorded");
    }

    #[tokio::test]
    async fn test_create_event_deduplicates_roster() {
        let mut store = MockAvailabilityStore::new();
        store
            .expect_create_event()
            .withf(|draft| draft.participants == vec!["alice", "bob"])
            .times(1)
            .returning(|draft| {
                Ok(Event {
                    id: "1".to_string(),
                    title: draft.title,
                    slots: draft.slots,
                    estimated_time: draft.estimated_time,
                    participants: draft.participants,
                })
            });

        let server = setup_test_server(store);
        let response = server
            .post("/event")
            .json(&json!({
                "title": "Kickoff",
                "slots": [],
                "estimatedTime": 3600,
                "participants": ["alice", "bob", "alice"]
            }))
            .await;

        assert_eq!(response.status_code().as_u16(), 201);
        let body: Value = response.json();
        assert_eq!(body["id"], "1");
    }
}
