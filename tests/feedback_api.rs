//! Feedback HTTP API Tests
//!
//! Drives the axum router in-process:
//! - 201 with the stored record on valid submissions
//! - 400 with a field-specific message on validation failures
//! - 500 with a generic message when the store fails
//! - Listing is newest first and unaffected by rejected submissions

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use feedback_board::http_server::{FeedbackState, HttpServer, HttpServerConfig};
use feedback_board::schema::NewFeedback;
use chrono::{DateTime, Utc};
use feedback_board::storage::{
    Clock, FeedbackRecord, FeedbackStore, MemoryFeedbackStore, StorageError, StorageResult,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

/// Store whose every operation fails
struct UnavailableStore;

impl FeedbackStore for UnavailableStore {
    fn create(&self, _feedback: NewFeedback) -> StorageResult<FeedbackRecord> {
        Err(StorageError::Unavailable("connection refused by db-primary:5432".into()))
    }

    fn list(&self) -> StorageResult<Vec<FeedbackRecord>> {
        Err(StorageError::Unavailable("connection refused by db-primary:5432".into()))
    }

    fn len(&self) -> StorageResult<usize> {
        Err(StorageError::Unavailable("connection refused by db-primary:5432".into()))
    }
}

/// Clock that panics, so a create poisons the store lock
struct PanickingClock;

impl Clock for PanickingClock {
    fn now(&self) -> DateTime<Utc> {
        panic!("clock failure");
    }
}

fn app() -> (Arc<FeedbackState>, Router) {
    let state = Arc::new(FeedbackState::in_memory());
    let router = HttpServer::with_state(HttpServerConfig::default(), state.clone()).router();
    (state, router)
}

fn failing_app() -> Router {
    let state = Arc::new(FeedbackState::new(Arc::new(UnavailableStore)));
    HttpServer::with_state(HttpServerConfig::default(), state).router()
}

fn submit_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/submit-feedback")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// =============================================================================
// Submission Tests
// =============================================================================

/// Valid submission, then a short name: 201 then 400, one record listed.
#[tokio::test]
async fn test_submit_then_reject_scenario() {
    let (state, router) = app();

    let (status, body) = send(
        &router,
        submit_request(&json!({ "name": "Al", "email": "al@example.com", "message": "Great job" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Al");
    assert_eq!(body["email"], "al@example.com");
    assert_eq!(body["message"], "Great job");
    assert!(body["createdAt"].is_string());

    let (status, body) = send(
        &router,
        submit_request(&json!({ "name": "B", "email": "b@x.com", "message": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Name must be at least 2 characters"));
    assert!(message.contains("\"name\""));

    let (status, body) = send(&router, get_request("/api/feedbacks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(state.service.stored_count().unwrap(), 1);
}

/// The created record round-trips through the wire format.
#[tokio::test]
async fn test_created_record_shape() {
    let (_state, router) = app();

    let (_, body) = send(
        &router,
        submit_request(&json!({ "name": "Al", "email": "al@example.com", "message": "Great job" })),
    )
    .await;

    let record: FeedbackRecord = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(record.id, 1);

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for key in ["id", "name", "email", "message", "createdAt"] {
        assert!(keys.contains(&key), "missing {}", key);
    }
    assert_eq!(keys.len(), 5);
}

/// Client-supplied id and createdAt are ignored.
#[tokio::test]
async fn test_client_cannot_set_server_fields() {
    let (_state, router) = app();

    let (status, body) = send(
        &router,
        submit_request(&json!({
            "id": 999,
            "createdAt": "1999-01-01T00:00:00.000Z",
            "name": "Al",
            "email": "al@example.com",
            "message": "Great job"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_ne!(body["createdAt"], "1999-01-01T00:00:00.000Z");
}

/// Each invalid field is reported and nothing is stored.
#[tokio::test]
async fn test_each_invalid_field_rejected() {
    let (state, router) = app();

    let cases = [
        (json!({ "name": "A", "email": "al@example.com", "message": "Great job" }), "name"),
        (json!({ "name": "Al", "email": "not-an-email", "message": "Great job" }), "email"),
        (json!({ "name": "Al", "email": "al@example.com", "message": "Hey!" }), "message"),
    ];

    for (payload, field) in cases {
        let (status, body) = send(&router, submit_request(&payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["message"].as_str().unwrap().contains(&format!("at \"{}\"", field)),
            "body: {}",
            body
        );
    }

    assert_eq!(state.service.stored_count().unwrap(), 0);
}

/// Unparseable bodies are client errors with a message body.
#[tokio::test]
async fn test_malformed_json_body() {
    let (state, router) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/submit-feedback")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Al\""))
        .unwrap();

    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
    assert_eq!(state.service.stored_count().unwrap(), 0);
}

/// A body without a JSON content type is rejected, not stored.
#[tokio::test]
async fn test_missing_content_type() {
    let (_state, router) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/submit-feedback")
        .body(Body::from(
            json!({ "name": "Al", "email": "al@example.com", "message": "Great job" }).to_string(),
        ))
        .unwrap();

    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

// =============================================================================
// Listing Tests
// =============================================================================

/// Empty store lists as an empty array.
#[tokio::test]
async fn test_empty_listing() {
    let (_state, router) = app();

    let (status, body) = send(&router, get_request("/api/feedbacks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Later submissions come first.
#[tokio::test]
async fn test_listing_newest_first() {
    let (_state, router) = app();

    for name in ["Ann", "Ben", "Cat"] {
        let (status, _) = send(
            &router,
            submit_request(&json!({
                "name": name,
                "email": format!("{}@example.com", name.to_lowercase()),
                "message": "Lovely service"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&router, get_request("/api/feedbacks")).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cat", "Ben", "Ann"]);

    let (_, again) = send(&router, get_request("/api/feedbacks")).await;
    assert_eq!(body, again);
}

// =============================================================================
// Storage Failure Tests
// =============================================================================

/// Store failures on submit surface as a generic 500.
#[tokio::test]
async fn test_submit_storage_failure() {
    let router = failing_app();

    let (status, body) = send(
        &router,
        submit_request(&json!({ "name": "Al", "email": "al@example.com", "message": "Great job" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to submit feedback" }));
}

/// Validation still runs first when the store is down.
#[tokio::test]
async fn test_validation_precedes_storage() {
    let router = failing_app();

    let (status, _) = send(
        &router,
        submit_request(&json!({ "name": "A", "email": "al@example.com", "message": "Great job" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// A poisoned store lock answers 500 instead of panicking the handler.
#[tokio::test]
async fn test_poisoned_store_is_server_error() {
    let store = Arc::new(MemoryFeedbackStore::with_clock(Arc::new(PanickingClock)));
    let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = store.create(NewFeedback::new("Al", "al@example.com", "Great job"));
    }));
    assert!(poisoned.is_err());

    let state = Arc::new(FeedbackState::new(store));
    let router = HttpServer::with_state(HttpServerConfig::default(), state).router();

    let (status, body) = send(
        &router,
        submit_request(&json!({ "name": "Al", "email": "al@example.com", "message": "Great job" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to submit feedback" }));

    let (status, body) = send(&router, get_request("/api/feedbacks")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch feedback entries" }));
}

/// Store failures on list surface as a generic 500.
#[tokio::test]
async fn test_list_storage_failure() {
    let router = failing_app();

    let (status, body) = send(&router, get_request("/api/feedbacks")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch feedback entries" }));
}

// =============================================================================
// Operational Route Tests
// =============================================================================

/// Health check reports ok and the crate version.
#[tokio::test]
async fn test_health() {
    let (_state, router) = app();

    let (status, body) = send(&router, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

/// Counters reflect accepted, rejected and listed requests.
#[tokio::test]
async fn test_metrics_counters() {
    let (_state, router) = app();

    send(
        &router,
        submit_request(&json!({ "name": "Al", "email": "al@example.com", "message": "Great job" })),
    )
    .await;
    send(&router, submit_request(&json!({ "name": "Al" }))).await;
    send(&router, get_request("/api/feedbacks")).await;

    let (status, body) = send(&router, get_request("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submissions_accepted"], 1);
    assert_eq!(body["submissions_rejected"], 1);
    assert_eq!(body["listings_served"], 1);
    assert_eq!(body["storage_failures"], 0);
    assert_eq!(body["feedback_stored"], 1);
}

/// Unknown routes are 404.
#[tokio::test]
async fn test_unknown_route() {
    let (_state, router) = app();

    let (status, _) = send(&router, get_request("/api/nothing-here")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
