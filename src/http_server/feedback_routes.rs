//! Feedback HTTP Routes
//!
//! - `GET  /feedbacks`       - all feedback, newest first
//! - `POST /submit-feedback` - validate and store a submission
//!
//! Mounted under `/api` by the server.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::info;

use super::errors::{ApiError, ApiResult, LIST_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE};
use crate::observability::Event;
use crate::service::FeedbackService;
use crate::storage::{FeedbackRecord, FeedbackStore, MemoryFeedbackStore};

// ==================
// Shared State
// ==================

/// Feedback state shared across handlers
pub struct FeedbackState {
    pub service: FeedbackService<dyn FeedbackStore>,
}

impl FeedbackState {
    /// Serve from the given store
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            service: FeedbackService::new(store),
        }
    }

    /// Serve from a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryFeedbackStore::new()))
    }
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::in_memory()
    }
}

// ==================
// Feedback Routes
// ==================

/// Create feedback routes
pub fn feedback_routes(state: Arc<FeedbackState>) -> Router {
    Router::new()
        .route("/feedbacks", get(list_feedbacks_handler))
        .route("/submit-feedback", post(submit_feedback_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List all feedback
async fn list_feedbacks_handler(
    State(state): State<Arc<FeedbackState>>,
) -> ApiResult<Json<Vec<FeedbackRecord>>> {
    let records = state
        .service
        .list()
        .map_err(|e| ApiError::from_service(e, LIST_FAILED_MESSAGE))?;

    Ok(Json(records))
}

/// Submit new feedback
async fn submit_feedback_handler(
    State(state): State<Arc<FeedbackState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FeedbackRecord>)> {
    let Json(payload) = body.map_err(|rejection| {
        state.service.metrics().increment_submissions_rejected();
        info!(
            event = %Event::FeedbackMalformed,
            reason = %rejection.body_text(),
            "feedback body rejected"
        );
        ApiError::from(rejection)
    })?;

    let record = state
        .service
        .submit(&payload)
        .map_err(|e| ApiError::from_service(e, SUBMIT_FAILED_MESSAGE))?;

    Ok((StatusCode::CREATED, Json(record)))
}
