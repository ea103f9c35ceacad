//! Observability HTTP Routes
//!
//! HTTP endpoints for health checks and counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::errors::{ApiError, ApiResult, METRICS_FAILED_MESSAGE};
use super::feedback_routes::FeedbackState;
use crate::observability::MetricsSnapshot;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Counters plus the current store size
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
    pub feedback_stored: usize,
}

/// Create observability routes
pub fn observability_routes(state: Arc<FeedbackState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Metrics handler - returns counters as JSON
async fn metrics_handler(
    State(state): State<Arc<FeedbackState>>,
) -> ApiResult<Json<MetricsResponse>> {
    let feedback_stored = state
        .service
        .stored_count()
        .map_err(|e| ApiError::from_service(e, METRICS_FAILED_MESSAGE))?;

    Ok(Json(MetricsResponse {
        counters: state.service.metrics().snapshot(),
        feedback_stored,
    }))
}
