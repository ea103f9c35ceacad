//! # HTTP Server Module
//!
//! Axum server exposing the feedback API.
//!
//! # Endpoints
//!
//! - `GET  /api/feedbacks` - All feedback, newest first
//! - `POST /api/submit-feedback` - Submit feedback
//! - `/health` - Health check
//! - `/metrics` - Counters

pub mod config;
pub mod errors;
pub mod feedback_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use feedback_routes::FeedbackState;
pub use server::HttpServer;
