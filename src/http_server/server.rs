//! # HTTP Server
//!
//! Combines the feedback and observability routers into one axum server.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::feedback_routes::{feedback_routes, FeedbackState};
use super::observability_routes::observability_routes;
use crate::observability::Event;

/// HTTP server for the feedback API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by a fresh in-memory store
    pub fn new(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(FeedbackState::in_memory()))
    }

    /// Create a server over existing shared state
    pub fn with_state(config: HttpServerConfig, state: Arc<FeedbackState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<FeedbackState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for local development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parse_origins(&config.cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // /health and /metrics at root level
            .merge(observability_routes(state.clone()))
            // Feedback routes under /api
            .nest("/api", feedback_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured host and port.
    ///
    /// The host may be a name; it is resolved here, not in the config.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        info!(event = %Event::ServerStarting, addr = %self.socket_addr(), "binding listener");
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Bind and serve until Ctrl+C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;

        info!(event = %Event::ServerListening, %addr, "feedback API available at http://{}/api", addr);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!(event = %Event::ShutdownComplete, "server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new(HttpServerConfig::default())
    }
}

/// Parse configured origins, logging and skipping any that are not valid
/// header values.
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(event = %Event::ShutdownStart, "shutdown signal received");
}
