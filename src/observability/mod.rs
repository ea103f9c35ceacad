//! Observability for the feedback service
//!
//! - Structured logging through `tracing`, with typed event names
//! - Lock-free operational counters
//!
//! # Usage
//!
//! ```ignore
//! use feedback_board::observability::{Event, MetricsRegistry};
//!
//! tracing::info!(event = %Event::FeedbackAccepted, id = 1, "feedback accepted");
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_submissions_accepted();
//! ```

mod events;
mod logging;
mod metrics;

pub use events::Event;
pub use logging::{init_logging, LogFormat};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
