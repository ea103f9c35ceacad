//! Feedback services
//!
//! Submission validates then stores; listing reads straight from the store.
//! Both are generic over the [`FeedbackStore`] they are handed, so callers
//! decide the backend and tests get a fresh store each time.

mod errors;
mod listing;
mod submission;

pub use errors::{ServiceError, ServiceResult};
pub use listing::ListingService;
pub use submission::SubmissionService;

use std::sync::Arc;

use serde_json::Value;

use crate::observability::MetricsRegistry;
use crate::storage::{FeedbackRecord, FeedbackStore};

/// Submission and listing over one shared store
pub struct FeedbackService<S: FeedbackStore + ?Sized> {
    submission: SubmissionService<S>,
    listing: ListingService<S>,
    store: Arc<S>,
    metrics: Arc<MetricsRegistry>,
}

impl<S: FeedbackStore + ?Sized> FeedbackService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(store: Arc<S>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            submission: SubmissionService::new(Arc::clone(&store), Arc::clone(&metrics)),
            listing: ListingService::new(Arc::clone(&store), Arc::clone(&metrics)),
            store,
            metrics,
        }
    }

    /// See [`SubmissionService::submit`]
    pub fn submit(&self, payload: &Value) -> ServiceResult<FeedbackRecord> {
        self.submission.submit(payload)
    }

    /// See [`ListingService::list`]
    pub fn list(&self) -> ServiceResult<Vec<FeedbackRecord>> {
        self.listing.list()
    }

    /// Number of records currently stored
    pub fn stored_count(&self) -> ServiceResult<usize> {
        Ok(self.store.len()?)
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }
}

impl<S: FeedbackStore + ?Sized> Clone for FeedbackService<S> {
    fn clone(&self) -> Self {
        Self {
            submission: self.submission.clone(),
            listing: self.listing.clone(),
            store: Arc::clone(&self.store),
            metrics: Arc::clone(&self.metrics),
        }
    }
}
