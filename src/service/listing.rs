//! Listing service

use std::sync::Arc;

use tracing::{debug, error};

use super::errors::{ServiceError, ServiceResult};
use crate::observability::{Event, MetricsRegistry};
use crate::storage::{FeedbackRecord, FeedbackStore};

/// Returns every stored record in the store's order (newest first)
pub struct ListingService<S: FeedbackStore + ?Sized> {
    store: Arc<S>,
    metrics: Arc<MetricsRegistry>,
}

impl<S: FeedbackStore + ?Sized> ListingService<S> {
    pub fn new(store: Arc<S>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// All stored feedback, unfiltered.
    ///
    /// # Errors
    ///
    /// `ServiceError::Storage` if the store cannot be read.
    pub fn list(&self) -> ServiceResult<Vec<FeedbackRecord>> {
        let records = self.store.list().map_err(|err| {
            self.metrics.increment_storage_failures();
            error!(
                event = %Event::StorageFailure,
                operation = "list",
                error = %err,
                "error fetching feedbacks"
            );
            ServiceError::from(err)
        })?;

        self.metrics.increment_listings_served();
        debug!(event = %Event::FeedbackListed, count = records.len(), "feedback listed");
        Ok(records)
    }
}

impl<S: FeedbackStore + ?Sized> Clone for ListingService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metrics: Arc::clone(&self.metrics),
        }
    }
}
