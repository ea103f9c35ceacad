//! Submission service
//!
//! The only path that creates feedback records: validate, then store.
//! A payload that fails validation never reaches the store.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use super::errors::{ServiceError, ServiceResult};
use crate::observability::{Event, MetricsRegistry};
use crate::schema::FeedbackSchema;
use crate::storage::{FeedbackRecord, FeedbackStore};

/// Turns raw payloads into stored records or classified rejections
pub struct SubmissionService<S: FeedbackStore + ?Sized> {
    schema: FeedbackSchema,
    store: Arc<S>,
    metrics: Arc<MetricsRegistry>,
}

impl<S: FeedbackStore + ?Sized> SubmissionService<S> {
    pub fn new(store: Arc<S>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            schema: FeedbackSchema::new(),
            store,
            metrics,
        }
    }

    /// Validate `payload` and store it.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if any field fails the schema; the store
    ///   is not touched
    /// - `ServiceError::Storage` if the store write fails
    pub fn submit(&self, payload: &Value) -> ServiceResult<FeedbackRecord> {
        let feedback = self.schema.validate(payload).map_err(|err| {
            self.metrics.increment_submissions_rejected();
            info!(
                event = %Event::FeedbackRejected,
                fields = ?err.fields(),
                "feedback rejected"
            );
            ServiceError::from(err)
        })?;

        let record = self.store.create(feedback).map_err(|err| {
            self.metrics.increment_storage_failures();
            error!(
                event = %Event::StorageFailure,
                operation = "create",
                error = %err,
                "error submitting feedback"
            );
            ServiceError::from(err)
        })?;

        self.metrics.increment_submissions_accepted();
        info!(event = %Event::FeedbackAccepted, id = record.id, "feedback accepted");
        Ok(record)
    }
}

impl<S: FeedbackStore + ?Sized> Clone for SubmissionService<S> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema,
            store: Arc::clone(&self.store),
            metrics: Arc::clone(&self.metrics),
        }
    }
}
