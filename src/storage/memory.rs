//! In-memory feedback store
//!
//! Records live in a `Vec` behind a single `RwLock`. Id assignment,
//! timestamping and insertion all happen under the write lock, so concurrent
//! submissions can never observe or reuse the same id.

use std::sync::{Arc, RwLock};

use tracing::trace;

use super::clock::{Clock, SystemClock};
use super::errors::{StorageError, StorageResult};
use super::record::FeedbackRecord;
use super::FeedbackStore;
use crate::schema::NewFeedback;

#[derive(Debug)]
struct Inner {
    records: Vec<FeedbackRecord>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

/// Process-lifetime feedback store
pub struct MemoryFeedbackStore {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

impl MemoryFeedbackStore {
    /// Create an empty store stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with a custom time source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            clock,
        }
    }
}

impl Default for MemoryFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackStore for MemoryFeedbackStore {
    fn create(&self, feedback: NewFeedback) -> StorageResult<FeedbackRecord> {
        let mut inner = self.inner.write().map_err(|_| StorageError::LockPoisoned)?;

        let id = inner.next_id;
        inner.next_id += 1;

        let record = FeedbackRecord::new(id, feedback, self.clock.now());
        inner.records.push(record.clone());

        trace!(id, total = inner.records.len(), "feedback record stored");
        Ok(record)
    }

    fn list(&self) -> StorageResult<Vec<FeedbackRecord>> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;

        let mut records = inner.records.clone();
        // newest first; equal timestamps fall back to insertion order, newest first
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    fn len(&self) -> StorageResult<usize> {
        let inner = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(inner.records.len())
    }
}
