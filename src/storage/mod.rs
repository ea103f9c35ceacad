//! Feedback storage subsystem
//!
//! The store holds every accepted feedback record for the lifetime of the
//! process and hands them back newest first.
//!
//! # Capabilities
//!
//! - `create`: assign the next id, stamp `created_at`, store, return
//! - `list`: all records by `created_at` descending, ties by id descending
//!
//! Services depend on the [`FeedbackStore`] trait only, so a durable backend
//! can replace [`MemoryFeedbackStore`] without touching them.

mod clock;
mod errors;
mod memory;
mod record;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{StorageError, StorageResult};
pub use memory::MemoryFeedbackStore;
pub use record::FeedbackRecord;

use crate::schema::NewFeedback;

/// Storage capability for feedback records
pub trait FeedbackStore: Send + Sync {
    /// Store a validated submission and return it with its id and timestamp
    fn create(&self, feedback: NewFeedback) -> StorageResult<FeedbackRecord>;

    /// All stored records, newest first
    fn list(&self) -> StorageResult<Vec<FeedbackRecord>>;

    /// Number of stored records
    fn len(&self) -> StorageResult<usize>;

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}
