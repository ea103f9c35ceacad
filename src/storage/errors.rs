//! Storage error types
//!
//! The in-memory store only fails when its lock has been poisoned by a panic
//! in another request. `Unavailable` is reserved for backends that can lose
//! their connection.

use thiserror::Error;

/// Errors that can occur when reading or writing feedback records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    #[error("Feedback store lock poisoned")]
    LockPoisoned,

    /// Backing store cannot serve the request
    #[error("Feedback store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
