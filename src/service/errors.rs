//! Service error classification
//!
//! - `Validation`: the caller sent a bad payload; reported back verbatim
//! - `Storage`: the store failed; detail stays in server logs

use thiserror::Error;

use crate::schema::ValidationError;
use crate::storage::StorageError;

/// Classified failure of a submission or listing request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Payload rejected by the feedback schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store read or write failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether the caller caused this error
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    /// Validation details, if this is a validation failure
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ServiceError::Validation(err) => Some(err),
            ServiceError::Storage(_) => None,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
