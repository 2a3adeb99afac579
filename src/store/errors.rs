//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record with the requested identifier
    #[error("record not found")]
    NotFound,

    /// Storage engine failure; fatal for the request, never retried
    #[error("storage error: {0}")]
    Internal(String),
}
