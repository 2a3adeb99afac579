//! # Service Errors
//!
//! Failure kinds for record operations. Missing VIN-keyed records raise
//! `NotFound` uniformly across get/update/delete.

use thiserror::Error;

use crate::auto::ValidationError;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Record service errors
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// No record with the requested VIN
    #[error("no automobile with vin {vin:?}")]
    NotFound { vin: String },

    /// Create payload failed validation
    #[error("invalid automobile: {0}")]
    InvalidAuto(#[from] ValidationError),

    /// Storage failure; fatal for the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err = ServiceError::from(ValidationError::MissingMake);
        assert!(matches!(err, ServiceError::InvalidAuto(_)));
    }

    #[test]
    fn test_not_found_display_names_vin() {
        let err = ServiceError::NotFound {
            vin: "AABBCD".to_string(),
        };
        assert!(err.to_string().contains("AABBCD"));
    }
}
