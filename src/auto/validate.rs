//! # Record Validation
//!
//! Rules applied to a record before it is accepted for create. The VIN is
//! not checked for uniqueness; duplicate VINs are accepted and lookup
//! returns the first match.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::Automobile;

/// Earliest model year accepted (Benz Patent-Motorwagen).
pub const MIN_YEAR: i32 = 1886;
/// Latest model year accepted.
pub const MAX_YEAR: i32 = 2100;

/// VINs are alphanumeric, at most 17 characters.
fn vin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,17}$").expect("valid regex"))
}

/// Validation failures for create payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("make is required")]
    MissingMake,

    #[error("model is required")]
    MissingModel,

    #[error("invalid vin: {0:?}")]
    InvalidVin(String),

    #[error("year {0} out of range ({MIN_YEAR}-{MAX_YEAR})")]
    YearOutOfRange(i32),
}

/// Validate a record submitted for creation.
pub fn validate_new(auto: &Automobile) -> Result<(), ValidationError> {
    if auto.make.trim().is_empty() {
        return Err(ValidationError::MissingMake);
    }
    if auto.model.trim().is_empty() {
        return Err(ValidationError::MissingModel);
    }
    if !vin_pattern().is_match(&auto.vin) {
        return Err(ValidationError::InvalidVin(auto.vin.clone()));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&auto.year) {
        return Err(ValidationError::YearOutOfRange(auto.year));
    }
    Ok(())
}
