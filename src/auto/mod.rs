//! # Automobile Domain Types
//!
//! The automobile record, the list wrapper returned by searches, and the
//! validation rules applied on create.

mod record;
pub mod validate;

pub use record::{Automobile, AutosList};
pub use validate::{validate_new, ValidationError};
