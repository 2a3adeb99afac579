//! # Record Store
//!
//! Keyed storage for automobile records behind a narrow interface: full
//! scan, substring-filtered scan, single-key lookup by VIN, insert, and
//! delete. Any relational engine can implement [`AutoStore`]; the crate
//! ships [`MemoryStore`].

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::auto::Automobile;

/// Storage interface for automobile records.
///
/// Each call is atomic with respect to the store; no consistency guarantee
/// beyond that is assumed by callers.
pub trait AutoStore: Send + Sync {
    /// All records, any order; empty when none exist.
    fn find_all(&self) -> StoreResult<Vec<Automobile>>;

    /// Records whose `color` contains `color` AND whose `make` contains
    /// `make` (case-sensitive substring match). An empty string matches
    /// everything. A record with no stored color only matches the empty
    /// color filter.
    fn find_by_color_and_make_contains(
        &self,
        color: &str,
        make: &str,
    ) -> StoreResult<Vec<Automobile>>;

    /// First record with the given VIN in insertion order, if any. VIN
    /// uniqueness is not enforced at the storage layer.
    fn find_by_vin(&self, vin: &str) -> StoreResult<Option<Automobile>>;

    /// Insert when the record has no id (assigning one), otherwise
    /// overwrite the record with the matching id. Returns the persisted
    /// record. Idempotent on the same id.
    fn save(&self, auto: Automobile) -> StoreResult<Automobile>;

    /// Remove the record with the matching id.
    ///
    /// Fails with [`StoreError::NotFound`] when absent; callers are
    /// expected to have verified existence first.
    fn delete(&self, auto: &Automobile) -> StoreResult<()>;
}
