//! # Record Service
//!
//! Orchestration layer over the store; the only component that combines
//! store calls. Holds its store as an explicit constructor-passed
//! collaborator. All single-record lookups signal a missing VIN with
//! [`ServiceError::NotFound`] uniformly.

mod errors;
mod filter;

pub use errors::{ServiceError, ServiceResult};
pub use filter::SearchFilter;

use std::sync::Arc;

use tracing::debug;

use crate::auto::{validate_new, Automobile, AutosList};
use crate::store::AutoStore;

/// Service over an [`AutoStore`].
pub struct AutosService<S: AutoStore> {
    store: Arc<S>,
}

impl<S: AutoStore> AutosService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List or search records.
    ///
    /// With no filters this is a full listing: `Ok(Some(list))`, possibly
    /// empty. With at least one filter present the absent one matches
    /// everything, and zero matches yield `Ok(None)` rather than an empty
    /// list. Both shapes map to 204 at the boundary; the distinction is
    /// internal contract.
    pub fn search(&self, filter: &SearchFilter) -> ServiceResult<Option<AutosList>> {
        if filter.is_unfiltered() {
            let autos = self.store.find_all()?;
            return Ok(Some(AutosList::new(autos)));
        }

        let autos = self
            .store
            .find_by_color_and_make_contains(filter.color_term(), filter.make_term())?;
        debug!(matches = autos.len(), "filtered search");
        if autos.is_empty() {
            return Ok(None);
        }
        Ok(Some(AutosList::new(autos)))
    }

    /// Fetch a single record by VIN.
    pub fn get_by_vin(&self, vin: &str) -> ServiceResult<Automobile> {
        self.store
            .find_by_vin(vin)?
            .ok_or_else(|| ServiceError::NotFound {
                vin: vin.to_string(),
            })
    }

    /// Validate and persist a new record. The store assigns the id.
    /// Duplicate VINs are accepted.
    pub fn add(&self, auto: Automobile) -> ServiceResult<Automobile> {
        validate_new(&auto)?;
        let saved = self.store.save(auto)?;
        debug!(id = ?saved.id, vin = %saved.vin, "record created");
        Ok(saved)
    }

    /// Overwrite `color` and `owner` on the record with the given VIN.
    ///
    /// All other fields are unchanged; an absent request field clears the
    /// stored value.
    pub fn update(
        &self,
        vin: &str,
        color: Option<String>,
        owner: Option<String>,
    ) -> ServiceResult<Automobile> {
        let mut auto = self.get_by_vin(vin)?;
        auto.color = color;
        auto.owner = owner;
        Ok(self.store.save(auto)?)
    }

    /// Delete the record with the given VIN.
    pub fn remove(&self, vin: &str) -> ServiceResult<()> {
        let auto = self.get_by_vin(vin)?;
        self.store.delete(&auto)?;
        debug!(vin = %vin, "record deleted");
        Ok(())
    }
}
