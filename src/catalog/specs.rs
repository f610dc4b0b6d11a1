//! The fetch-once cache of vehicle specs.
//!
//! Specs are fetched lazily the first time a vehicle is viewed and cached by
//! [`VehicleId`]. The cache replaces the original design of mutating shared
//! vehicle records in place: catalog entries stay immutable and the fetched
//! state lives here.

use std::collections::HashMap;

use tracing::debug;

use super::source::{LoadError, VehicleSource};
use crate::domain::{Vehicle, VehicleId, VehicleSpecs};

/// A cache of lazily fetched vehicle specs, keyed by vehicle identity.
///
/// Successful fetches are cached forever; a failed fetch is not cached, so
/// the next view retries.
#[derive(Debug, Default, Clone)]
pub struct SpecsCache {
    entries: HashMap<VehicleId, VehicleSpecs>,
}

impl SpecsCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the specs for a vehicle, fetching them on first access.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the specs are not cached and the source
    /// fails.
    pub fn get_or_fetch(
        &mut self,
        vehicle: &Vehicle,
        source: &dyn VehicleSource,
    ) -> Result<&VehicleSpecs, LoadError> {
        let id = vehicle.id();
        if !self.entries.contains_key(&id) {
            debug!(%id, "fetching vehicle specs");
            let vehicle_type = source.vehicle_type_for_make(vehicle.manufacturer_id)?;
            let specs = VehicleSpecs {
                vehicle_type: vehicle_type.unwrap_or_else(|| "Unknown".to_string()),
                horsepower: None,
                weight: None,
            };
            self.entries.insert(id.clone(), specs);
        }

        Ok(&self.entries[&id])
    }

    /// Returns cached specs without fetching.
    #[must_use]
    pub fn get(&self, id: &VehicleId) -> Option<&VehicleSpecs> {
        self.entries.get(id)
    }

    /// The number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
