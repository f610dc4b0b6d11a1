//! The in-memory vehicle store.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::source::{LoadError, VehicleSource};
use crate::domain::{Vehicle, VehicleId};

/// The maximum number of search matches returned.
pub const SEARCH_LIMIT: usize = 10;

/// Manufacturer-name keywords excluded when loading the catalog.
///
/// The source lists every registered manufacturer; these keywords weed out
/// records that are not cars.
const EXCLUDED_MAKE_KEYWORDS: [&str; 4] = ["TRAILER", "EQUIPMENT", "MOPED", "MOTORCYCLE"];

/// Options controlling a catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// The model year stamped on every loaded vehicle.
    pub model_year: u16,
    /// How many makes to expand into models. The source lists thousands of
    /// manufacturers; expanding each one costs a request.
    pub make_limit: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            model_year: crate::config::current_year(),
            make_limit: 5,
        }
    }
}

/// An in-memory store of the vehicles known to this session.
///
/// State lives for the session only; there is no persistence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    vehicles: Vec<Vehicle>,
}

impl CatalogStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    /// Populates the store from the data source, replacing prior contents.
    ///
    /// Vehicles are assembled from make and model records, skipping excluded
    /// manufacturers and deduplicating on [`VehicleId`] (first occurrence
    /// wins). Returns the number of vehicles loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source fails; the store is left empty in
    /// that case rather than holding a partial catalog.
    pub fn load(
        &mut self,
        source: &dyn VehicleSource,
        options: &LoadOptions,
    ) -> Result<usize, LoadError> {
        self.vehicles.clear();

        let makes = source.all_makes()?;
        debug!(count = makes.len(), "fetched make records");

        let mut loaded = Vec::new();
        let mut seen: HashSet<VehicleId> = HashSet::new();

        for make in makes
            .iter()
            .filter(|make| !is_excluded_make(&make.name))
            .take(options.make_limit)
        {
            let models = source.models_for_make(make.id)?;
            debug!(make = %make.name, count = models.len(), "fetched model records");

            for model in models {
                let vehicle = Vehicle {
                    make: make.name.clone(),
                    model: model.name,
                    year: options.model_year,
                    manufacturer_id: make.id,
                    model_id: model.id,
                    engine_type: None,
                    turbo: None,
                };

                if seen.insert(vehicle.id()) {
                    loaded.push(vehicle);
                } else {
                    warn!(id = %vehicle.id(), "skipping duplicate vehicle record");
                }
            }
        }

        self.vehicles = loaded;
        Ok(self.vehicles.len())
    }

    /// All vehicles, in load order.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The number of vehicles in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the store holds no vehicles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Looks up a vehicle by identity.
    #[must_use]
    pub fn find(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id() == id)
    }

    /// Case-insensitive substring search against the full display name.
    ///
    /// Returns at most [`SEARCH_LIMIT`] matches in load order. An empty term
    /// matches every vehicle, subject to the cap.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Vehicle> {
        let needle = term.to_lowercase();
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.full_name().to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .collect()
    }
}

fn is_excluded_make(name: &str) -> bool {
    EXCLUDED_MAKE_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}
