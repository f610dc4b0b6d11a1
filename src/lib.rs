//! Vehicle parts catalog with compatibility filtering
//!
//! Vehicles are fetched from the public NHTSA vPIC API; parts come from a
//! built-in catalog and are filtered against each vehicle by per-part
//! compatibility rules. Selected parts accumulate in a build list with a
//! running total.

pub mod domain;
pub use domain::{Category, Compatibility, Part, PartName, Price, Vehicle, VehicleId, VehicleSpecs};

/// Catalog storage, pagination, and the external vehicle data source.
pub mod catalog;
pub use catalog::{
    CatalogStore, LoadError, Page, PartsDb, SpecsCache, StaticSource, VehicleSource, VpicClient,
};

/// The build accumulator.
pub mod build;
pub use build::{BuildList, Selection};

/// Session state for a browsing run.
pub mod session;
pub use session::{Session, SessionError, SpecsError};

mod config;
pub use config::Config;
