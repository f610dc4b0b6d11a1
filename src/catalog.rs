//! The catalog: vehicle storage, the external data source, and parts.
//!
//! The [`CatalogStore`] holds vehicles loaded from a [`VehicleSource`]; the
//! [`PartsDb`] holds the static parts fixture; the [`SpecsCache`] fetches
//! per-vehicle specs once and remembers them.

/// List pagination.
pub mod page;
pub use page::{DEFAULT_PAGE_SIZE, Page, paginate};

/// The static parts catalog.
pub mod parts;
pub use parts::PartsDb;

/// The external vehicle data source and its errors.
pub mod source;
pub use source::{LoadError, MakeRecord, ModelRecord, StaticSource, VehicleSource, VpicClient};

/// The fetch-once cache of vehicle specs.
pub mod specs;
pub use specs::SpecsCache;

/// The in-memory vehicle store.
pub mod store;
pub use store::{CatalogStore, LoadOptions, SEARCH_LIMIT};
