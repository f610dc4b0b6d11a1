//! Domain models for the parts catalog.
//!
//! This module contains the core domain types: vehicles and their lazily
//! fetched specs, parts with compatibility rules, part categories, and
//! validated prices.

/// Part category types and parsing.
pub mod category;
pub use category::{Category, UnknownCategoryError};

/// Part domain model and compatibility rules.
pub mod part;
pub use part::{Compatibility, EmptyNameError, Part, PartName};

/// Validated price type.
pub mod price;
pub use price::{InvalidPriceError, Price};

/// Vehicle domain model.
pub mod vehicle;
pub use vehicle::{Vehicle, VehicleId, VehicleSpecs};
