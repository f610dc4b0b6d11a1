use std::fmt;

/// A vehicle known to the catalog.
///
/// Vehicles are assembled from the data source's make and model records at
/// load time. The engine type and turbo flag are optional because the public
/// source does not always provide them; compatibility rules treat a missing
/// attribute as failing any rule that requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Manufacturer name, e.g. "TOYOTA".
    pub make: String,
    /// Model name, e.g. "Supra". May be empty for make-only records.
    pub model: String,
    /// Model year.
    pub year: u16,
    /// The data source's numeric manufacturer identifier.
    pub manufacturer_id: u32,
    /// The data source's numeric model identifier.
    pub model_id: u32,
    /// Engine layout, e.g. "Inline-6", when known.
    pub engine_type: Option<String>,
    /// Whether the vehicle is factory turbocharged, when known.
    pub turbo: Option<bool>,
}

impl Vehicle {
    /// Returns the identity of this vehicle within the catalog.
    #[must_use]
    pub fn id(&self) -> VehicleId {
        VehicleId {
            manufacturer_id: self.manufacturer_id,
            model_id: self.model_id,
            year: self.year,
        }
    }

    /// Returns the display name, `"{year} {make} {model}"`.
    ///
    /// The trailing space is trimmed when the model name is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
            .trim_end()
            .to_string()
    }
}

/// The identity of a vehicle: manufacturer, model, and model year.
///
/// The data source does not enforce uniqueness of this tuple, so the catalog
/// store deduplicates on it at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId {
    /// The data source's numeric manufacturer identifier.
    pub manufacturer_id: u32,
    /// The data source's numeric model identifier.
    pub model_id: u32,
    /// Model year.
    pub year: u16,
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "make {} / model {} / {}",
            self.manufacturer_id, self.model_id, self.year
        )
    }
}

/// Specifications fetched lazily on first view of a vehicle.
///
/// The public source supplies only a vehicle-type string; horsepower and
/// weight are carried for sources that can provide them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpecs {
    /// Vehicle type reported by the source, or "Unknown".
    pub vehicle_type: String,
    /// Rated horsepower, when the source provides it.
    pub horsepower: Option<u32>,
    /// Curb weight in kilograms, when the source provides it.
    pub weight: Option<u32>,
}
