//! The external vehicle data source.
//!
//! The real implementation, [`VpicClient`], talks to the public NHTSA vPIC
//! API over HTTP. [`StaticSource`] serves a fixed dataset for offline use
//! and for tests. Failures surface as [`LoadError`] values; nothing here
//! retries.

use std::{collections::HashMap, time::Duration};

use serde::Deserialize;
use tracing::debug;

/// A make record from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MakeRecord {
    /// The source's numeric manufacturer identifier.
    #[serde(rename = "Make_ID")]
    pub id: u32,
    /// Manufacturer name.
    #[serde(rename = "Make_Name")]
    pub name: String,
}

/// A model record from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelRecord {
    /// The source's numeric model identifier.
    #[serde(rename = "Model_ID")]
    pub id: u32,
    /// Model name.
    #[serde(rename = "Model_Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct VehicleTypeRecord {
    #[serde(rename = "VehicleTypeName")]
    name: Option<String>,
}

/// The vPIC response envelope: payload records live under `Results`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "Results")]
    results: Vec<T>,
}

/// Errors from the vehicle data source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data source could not be reached or returned an error status.
    #[error("failed to reach the vehicle data source: {0}")]
    Http(#[from] reqwest::Error),

    /// The response arrived but did not match the expected shape.
    #[error("malformed response from the vehicle data source: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A source of vehicle catalog data.
///
/// This is the seam between the catalog and the outside world; everything
/// above it works purely with the parsed records.
pub trait VehicleSource {
    /// Lists every known make.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source is unreachable or the response is
    /// malformed.
    fn all_makes(&self) -> Result<Vec<MakeRecord>, LoadError>;

    /// Lists the models for a make.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source is unreachable or the response is
    /// malformed.
    fn models_for_make(&self, make_id: u32) -> Result<Vec<ModelRecord>, LoadError>;

    /// Returns the vehicle-type string for a make, if the source knows one.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source is unreachable or the response is
    /// malformed.
    fn vehicle_type_for_make(&self, make_id: u32) -> Result<Option<String>, LoadError>;
}

/// HTTP client for the NHTSA vPIC API.
#[derive(Debug)]
pub struct VpicClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl VpicClient {
    /// Creates a client for the given base URL, e.g.
    /// `https://vpic.nhtsa.dot.gov/api/vehicles`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn get_results<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, LoadError> {
        let url = format!("{}/{path}?format=json", self.base_url);
        debug!(%url, "fetching from vehicle data source");
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.results)
    }
}

impl VehicleSource for VpicClient {
    fn all_makes(&self) -> Result<Vec<MakeRecord>, LoadError> {
        self.get_results("getallmakes")
    }

    fn models_for_make(&self, make_id: u32) -> Result<Vec<ModelRecord>, LoadError> {
        self.get_results(&format!("GetModelsForMakeId/{make_id}"))
    }

    fn vehicle_type_for_make(&self, make_id: u32) -> Result<Option<String>, LoadError> {
        let records: Vec<VehicleTypeRecord> =
            self.get_results(&format!("GetVehicleTypesForMakeId/{make_id}"))?;
        Ok(records.into_iter().next().and_then(|record| record.name))
    }
}

/// An in-memory vehicle source with a fixed dataset.
///
/// Used for the offline browse mode and throughout the tests.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    makes: Vec<MakeRecord>,
    models: HashMap<u32, Vec<ModelRecord>>,
    vehicle_types: HashMap<u32, String>,
}

impl StaticSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a make with its models and optional vehicle type.
    pub fn add_make(
        &mut self,
        make: MakeRecord,
        models: Vec<ModelRecord>,
        vehicle_type: Option<&str>,
    ) {
        if let Some(vehicle_type) = vehicle_type {
            self.vehicle_types.insert(make.id, vehicle_type.to_string());
        }
        self.models.insert(make.id, models);
        self.makes.push(make);
    }

    /// A small sample catalog for offline browsing.
    #[must_use]
    pub fn sample() -> Self {
        let mut source = Self::new();
        source.add_make(
            MakeRecord {
                id: 448,
                name: "TOYOTA".to_string(),
            },
            vec![
                ModelRecord {
                    id: 2212,
                    name: "Supra".to_string(),
                },
                ModelRecord {
                    id: 2213,
                    name: "GR86".to_string(),
                },
                ModelRecord {
                    id: 2214,
                    name: "Corolla".to_string(),
                },
            ],
            Some("Passenger Car"),
        );
        source.add_make(
            MakeRecord {
                id: 474,
                name: "HONDA".to_string(),
            },
            vec![
                ModelRecord {
                    id: 1861,
                    name: "Civic".to_string(),
                },
                ModelRecord {
                    id: 1862,
                    name: "Accord".to_string(),
                },
            ],
            Some("Passenger Car"),
        );
        source.add_make(
            MakeRecord {
                id: 523,
                name: "SUBARU".to_string(),
            },
            vec![
                ModelRecord {
                    id: 3081,
                    name: "WRX".to_string(),
                },
                ModelRecord {
                    id: 3082,
                    name: "BRZ".to_string(),
                },
            ],
            Some("Passenger Car"),
        );
        source
    }
}

impl VehicleSource for StaticSource {
    fn all_makes(&self) -> Result<Vec<MakeRecord>, LoadError> {
        Ok(self.makes.clone())
    }

    fn models_for_make(&self, make_id: u32) -> Result<Vec<ModelRecord>, LoadError> {
        Ok(self.models.get(&make_id).cloned().unwrap_or_default())
    }

    fn vehicle_type_for_make(&self, make_id: u32) -> Result<Option<String>, LoadError> {
        Ok(self.vehicle_types.get(&make_id).cloned())
    }
}
