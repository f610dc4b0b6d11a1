use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// The default base URL of the vehicle data source.
pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

const DEFAULT_MAKE_LIMIT: usize = 5;

/// Configuration for the catalog browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Base URL of the vehicle data source API.
    base_url: String,

    /// The model year stamped on loaded vehicles.
    model_year: u16,

    /// How many makes to expand into models when loading the catalog.
    ///
    /// The source lists thousands of manufacturers and each one costs a
    /// request to expand, so loads are capped.
    make_limit: usize,

    /// Vehicles shown per page.
    page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model_year: current_year(),
            make_limit: DEFAULT_MAKE_LIMIT,
            page_size: crate::catalog::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The base URL of the vehicle data source.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the base URL of the vehicle data source.
    pub fn set_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }

    /// The model year stamped on loaded vehicles.
    #[must_use]
    pub const fn model_year(&self) -> u16 {
        self.model_year
    }

    /// Sets the model year.
    pub const fn set_model_year(&mut self, year: u16) {
        self.model_year = year;
    }

    /// The number of makes expanded when loading the catalog.
    #[must_use]
    pub const fn make_limit(&self) -> usize {
        self.make_limit
    }

    /// Sets the make limit.
    pub const fn set_make_limit(&mut self, limit: usize) {
        self.make_limit = limit;
    }

    /// Vehicles shown per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the page size.
    pub const fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
    }

    /// The catalog load options implied by this configuration.
    #[must_use]
    pub const fn load_options(&self) -> crate::catalog::LoadOptions {
        crate::catalog::LoadOptions {
            model_year: self.model_year,
            make_limit: self.make_limit,
        }
    }
}

/// The current calendar year, used as the default model year.
pub(crate) fn current_year() -> u16 {
    u16::try_from(chrono::Utc::now().year()).unwrap_or(2024)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_make_limit() -> usize {
    DEFAULT_MAKE_LIMIT
}

const fn default_page_size() -> usize {
    crate::catalog::DEFAULT_PAGE_SIZE
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_base_url")]
        base_url: String,

        /// Defaults to the current calendar year when absent.
        #[serde(default = "current_year")]
        model_year: u16,

        #[serde(default = "default_make_limit")]
        make_limit: usize,

        #[serde(default = "default_page_size")]
        page_size: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                base_url,
                model_year,
                make_limit,
                page_size,
            } => Self {
                base_url,
                model_year,
                make_limit,
                page_size,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            base_url: config.base_url,
            model_year: config.model_year,
            make_limit: config.make_limit,
            page_size: config.page_size,
        }
    }
}
