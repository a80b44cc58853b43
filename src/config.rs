//! Configuration management and validation.
//!
//! Provides the run configuration consumed by the pipeline: FITS network
//! and method identifiers, the site mapping table, an optional replacement
//! unit table, and the zone used for non-UTC timestamps. Values are layered
//! as defaults, then a TOML file, then command-line overrides.
//!
//! ```toml
//! network = "NT"
//! method = "M"
//! local_offset = "+12:00"
//!
//! [sites]
//! "Place" = "PLACE_CODE"
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::app::services::mapping::{SiteMapping, UnitMapping};
use crate::app::services::value_extractor::LocalZone;
use crate::{Error, Result};

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// FITS network identifier stamped on every observation
    pub network: String,

    /// FITS method identifier stamped on every observation
    pub method: String,

    /// Hilltop site name to FITS site id conversions
    pub sites: SiteMapping,

    /// Replacement for the built-in parameter table
    pub units: Option<UnitMapping>,

    /// Zone for timestamps whose `DateFormat` is not `UTC`
    pub local_offset: LocalZone,

    /// Encode observations without delivering them
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded config from {}: {} sites",
            path.display(),
            config.sites.len()
        );
        Ok(config)
    }

    /// Defaults, overlaid with the file at `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Unit table for this run
    pub fn unit_mapping(&self) -> UnitMapping {
        self.units.clone().unwrap_or_default()
    }

    /// Validate required identifiers
    pub fn validate(&self) -> Result<()> {
        if self.network.trim().is_empty() {
            return Err(Error::configuration("no FITS network given"));
        }
        if self.method.trim().is_empty() {
            return Err(Error::configuration("no FITS method given"));
        }
        if self.units.as_ref().is_some_and(UnitMapping::is_empty) {
            return Err(Error::configuration(
                "unit table is empty; omit [units] to use the built-in table",
            ));
        }
        Ok(())
    }
}
