//! Core data structures for Hilltop processing.
//!
//! The decoded tree ([`Document`] → [`Measurement`]) mirrors the Hilltop XML
//! export, [`Reading`] is one parsed value line, and [`CanonicalObservation`]
//! is the record handed to the encoding and delivery collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT_UTC, OBSERVATION_ERROR_ESTIMATE};

/// One decoded Hilltop file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Agency that produced the export
    pub agency: String,

    /// Measurements in document order
    pub measurements: Vec<Measurement>,
}

impl Document {
    /// Total number of raw value lines across all measurements
    pub fn raw_line_count(&self) -> usize {
        self.measurements
            .iter()
            .map(|m| m.raw_value_lines.len())
            .sum()
    }
}

/// A single `<Measurement>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    /// `SiteName` attribute of the measurement
    pub site_name: String,

    /// `DataSource/@Name`, the parameter being measured
    pub parameter_name: String,

    /// `DataSource/@NumItems`; informational only, never validated
    pub num_items: Option<String>,

    /// `DataSource/Interpolation` text
    pub interpolation: String,

    /// `Data/@DateFormat`, either `UTC` or a source-local marker
    pub date_format: String,

    /// `Data/V` text nodes in document order
    pub raw_value_lines: Vec<String>,
}

impl Measurement {
    /// Whether the timestamps of this measurement are UTC
    pub fn is_utc(&self) -> bool {
        self.date_format == DATE_FORMAT_UTC
    }
}

/// A parsed value line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// The network/site/type/method/timestamp/value/error tuple expected by FITS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalObservation {
    #[serde(rename = "NetworkID")]
    pub network_id: String,

    #[serde(rename = "SiteID")]
    pub site_id: String,

    #[serde(rename = "TypeID")]
    pub type_id: String,

    #[serde(rename = "MethodID")]
    pub method_id: String,

    #[serde(rename = "DateTime")]
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "Value")]
    pub value: f64,

    #[serde(rename = "Error")]
    pub error: f64,
}

impl CanonicalObservation {
    /// Build an observation from resolved identifiers and a reading
    ///
    /// The error estimate is always [`OBSERVATION_ERROR_ESTIMATE`].
    pub fn new(
        network_id: &str,
        site_id: &str,
        type_id: &str,
        method_id: &str,
        reading: Reading,
    ) -> Self {
        Self {
            network_id: network_id.to_string(),
            site_id: site_id.to_string(),
            type_id: type_id.to_string(),
            method_id: method_id.to_string(),
            timestamp: reading.timestamp,
            value: reading.value,
            error: OBSERVATION_ERROR_ESTIMATE,
        }
    }
}
