//! Tests for the observation assembler
//!
//! This module provides fixtures shared by the assembler test modules.

pub mod outcome_tests;

use crate::app::models::{Document, Measurement};
use crate::app::services::mapping::SiteMapping;

/// Create a measurement with the given identifiers and value lines
pub fn create_test_measurement(
    site_name: &str,
    parameter_name: &str,
    date_format: &str,
    lines: &[&str],
) -> Measurement {
    Measurement {
        site_name: site_name.to_string(),
        parameter_name: parameter_name.to_string(),
        num_items: Some("1".to_string()),
        interpolation: "Instant".to_string(),
        date_format: date_format.to_string(),
        raw_value_lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

/// Create a document from measurements
pub fn create_test_document(measurements: Vec<Measurement>) -> Document {
    Document {
        agency: "Test Agency".to_string(),
        measurements,
    }
}

/// Site mapping covering the `Place` fixture site
pub fn create_test_sites() -> SiteMapping {
    [("Place", "PLACE_CODE"), ("Other Place", "OTHER_CODE")]
        .into_iter()
        .collect()
}
