//! Canonical observation assembly
//!
//! The assembler walks a decoded [`Document`](crate::app::models::Document),
//! gates every measurement on the site and unit mapping tables, and turns
//! the readings of resolved measurements into
//! [`CanonicalObservation`](crate::app::models::CanonicalObservation)s.
//!
//! Two failure categories are kept apart on purpose:
//! - an unknown site or parameter yields [`MeasurementOutcome::Skipped`]
//!   and never surfaces as an error
//! - a malformed value line yields a [`ParseError`](crate::error::ParseError)
//!   that aborts the whole document
//!
//! ## Usage
//!
//! ```rust
//! use hilltop_fits::{Document, Measurement, SiteMapping, UnitMapping, assemble};
//!
//! let document = Document {
//!     agency: "Agency".to_string(),
//!     measurements: vec![Measurement {
//!         site_name: "Place".to_string(),
//!         parameter_name: "Air Temperature".to_string(),
//!         date_format: "UTC".to_string(),
//!         raw_value_lines: vec![" 27-May-15 21:30:00 2.300000".to_string()],
//!         ..Default::default()
//!     }],
//! };
//! let sites: SiteMapping = [("Place", "PLACE_CODE")].into_iter().collect();
//!
//! let observations = assemble(&document, &sites, &UnitMapping::default(), "NT", "M").unwrap();
//! assert_eq!(observations.len(), 1);
//! assert_eq!(observations[0].type_id, "t");
//! ```

pub mod assembler;
pub mod outcome;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assembler::{ObservationAssembler, assemble};
pub use outcome::{MeasurementOutcome, UnknownIdentifier};
pub use stats::{Assembly, AssemblyStats};
