//! Identifier mapping tables
//!
//! Both tables translate a source name into a canonical FITS code by
//! case-sensitive exact match. No whitespace or case normalization is
//! applied to keys; `"Place "` and `"Place"` are different sites.
//!
//! - [`SiteMapping`] is supplied per run from configuration
//! - [`UnitMapping`] defaults to the built-in Hilltop parameter table

pub mod site_mapping;
pub mod unit_mapping;

pub use site_mapping::{SiteEntry, SiteMapping};
pub use unit_mapping::UnitMapping;
