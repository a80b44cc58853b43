//! Value extraction from Hilltop `<V>` text lines
//!
//! Each line is expected to read `DD-Mon-YY HH:MM:SS value`, separated by
//! single spaces, with optional leading whitespace. Short filler lines are
//! skipped; malformed timestamps or readings abort the extraction.

pub mod extractor;
pub mod local_zone;

pub use extractor::{ValueExtractor, split_value_line};
pub use local_zone::LocalZone;
