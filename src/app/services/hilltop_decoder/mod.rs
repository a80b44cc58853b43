//! Hilltop XML document decoder
//!
//! This module turns one Hilltop export file into a [`Document`] tree. It
//! deliberately does not interpret `<V>` value text; that is left to the
//! value extractor so that decoding and data validation fail separately.
//!
//! ## Architecture
//!
//! - [`charset`] - Declared-encoding detection and pluggable [`CharsetReader`] hooks
//! - [`parser`] - Event-driven walk of the `Hilltop/Measurement` hierarchy
//!
//! ## Usage
//!
//! ```rust
//! use hilltop_fits::app::services::hilltop_decoder::{decode, Latin1};
//!
//! let xml = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
//! <Hilltop><Agency>Regional Council</Agency></Hilltop>"#;
//!
//! let document = decode(xml.as_bytes(), Some(&Latin1)).unwrap();
//! assert_eq!(document.agency, "Regional Council");
//! assert!(document.measurements.is_empty());
//! ```

pub mod charset;
pub mod parser;

#[cfg(test)]
pub mod tests;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::app::models::Document;
use crate::error::DecodeError;

// Re-export main types for easy access
pub use charset::{CharsetReader, Latin1};

/// Decode a byte stream as a Hilltop document
///
/// The stream is read to completion. Documents declaring a non UTF-8
/// encoding are passed through `charset`; without one they are rejected.
pub fn decode<R: Read>(
    mut input: R,
    charset: Option<&dyn CharsetReader>,
) -> Result<Document, DecodeError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let text = charset::to_native_text(bytes, charset)?;
    parser::parse_document(&text)
}

/// Open and decode a Hilltop file
pub fn decode_file(
    path: &Path,
    charset: Option<&dyn CharsetReader>,
) -> Result<Document, DecodeError> {
    debug!("Decoding hilltop file: {}", path.display());

    let file = File::open(path)?;
    let document = decode(BufReader::new(file), charset)?;

    debug!(
        "Decoded {} measurements ({} value lines) from {}",
        document.measurements.len(),
        document.raw_line_count(),
        path.display()
    );
    Ok(document)
}
