//! Hilltop FITS Library
//!
//! A Rust library for converting Hilltop XML environmental time-series
//! exports into canonical FITS observation records.
//!
//! This library provides tools for:
//! - Decoding Hilltop XML documents with pluggable charset handling
//! - Extracting timestamped readings from loosely-structured `<V>` text lines
//! - Resolving source site and parameter names to canonical identifiers
//! - Assembling canonical observations with explicit skip-vs-abort semantics
//! - Encoding observations and handing them to a delivery sink

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod delivery;
        pub mod hilltop_decoder;
        pub mod mapping;
        pub mod observation_assembler;
        pub mod value_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CanonicalObservation, Document, Measurement, Reading};
pub use app::services::hilltop_decoder::{CharsetReader, decode, decode_file};
pub use app::services::mapping::{SiteMapping, UnitMapping};
pub use app::services::observation_assembler::{
    Assembly, MeasurementOutcome, ObservationAssembler, UnknownIdentifier, assemble,
};
pub use app::services::value_extractor::{LocalZone, ValueExtractor};
pub use config::Config;
pub use error::{DecodeError, ParseError};

/// Result type alias for the Hilltop processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hilltop processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Hilltop document could not be decoded
    #[error("unable to decode hilltop xml file '{file}': {source}")]
    Decode {
        file: String,
        #[source]
        source: DecodeError,
    },

    /// A value line in the document could not be parsed
    #[error("unable to recover hilltop observations from '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Observation could not be encoded for delivery
    #[error("unable to encode hilltop msg: {message}")]
    Encode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Encoded observation could not be delivered
    #[error("unable to send hilltop msg: {message}")]
    Delivery {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error for a specific file
    pub fn decode(file: impl Into<String>, source: DecodeError) -> Self {
        Self::Decode {
            file: file.into(),
            source,
        }
    }

    /// Create a parse error for a specific file
    pub fn parse(file: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            message: message.into(),
            source,
        }
    }

    /// Create a delivery error
    pub fn delivery(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Delivery {
            message: message.into(),
            source,
        }
    }

    /// Whether the error only affects the file being processed
    ///
    /// Decode and parse failures are scoped to one file; configuration,
    /// encoding and delivery failures would repeat for every file.
    pub fn is_file_scoped(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Parse { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
