//! Application constants for the Hilltop processor
//!
//! This module contains the Hilltop vocabulary, value line format,
//! and the built-in parameter mappings used throughout the application.

// =============================================================================
// Hilltop XML Vocabulary
// =============================================================================

/// Element and attribute names of the Hilltop export dialect
pub mod elements {
    pub const ROOT: &[u8] = b"Hilltop";
    pub const AGENCY: &[u8] = b"Agency";
    pub const MEASUREMENT: &[u8] = b"Measurement";
    pub const DATA_SOURCE: &[u8] = b"DataSource";
    pub const INTERPOLATION: &[u8] = b"Interpolation";
    pub const DATA: &[u8] = b"Data";
    pub const VALUE: &[u8] = b"V";

    pub const SITE_NAME_ATTR: &[u8] = b"SiteName";
    pub const NAME_ATTR: &[u8] = b"Name";
    pub const NUM_ITEMS_ATTR: &[u8] = b"NumItems";
    pub const DATE_FORMAT_ATTR: &[u8] = b"DateFormat";
}

// =============================================================================
// Value Line Format
// =============================================================================

/// `DateFormat` attribute value marking timestamps as UTC
pub const DATE_FORMAT_UTC: &str = "UTC";

/// chrono format of the date and time tokens, e.g. `27-May-15 21:30:00`
pub const HILLTOP_DATETIME_FORMAT: &str = "%d-%b-%y %H:%M:%S";

/// Lines with fewer tokens than this are filler and are skipped
pub const MIN_VALUE_TOKENS: usize = 3;

/// Fixed error estimate attached to every canonical observation
pub const OBSERVATION_ERROR_ESTIMATE: f64 = 0.0;

// =============================================================================
// Charset Labels
// =============================================================================

/// Encoding labels decoded natively without a charset reader
pub const NATIVE_ENCODING_LABELS: &[&str] = &["utf-8", "utf8"];

/// Encoding labels handled by the built-in Latin-1 charset reader
pub const LATIN1_ENCODING_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "latin1",
    "latin-1",
    "l1",
    "us-ascii",
];

// =============================================================================
// Parameter Mappings
// =============================================================================

/// Built-in Hilltop parameter name to FITS type code mappings
pub const DEFAULT_UNIT_MAPPINGS: &[(&str, &str)] = &[
    ("Air Temperature", "t"),
    ("Wind Chill", "wc"),
    ("Relative Humidity", "rh"),
    ("Rainfall", "rn"),
    ("Barometric Pressure", "ap"),
    ("Wind Direction", "wdir"),
    ("Max Gust", "wg"),
    ("Average Wind", "wm"),
];

// =============================================================================
// Logging
// =============================================================================

/// Crate name used for the default tracing filter directive
pub const LOG_TARGET: &str = "hilltop_fits";
