//! Per-measurement assembly outcomes

use std::fmt;

use crate::app::models::CanonicalObservation;

/// A measurement identifier with no mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownIdentifier {
    /// `SiteName` missing from the site mapping
    Site(String),
    /// `DataSource/@Name` missing from the unit mapping
    Parameter(String),
}

impl fmt::Display for UnknownIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Site(name) => write!(f, "unknown site: \"{}\"", name),
            Self::Parameter(name) => write!(f, "unknown data source: \"{}\"", name),
        }
    }
}

/// Recoverable result of assembling one measurement
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementOutcome {
    /// Both identifiers resolved; one observation per reading
    Resolved(Vec<CanonicalObservation>),
    /// The measurement was dropped without error
    Skipped(UnknownIdentifier),
}

impl MeasurementOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Observations produced, empty when skipped
    pub fn observations(&self) -> &[CanonicalObservation] {
        match self {
            Self::Resolved(observations) => observations,
            Self::Skipped(_) => &[],
        }
    }
}
