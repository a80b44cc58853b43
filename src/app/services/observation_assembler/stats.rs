//! Assembly statistics and result structures
//!
//! This module provides types for tracking how many measurements resolved,
//! which identifiers were skipped, and the observations produced for one
//! document.

use serde::Serialize;

use super::outcome::UnknownIdentifier;
use crate::app::models::CanonicalObservation;

/// Assembly result with observations and skip bookkeeping
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Observations in document order, then value line order
    pub observations: Vec<CanonicalObservation>,

    /// Identifiers of measurements that were skipped
    pub skipped: Vec<UnknownIdentifier>,

    /// Counters for reporting
    pub stats: AssemblyStats,
}

/// Simple assembly statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    /// Number of measurements in the document
    pub measurements_seen: usize,

    /// Measurements whose site and parameter both resolved
    pub measurements_resolved: usize,

    /// Measurements skipped for an unknown site
    pub unknown_sites: usize,

    /// Measurements skipped for an unknown parameter
    pub unknown_parameters: usize,

    /// Readings extracted from resolved measurements
    pub readings_extracted: usize,
}

impl AssemblyStats {
    /// Total measurements skipped for either reason
    pub fn measurements_skipped(&self) -> usize {
        self.unknown_sites + self.unknown_parameters
    }

    pub(crate) fn record_skip(&mut self, unknown: &UnknownIdentifier) {
        match unknown {
            UnknownIdentifier::Site(_) => self.unknown_sites += 1,
            UnknownIdentifier::Parameter(_) => self.unknown_parameters += 1,
        }
    }
}
