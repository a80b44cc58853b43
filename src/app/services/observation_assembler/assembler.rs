//! Observation assembler implementation

use tracing::{debug, warn};

use super::outcome::{MeasurementOutcome, UnknownIdentifier};
use super::stats::Assembly;
use crate::app::models::{CanonicalObservation, Document, Measurement};
use crate::app::services::mapping::{SiteMapping, UnitMapping};
use crate::app::services::value_extractor::{LocalZone, ValueExtractor};
use crate::error::ParseError;

/// Assembles canonical observations from decoded Hilltop documents
///
/// The mapping tables are borrowed read-only for the lifetime of the
/// assembler, so one assembler serves every file of a run.
#[derive(Debug, Clone)]
pub struct ObservationAssembler<'a> {
    sites: &'a SiteMapping,
    units: &'a UnitMapping,
    network_id: &'a str,
    method_id: &'a str,
    extractor: ValueExtractor,
}

impl<'a> ObservationAssembler<'a> {
    /// Create an assembler reading non-UTC timestamps in the host zone
    pub fn new(
        sites: &'a SiteMapping,
        units: &'a UnitMapping,
        network_id: &'a str,
        method_id: &'a str,
    ) -> Self {
        Self {
            sites,
            units,
            network_id,
            method_id,
            extractor: ValueExtractor::default(),
        }
    }

    /// Configure the zone used for timestamps not marked as UTC
    pub fn with_local_zone(mut self, local_zone: LocalZone) -> Self {
        self.extractor = ValueExtractor::new(local_zone);
        self
    }

    /// Assemble one measurement
    ///
    /// The site is checked before the parameter; values are only parsed
    /// once both resolve.
    pub fn resolve(&self, measurement: &Measurement) -> Result<MeasurementOutcome, ParseError> {
        let Some(site_id) = self.sites.get(&measurement.site_name) else {
            return Ok(MeasurementOutcome::Skipped(UnknownIdentifier::Site(
                measurement.site_name.clone(),
            )));
        };

        let Some(type_id) = self.units.get(&measurement.parameter_name) else {
            return Ok(MeasurementOutcome::Skipped(UnknownIdentifier::Parameter(
                measurement.parameter_name.clone(),
            )));
        };

        let observations = self
            .extractor
            .extract(measurement)?
            .into_iter()
            .map(|reading| {
                CanonicalObservation::new(
                    self.network_id,
                    site_id,
                    type_id,
                    self.method_id,
                    reading,
                )
            })
            .collect();

        Ok(MeasurementOutcome::Resolved(observations))
    }

    /// Assemble every measurement of `document` in document order
    ///
    /// Unknown identifiers are logged and counted. The first parse error
    /// aborts the document and discards anything assembled so far.
    pub fn assemble(&self, document: &Document) -> Result<Assembly, ParseError> {
        let mut assembly = Assembly::default();

        for measurement in &document.measurements {
            assembly.stats.measurements_seen += 1;

            match self.resolve(measurement)? {
                MeasurementOutcome::Resolved(observations) => {
                    debug!(
                        "Resolved {} readings for site \"{}\" ({})",
                        observations.len(),
                        measurement.site_name,
                        measurement.parameter_name
                    );
                    assembly.stats.measurements_resolved += 1;
                    assembly.stats.readings_extracted += observations.len();
                    assembly.observations.extend(observations);
                }
                MeasurementOutcome::Skipped(unknown) => {
                    warn!("skipping {}", unknown);
                    assembly.stats.record_skip(&unknown);
                    assembly.skipped.push(unknown);
                }
            }
        }

        Ok(assembly)
    }
}

/// Assemble observations for `document` with the host local zone
///
/// Convenience wrapper returning only the observations.
pub fn assemble(
    document: &Document,
    sites: &SiteMapping,
    units: &UnitMapping,
    network_id: &str,
    method_id: &str,
) -> Result<Vec<CanonicalObservation>, ParseError> {
    ObservationAssembler::new(sites, units, network_id, method_id)
        .assemble(document)
        .map(|assembly| assembly.observations)
}
