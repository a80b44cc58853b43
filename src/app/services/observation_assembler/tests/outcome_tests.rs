//! Tests for single-measurement outcomes

use super::*;
use crate::app::services::mapping::UnitMapping;
use crate::app::services::observation_assembler::{
    MeasurementOutcome, ObservationAssembler, UnknownIdentifier,
};

#[test]
fn test_unknown_site_is_checked_before_parameter() {
    let sites = create_test_sites();
    let units = UnitMapping::default();
    let assembler = ObservationAssembler::new(&sites, &units, "NT", "M");

    let measurement = create_test_measurement("Nowhere", "Unmapped", "UTC", &[]);
    let outcome = assembler.resolve(&measurement).unwrap();

    assert_eq!(
        outcome,
        MeasurementOutcome::Skipped(UnknownIdentifier::Site("Nowhere".to_string()))
    );
    assert!(outcome.is_skipped());
    assert!(outcome.observations().is_empty());
}

#[test]
fn test_resolved_with_no_readable_lines() {
    let sites = create_test_sites();
    let units = UnitMapping::default();
    let assembler = ObservationAssembler::new(&sites, &units, "NT", "M");

    let measurement = create_test_measurement("Place", "Rainfall", "UTC", &["", "filler"]);
    let outcome = assembler.resolve(&measurement).unwrap();

    assert!(!outcome.is_skipped());
    assert!(outcome.observations().is_empty());
}

#[test]
fn test_resolve_propagates_parse_errors() {
    let sites = create_test_sites();
    let units = UnitMapping::default();
    let assembler = ObservationAssembler::new(&sites, &units, "NT", "M");

    let measurement =
        create_test_measurement("Place", "Rainfall", "UTC", &["32-Foo-15 21:30:00 1.0"]);

    assert!(assembler.resolve(&measurement).is_err());
}

#[test]
fn test_unknown_identifier_messages() {
    assert_eq!(
        UnknownIdentifier::Site("X".to_string()).to_string(),
        "unknown site: \"X\""
    );
    assert_eq!(
        UnknownIdentifier::Parameter("Y".to_string()).to_string(),
        "unknown data source: \"Y\""
    );
}
