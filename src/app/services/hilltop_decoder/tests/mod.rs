//! Test fixtures for the Hilltop decoder
//!
//! Fixtures are small inline documents shaped like real Hilltop exports.

use std::io::Write;
use tempfile::NamedTempFile;


/// A two-measurement export with UTC and local timestamps
pub fn create_test_hilltop_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<Hilltop>
<Agency>Regional Council</Agency>
<Measurement SiteName="Place">
<DataSource Name="Air Temperature" NumItems="1">
<TSType>StdSeries</TSType>
<DataType>SimpleTimeSeries</DataType>
<Interpolation>Instant</Interpolation>
<ItemInfo ItemNumber="1">
<ItemName>Air Temperature</ItemName>
<Units>degC</Units>
</ItemInfo>
</DataSource>
<Data DateFormat="UTC" NumItems="1">
<V> 27-May-15 21:30:00 2.300000</V>
<V> 27-May-15 21:45:00 2.100000</V>
</Data>
</Measurement>
<Measurement SiteName="Other Place">
<DataSource Name="Rainfall" NumItems="1">
<Interpolation>Incremental</Interpolation>
</DataSource>
<Data DateFormat="Calendar" NumItems="1">
<V>27-May-15 21:30:00 0.500000</V>
</Data>
</Measurement>
</Hilltop>
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
