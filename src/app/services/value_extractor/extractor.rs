//! Line tokenizing and reading construction

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::trace;

use super::local_zone::LocalZone;
use crate::app::models::{Measurement, Reading};
use crate::constants::{HILLTOP_DATETIME_FORMAT, MIN_VALUE_TOKENS};
use crate::error::ParseError;

/// Extracts readings from a measurement's raw value lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueExtractor {
    local_zone: LocalZone,
}

impl ValueExtractor {
    /// Create an extractor that reads non-UTC timestamps in `local_zone`
    pub fn new(local_zone: LocalZone) -> Self {
        Self { local_zone }
    }

    pub fn local_zone(&self) -> LocalZone {
        self.local_zone
    }

    /// Parse every usable value line of `measurement`, in document order
    ///
    /// Lines with fewer than three tokens are skipped. The first timestamp
    /// or reading that fails to parse aborts the whole extraction.
    pub fn extract(&self, measurement: &Measurement) -> Result<Vec<Reading>, ParseError> {
        let utc = measurement.is_utc();
        let mut readings = Vec::with_capacity(measurement.raw_value_lines.len());

        for (index, raw) in measurement.raw_value_lines.iter().enumerate() {
            let line = index + 1;
            let tokens = split_value_line(raw);
            if tokens.len() < MIN_VALUE_TOKENS {
                trace!("Skipping short value line {}: {:?}", line, raw);
                continue;
            }

            let timestamp = self.parse_timestamp(line, tokens[0], tokens[1], utc)?;
            let value = parse_value(line, tokens[2])?;

            readings.push(Reading { timestamp, value });
        }

        Ok(readings)
    }

    fn parse_timestamp(
        &self,
        line: usize,
        date: &str,
        time: &str,
        utc: bool,
    ) -> Result<DateTime<Utc>, ParseError> {
        let stamp = format!("{} {}", date, time);
        if !is_hilltop_date(date) || !is_hilltop_time(time) {
            return Err(ParseError::TimestampShape { line, text: stamp });
        }

        let naive = NaiveDateTime::parse_from_str(&stamp, HILLTOP_DATETIME_FORMAT).map_err(
            |source| ParseError::Timestamp {
                line,
                text: stamp.clone(),
                source,
            },
        )?;

        if utc {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
        }
        Ok(self.local_zone.to_utc(&naive))
    }
}

fn parse_value(line: usize, text: &str) -> Result<f64, ParseError> {
    let value = text.parse::<f64>().map_err(|source| ParseError::Value {
        line,
        text: text.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(ParseError::NonFiniteValue {
            line,
            text: text.to_string(),
        });
    }
    Ok(value)
}

/// `DD-Mon-YY`, e.g. `07-May-15`
fn is_hilltop_date(date: &str) -> bool {
    match date.as_bytes() {
        [d1, d2, b'-', m1, m2, m3, b'-', y1, y2] => {
            [d1, d2, y1, y2].iter().all(|b| b.is_ascii_digit())
                && m1.is_ascii_uppercase()
                && m2.is_ascii_lowercase()
                && m3.is_ascii_lowercase()
        }
        _ => false,
    }
}

/// `HH:MM:SS`
fn is_hilltop_time(time: &str) -> bool {
    match time.as_bytes() {
        [h1, h2, b':', m1, m2, b':', s1, s2] => {
            [h1, h2, m1, m2, s1, s2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Split a raw value line into tokens
///
/// Leading whitespace is stripped, then the remainder is split on every
/// single space, so repeated spaces produce empty tokens.
pub fn split_value_line(raw: &str) -> Vec<&str> {
    raw.trim_start().split(' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, TimeZone};

    fn measurement(date_format: &str, lines: &[&str]) -> Measurement {
        Measurement {
            site_name: "Place".to_string(),
            parameter_name: "Air Temperature".to_string(),
            date_format: date_format.to_string(),
            raw_value_lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_value_line() {
        assert_eq!(
            split_value_line("  27-May-15 21:30:00 2.3"),
            vec!["27-May-15", "21:30:00", "2.3"]
        );
        assert_eq!(split_value_line("a  b"), vec!["a", "", "b"]);
        assert_eq!(split_value_line(""), vec![""]);
        assert_eq!(split_value_line("\t 1 2 3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_utc_reading() {
        let m = measurement("UTC", &[" 27-May-15 21:30:00 2.300000"]);
        let readings = ValueExtractor::default().extract(&m).unwrap();

        assert_eq!(readings.len(), 1);
        assert_eq!(
            readings[0].timestamp,
            Utc.with_ymd_and_hms(2015, 5, 27, 21, 30, 0).unwrap()
        );
        assert_eq!(readings[0].value, 2.3);
    }

    #[test]
    fn test_utc_ignores_configured_local_zone() {
        let zone = LocalZone::Fixed(FixedOffset::east_opt(12 * 3600).unwrap());
        let m = measurement("UTC", &["27-May-15 21:30:00 1.0"]);
        let readings = ValueExtractor::new(zone).extract(&m).unwrap();

        assert_eq!(
            readings[0].timestamp,
            Utc.with_ymd_and_hms(2015, 5, 27, 21, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_non_utc_uses_fixed_local_zone() {
        let zone = LocalZone::Fixed(FixedOffset::east_opt(12 * 3600).unwrap());
        let m = measurement("Calendar", &["28-May-15 09:30:00 1.0"]);
        let readings = ValueExtractor::new(zone).extract(&m).unwrap();

        assert_eq!(
            readings[0].timestamp,
            Utc.with_ymd_and_hms(2015, 5, 27, 21, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_non_utc_defaults_to_host_zone() {
        let m = measurement("", &["27-May-15 21:30:00 1.0"]);
        let readings = ValueExtractor::default().extract(&m).unwrap();

        let naive = NaiveDateTime::parse_from_str("2015-05-27 21:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(readings[0].timestamp, expected);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let m = measurement(
            "UTC",
            &[
                "",
                "   ",
                "27-May-15",
                "27-May-15 21:30:00",
                "27-May-15 21:45:00 3.5",
            ],
        );
        let readings = ValueExtractor::default().extract(&m).unwrap();

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value, 3.5);
    }

    #[test]
    fn test_order_is_preserved_without_sorting() {
        let m = measurement(
            "UTC",
            &[
                "27-May-15 22:00:00 3.0",
                "27-May-15 21:00:00 1.0",
                "27-May-15 21:00:00 1.0",
            ],
        );
        let readings = ValueExtractor::default().extract(&m).unwrap();

        let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![3.0, 1.0, 1.0]);
        assert!(readings[0].timestamp > readings[1].timestamp);
    }

    #[test]
    fn test_bad_value_is_fatal() {
        let m = measurement(
            "UTC",
            &["27-May-15 21:15:00 1.0", "27-May-15 21:30:00 not-a-number"],
        );
        let err = ValueExtractor::default().extract(&m).unwrap_err();

        match err {
            ParseError::Value { line, ref text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not-a-number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let m = measurement("UTC", &["2015-05-27 21:30:00 1.0"]);
        let err = ValueExtractor::default().extract(&m).unwrap_err();

        assert!(matches!(err, ParseError::TimestampShape { line: 1, .. }));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_double_space_shifts_tokens_and_fails() {
        // Second token is empty, so the timestamp cannot parse
        let m = measurement("UTC", &["27-May-15  21:30:00 1.0"]);
        assert!(ValueExtractor::default().extract(&m).is_err());
    }

    #[test]
    fn test_loose_timestamp_shapes_are_rejected() {
        for line in [
            "7-May-15 21:30:00 2.0",
            "07-MAY-15 21:30:00 2.0",
            "07-may-15 21:30:00 2.0",
            "07-May-15 1:30:00 2.0",
            "07-May-2015 21:30:00 2.0",
        ] {
            let m = measurement("UTC", &[line]);
            let err = ValueExtractor::default().extract(&m).unwrap_err();
            assert!(
                matches!(err, ParseError::TimestampShape { line: 1, .. }),
                "{line}: {err:?}"
            );
        }
    }

    #[test]
    fn test_well_shaped_but_invalid_date_is_timestamp_error() {
        let m = measurement("UTC", &["31-Feb-15 21:30:00 2.0"]);
        let err = ValueExtractor::default().extract(&m).unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_non_finite_readings_are_fatal() {
        for value in ["NaN", "inf", "-inf", "infinity"] {
            let line = format!("27-May-15 21:30:00 {value}");
            let m = measurement("UTC", &["27-May-15 21:15:00 1.0", line.as_str()]);
            let err = ValueExtractor::default().extract(&m).unwrap_err();

            match err {
                ParseError::NonFiniteValue { line, ref text } => {
                    assert_eq!(line, 2);
                    assert_eq!(text, value);
                }
                other => panic!("unexpected error for {value}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let m = measurement("UTC", &["27-May-15 21:30:00 4.25 1 extra"]);
        let readings = ValueExtractor::default().extract(&m).unwrap();
        assert_eq!(readings[0].value, 4.25);
    }
}
