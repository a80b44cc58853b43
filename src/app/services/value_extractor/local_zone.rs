//! Zone used for timestamps not marked as UTC

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc,
};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Interpretation of source-local Hilltop timestamps
///
/// `Host` reproduces the legacy behaviour of reading the timestamp in the
/// timezone of the running process, which differs between deployments.
/// `Fixed` pins it to an explicit UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    #[default]
    Host,
    Fixed(FixedOffset),
}

/// Furthest back a DST gap is searched for the offset in force before it
const MAX_GAP_HOURS: i64 = 24;

impl LocalZone {
    /// Resolve a civil time in this zone to a UTC instant
    ///
    /// Ambiguous times resolve to the earliest instant. A civil time inside
    /// a DST gap is read with the offset in force just before the gap, which
    /// moves it forward past the transition.
    pub fn to_utc(&self, local: &NaiveDateTime) -> DateTime<Utc> {
        let offset = match self {
            Self::Host => host_offset(local),
            Self::Fixed(offset) => *offset,
        };
        apply_offset(local, offset)
    }
}

fn host_offset(local: &NaiveDateTime) -> FixedOffset {
    resolve_offset(local, |dt| Local.offset_from_local_datetime(dt))
        .unwrap_or_else(|| Local.offset_from_utc_datetime(local))
}

/// Offset for `local`, stepping back an hour at a time out of a gap
fn resolve_offset<F>(local: &NaiveDateTime, offset_at: F) -> Option<FixedOffset>
where
    F: Fn(&NaiveDateTime) -> LocalResult<FixedOffset>,
{
    (0..=MAX_GAP_HOURS)
        .find_map(|hours| offset_at(&(*local - Duration::hours(hours))).earliest())
}

fn apply_offset(local: &NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::<Utc>::from_naive_utc_and_offset(utc, Utc)
}

impl FromStr for LocalZone {
    type Err = Error;

    /// Accepts `host`/`local`, or an offset such as `+12:00`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("host") || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Host);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::Fixed(Utc.fix()));
        }

        trimmed.parse::<FixedOffset>().map(Self::Fixed).map_err(|e| {
            Error::configuration(format!(
                "invalid local offset '{}': {} (expected 'host' or e.g. '+12:00')",
                s, e
            ))
        })
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl<'de> Deserialize<'de> for LocalZone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_zone_specs() {
        assert_eq!("host".parse::<LocalZone>().unwrap(), LocalZone::Host);
        assert_eq!("Local".parse::<LocalZone>().unwrap(), LocalZone::Host);
        assert_eq!(
            "+12:00".parse::<LocalZone>().unwrap(),
            LocalZone::Fixed(FixedOffset::east_opt(12 * 3600).unwrap())
        );
        assert_eq!(
            "-03:30".parse::<LocalZone>().unwrap(),
            LocalZone::Fixed(FixedOffset::west_opt(3 * 3600 + 1800).unwrap())
        );
        assert_eq!(
            "UTC".parse::<LocalZone>().unwrap(),
            LocalZone::Fixed(FixedOffset::east_opt(0).unwrap())
        );
        assert!("Pacific/Auckland".parse::<LocalZone>().is_err());
    }

    #[test]
    fn test_fixed_offset_conversion() {
        let zone = LocalZone::Fixed(FixedOffset::east_opt(12 * 3600).unwrap());
        let instant = zone.to_utc(&naive("2015-05-28 09:30:00"));

        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 5, 27, 21, 30, 0).unwrap());
    }

    #[test]
    fn test_host_conversion_matches_chrono_local() {
        let local = naive("2015-05-27 21:30:00");
        let expected = Local
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));

        assert_eq!(Some(LocalZone::Host.to_utc(&local)), expected);
    }

    /// +12:00 until 02:00 on 27 Sep 2015, then +13:00 from 03:00
    fn auckland_spring_forward(dt: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let standard = FixedOffset::east_opt(12 * 3600).unwrap();
        let daylight = FixedOffset::east_opt(13 * 3600).unwrap();
        if *dt < naive("2015-09-27 02:00:00") {
            LocalResult::Single(standard)
        } else if *dt < naive("2015-09-27 03:00:00") {
            LocalResult::None
        } else {
            LocalResult::Single(daylight)
        }
    }

    #[test]
    fn test_gap_uses_offset_before_transition() {
        let gap = naive("2015-09-27 02:30:00");
        let offset = resolve_offset(&gap, auckland_spring_forward).unwrap();

        assert_eq!(offset, FixedOffset::east_opt(12 * 3600).unwrap());
        assert_eq!(
            apply_offset(&gap, offset),
            Utc.with_ymd_and_hms(2015, 9, 26, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_readings_across_gap_resolve_forward() {
        let lines = ["2015-09-27 01:30:00", "2015-09-27 02:30:00", "2015-09-27 03:30:00"];
        let instants: Vec<_> = lines
            .iter()
            .map(|s| {
                let local = naive(s);
                let offset = resolve_offset(&local, auckland_spring_forward).unwrap();
                apply_offset(&local, offset)
            })
            .collect();

        assert_eq!(instants[0], Utc.with_ymd_and_hms(2015, 9, 26, 13, 30, 0).unwrap());
        assert_eq!(instants[1], Utc.with_ymd_and_hms(2015, 9, 26, 14, 30, 0).unwrap());
        assert_eq!(instants[2], Utc.with_ymd_and_hms(2015, 9, 26, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_offset_outside_gap_is_direct() {
        let offset = resolve_offset(&naive("2015-10-01 12:00:00"), auckland_spring_forward);
        assert_eq!(offset, FixedOffset::east_opt(13 * 3600));
    }
}
