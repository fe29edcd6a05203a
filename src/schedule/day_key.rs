//! Calendar day keys and date-range enumeration.
//!
//! Everything here works on civil dates (`NaiveDate`), never on instants,
//! so daylight-saving transitions and UTC offsets cannot shift a day.

use super::ScheduleError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static YMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// A calendar day identified by its canonical `YYYY-MM-DD` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in local civil time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DayKey {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !YMD.is_match(s) {
            return Err(ScheduleError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse an event start or end date into the calendar day it falls on.
///
/// Accepts a bare `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM[:SS]`, or an
/// RFC 3339 timestamp. Timestamps with an offset are converted to local
/// civil time first. The time of day is discarded.
pub fn parse_event_date(input: &str) -> Result<DayKey, ScheduleError> {
    let trimmed = input.trim();
    if let Ok(day) = trimmed.parse::<DayKey>() {
        return Ok(day);
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(DayKey(naive.date()));
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| DayKey(dt.with_timezone(&Local).date_naive()))
        .map_err(|_| ScheduleError::InvalidDate(input.to_string()))
}

/// Enumerate every day from `start` to `end`, both inclusive.
///
/// A reversed range is an error; callers decide how to treat it.
pub fn each_day(start: DayKey, end: DayKey) -> Result<Vec<DayKey>, ScheduleError> {
    if end < start {
        return Err(ScheduleError::ReversedRange { start, end });
    }
    let len = (end.0 - start.0).num_days() as usize + 1;
    let mut days = Vec::with_capacity(len);
    let mut current = Some(start);
    while let Some(day) = current.filter(|d| *d <= end) {
        days.push(day);
        current = day.succ();
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn keys(days: &[DayKey]) -> Vec<String> {
        days.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_day_key_canonical_form() {
        assert_eq!(key("2025-01-05").to_string(), "2025-01-05");
        assert!("2025-1-5".parse::<DayKey>().is_err());
        assert!("2025-02-30".parse::<DayKey>().is_err());
        assert!("05/01/2025".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_each_day_inclusive() {
        let days = each_day(key("2025-01-30"), key("2025-02-02")).unwrap();
        assert_eq!(
            keys(&days),
            vec!["2025-01-30", "2025-01-31", "2025-02-01", "2025-02-02"]
        );
    }

    #[test]
    fn test_each_day_single_day() {
        let days = each_day(key("2024-02-29"), key("2024-02-29")).unwrap();
        assert_eq!(keys(&days), vec!["2024-02-29"]);
    }

    #[test]
    fn test_each_day_crosses_dst_and_year() {
        // Spans the EU/US spring-forward weekends and a year boundary
        let days = each_day(key("2024-12-30"), key("2025-04-01")).unwrap();
        assert_eq!(days.len(), 93);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(days.first().map(ToString::to_string).unwrap(), "2024-12-30");
        assert_eq!(days.last().map(ToString::to_string).unwrap(), "2025-04-01");
    }

    #[test]
    fn test_each_day_reversed() {
        let err = each_day(key("2025-01-03"), key("2025-01-01")).unwrap_err();
        assert!(matches!(err, ScheduleError::ReversedRange { .. }));
    }

    #[test]
    fn test_parse_event_date_formats() {
        let june_first = key("2025-06-01");
        assert_eq!(parse_event_date("2025-06-01").unwrap(), june_first);
        assert_eq!(parse_event_date(" 2025-06-01 ").unwrap(), june_first);
        assert_eq!(parse_event_date("2025-06-01T23:30").unwrap(), june_first);
        assert_eq!(parse_event_date("2025-06-01T00:15:00").unwrap(), june_first);
        assert!(parse_event_date("2025-06-01T12:00:00Z").is_ok());
        assert!(parse_event_date("not a date").is_err());
        assert!(parse_event_date("").is_err());
    }

    #[test]
    fn test_day_key_serde() {
        let json = serde_json::to_string(&key("2025-01-01")).unwrap();
        assert_eq!(json, "\"2025-01-01\"");
        let back: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2025-01-01"));
    }
}
