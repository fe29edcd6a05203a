//! Wall-clock time of day in strict `HH:MM` form.

use super::ScheduleError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// Zero-padded 24-hour clock, 00:00 through 23:59
static HHMM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap());

/// Check a time string has format HH:MM (24-hour, zero padded)
pub fn is_hhmm(time: &str) -> bool {
    HHMM.is_match(time)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, in `0..=1439`
    pub fn minute_of_day(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HHMM
            .captures(s)
            .ok_or_else(|| ScheduleError::InvalidTime(s.to_string()))?;
        // The pattern already bounds both groups
        let hour = caps[1]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))?;
        let minute = caps[2]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))?;
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
