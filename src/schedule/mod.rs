//! Schedule primitives for multi-day events.
//!
//! A schedule is either one list of periods shared by every day of the
//! event (uniform mode) or a map from day key to that day's own periods
//! (per-day mode). This module owns the value types and the pure helpers
//! the validators build on: time parsing, day enumeration, overlap
//! detection and per-day map reconciliation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod day_key;
mod overlap;
mod reconcile;
mod time_of_day;

pub use day_key::*;
pub use overlap::*;
pub use reconcile::*;
pub use time_of_day::*;

/// Errors raised while parsing schedule values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("End date {end} is before start date {start}")]
    ReversedRange { start: DayKey, end: DayKey },
}

/// A single time interval within one calendar day.
///
/// Times stay as the raw strings the form submitted so that malformed
/// input can be reported against the field instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Period {
    pub fn new(start_time: &str, end_time: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Minute-of-day bounds, if both times are well formed
    pub fn minutes(&self) -> Option<(u16, u16)> {
        let start = self.start_time.parse::<TimeOfDay>().ok()?;
        let end = self.end_time.parse::<TimeOfDay>().ok()?;
        Some((start.minute_of_day(), end.minute_of_day()))
    }
}

/// Per-day schedule, keyed by `YYYY-MM-DD`
pub type PeriodsByDate = BTreeMap<String, Vec<Period>>;

/// The schedule-related part of an event payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleDraft {
    pub start_date: String,
    pub end_date: String,
    pub same_time_for_all_dates: bool,
    pub default_periods: Vec<Period>,
    pub periods_by_date: PeriodsByDate,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        let today = DayKey::today().to_string();
        Self {
            start_date: today.clone(),
            end_date: today,
            same_time_for_all_dates: false,
            default_periods: Vec::new(),
            periods_by_date: PeriodsByDate::new(),
        }
    }
}

impl ScheduleDraft {
    /// Day keys spanned by the draft's range, when both dates parse and
    /// the range is not reversed.
    pub fn days(&self) -> Option<Vec<DayKey>> {
        let start = parse_event_date(&self.start_date).ok()?;
        let end = parse_event_date(&self.end_date).ok()?;
        each_day(start, end).ok()
    }

    /// Bring the per-day map in line with the current date range
    pub fn reconcile_days(&mut self) {
        if let Some(days) = self.days() {
            self.periods_by_date = reconcile_periods(&self.periods_by_date, &days);
        }
    }
}
