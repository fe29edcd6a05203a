//! Reconciliation of the per-day period map against a date range.

use super::{DayKey, PeriodsByDate};

/// Rebuild a per-day map for a new set of days.
///
/// Entries for days still in range are kept as they are, new days get an
/// empty list and days that fell out of the range are dropped.
pub fn reconcile_periods(current: &PeriodsByDate, days: &[DayKey]) -> PeriodsByDate {
    days.iter()
        .map(|day| {
            let key = day.to_string();
            let periods = current.get(&key).cloned().unwrap_or_default();
            (key, periods)
        })
        .collect()
}
