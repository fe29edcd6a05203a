//! Overlap detection for the periods of a single day.

use super::Period;

/// Returns true when any two periods of one day intersect.
///
/// Intervals are half-open, so a period ending at 11:00 and one starting
/// at 11:00 do not overlap. Periods with malformed times or with
/// `end <= start` are skipped here; they are reported by the per-period
/// checks instead.
pub fn has_overlaps(periods: &[Period]) -> bool {
    let mut slots: Vec<(u16, u16)> = periods
        .iter()
        .filter_map(Period::minutes)
        .filter(|(start, end)| start < end)
        .collect();
    // Stable, so equal starts keep their input order
    slots.sort_by_key(|(start, _)| *start);

    slots.windows(2).any(|pair| pair[1].0 < pair[0].1)
}
