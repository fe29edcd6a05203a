//! Cross-field validation of an event's dates and period schedule.

use super::{FieldPath, Issue, IssueKind, Limits};
use crate::schedule::{each_day, has_overlaps, is_hhmm, parse_event_date, Period, ScheduleDraft};
use log::debug;
use std::collections::BTreeSet;

const OVERLAP_MESSAGE: &str = "Periods overlap; fix timings";

/// Validate the date range and schedule of a draft.
///
/// Returns every issue found, in a stable order: dates, range, then the
/// schedule of the active mode. An empty list means the schedule is valid.
pub fn validate_schedule(draft: &ScheduleDraft, limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    let start = parse_event_date(&draft.start_date);
    if start.is_err() {
        issues.push(Issue::new(
            FieldPath::field("startDate"),
            IssueKind::Parse,
            "Enter a valid start date",
        ));
    }
    let end = parse_event_date(&draft.end_date);
    if end.is_err() {
        issues.push(Issue::new(
            FieldPath::field("endDate"),
            IssueKind::Parse,
            "Enter a valid end date",
        ));
    }
    // Without both dates there is no day set to check the schedule against
    let (Ok(start), Ok(end)) = (start, end) else {
        debug!("Schedule check stopped at unparseable dates");
        return issues;
    };

    let (days, reversed) = match each_day(start, end) {
        Ok(days) => (days, false),
        Err(_) => {
            issues.push(Issue::new(
                FieldPath::field("endDate"),
                IssueKind::Range,
                "End must be after start",
            ));
            (Vec::new(), true)
        }
    };
    debug!(
        "Validating schedule over {} day(s), uniform mode: {}",
        days.len(),
        draft.same_time_for_all_dates
    );

    if draft.same_time_for_all_dates {
        // The per-day map is ignored in this mode, even when populated
        check_period_list(
            FieldPath::field("defaultPeriods"),
            &draft.default_periods,
            "Add at least one period",
            limits,
            &mut issues,
        );
    } else {
        let map_path = FieldPath::field("periodsByDate");
        let day_keys: Vec<String> = days.iter().map(ToString::to_string).collect();

        let missing: Vec<&str> = day_keys
            .iter()
            .filter(|day| !draft.periods_by_date.contains_key(day.as_str()))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            issues.push(Issue::new(
                map_path.clone(),
                IssueKind::Completeness,
                format!("Add periods for all days: missing {}", missing.join(", ")),
            ));
        }

        // A reversed range already failed; every key would look out of range
        let extras: Vec<&str> = if reversed {
            Vec::new()
        } else {
            let in_range: BTreeSet<&str> = day_keys.iter().map(String::as_str).collect();
            draft
                .periods_by_date
                .keys()
                .map(String::as_str)
                .filter(|key| !in_range.contains(key))
                .collect()
        };
        if !extras.is_empty() {
            issues.push(Issue::new(
                map_path.clone(),
                IssueKind::Completeness,
                format!("Remove dates outside range: {}", extras.join(", ")),
            ));
        }

        for day in &day_keys {
            if let Some(periods) = draft.periods_by_date.get(day) {
                check_period_list(
                    map_path.clone().key(day),
                    periods,
                    "Add at least one period for this day",
                    limits,
                    &mut issues,
                );
            }
        }

        // Out-of-range days still get their periods checked, but no scope checks
        for day in extras {
            let day_path = map_path.clone().key(day);
            for (index, period) in draft.periods_by_date[day].iter().enumerate() {
                issues.extend(check_period(&day_path.clone().index(index), period, limits));
            }
        }
    }

    debug!("Schedule validation produced {} issue(s)", issues.len());
    issues
}

/// Scope-level checks for one list of periods, followed by each period's own checks
fn check_period_list(
    path: FieldPath,
    periods: &[Period],
    empty_message: &str,
    limits: &Limits,
    issues: &mut Vec<Issue>,
) {
    if periods.is_empty() {
        issues.push(Issue::new(
            path.clone(),
            IssueKind::Emptiness,
            empty_message,
        ));
    } else if has_overlaps(periods) {
        issues.push(Issue::new(
            path.clone(),
            IssueKind::Consistency,
            OVERLAP_MESSAGE,
        ));
    }

    for (index, period) in periods.iter().enumerate() {
        issues.extend(check_period(&path.clone().index(index), period, limits));
    }
}

/// Well-formedness of a single period
pub fn check_period(path: &FieldPath, period: &Period, limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    let start_ok = is_hhmm(&period.start_time);
    if !start_ok {
        issues.push(Issue::new(
            path.clone().key("startTime"),
            IssueKind::Parse,
            "Use HH:MM",
        ));
    }
    let end_ok = is_hhmm(&period.end_time);
    if !end_ok {
        issues.push(Issue::new(
            path.clone().key("endTime"),
            IssueKind::Parse,
            "Use HH:MM",
        ));
    }
    if start_ok && end_ok {
        if let Some((start, end)) = period.minutes() {
            if end <= start {
                issues.push(Issue::new(
                    path.clone().key("endTime"),
                    IssueKind::Consistency,
                    "End time must be after start time",
                ));
            }
        }
    }

    if let Some(label) = &period.label {
        if label.chars().count() > limits.label_max_len {
            issues.push(Issue::new(
                path.clone().key("label"),
                IssueKind::Constraint,
                format!(
                    "Keep the label to {} characters or fewer",
                    limits.label_max_len
                ),
            ));
        }
    }

    issues
}
