use ace_events::schedule::{each_day, has_overlaps, DayKey, Period, PeriodsByDate, ScheduleDraft};
use ace_events::validation::{validate_schedule, IssueKind, Limits};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn day(s: &str) -> DayKey {
    s.parse().unwrap()
}

fn per_day(start: &str, end: &str, days: &[(&str, Vec<Period>)]) -> ScheduleDraft {
    let periods_by_date: PeriodsByDate = days
        .iter()
        .map(|(key, periods)| (key.to_string(), periods.clone()))
        .collect();
    ScheduleDraft {
        start_date: start.to_string(),
        end_date: end.to_string(),
        same_time_for_all_dates: false,
        default_periods: Vec::new(),
        periods_by_date,
    }
}

fn uniform(start: &str, end: &str, periods: Vec<Period>) -> ScheduleDraft {
    ScheduleDraft {
        start_date: start.to_string(),
        end_date: end.to_string(),
        same_time_for_all_dates: true,
        default_periods: periods,
        periods_by_date: PeriodsByDate::new(),
    }
}

#[test_case("2025-01-01", "2025-01-01", 1 ; "single day")]
#[test_case("2025-01-01", "2025-01-31", 31 ; "january")]
#[test_case("2024-02-27", "2024-03-02", 5 ; "leap february")]
#[test_case("2025-10-24", "2025-11-03", 11 ; "autumn clock change")]
fn test_enumerator_length_and_endpoints(start: &str, end: &str, expected_len: usize) {
    let days = each_day(day(start), day(end)).unwrap();
    assert_eq!(days.len(), expected_len);
    assert_eq!(days.first().unwrap().to_string(), start);
    assert_eq!(days.last().unwrap().to_string(), end);
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_overlap_examples() {
    let back_to_back = [Period::new("09:00", "10:00"), Period::new("10:00", "11:00")];
    assert!(!has_overlaps(&back_to_back));
    let overlapping = [Period::new("09:00", "10:30"), Period::new("10:00", "11:00")];
    assert!(has_overlaps(&overlapping));
    assert!(!has_overlaps(&[]));
}

#[test]
fn test_uniform_empty_defaults_single_issue() {
    let draft = uniform("2025-01-01", "2025-01-03", Vec::new());
    let issues = validate_schedule(&draft, &Limits::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path.to_string(), "defaultPeriods");
    assert_eq!(issues[0].kind, IssueKind::Emptiness);
}

#[test]
fn test_uniform_valid() {
    let periods = vec![
        Period::new("09:00", "10:00"),
        Period::new("10:00", "12:00").with_label("Workshop"),
    ];
    let draft = uniform("2025-01-01", "2025-01-03", periods);
    assert!(validate_schedule(&draft, &Limits::default()).is_empty());
}

#[test]
fn test_per_day_missing_and_extra_days() {
    let draft = per_day(
        "2025-01-01",
        "2025-01-03",
        &[
            ("2025-01-01", vec![Period::new("09:00", "10:00")]),
            ("2025-01-05", vec![Period::new("09:00", "10:00")]),
        ],
    );
    let issues = validate_schedule(&draft, &Limits::default());

    let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "periodsByDate: Add periods for all days: missing 2025-01-02, 2025-01-03",
            "periodsByDate: Remove dates outside range: 2025-01-05",
        ]
    );
    assert!(issues.iter().all(|i| i.kind == IssueKind::Completeness));
}

#[test]
fn test_per_day_overlap_scoped_to_day() {
    let overlapping = vec![Period::new("09:00", "10:00"), Period::new("09:30", "10:30")];
    let back_to_back = vec![Period::new("14:00", "15:00"), Period::new("15:00", "16:00")];
    let draft = per_day(
        "2025-01-01",
        "2025-01-03",
        &[
            ("2025-01-01", vec![Period::new("09:00", "10:00")]),
            ("2025-01-02", overlapping),
            ("2025-01-03", back_to_back),
        ],
    );
    let issues = validate_schedule(&draft, &Limits::default());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path.to_string(), "periodsByDate.2025-01-02");
    assert_eq!(issues[0].kind, IssueKind::Consistency);
}

#[test]
fn test_per_period_paths_in_per_day_mode() {
    let periods = vec![Period::new("09:00", "10:00"), Period::new("25:00", "08:00")];
    let draft = per_day("2025-01-01", "2025-01-01", &[("2025-01-01", periods)]);
    let paths: Vec<String> = validate_schedule(&draft, &Limits::default())
        .iter()
        .map(|i| i.path.to_string())
        .collect();
    assert_eq!(paths, vec!["periodsByDate.2025-01-01.1.startTime"]);
}

#[test]
fn test_timestamps_compare_by_calendar_day() {
    let draft = per_day(
        "2025-03-29T23:30:00",
        "2025-03-30T00:15",
        &[
            ("2025-03-29", vec![Period::new("09:00", "10:00")]),
            ("2025-03-30", vec![Period::new("09:00", "10:00")]),
        ],
    );
    assert!(validate_schedule(&draft, &Limits::default()).is_empty());
}

#[test]
fn test_validation_is_deterministic() {
    let reversed_and_wide = vec![Period::new("10:00", "09:00"), Period::new("08:00", "12:00")];
    let draft = per_day(
        "2025-01-01",
        "2025-01-04",
        &[
            ("2025-01-02", vec![]),
            ("2025-01-03", reversed_and_wide),
            ("2024-12-31", vec![Period::new("09:00", "10:00")]),
        ],
    );
    let first = validate_schedule(&draft, &Limits::default());
    let second = validate_schedule(&draft, &Limits::default());
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
