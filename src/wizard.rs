//! Linear multi-step event creation wizard.
//!
//! The wizard owns the draft and the current step. Edits go through
//! explicit methods and validation is recomputed from the draft on demand,
//! so there is no cached state to fall out of sync.

use crate::event::EventDraft;
use crate::schedule::{DayKey, Period};
use crate::validation::{validate_event, Issue, Limits};
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Info,
    Schedule,
    Review,
    Summary,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Info, Step::Schedule, Step::Review, Step::Summary];

    pub fn title(&self) -> &'static str {
        match self {
            Step::Info => "Event Info",
            Step::Schedule => "Schedule & Pricing",
            Step::Review => "Review & Publish",
            Step::Summary => "Summary",
        }
    }

    /// Top-level payload fields edited on this step
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Step::Info => &["title", "category", "mode", "description", "tags"],
            Step::Schedule => &[
                "startDate",
                "endDate",
                "sameTimeForAllDates",
                "defaultPeriods",
                "periodsByDate",
                "currency",
                "price",
            ],
            Step::Review => &[
                "thumbnailUrl",
                "bannerUrl",
                "videoUrl",
                "galleryUrls",
                "agree",
            ],
            Step::Summary => &[],
        }
    }

    fn position(&self) -> usize {
        Step::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Option<Step> {
        Step::ALL.get(self.position() + 1).copied()
    }

    pub fn prev(&self) -> Option<Step> {
        self.position().checked_sub(1).map(|i| Step::ALL[i])
    }

    /// Whether an issue belongs to one of this step's fields
    pub fn owns(&self, issue: &Issue) -> bool {
        issue
            .path
            .root()
            .is_some_and(|root| self.fields().contains(&root))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of asking the wizard to move forward
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Moved(Step),
    /// Issues on the current or an earlier step prevent moving on
    Blocked(Vec<Issue>),
    /// The last step passed; the draft is ready to hand off
    Submitted(EventDraft),
}

/// Which period list an edit applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodScope {
    AllDays,
    Day(DayKey),
}

impl FromStr for PeriodScope {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PeriodScope::AllDays);
        }
        s.parse::<DayKey>()
            .map(PeriodScope::Day)
            .map_err(|e| WizardError::InvalidValue {
                field: "day".to_string(),
                message: e.to_string(),
            })
    }
}

impl fmt::Display for PeriodScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodScope::AllDays => f.write_str("all days"),
            PeriodScope::Day(day) => write!(f, "{}", day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Day {0} is not part of the event's date range")]
    UnknownDay(String),
    #[error("No period #{index} for {scope}")]
    PeriodIndexOutOfRange { scope: String, index: usize },
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[derive(Debug, Clone)]
pub struct Wizard {
    draft: EventDraft,
    step: Step,
    limits: Limits,
}

impl Wizard {
    pub fn new(limits: Limits) -> Self {
        Self::with_draft(EventDraft::default(), limits)
    }

    /// Start from an existing draft, e.g. one loaded from disk
    pub fn with_draft(mut draft: EventDraft, limits: Limits) -> Self {
        if !draft.schedule.same_time_for_all_dates {
            draft.schedule.reconcile_days();
        }
        Self {
            draft,
            step: Step::Info,
            limits,
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Direct access for plain field edits that need no reconciliation
    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn is_first(&self) -> bool {
        self.step.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.step.next().is_none()
    }

    /// Completion percentage shown in the progress bar
    pub fn progress(&self) -> f32 {
        match self.step {
            Step::Info => 33.3,
            Step::Schedule => 66.6,
            Step::Review | Step::Summary => 100.0,
        }
    }

    /// All current issues of the draft
    pub fn issues(&self) -> Vec<Issue> {
        validate_event(&self.draft, &self.limits)
    }

    /// Issues belonging to one step's fields
    pub fn issues_for(&self, step: Step) -> Vec<Issue> {
        self.issues()
            .into_iter()
            .filter(|issue| step.owns(issue))
            .collect()
    }

    /// Issues on the current step and every step before it
    fn gating_issues(&self) -> Vec<Issue> {
        let reached = self.step.position() + 1;
        self.issues()
            .into_iter()
            .filter(|issue| {
                Step::ALL
                    .iter()
                    .take(reached)
                    .any(|step| step.owns(issue))
            })
            .collect()
    }

    pub fn next(&mut self) -> Advance {
        let blocking = self.gating_issues();
        if !blocking.is_empty() {
            debug!(
                "Step '{}' blocked by {} issue(s)",
                self.step,
                blocking.len()
            );
            return Advance::Blocked(blocking);
        }
        match self.step.next() {
            Some(next) => {
                info!("Advancing from '{}' to '{}'", self.step, next);
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                info!("Event draft '{}' submitted", self.draft.basics.title);
                Advance::Submitted(self.draft.clone())
            }
        }
    }

    pub fn back(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            debug!("Going back from '{}' to '{}'", self.step, prev);
            self.step = prev;
        }
        self.step
    }

    /// Return every field to its default and go back to the first step
    pub fn reset(&mut self) {
        info!("Resetting event wizard");
        *self = Self::with_draft(EventDraft::default(), self.limits.clone());
    }

    /// Change the event's dates and bring the per-day map in line with them
    pub fn set_date_range(&mut self, start: &str, end: &str) {
        self.draft.schedule.start_date = start.to_string();
        self.draft.schedule.end_date = end.to_string();
        self.draft.schedule.reconcile_days();
    }

    pub fn set_same_time_for_all_dates(&mut self, uniform: bool) {
        self.draft.schedule.same_time_for_all_dates = uniform;
        if !uniform {
            self.draft.schedule.reconcile_days();
        }
    }

    fn periods_mut(&mut self, scope: &PeriodScope) -> Result<&mut Vec<Period>, WizardError> {
        match scope {
            PeriodScope::AllDays => Ok(&mut self.draft.schedule.default_periods),
            PeriodScope::Day(day) => {
                let key = day.to_string();
                self.draft
                    .schedule
                    .periods_by_date
                    .get_mut(&key)
                    .ok_or(WizardError::UnknownDay(key))
            }
        }
    }

    pub fn add_period(&mut self, scope: &PeriodScope, period: Period) -> Result<(), WizardError> {
        debug!(
            "Adding period {}-{} to {}",
            period.start_time, period.end_time, scope
        );
        self.periods_mut(scope)?.push(period);
        Ok(())
    }

    pub fn remove_period(
        &mut self,
        scope: &PeriodScope,
        index: usize,
    ) -> Result<Period, WizardError> {
        let periods = self.periods_mut(scope)?;
        if index >= periods.len() {
            return Err(WizardError::PeriodIndexOutOfRange {
                scope: scope.to_string(),
                index,
            });
        }
        Ok(periods.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Info.next(), Some(Step::Schedule));
        assert_eq!(Step::Summary.next(), None);
        assert_eq!(Step::Info.prev(), None);
        assert_eq!(Step::Review.prev(), Some(Step::Schedule));
    }

    #[test]
    fn test_every_field_has_one_owner() {
        let mut seen = std::collections::HashSet::new();
        for step in Step::ALL {
            for field in step.fields() {
                assert!(seen.insert(*field), "{} owned twice", field);
            }
        }
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut wizard = Wizard::new(Limits::default());
        assert_eq!(wizard.back(), Step::Info);
        wizard.step = Step::Review;
        assert_eq!(wizard.back(), Step::Schedule);
    }

    #[test]
    fn test_period_scope_parse() {
        assert_eq!("ALL".parse::<PeriodScope>().unwrap(), PeriodScope::AllDays);
        assert!(matches!(
            "2025-01-01".parse::<PeriodScope>().unwrap(),
            PeriodScope::Day(_)
        ));
        assert!("tomorrow".parse::<PeriodScope>().is_err());
    }

    #[test]
    fn test_unknown_day_and_bad_index() {
        let mut wizard = Wizard::new(Limits::default());
        wizard.set_date_range("2025-01-01", "2025-01-02");

        let outside: PeriodScope = "2025-02-01".parse().unwrap();
        assert_eq!(
            wizard.add_period(&outside, Period::new("09:00", "10:00")),
            Err(WizardError::UnknownDay("2025-02-01".to_string()))
        );

        let day: PeriodScope = "2025-01-02".parse().unwrap();
        assert!(wizard
            .add_period(&day, Period::new("09:00", "10:00"))
            .is_ok());
        assert!(matches!(
            wizard.remove_period(&day, 3),
            Err(WizardError::PeriodIndexOutOfRange { index: 3, .. })
        ));
        assert_eq!(
            wizard.remove_period(&day, 0).unwrap(),
            Period::new("09:00", "10:00")
        );
    }
}
