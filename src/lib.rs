//! Event creation core: multi-day schedule validation, period overlap
//! detection and a linear step wizard, with a terminal front end.

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod event;
pub mod schedule;
pub mod validation;
pub mod wizard;

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use event::EventDraft;
pub use schedule::{each_day, has_overlaps, reconcile_periods, DayKey, Period, ScheduleDraft};
pub use validation::{validate_event, validate_schedule, FieldPath, Issue, IssueKind, Limits};
pub use wizard::{Advance, Step, Wizard};
