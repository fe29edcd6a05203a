//! Validation of event drafts.
//!
//! Every validator here is a pure function of its input: it never fails,
//! never performs I/O and returns the same issues for the same draft. An
//! empty issue list means the checked fields are valid.

mod basics;
mod issue;
mod media;
mod pricing;
mod schedule;

pub use basics::validate_basics;
pub use issue::{FieldPath, Issue, IssueKind};
pub use media::validate_media;
pub use pricing::validate_pricing;
pub use schedule::{check_period, validate_schedule};

use crate::event::EventDraft;

/// Tunable bounds used by the validators
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    pub title_min_len: usize,
    pub description_min_len: usize,
    pub max_tags: usize,
    pub label_max_len: usize,
    pub max_price: f64,
    pub require_agreement: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            title_min_len: 3,
            description_min_len: 20,
            max_tags: 8,
            label_max_len: 64,
            max_price: 99_999_999.0,
            require_agreement: false,
        }
    }
}

/// Validate every field group of a draft, in wizard step order
pub fn validate_event(draft: &EventDraft, limits: &Limits) -> Vec<Issue> {
    let mut issues = validate_basics(&draft.basics, limits);
    issues.extend(validate_schedule(&draft.schedule, limits));
    issues.extend(validate_pricing(&draft.pricing, limits));
    issues.extend(validate_media(&draft.media, limits));
    issues
}
