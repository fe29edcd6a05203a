//! Validation of the ticket price and currency.

use super::{FieldPath, Issue, IssueKind, Limits};
use crate::event::{Currency, Pricing};

pub fn validate_pricing(pricing: &Pricing, limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    if pricing.currency.parse::<Currency>().is_err() {
        issues.push(Issue::new(
            FieldPath::field("currency"),
            IssueKind::Constraint,
            "Choose a currency",
        ));
    }

    let price = pricing.price;
    let message = if !price.is_finite() {
        Some("Enter a valid amount")
    } else if price < 0.0 {
        Some("Amount cannot be negative")
    } else if price > limits.max_price {
        Some("Amount too large")
    } else if !has_at_most_two_decimals(price) {
        Some("Use at most 2 decimals")
    } else {
        None
    };
    if let Some(message) = message {
        issues.push(Issue::new(
            FieldPath::field("price"),
            IssueKind::Constraint,
            message,
        ));
    }

    issues
}

// Tolerates the binary representation error of values like 0.1 + 0.2
fn has_at_most_two_decimals(price: f64) -> bool {
    let cents = price * 100.0;
    (cents - cents.round()).abs() < 1e-6
}
