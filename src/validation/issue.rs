//! Structured validation issues and the field paths they attach to.

use serde::{Serialize, Serializer};
use std::fmt;

/// Dotted locator of a form field, e.g. `periodsByDate.2025-01-01.0.startTime`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn field(name: &str) -> Self {
        Self(vec![name.to_string()])
    }

    /// Extend the path with a map key or field name
    pub fn key(mut self, key: impl fmt::Display) -> Self {
        self.0.push(key.to_string());
        self
    }

    /// Extend the path with a list index
    pub fn index(self, index: usize) -> Self {
        self.key(index)
    }

    /// Top-level field the path points into
    pub fn root(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `self` equals `prefix` or lies underneath it
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What kind of problem an issue reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Malformed date or time string
    Parse,
    /// End date before start date
    Range,
    /// Missing or out-of-range days in per-day mode
    Completeness,
    /// Overlapping periods, or a period ending before it starts
    Consistency,
    /// No periods where at least one is required
    Emptiness,
    /// Any other field constraint (lengths, choices, amounts, URLs)
    Constraint,
}

/// A user-facing validation problem attached to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: FieldPath,
    pub message: String,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(path: FieldPath, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
