//! Validation of the event info step: title, category, mode, description, tags.

use super::{FieldPath, Issue, IssueKind, Limits};
use crate::event::{Basics, Category, EventMode};

pub fn validate_basics(basics: &Basics, limits: &Limits) -> Vec<Issue> {
    let mut issues = Vec::new();

    if basics.title.chars().count() < limits.title_min_len {
        issues.push(Issue::new(
            FieldPath::field("title"),
            IssueKind::Constraint,
            format!("Title must be at least {} characters", limits.title_min_len),
        ));
    }
    if basics.category.parse::<Category>().is_err() {
        issues.push(Issue::new(
            FieldPath::field("category"),
            IssueKind::Constraint,
            "Choose a category",
        ));
    }
    if basics.mode.parse::<EventMode>().is_err() {
        issues.push(Issue::new(
            FieldPath::field("mode"),
            IssueKind::Constraint,
            "Select a mode",
        ));
    }
    if basics.description.chars().count() < limits.description_min_len {
        issues.push(Issue::new(
            FieldPath::field("description"),
            IssueKind::Constraint,
            format!("Write at least {} characters", limits.description_min_len),
        ));
    }

    if basics.tags.len() > limits.max_tags {
        issues.push(Issue::new(
            FieldPath::field("tags"),
            IssueKind::Constraint,
            format!("Use at most {} tags", limits.max_tags),
        ));
    }
    for (index, tag) in basics.tags.iter().enumerate() {
        if tag.trim().is_empty() {
            issues.push(Issue::new(
                FieldPath::field("tags").index(index),
                IssueKind::Constraint,
                "Tags cannot be empty",
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Basics {
        Basics {
            title: "RustConf Day".to_string(),
            category: "Education".to_string(),
            mode: "Hybrid".to_string(),
            description: "Two days of talks and workshops about Rust.".to_string(),
            tags: vec!["rust".to_string()],
        }
    }

    #[test]
    fn test_valid_basics() {
        assert!(validate_basics(&valid(), &Limits::default()).is_empty());
    }

    #[test]
    fn test_each_field_reported() {
        let basics = Basics {
            title: "ab".to_string(),
            category: "Party".to_string(),
            mode: "online".to_string(),
            description: "too short".to_string(),
            tags: vec!["ok".to_string(), " ".to_string()],
        };
        let paths: Vec<String> = validate_basics(&basics, &Limits::default())
            .iter()
            .map(|i| i.path.to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["title", "category", "mode", "description", "tags.1"]
        );
    }

    #[test]
    fn test_length_counts_surrounding_whitespace() {
        let basics = Basics {
            title: " ab".to_string(),
            description: format!("{:>20}", "short"),
            ..valid()
        };
        assert!(validate_basics(&basics, &Limits::default()).is_empty());

        let basics = Basics {
            title: "ab".to_string(),
            ..valid()
        };
        let issues = validate_basics(&basics, &Limits::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Title must be at least 3 characters");
    }

    #[test]
    fn test_tag_limit() {
        let basics = Basics {
            tags: (0..9).map(|i| format!("tag{}", i)).collect(),
            ..valid()
        };
        let issues = validate_basics(&basics, &Limits::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Use at most 8 tags");
    }
}
