use crate::types::task::{Task, TaskId, MAX_IMPORTANCE, MIN_IMPORTANCE};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub index: usize,
    pub title: String,
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn new(
        index: usize,
        task: &Task,
        field: &'static str,
        message: String,
        severity: Severity,
    ) -> Self {
        Self {
            index,
            title: task.title.clone(),
            field,
            message,
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

pub fn validate_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<ValidationIssue> {
    let known_ids = tasks
        .iter()
        .filter_map(|task| task.id.as_ref())
        .collect::<HashSet<&TaskId>>();
    let mut seen_ids = HashSet::<&TaskId>::new();
    let mut issues = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&task.importance) {
            issues.push(ValidationIssue::new(
                index,
                task,
                "importance",
                "importance must be between 1 and 10".to_string(),
                Severity::Error,
            ));
        }
        if !task.estimated_hours.is_finite() || task.estimated_hours <= 0.0 {
            issues.push(ValidationIssue::new(
                index,
                task,
                "estimated_hours",
                "estimated hours must be positive".to_string(),
                Severity::Error,
            ));
        }
        if task.due_date.is_some_and(|due| due < now) {
            issues.push(ValidationIssue::new(
                index,
                task,
                "due_date",
                "due date cannot be in the past".to_string(),
                Severity::Error,
            ));
        }
        if let Some(id) = task.id.as_ref() {
            if !seen_ids.insert(id) {
                issues.push(ValidationIssue::new(
                    index,
                    task,
                    "id",
                    format!("duplicate task id {id}"),
                    Severity::Error,
                ));
            }
        }
        for dependency in &task.dependencies {
            if !known_ids.contains(dependency) {
                issues.push(ValidationIssue::new(
                    index,
                    task,
                    "dependencies",
                    format!("unknown dependency {dependency}"),
                    Severity::Warning,
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 8, 8, 0, 0).unwrap()
    }

    #[test]
    fn valid_batch_has_no_issues() {
        let tasks = vec![
            Task::new("a").with_id(1).with_due_date(now() + Duration::days(1)),
            Task::new("b").with_id(2).with_dependencies([1]),
        ];
        assert!(validate_tasks(&tasks, now()).is_empty());
    }

    #[test]
    fn out_of_range_fields_are_errors() {
        let tasks = vec![Task::new("bad")
            .with_importance(11)
            .with_hours(0.0)
            .with_due_date(now() - Duration::minutes(1))];
        let issues = validate_tasks(&tasks, now());
        let fields = issues.iter().map(|issue| issue.field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["importance", "estimated_hours", "due_date"]);
        assert!(issues.iter().all(ValidationIssue::is_error));
        assert_eq!(issues[0].message, "importance must be between 1 and 10");
    }

    #[test]
    fn unknown_dependency_is_only_a_warning() {
        let tasks = vec![Task::new("orphan").with_id(1).with_dependencies([42])];
        let issues = validate_tasks(&tasks, now());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "unknown dependency 42");
    }

    #[test]
    fn duplicate_ids_are_flagged_once_per_repeat() {
        let tasks = vec![
            Task::new("a").with_id(5),
            Task::new("b").with_id("5"),
            Task::new("c").with_id(6),
        ];
        let issues = validate_tasks(&tasks, now());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, 1);
        assert_eq!(issues[0].field, "id");
    }
}
