//! Input validation for task lists.
//!
//! Checks structural integrity of the tasks before any scheduling work.
//! Detects:
//! - Empty uids
//! - Duplicate uids
//! - Non-positive or non-finite durations
//! - Priorities outside 1..=9
//!
//! Whether a task fits the working window is *not* checked here: that
//! depends on the window configuration and is reported by the
//! availability manager as [`ScheduleError::TaskTooLong`](crate::ScheduleError::TaskTooLong).

use crate::models::{Task, HIGHEST_PRIORITY, LOWEST_PRIORITY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A task has an empty uid.
    EmptyUid,
    /// Two tasks share the same uid.
    DuplicateUid,
    /// Duration is zero, negative, NaN or infinite.
    InvalidDuration,
    /// Priority is outside 1..=9.
    PriorityOutOfRange,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task list.
///
/// Checks:
/// 1. Every uid is non-empty
/// 2. No two tasks share a uid
/// 3. Every duration is finite and strictly positive
/// 4. Every priority lies in 1..=9
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut uids = HashSet::new();

    for (idx, task) in tasks.iter().enumerate() {
        if task.uid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyUid,
                format!("Task at index {idx} has an empty uid"),
            ));
        } else if !uids.insert(task.uid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUid,
                format!("Duplicate task uid: {}", task.uid),
            ));
        }

        if !task.duration.is_finite() || task.duration <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Task '{}' has invalid duration {}h (must be > 0)",
                    task.uid, task.duration
                ),
            ));
        }

        if !(HIGHEST_PRIORITY..=LOWEST_PRIORITY).contains(&task.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Task '{}' has priority {} (expected {HIGHEST_PRIORITY}..={LOWEST_PRIORITY})",
                    task.uid, task.priority
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("T1", 3.5).with_priority(1),
            Task::new("T2", 2.0).with_priority(7).with_location(2),
            Task::new("T3", 11.0).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_tasks(&sample_tasks()).is_ok());
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_uid() {
        let tasks = vec![Task::new("T1", 1.0), Task::new("T1", 2.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateUid);
        assert!(errors[0].message.contains("T1"));
    }

    #[test]
    fn test_empty_uid() {
        let tasks = vec![Task::new("", 1.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyUid));
    }

    #[test]
    fn test_invalid_durations() {
        let tasks = vec![
            Task::new("zero", 0.0),
            Task::new("negative", -1.0),
            Task::new("nan", f64::NAN),
            Task::new("inf", f64::INFINITY),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidDuration)
                .count(),
            4
        );
    }

    #[test]
    fn test_priority_out_of_range() {
        let tasks = vec![
            Task::new("low", 1.0).with_priority(0),
            Task::new("high", 1.0).with_priority(10),
            Task::new("ok", 1.0).with_priority(9),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::PriorityOutOfRange));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate uid + bad duration on the same task
        let tasks = vec![Task::new("A", 1.0), Task::new("A", 0.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
