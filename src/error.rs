//! Scheduler error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while scheduling.
///
/// No variant carries a partial schedule: a run either produces a complete
/// mapping or fails with one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A single task is longer than any working window. Automatic splitting
    /// is not supported; the caller must split it or drop it.
    #[error(
        "task '{uid}' lasts {duration_hours}h, longer than the {window_hours}h working window; \
         split it into smaller chunks"
    )]
    TaskTooLong {
        uid: String,
        duration_hours: f64,
        window_hours: f64,
    },

    #[error("invalid task list: {}", join_messages(.0))]
    InvalidTasks(Vec<ValidationError>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("scheduling cancelled after {completed_sweeps} sweeps")]
    Cancelled { completed_sweeps: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
