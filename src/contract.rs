//! Conformance checks for scheduler output.
//!
//! Any backend's [`Schedule`] can be checked against the guarantees of the
//! [`Scheduler`](crate::Scheduler) contract. Used by the integration test
//! suite and available to external harnesses.
//!
//! Detects:
//! - Tasks without a slot
//! - Slots for uids that are not in the input
//! - Slots whose duration differs from the task's
//! - Slots that are not inside a single working window
//! - Overlapping slots

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityManager;
use crate::models::{Schedule, Task, TimeSlot};

/// Duration tolerance in hours (one microsecond rounding, with slack).
const DURATION_TOLERANCE: f64 = 1e-6;

/// Result of a conformance check.
pub type ContractResult = Result<(), Vec<ContractViolation>>;

/// A broken contract guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractViolation {
    /// Violation category.
    pub kind: ContractViolationKind,
    /// Uid the violation is about.
    pub uid: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractViolationKind {
    /// An input task has no slot.
    MissingTask,
    /// A slot belongs to no input task.
    UnknownTask,
    /// A slot's duration differs from its task's.
    DurationMismatch,
    /// A slot is not contained in one working window.
    OutsideWindow,
    /// Two slots overlap in time.
    Overlap,
}

impl ContractViolation {
    fn new(kind: ContractViolationKind, uid: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            uid: uid.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Checks a schedule against its input tasks and window configuration.
///
/// # Returns
/// `Ok(())` if the schedule conforms, `Err(violations)` with every issue
/// found otherwise.
pub fn check_schedule(
    tasks: &[Task],
    schedule: &Schedule,
    availability: &AvailabilityManager,
) -> ContractResult {
    let mut violations = Vec::new();
    let by_uid: HashMap<&str, &Task> = tasks.iter().map(|t| (t.uid.as_str(), t)).collect();

    for task in tasks {
        if !schedule.contains(&task.uid) {
            violations.push(ContractViolation::new(
                ContractViolationKind::MissingTask,
                &task.uid,
                format!("Task '{}' has no slot", task.uid),
            ));
        }
    }

    for (uid, slot) in schedule.iter() {
        let Some(task) = by_uid.get(uid) else {
            violations.push(ContractViolation::new(
                ContractViolationKind::UnknownTask,
                uid,
                format!("Slot for unknown task '{uid}'"),
            ));
            continue;
        };

        if (slot.duration - task.duration).abs() > DURATION_TOLERANCE {
            violations.push(ContractViolation::new(
                ContractViolationKind::DurationMismatch,
                uid,
                format!(
                    "Task '{uid}' lasts {}h but its slot lasts {}h",
                    task.duration, slot.duration
                ),
            ));
        }

        let inside = availability
            .window_containing(slot.timestamp)
            .is_some_and(|w| w.fits(slot));
        if !inside {
            violations.push(ContractViolation::new(
                ContractViolationKind::OutsideWindow,
                uid,
                format!(
                    "Slot of '{uid}' ({} + {}h) is not inside a working window",
                    slot.timestamp, slot.duration
                ),
            ));
        }
    }

    // Sweep in start order, tracking the slot that reaches furthest.
    let mut furthest: Option<(&str, &TimeSlot)> = None;
    for (uid, slot) in schedule.chronological() {
        if let Some((prev, prev_slot)) = furthest {
            if prev_slot.overlaps(slot) {
                violations.push(ContractViolation::new(
                    ContractViolationKind::Overlap,
                    uid,
                    format!("Slots of '{prev}' and '{uid}' overlap"),
                ));
            }
        }
        if furthest.map_or(true, |(_, s)| slot.end() > s.end()) {
            furthest = Some((uid, slot));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
