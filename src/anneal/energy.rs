//! Schedule energy (the objective the search minimizes).
//!
//! ```text
//! E = span_hours + Σ_p p · w(task at p)
//! ```
//!
//! - `span_hours`: first placed start to last placed end, so packing tightly
//!   into as few days as possible is rewarded.
//! - positional priority penalty: position `p` (zero-based) times the
//!   priority weight of the task there; see [`PriorityWeighting`].

use serde::{Deserialize, Serialize};

use super::{PriorityWeighting, TaskOrder};
use crate::availability::AvailabilityManager;
use crate::error::ScheduleResult;
use crate::models::{delta_to_hours, Task};

/// The two terms of the energy, kept apart for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Hours from first start to last end.
    pub span_hours: f64,
    /// Positional priority penalty.
    pub priority_penalty: f64,
}

impl EnergyBreakdown {
    /// Total energy.
    #[inline]
    pub fn total(&self) -> f64 {
        self.span_hours + self.priority_penalty
    }
}

/// Packs `tasks` in `order` and evaluates the energy.
///
/// Fails with [`crate::ScheduleError::TaskTooLong`] if any task fits no
/// window. An empty ordering has zero energy.
pub fn evaluate(
    tasks: &[Task],
    order: &TaskOrder,
    availability: &AvailabilityManager,
    weighting: PriorityWeighting,
) -> ScheduleResult<EnergyBreakdown> {
    let mut first_start = None;
    let mut last_end = None;
    for placement in availability.spread_tasks(order.tasks(tasks)) {
        let slot = placement?.slot;
        if first_start.is_none() {
            first_start = Some(slot.timestamp);
        }
        last_end = Some(slot.end());
    }

    let span_hours = match (first_start, last_end) {
        (Some(start), Some(end)) => delta_to_hours(end - start),
        _ => 0.0,
    };
    let priority_penalty = order
        .tasks(tasks)
        .enumerate()
        .map(|(position, task)| position as f64 * weighting.weight(task.priority))
        .sum();

    Ok(EnergyBreakdown {
        span_hours,
        priority_penalty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::WindowConfig;
    use crate::ScheduleError;
    use chrono::NaiveDate;

    fn manager() -> AvailabilityManager {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        AvailabilityManager::new(WindowConfig::default().with_first_day(day)).unwrap()
    }

    #[test]
    fn test_span_single_day() {
        let tasks = vec![Task::new("a", 2.0), Task::new("b", 3.0)];
        let e = evaluate(
            &tasks,
            &TaskOrder::identity(2),
            &manager(),
            PriorityWeighting::Raw,
        )
        .unwrap();
        assert!((e.span_hours - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_includes_overnight_gap() {
        // 3.5 + 2 on day one, 11 on day two starting 10:00 → 24h + 11h
        let tasks = vec![
            Task::new("1", 3.5).with_priority(1),
            Task::new("2", 2.0).with_priority(7),
            Task::new("3", 11.0).with_priority(3),
        ];
        let e = evaluate(
            &tasks,
            &TaskOrder::identity(3),
            &manager(),
            PriorityWeighting::Raw,
        )
        .unwrap();
        assert!((e.span_hours - 35.0).abs() < 1e-9);
        // 0·1 + 1·7 + 2·3
        assert!((e.priority_penalty - 13.0).abs() < 1e-12);
        assert!((e.total() - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_urgency_prefers_urgent_first() {
        let tasks = vec![
            Task::new("urgent", 1.0).with_priority(1),
            Task::new("later", 1.0).with_priority(9),
        ];
        let am = manager();
        let urgent_first = TaskOrder::identity(2);
        let urgent_last = TaskOrder::from_indices(vec![1, 0]).unwrap();

        let a = evaluate(&tasks, &urgent_first, &am, PriorityWeighting::Urgency).unwrap();
        let b = evaluate(&tasks, &urgent_last, &am, PriorityWeighting::Urgency).unwrap();
        assert!(a.total() < b.total());

        // The raw weighting ranks the other way round.
        let a = evaluate(&tasks, &urgent_first, &am, PriorityWeighting::Raw).unwrap();
        let b = evaluate(&tasks, &urgent_last, &am, PriorityWeighting::Raw).unwrap();
        assert!(a.total() > b.total());
    }

    #[test]
    fn test_empty_energy() {
        let e = evaluate(&[], &TaskOrder::identity(0), &manager(), PriorityWeighting::Urgency)
            .unwrap();
        assert_eq!(e.total(), 0.0);
    }

    #[test]
    fn test_too_long_propagates() {
        let tasks = vec![Task::new("a", 1.0), Task::new("huge", 30.0)];
        let result = evaluate(
            &tasks,
            &TaskOrder::identity(2),
            &manager(),
            PriorityWeighting::Urgency,
        );
        assert!(matches!(result, Err(ScheduleError::TaskTooLong { .. })));
    }
}
