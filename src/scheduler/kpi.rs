//! Schedule quality metrics (KPIs).
//!
//! Computes comparison indicators from a completed schedule and its input
//! tasks, so backends can be ranked on more than their own energy.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Span | First start to last end (hours) |
//! | Busy hours | Sum of task durations |
//! | Days used | Distinct working windows touched |
//! | Tardy count | Tasks ending after their due date's end of day |
//! | On-Time Rate | Fraction of dated tasks meeting their due date |
//! | Maximum Tardiness | Largest single delay (hours) |
//! | Location changes | Consecutive tasks at different fixed locations |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityManager;
use crate::models::{delta_to_hours, Schedule, Task};

/// Schedule performance indicators.
///
/// All time values are in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// First start to last end.
    pub span_hours: f64,
    /// Total scheduled work.
    pub busy_hours: f64,
    /// Number of distinct working windows used; slots outside every window
    /// are not counted.
    pub days_used: usize,
    /// Tasks finishing after their due date.
    pub tardy_count: usize,
    /// Fraction of tasks finishing on time (0.0..=1.0); undated tasks count
    /// as on time.
    pub on_time_rate: f64,
    /// Largest tardiness of any single task.
    pub max_tardiness_hours: f64,
    /// Switches between two different non-hybrid locations.
    pub location_changes: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input tasks.
    ///
    /// Tasks missing from the schedule are ignored.
    pub fn calculate(schedule: &Schedule, tasks: &[Task], availability: &AvailabilityManager) -> Self {
        let by_uid: HashMap<&str, &Task> = tasks.iter().map(|t| (t.uid.as_str(), t)).collect();

        let mut tardy_count = 0;
        let mut max_tardiness_hours: f64 = 0.0;
        let mut counted = 0;
        let mut windows = BTreeSet::new();
        let mut location_changes = 0;
        let mut last_location = None;

        for (uid, slot) in schedule.chronological() {
            let Some(task) = by_uid.get(uid) else {
                continue;
            };
            counted += 1;

            if let Some(window) = availability.window_containing(slot.timestamp) {
                windows.insert(window.start);
            }

            if let Some(due) = task.due_date.and_then(|d| d.succ_opt()) {
                let deadline = due.and_time(NaiveTime::MIN);
                if slot.end() > deadline {
                    tardy_count += 1;
                    max_tardiness_hours = max_tardiness_hours.max(delta_to_hours(slot.end() - deadline));
                }
            }

            if !task.is_hybrid() {
                if last_location.is_some_and(|prev| prev != task.location) {
                    location_changes += 1;
                }
                last_location = Some(task.location);
            }
        }

        let on_time_rate = if counted == 0 {
            1.0
        } else {
            (counted - tardy_count) as f64 / counted as f64
        };

        Self {
            span_hours: schedule.span_hours(),
            busy_hours: schedule.busy_hours(),
            days_used: windows.len(),
            tardy_count,
            on_time_rate,
            max_tardiness_hours,
            location_changes,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_tardiness_hours: f64, max_days: usize) -> bool {
        self.max_tardiness_hours <= max_tardiness_hours && self.days_used <= max_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::WindowConfig;
    use crate::models::TimeSlot;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn manager() -> AvailabilityManager {
        AvailabilityManager::new(WindowConfig::default().with_first_day(day(15))).unwrap()
    }

    #[test]
    fn test_kpi_basic() {
        let tasks = vec![Task::new("J1", 1.0), Task::new("J2", 2.0)];
        let mut schedule = Schedule::new();
        schedule.insert("J1", TimeSlot::new(at(15, 10), 1.0));
        schedule.insert("J2", TimeSlot::new(at(15, 11), 2.0));

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &manager());
        assert!((kpi.span_hours - 3.0).abs() < 1e-9);
        assert!((kpi.busy_hours - 3.0).abs() < 1e-9);
        assert_eq!(kpi.days_used, 1);
        assert_eq!(kpi.tardy_count, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_tardiness() {
        let tasks = vec![
            // Due on the 15th, ends 12:00 on the 16th: 12h late
            Task::new("J1", 2.0).with_due_date(day(15)),
            Task::new("J2", 1.0).with_due_date(day(20)),
        ];
        let mut schedule = Schedule::new();
        schedule.insert("J1", TimeSlot::new(at(16, 10), 2.0));
        schedule.insert("J2", TimeSlot::new(at(16, 12), 1.0));

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &manager());
        assert_eq!(kpi.tardy_count, 1);
        assert!((kpi.max_tardiness_hours - 12.0).abs() < 1e-9);
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_due_day_is_inclusive() {
        let tasks = vec![Task::new("J1", 2.0).with_due_date(day(15))];
        let mut schedule = Schedule::new();
        schedule.insert("J1", TimeSlot::new(at(15, 22), 2.0));
        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &manager());
        assert_eq!(kpi.tardy_count, 0);
    }

    #[test]
    fn test_days_used_counts_windows() {
        // 12:00 + 14h windows close at 02:00, so 01:00 on the 16th belongs
        // to the 15th's window.
        let late = AvailabilityManager::new(
            WindowConfig::default()
                .with_first_day(day(14))
                .with_start_of_day(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
        )
        .unwrap();
        let tasks = vec![Task::new("a", 1.0), Task::new("b", 1.0), Task::new("c", 1.0)];
        let mut schedule = Schedule::new();
        schedule.insert("a", TimeSlot::new(at(14, 12), 1.0));
        schedule.insert("b", TimeSlot::new(at(16, 1), 1.0));
        schedule.insert("c", TimeSlot::new(at(15, 20), 1.0));
        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &late);
        assert_eq!(kpi.days_used, 2);

        schedule.insert("c", TimeSlot::new(at(16, 12), 1.0));
        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &late);
        assert_eq!(kpi.days_used, 3);
    }

    #[test]
    fn test_location_changes_skip_hybrid() {
        let tasks = vec![
            Task::new("a", 1.0).with_location(1),
            Task::new("b", 1.0),
            Task::new("c", 1.0).with_location(1),
            Task::new("d", 1.0).with_location(2),
            Task::new("e", 1.0).with_location(1),
        ];
        let mut schedule = Schedule::new();
        for (i, t) in tasks.iter().enumerate() {
            schedule.insert(t.uid.clone(), TimeSlot::new(at(15, 10 + i as u32), 1.0));
        }
        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &manager());
        // 1 → (hybrid) → 1 → 2 → 1
        assert_eq!(kpi.location_changes, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[], &manager());
        assert_eq!(kpi.span_hours, 0.0);
        assert_eq!(kpi.days_used, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let tasks = vec![Task::new("J1", 2.0).with_due_date(day(15))];
        let mut schedule = Schedule::new();
        schedule.insert("J1", TimeSlot::new(at(16, 10), 2.0));

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, &manager());
        assert!(kpi.meets_thresholds(12.0, 1));
        assert!(!kpi.meets_thresholds(11.5, 1));
        assert!(!kpi.meets_thresholds(12.0, 0));
    }
}
