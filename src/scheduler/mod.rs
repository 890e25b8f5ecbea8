//! Scheduler contract, baseline backends and KPI evaluation.
//!
//! Every backend implements [`Scheduler`]: it is built from an ordered task
//! list and produces a complete [`Schedule`] or a [`ScheduleError`]. The
//! backends differ only in which ordering they hand to the availability
//! manager, so the same guarantees hold for all of them:
//!
//! - every input task appears exactly once, keyed by uid;
//! - every slot lies inside one working window;
//! - a task longer than the window fails the whole run with
//!   [`ScheduleError::TaskTooLong`], before any search.
//!
//! | Backend | Ordering |
//! |---------|----------|
//! | [`AnnealingScheduler`](crate::anneal::AnnealingScheduler) | simulated annealing over permutations |
//! | [`GreedyScheduler`] | priority, then due date, then input order |
//! | [`SequentialScheduler`] | input order |
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod greedy;
mod kpi;
mod sequential;

pub use greedy::GreedyScheduler;
pub use kpi::ScheduleKpi;
pub use sequential::SequentialScheduler;

use crate::anneal::TaskOrder;
use crate::availability::AvailabilityManager;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Schedule, Task};
use crate::validation::validate_tasks;

/// A scheduling backend.
///
/// Implementations own their task list and may keep per-run state (the
/// annealing backend keeps its random generator and energy log), hence
/// `&mut self`.
pub trait Scheduler {
    /// Short backend name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Tasks this backend schedules, in input order.
    fn tasks(&self) -> &[Task];

    /// Computes a complete schedule.
    fn schedule(&mut self) -> ScheduleResult<Schedule>;
}

/// Rejects malformed tasks and tasks that fit no window.
pub(crate) fn check_input(tasks: &[Task], availability: &AvailabilityManager) -> ScheduleResult<()> {
    validate_tasks(tasks).map_err(ScheduleError::InvalidTasks)?;
    tasks.iter().try_for_each(|task| availability.check_fits(task))
}

/// Packs `tasks` in `order` into an owned schedule.
pub(crate) fn pack(
    tasks: &[Task],
    order: &TaskOrder,
    availability: &AvailabilityManager,
) -> ScheduleResult<Schedule> {
    availability
        .spread_tasks(order.tasks(tasks))
        .map(|placement| placement.map(|p| p.into_owned()))
        .collect()
}
