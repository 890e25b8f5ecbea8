//! Priority-driven greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Sort tasks by priority (1 first), then by due date (tasks without a
//!    due date last), then by input position.
//! 2. Pack the sorted order into working windows.
//!
//! Deterministic, with no search: a fast baseline to compare the annealing
//! backend against.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n) packing.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::cmp::Ordering;

use tracing::info;

use super::{check_input, pack, Scheduler};
use crate::anneal::TaskOrder;
use crate::availability::{AvailabilityManager, WindowConfig};
use crate::error::ScheduleResult;
use crate::models::{Schedule, Task};

/// Greedy scheduler ordering by priority and due date.
///
/// # Example
///
/// ```
/// use task_anneal::models::Task;
/// use task_anneal::scheduler::GreedyScheduler;
/// use task_anneal::Scheduler;
///
/// let tasks = vec![
///     Task::new("later", 1.0).with_priority(5),
///     Task::new("now", 1.0).with_priority(1),
/// ];
/// let mut scheduler = GreedyScheduler::new(tasks);
/// let schedule = scheduler.schedule().unwrap();
/// assert!(schedule.get("now").unwrap().timestamp < schedule.get("later").unwrap().timestamp);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    tasks: Vec<Task>,
    availability: AvailabilityManager,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default working window.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            availability: AvailabilityManager::default(),
        }
    }

    /// Creates a scheduler with an explicit working window.
    pub fn with_config(tasks: Vec<Task>, window: WindowConfig) -> ScheduleResult<Self> {
        Ok(Self {
            tasks,
            availability: AvailabilityManager::new(window)?,
        })
    }

    /// Availability manager used for packing.
    pub fn availability(&self) -> &AvailabilityManager {
        &self.availability
    }

    /// The ordering this scheduler packs.
    pub fn order(&self) -> TaskOrder {
        let mut order = TaskOrder::identity(self.tasks.len());
        order.sort_by(|&a, &b| compare(&self.tasks[a], &self.tasks[b]));
        order
    }
}

/// Priority ascending, then earliest due date, undated tasks last.
fn compare(a: &Task, b: &Task) -> Ordering {
    a.priority.cmp(&b.priority).then_with(|| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

impl Scheduler for GreedyScheduler {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn schedule(&mut self) -> ScheduleResult<Schedule> {
        check_input(&self.tasks, &self.availability)?;
        let schedule = pack(&self.tasks, &self.order(), &self.availability)?;
        info!(
            backend = self.name(),
            tasks = self.tasks.len(),
            span_hours = schedule.span_hours(),
            "schedule computed"
        );
        Ok(schedule)
    }
}
