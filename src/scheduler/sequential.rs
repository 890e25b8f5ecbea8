//! Input-order scheduler.
//!
//! Packs the tasks exactly in the order they were given, with no search.
//! This is what a front end gets when it has already ordered the list
//! itself.

use tracing::info;

use super::{check_input, pack, Scheduler};
use crate::anneal::TaskOrder;
use crate::availability::{AvailabilityManager, WindowConfig};
use crate::error::ScheduleResult;
use crate::models::{Schedule, Task};

/// Scheduler that keeps the input order.
#[derive(Debug, Clone)]
pub struct SequentialScheduler {
    tasks: Vec<Task>,
    availability: AvailabilityManager,
}

impl SequentialScheduler {
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
}

impl Scheduler for SequentialScheduler {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn schedule(&mut self) -> ScheduleResult<Schedule> {
        check_input(&self.tasks, &self.availability)?;
        let order = TaskOrder::identity(self.tasks.len());
        let schedule = pack(&self.tasks, &order, &self.availability)?;
        info!(
            backend = self.name(),
            tasks = self.tasks.len(),
            span_hours = schedule.span_hours(),
            "schedule computed"
        );
        Ok(schedule)
    }
}
