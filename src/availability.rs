//! Daily working-window availability and task packing.
//!
//! The [`AvailabilityManager`] lays an ordered sequence of tasks out into
//! consecutive working windows, one window per calendar day.
//!
//! # Algorithm
//!
//! 1. Start a cursor at the first window's start.
//! 2. For each task, in order:
//!    - fail if the task is longer than a window (no splitting);
//!    - if it would end after the current window, move the cursor to the
//!      start of the next day's window;
//!    - place it at the cursor and advance the cursor by its duration.
//!
//! Packing is a pure function of (task order, window configuration, first
//! day): the same input always yields the same placements.
//!
//! # Complexity
//! O(n) per pass, no allocation per task.

use std::iter::FusedIterator;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{hours_to_delta, Placement, Task, TimeSlot, WorkingWindow};

/// Default start of the working day (10:00).
pub const DEFAULT_START_HOUR: u32 = 10;
/// Default working window length (14h, i.e. until midnight).
pub const DEFAULT_WINDOW_HOURS: f64 = 14.0;

/// Working window configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Time of day each window opens.
    pub start_of_day: NaiveTime,
    /// Window length in hours, in (0, 24].
    pub length_hours: f64,
    /// Day of the first window.
    pub first_day: NaiveDate,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_of_day: NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap_or_default(),
            length_hours: DEFAULT_WINDOW_HOURS,
            first_day: Local::now().date_naive(),
        }
    }
}

impl WindowConfig {
    /// Sets the time of day windows open.
    pub fn with_start_of_day(mut self, start_of_day: NaiveTime) -> Self {
        self.start_of_day = start_of_day;
        self
    }

    /// Sets the window length in hours.
    pub fn with_length_hours(mut self, length_hours: f64) -> Self {
        self.length_hours = length_hours;
        self
    }

    /// Sets the day of the first window.
    pub fn with_first_day(mut self, first_day: NaiveDate) -> Self {
        self.first_day = first_day;
        self
    }

    /// Checks the window length lies in (0, 24].
    ///
    /// Longer windows would overlap the next day's window.
    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.length_hours.is_finite() || self.length_hours <= 0.0 || self.length_hours > 24.0
        {
            return Err(ScheduleError::InvalidConfig(format!(
                "window length must be in (0, 24] hours, got {}",
                self.length_hours
            )));
        }
        Ok(())
    }
}

/// Manages the user's availability as one working window per day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AvailabilityManager {
    config: WindowConfig,
}

impl AvailabilityManager {
    /// Creates a manager from a validated configuration.
    pub fn new(config: WindowConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Window configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Window length in hours.
    #[inline]
    pub fn window_hours(&self) -> f64 {
        self.config.length_hours
    }

    /// The working window opening on `date`.
    pub fn window_on(&self, date: NaiveDate) -> WorkingWindow {
        WorkingWindow::starting_at(
            date.and_time(self.config.start_of_day),
            self.config.length_hours,
        )
    }

    /// The first working window (on `first_day`).
    pub fn starting_window(&self) -> WorkingWindow {
        self.window_on(self.config.first_day)
    }

    /// The window following `previous`, on the next calendar day.
    pub fn next_window(&self, previous: &WorkingWindow) -> WorkingWindow {
        self.window_on(previous.start.date() + Duration::days(1))
    }

    /// The window containing `instant`, if it falls inside one.
    ///
    /// A window may run past midnight, so the previous day's window is
    /// checked as well.
    pub fn window_containing(&self, instant: NaiveDateTime) -> Option<WorkingWindow> {
        let date = instant.date();
        [date, date - Duration::days(1)]
            .into_iter()
            .map(|d| self.window_on(d))
            .find(|w| w.contains(instant))
    }

    /// Fails if `task` can never fit inside a single window.
    pub fn check_fits(&self, task: &Task) -> ScheduleResult<()> {
        if task.duration > self.config.length_hours {
            return Err(ScheduleError::TaskTooLong {
                uid: task.uid.clone(),
                duration_hours: task.duration,
                window_hours: self.config.length_hours,
            });
        }
        Ok(())
    }

    /// Spreads tasks across consecutive windows, in the given order.
    ///
    /// Returns a lazy iterator yielding one placement per task. If a task is
    /// longer than a window, the iterator yields
    /// [`ScheduleError::TaskTooLong`] for it and then ends.
    pub fn spread_tasks<'a, I>(&self, tasks: I) -> SpreadTasks<'a, I::IntoIter>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let window = self.starting_window();
        SpreadTasks {
            manager: *self,
            tasks: tasks.into_iter(),
            stamp: window.start,
            window,
            finished: false,
        }
    }

    /// Spreads all tasks, returning every placement or the first error.
    pub fn spread_all<'a, I>(&self, tasks: I) -> ScheduleResult<Vec<Placement<'a>>>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        self.spread_tasks(tasks).collect()
    }

    /// Whether `slot` is free in the user's calendar.
    ///
    /// There is no source of external calendar events to check against, so
    /// this always reports the slot as unavailable.
    pub fn is_available(&self, _slot: &TimeSlot) -> bool {
        false
    }
}

/// Lazy packing iterator returned by [`AvailabilityManager::spread_tasks`].
///
/// Finite and non-restartable; fused after the input is exhausted or after
/// the first error.
#[derive(Debug, Clone)]
pub struct SpreadTasks<'a, I>
where
    I: Iterator<Item = &'a Task>,
{
    manager: AvailabilityManager,
    tasks: I,
    window: WorkingWindow,
    stamp: NaiveDateTime,
    finished: bool,
}

impl<'a, I> Iterator for SpreadTasks<'a, I>
where
    I: Iterator<Item = &'a Task>,
{
    type Item = ScheduleResult<Placement<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(task) = self.tasks.next() else {
            self.finished = true;
            return None;
        };

        if let Err(e) = self.manager.check_fits(task) {
            self.finished = true;
            return Some(Err(e));
        }

        let delta = hours_to_delta(task.duration);
        if self.stamp + delta > self.window.end {
            self.window = self.manager.next_window(&self.window);
            self.stamp = self.window.start;
        }

        let placement = Placement::new(&task.uid, TimeSlot::new(self.stamp, task.duration));
        self.stamp += delta;
        Some(Ok(placement))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.tasks.size_hint().1)
        }
    }
}

impl<'a, I> FusedIterator for SpreadTasks<'a, I> where I: Iterator<Item = &'a Task> {}
