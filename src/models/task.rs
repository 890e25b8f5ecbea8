//! Task model.
//!
//! A task is a unit of work with an estimated duration that must be
//! placed, uninterrupted, inside one daily working window.
//!
//! # Priority Convention
//! Priorities run from 1 to 9 where **1 is the most urgent**. This is the
//! opposite of a "higher = more important" score, so helpers such as
//! [`Task::urgency`] are provided for code that wants a larger-is-better
//! weight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Most urgent priority value.
pub const HIGHEST_PRIORITY: u8 = 1;
/// Least urgent priority value.
pub const LOWEST_PRIORITY: u8 = 9;
/// Location tag meaning "hybrid": the task can be done anywhere.
pub const HYBRID_LOCATION: u32 = 0;

/// Larger-is-more-urgent weight of a priority: 9 for priority 1 down to 1
/// for priority 9.
#[inline]
pub fn urgency_of(priority: u8) -> u8 {
    (LOWEST_PRIORITY + 1).saturating_sub(priority)
}

/// A task to be scheduled.
///
/// Immutable for the duration of a scheduling run; schedulers only read it.
///
/// # Time Representation
/// Durations are estimated in fractional hours (`1.5` = 90 minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (unique within one scheduling run).
    pub uid: String,
    /// Estimated duration in hours.
    pub duration: f64,
    /// Priority 1..=9, 1 = highest urgency.
    pub priority: u8,
    /// Location category, [`HYBRID_LOCATION`] = no constraint.
    pub location: u32,
    /// Day the task should be finished by. `None` = no due date.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a hybrid-location task of lowest urgency without a due date.
    pub fn new(uid: impl Into<String>, duration: f64) -> Self {
        Self {
            uid: uid.into(),
            duration,
            priority: LOWEST_PRIORITY,
            location: HYBRID_LOCATION,
            due_date: None,
        }
    }

    /// Sets the priority (1 = most urgent, 9 = least).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the location category.
    pub fn with_location(mut self, location: u32) -> Self {
        self.location = location;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Urgency weight: 9 for priority 1 down to 1 for priority 9.
    #[inline]
    pub fn urgency(&self) -> u8 {
        urgency_of(self.priority)
    }

    /// Whether the task can be done at any location.
    #[inline]
    pub fn is_hybrid(&self) -> bool {
        self.location == HYBRID_LOCATION
    }
}
