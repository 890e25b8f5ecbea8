//! Time slot and working window models.
//!
//! # Time Model
//! All instants are naive local date-times: the caller decides which
//! timezone the schedule lives in. Durations are fractional hours at the
//! API surface and microsecond-resolution [`chrono::Duration`]s inside, so
//! packing arithmetic never accumulates floating point drift.
//!
//! # Windows
//! A [`WorkingWindow`] is a half-open interval `[start, end)`. A slot fits a
//! window iff it starts at or after the window start and ends no later
//! than the window end.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Converts fractional hours into a microsecond-resolution duration.
pub fn hours_to_delta(hours: f64) -> Duration {
    Duration::microseconds((hours * MICROS_PER_HOUR).round() as i64)
}

/// Converts a duration into fractional hours.
pub fn delta_to_hours(delta: Duration) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        None => delta.num_milliseconds() as f64 / 3_600_000.0,
    }
}

/// A concrete slot on the calendar: start plus duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start.
    pub timestamp: NaiveDateTime,
    /// Duration in hours.
    pub duration: f64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(timestamp: NaiveDateTime, duration: f64) -> Self {
        Self {
            timestamp,
            duration,
        }
    }

    /// Duration as a [`chrono::Duration`].
    #[inline]
    pub fn time_delta(&self) -> Duration {
        hours_to_delta(self.duration)
    }

    /// Slot end (exclusive).
    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.timestamp + self.time_delta()
    }

    /// Whether two slots share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.timestamp < other.end() && other.timestamp < self.end()
    }
}

/// One working period `[start, end)`.
///
/// Computed on demand by the availability manager, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (exclusive).
    pub end: NaiveDateTime,
}

impl WorkingWindow {
    /// Creates a window from its bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from its start and length in hours.
    pub fn starting_at(start: NaiveDateTime, length_hours: f64) -> Self {
        Self {
            start,
            end: start + hours_to_delta(length_hours),
        }
    }

    /// Window length in hours.
    #[inline]
    pub fn length_hours(&self) -> f64 {
        delta_to_hours(self.end - self.start)
    }

    /// Whether an instant falls within this window.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Whether the slot lies entirely inside this window.
    pub fn fits(&self, slot: &TimeSlot) -> bool {
        slot.timestamp >= self.start && slot.end() <= self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
