//! Scheduling domain models.
//!
//! Plain value types exchanged across the whole engine: the tasks a front
//! end hands in, the slots and windows they are packed into, and the
//! resulting schedule.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Task`] | Work item with duration, priority, location and due date |
//! | [`TimeSlot`] | Concrete start + duration on the calendar |
//! | [`WorkingWindow`] | One daily working period `[start, end)` |
//! | [`Placement`] | A task uid placed into a slot while packing |
//! | [`Schedule`] | Final uid → slot mapping |

pub(crate) mod calendar;
mod schedule;
mod task;

pub use calendar::{delta_to_hours, hours_to_delta, TimeSlot, WorkingWindow};
pub use schedule::{Placement, Schedule};
pub use task::{urgency_of, Task, HIGHEST_PRIORITY, HYBRID_LOCATION, LOWEST_PRIORITY};
