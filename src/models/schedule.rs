//! Schedule (solution) model.
//!
//! A schedule maps every task uid to exactly one time slot. While packing,
//! the availability manager yields borrowed [`Placement`]s; a finished run
//! is collected into an owned [`Schedule`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TimeSlot;
use chrono::NaiveDateTime;

/// A task placed into a slot, borrowing the task's uid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    /// Uid of the placed task.
    pub uid: &'a str,
    /// Assigned slot.
    pub slot: TimeSlot,
}

impl<'a> Placement<'a> {
    /// Creates a placement.
    pub fn new(uid: &'a str, slot: TimeSlot) -> Self {
        Self { uid, slot }
    }

    /// Converts into an owned `(uid, slot)` pair.
    pub fn into_owned(self) -> (String, TimeSlot) {
        (self.uid.to_string(), self.slot)
    }
}

/// A complete schedule: task uid → time slot.
///
/// Keys are kept sorted so that serialized schedules are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    slots: BTreeMap<String, TimeSlot>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects placements into a schedule.
    pub fn from_placements<'a>(placements: impl IntoIterator<Item = Placement<'a>>) -> Self {
        placements.into_iter().map(Placement::into_owned).collect()
    }

    /// Assigns a slot to a uid, returning the previous slot if any.
    pub fn insert(&mut self, uid: impl Into<String>, slot: TimeSlot) -> Option<TimeSlot> {
        self.slots.insert(uid.into(), slot)
    }

    /// Slot assigned to a uid.
    pub fn get(&self, uid: &str) -> Option<&TimeSlot> {
        self.slots.get(uid)
    }

    /// Whether a uid has been assigned.
    pub fn contains(&self, uid: &str) -> bool {
        self.slots.contains_key(uid)
    }

    /// Number of assigned tasks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing has been assigned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates `(uid, slot)` in uid order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeSlot)> {
        self.slots.iter().map(|(uid, slot)| (uid.as_str(), slot))
    }

    /// Assigned uids in uid order.
    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Assignments sorted by start time (ties by uid).
    pub fn chronological(&self) -> Vec<(&str, &TimeSlot)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.1.timestamp.cmp(&b.1.timestamp).then(a.0.cmp(b.0)));
        entries
    }

    /// Earliest slot start.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.slots.values().map(|s| s.timestamp).min()
    }

    /// Latest slot end.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.slots.values().map(TimeSlot::end).max()
    }

    /// Hours from the earliest start to the latest end, 0 when empty.
    pub fn span_hours(&self) -> f64 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => super::calendar::delta_to_hours(end - start),
            _ => 0.0,
        }
    }

    /// Sum of all slot durations (hours).
    pub fn busy_hours(&self) -> f64 {
        self.slots.values().map(|s| s.duration).sum()
    }

    /// Consumes the schedule, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<String, TimeSlot> {
        self.slots
    }
}

impl FromIterator<(String, TimeSlot)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (String, TimeSlot)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<'s> IntoIterator for &'s Schedule {
    type Item = (&'s String, &'s TimeSlot);
    type IntoIter = std::collections::btree_map::Iter<'s, String, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
