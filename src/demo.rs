//! Random demo workloads.
//!
//! Generates plausible task lists for benchmarks and convergence studies.
//! Driven entirely by the caller's generator, so a seeded generator gives
//! the same workload every time.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Task, HIGHEST_PRIORITY, LOWEST_PRIORITY};

/// Shortest generated duration (hours).
pub const MIN_DEMO_HOURS: f64 = 0.5;
/// Longest generated duration (hours).
pub const MAX_DEMO_HOURS: f64 = 4.0;
/// Due dates fall within this many days of `first_day`.
pub const DUE_DATE_HORIZON_DAYS: i64 = 14;
/// Locations are drawn from `0..=MAX_DEMO_LOCATION` (0 = hybrid).
pub const MAX_DEMO_LOCATION: u32 = 3;

/// Generates `n` demo tasks with uids `T0..T{n-1}`.
///
/// Durations are whole quarter hours in [0.5, 4], priorities uniform in
/// 1..=9, locations in 0..=3. Roughly `due_date_fraction` of the tasks
/// (clamped to [0, 1]) get a due date within two weeks of `first_day`.
pub fn generate_tasks<R: Rng>(
    n: usize,
    due_date_fraction: f64,
    first_day: NaiveDate,
    rng: &mut R,
) -> Vec<Task> {
    let fraction = if due_date_fraction.is_nan() {
        0.0
    } else {
        due_date_fraction.clamp(0.0, 1.0)
    };
    let min_quarters = (MIN_DEMO_HOURS * 4.0) as u32;
    let max_quarters = (MAX_DEMO_HOURS * 4.0) as u32;

    (0..n)
        .map(|i| {
            let quarters = rng.random_range(min_quarters..=max_quarters);
            let mut task = Task::new(format!("T{i}"), f64::from(quarters) / 4.0)
                .with_priority(rng.random_range(HIGHEST_PRIORITY..=LOWEST_PRIORITY))
                .with_location(rng.random_range(0..=MAX_DEMO_LOCATION));
            if rng.random_bool(fraction) {
                let offset = rng.random_range(0..DUE_DATE_HORIZON_DAYS);
                task = task.with_due_date(first_day + Duration::days(offset));
            }
            task
        })
        .collect()
}
