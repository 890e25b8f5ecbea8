//! Task scheduling by simulated annealing.
//!
//! Assigns tasks with estimated durations to concrete calendar slots inside
//! bounded daily working windows, searching for an ordering that finishes
//! early and puts urgent work first.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TimeSlot`, `WorkingWindow`,
//!   `Placement`, `Schedule`
//! - **`availability`**: Daily working windows and the lazy task packer
//! - **`anneal`**: Simulated annealing backend, its configuration and
//!   per-sweep diagnostics
//! - **`scheduler`**: The `Scheduler` contract, baseline backends, KPIs
//! - **`contract`**: Conformance checks for any backend's output
//! - **`validation`**: Input integrity checks (empty/duplicate uids, durations, priorities)
//! - **`demo`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use task_anneal::anneal::{AnnealConfig, AnnealingScheduler};
//! use task_anneal::availability::WindowConfig;
//! use task_anneal::models::Task;
//! use task_anneal::Scheduler;
//!
//! let tasks = vec![
//!     Task::new("taxes", 3.5).with_priority(1),
//!     Task::new("groceries", 2.0).with_priority(7),
//!     Task::new("thesis", 11.0).with_priority(3),
//! ];
//! let mut scheduler =
//!     AnnealingScheduler::with_config(tasks, WindowConfig::default(), AnnealConfig::default().with_seed(1))?;
//! let schedule = scheduler.schedule()?;
//! assert_eq!(schedule.len(), 3);
//! # Ok::<(), task_anneal::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod anneal;
pub mod availability;
pub mod contract;
pub mod demo;
mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use anneal::AnnealingScheduler;
pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{GreedyScheduler, Scheduler, SequentialScheduler};
