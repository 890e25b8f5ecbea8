//! Simulated annealing backend.
//!
//! Searches over task orderings with a Markov chain Monte Carlo walk:
//! random pairwise swaps accepted by the Metropolis criterion while the
//! temperature is lowered sweep by sweep. Each ordering is packed into
//! working windows by the [`AvailabilityManager`](crate::availability::AvailabilityManager)
//! and scored by [`energy::evaluate`].
//!
//! # Components
//!
//! - [`AnnealConfig`]: temperature, cooling, sweep/trial budget, seed
//! - [`TaskOrder`]: permutation state and swap proposal
//! - [`energy`]: span + positional priority penalty
//! - [`SweepStats`]: per-sweep temperature, mean and variance
//! - [`CancellationToken`]: stop between sweeps
//! - [`AnnealingScheduler`]: the backend itself
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod cancel;
mod config;
mod diagnostics;
pub mod energy;
mod engine;
mod order;

pub use cancel::CancellationToken;
pub use config::{AcceptanceScaling, AnnealConfig, CoolingSchedule, PriorityWeighting, TrialBudget};
pub use diagnostics::SweepStats;
pub use energy::EnergyBreakdown;
pub use engine::{acceptance_probability, AnnealingScheduler};
pub use order::TaskOrder;
