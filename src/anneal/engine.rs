//! Markov chain Monte Carlo / simulated annealing scheduler.
//!
//! # Algorithm
//!
//! 1. Start from the input order (identity permutation).
//! 2. For each sweep `k = 1..=sweeps`, hold `T_k` fixed and run the trial
//!    budget: propose swapping two distinct positions, evaluate the energy
//!    of the candidate, accept it by the Metropolis criterion. The first
//!    sweep runs at the start temperature; after sweep `k` the temperature
//!    is recomputed as `T0 · k^q`.
//! 3. Pack the final ordering into a schedule.
//!
//! There is no convergence detection: the run always spends its full sweep
//! budget (unless cancelled between sweeps).
//!
//! # Complexity
//! O(sweeps · trials · n): every trial re-packs all `n` tasks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::diagnostics::EnergyAccumulator;
use super::{energy, AnnealConfig, CancellationToken, SweepStats, TaskOrder};
use crate::availability::{AvailabilityManager, WindowConfig};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Schedule, Task};
use crate::scheduler::{check_input, pack, Scheduler};

/// Metropolis acceptance probability `min(exp(-delta / scale), 1)`.
///
/// Improvements and sideways moves (`delta <= 0`) are always accepted.
#[inline]
pub fn acceptance_probability(delta: f64, scale: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        (-delta / scale).exp().min(1.0)
    }
}

/// Annealing-based scheduler: the reference backend.
///
/// Owns its random generator, so runs with the same seed (or the same
/// injected generator state) are reproducible.
///
/// # Example
/// ```
/// use task_anneal::anneal::{AnnealConfig, AnnealingScheduler};
/// use task_anneal::availability::WindowConfig;
/// use task_anneal::models::Task;
/// use task_anneal::Scheduler;
///
/// let tasks = vec![
///     Task::new("write report", 3.0).with_priority(2),
///     Task::new("email", 0.5).with_priority(5),
/// ];
/// let mut scheduler = AnnealingScheduler::with_config(
///     tasks,
///     WindowConfig::default(),
///     AnnealConfig::default().with_seed(42),
/// )
/// .unwrap();
/// let schedule = scheduler.schedule().unwrap();
/// assert_eq!(schedule.len(), 2);
/// ```
#[derive(Debug)]
pub struct AnnealingScheduler<R = StdRng> {
    tasks: Vec<Task>,
    availability: AvailabilityManager,
    config: AnnealConfig,
    rng: R,
    cancellation: Option<CancellationToken>,
    energy_log: Vec<SweepStats>,
    final_energy: Option<f64>,
}

impl AnnealingScheduler<StdRng> {
    /// Creates a scheduler with default window and annealing parameters.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::from_parts(
            tasks,
            AvailabilityManager::default(),
            AnnealConfig::default(),
            StdRng::from_os_rng(),
        )
    }

    /// Creates a scheduler from explicit configuration.
    ///
    /// The generator is seeded from `config.seed`, or from the OS if unset.
    pub fn with_config(
        tasks: Vec<Task>,
        window: WindowConfig,
        config: AnnealConfig,
    ) -> ScheduleResult<Self> {
        let availability = AvailabilityManager::new(window)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(tasks, availability, config, rng)
    }
}

impl<R: Rng> AnnealingScheduler<R> {
    /// Creates a scheduler driven by an injected generator.
    ///
    /// `config.seed` is ignored; the generator's own state decides the run.
    pub fn with_rng(
        tasks: Vec<Task>,
        availability: AvailabilityManager,
        config: AnnealConfig,
        rng: R,
    ) -> ScheduleResult<Self> {
        config.validate()?;
        availability.config().validate()?;
        Ok(Self::from_parts(tasks, availability, config, rng))
    }

    fn from_parts(
        tasks: Vec<Task>,
        availability: AvailabilityManager,
        config: AnnealConfig,
        rng: R,
    ) -> Self {
        Self {
            tasks,
            availability,
            config,
            rng,
            cancellation: None,
            energy_log: Vec::new(),
            final_energy: None,
        }
    }

    /// Checks `token` before every sweep and stops when it is set.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Annealing parameters.
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Availability manager used for packing.
    pub fn availability(&self) -> &AvailabilityManager {
        &self.availability
    }

    /// Per-sweep statistics of the last run.
    pub fn energy_log(&self) -> &[SweepStats] {
        &self.energy_log
    }

    /// Energy of the ordering returned by the last successful run.
    pub fn final_energy(&self) -> Option<f64> {
        self.final_energy
    }

    /// Energy of an ordering of this scheduler's tasks.
    pub fn energy(&self, order: &TaskOrder) -> ScheduleResult<f64> {
        energy::evaluate(&self.tasks, order, &self.availability, self.config.weighting)
            .map(|e| e.total())
    }

    /// Runs the search and returns the final ordering with its energy.
    pub fn anneal(&mut self) -> ScheduleResult<(TaskOrder, f64)> {
        self.energy_log.clear();
        self.final_energy = None;

        let n = self.tasks.len();
        let mut state = TaskOrder::identity(n);
        let mut current = self.energy(&state)?;
        if n < 2 {
            self.final_energy = Some(current);
            return Ok((state, current));
        }

        let trials = self.config.trials.trials(n);
        for sweep in 1..=self.config.sweeps {
            if self.is_cancelled() {
                warn!(sweep, completed = sweep - 1, "annealing cancelled");
                return Err(ScheduleError::Cancelled {
                    completed_sweeps: sweep - 1,
                });
            }

            let temperature = self.config.temperature_at(sweep);
            let mut acc = EnergyAccumulator::new();
            for _ in 0..trials {
                let Some((i, j)) = state.propose_swap(&mut self.rng) else {
                    break;
                };
                state.swap(i, j);
                let delta = self.energy(&state)? - current;
                let scale = self.config.acceptance.scale(current, temperature);
                let accepted = delta <= 0.0
                    || self.rng.random::<f64>() < acceptance_probability(delta, scale);
                if accepted {
                    current += delta;
                } else {
                    state.swap(i, j);
                }
                acc.push(current, accepted);
            }

            let stats = acc.finish(sweep, temperature);
            debug!(
                sweep,
                temperature,
                mean_energy = stats.mean_energy,
                energy_variance = stats.energy_variance,
                acceptance_rate = stats.acceptance_rate,
                "sweep finished"
            );
            self.energy_log.push(stats);
        }

        self.final_energy = Some(current);
        Ok((state, current))
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl<R: Rng> Scheduler for AnnealingScheduler<R> {
    fn name(&self) -> &'static str {
        "annealing"
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn schedule(&mut self) -> ScheduleResult<Schedule> {
        check_input(&self.tasks, &self.availability)?;
        let (order, energy) = self.anneal()?;
        let schedule = pack(&self.tasks, &order, &self.availability)?;
        info!(
            backend = self.name(),
            tasks = self.tasks.len(),
            sweeps = self.energy_log.len(),
            energy,
            "schedule computed"
        );
        Ok(schedule)
    }
}
