//! Annealing configuration.
//!
//! Every knob of the search is an explicit constructor-level parameter so
//! callers can trade schedule quality for latency.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::urgency_of;

/// How the temperature evolves from sweep to sweep.
///
/// `k` counts completed sweeps, starting at 1: the temperature computed for
/// `k` is the one held during sweep `k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoolingSchedule {
    /// `T_k = T0 · k^exponent`; the exponent must be ≤ 0.
    Power { exponent: f64 },
    /// `T_k = T0 · alpha^(k-1)`; alpha must be in (0, 1].
    Geometric { alpha: f64 },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Power { exponent: -1.0 }
    }
}

impl CoolingSchedule {
    /// Temperature after `completed` sweeps.
    pub fn temperature(&self, initial: f64, completed: usize) -> f64 {
        let k = completed.max(1);
        match *self {
            CoolingSchedule::Power { exponent } => initial * (k as f64).powf(exponent),
            CoolingSchedule::Geometric { alpha } => initial * alpha.powi((k - 1) as i32),
        }
    }

    fn validate(&self) -> ScheduleResult<()> {
        match *self {
            CoolingSchedule::Power { exponent } if !exponent.is_finite() || exponent > 0.0 => {
                Err(ScheduleError::InvalidConfig(format!(
                    "cooling exponent must be finite and <= 0, got {exponent}"
                )))
            }
            CoolingSchedule::Geometric { alpha } if !(alpha > 0.0 && alpha <= 1.0) => {
                Err(ScheduleError::InvalidConfig(format!(
                    "geometric cooling factor must be in (0, 1], got {alpha}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// What the Metropolis energy delta is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptanceScaling {
    /// `exp(-delta / T)`.
    #[default]
    Absolute,
    /// `exp(-delta / (E · T))`: the delta relative to the current energy.
    Relative,
}

impl AcceptanceScaling {
    /// Denominator for the acceptance exponent.
    #[inline]
    pub fn scale(&self, energy: f64, temperature: f64) -> f64 {
        match self {
            AcceptanceScaling::Absolute => temperature,
            AcceptanceScaling::Relative => energy * temperature,
        }
    }
}

/// Weight of a task's priority in the positional penalty `Σ p · w`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityWeighting {
    /// `w = 10 - priority`: urgent tasks are heavy and get pulled forward.
    #[default]
    Urgency,
    /// `w = priority`: the raw priority number.
    Raw,
}

impl PriorityWeighting {
    /// Weight of a priority value.
    #[inline]
    pub fn weight(&self, priority: u8) -> f64 {
        match self {
            PriorityWeighting::Urgency => f64::from(urgency_of(priority)),
            PriorityWeighting::Raw => f64::from(priority),
        }
    }
}

/// Number of proposal/acceptance trials per sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialBudget {
    /// `n²` trials for `n` tasks.
    #[default]
    Quadratic,
    /// A fixed number of trials regardless of task count.
    Fixed(usize),
}

impl TrialBudget {
    /// Trials per sweep for `task_count` tasks.
    pub fn trials(&self, task_count: usize) -> usize {
        match *self {
            TrialBudget::Quadratic => task_count.saturating_mul(task_count),
            TrialBudget::Fixed(trials) => trials,
        }
    }
}

/// Simulated annealing parameters.
///
/// The first sweep runs hot at `start_temperature`; after sweep `k` the
/// temperature is recomputed from `initial_temperature` and the cooling
/// schedule, so the default run holds 1.0, 0.2, 0.1, 0.0667, ...
///
/// # Example
/// ```
/// use task_anneal::anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_sweeps(20)
///     .with_cooling(CoolingSchedule::Power { exponent: -2.0 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Temperature held during the first sweep.
    pub start_temperature: f64,
    /// Base of the cooling schedule (T0).
    pub initial_temperature: f64,
    /// Cooling schedule applied across sweeps.
    pub cooling: CoolingSchedule,
    /// Number of sweeps (fixed budget, no early stopping).
    pub sweeps: usize,
    /// Trials per sweep.
    pub trials: TrialBudget,
    /// Metropolis delta scaling.
    pub acceptance: AcceptanceScaling,
    /// Priority term weighting.
    pub weighting: PriorityWeighting,
    /// Random seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            start_temperature: 1.0,
            initial_temperature: 0.2,
            cooling: CoolingSchedule::default(),
            sweeps: 10,
            trials: TrialBudget::default(),
            acceptance: AcceptanceScaling::default(),
            weighting: PriorityWeighting::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Sets the first-sweep temperature.
    pub fn with_start_temperature(mut self, temperature: f64) -> Self {
        self.start_temperature = temperature;
        self
    }

    /// Sets the cooling base temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the number of sweeps.
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Sets the trials per sweep.
    pub fn with_trials(mut self, trials: TrialBudget) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the acceptance scaling.
    pub fn with_acceptance(mut self, acceptance: AcceptanceScaling) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Sets the priority weighting.
    pub fn with_weighting(mut self, weighting: PriorityWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature held during the given (1-based) sweep.
    pub fn temperature_at(&self, sweep: usize) -> f64 {
        if sweep <= 1 {
            self.start_temperature
        } else {
            self.cooling.temperature(self.initial_temperature, sweep - 1)
        }
    }

    /// Rejects parameters that would make the search meaningless.
    pub fn validate(&self) -> ScheduleResult<()> {
        if !self.start_temperature.is_finite() || self.start_temperature <= 0.0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "start temperature must be finite and > 0, got {}",
                self.start_temperature
            )));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "initial temperature must be finite and > 0, got {}",
                self.initial_temperature
            )));
        }
        if self.sweeps == 0 {
            return Err(ScheduleError::InvalidConfig(
                "at least one sweep is required".into(),
            ));
        }
        if self.trials == TrialBudget::Fixed(0) {
            return Err(ScheduleError::InvalidConfig(
                "a fixed trial budget must be at least 1".into(),
            ));
        }
        self.cooling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.start_temperature - 1.0).abs() < 1e-12);
        assert!((config.initial_temperature - 0.2).abs() < 1e-12);
        assert_eq!(config.sweeps, 10);
        assert_eq!(config.trials, TrialBudget::Quadratic);
        assert_eq!(config.acceptance, AcceptanceScaling::Absolute);
        assert_eq!(config.weighting, PriorityWeighting::Urgency);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_power_cooling() {
        let cooling = CoolingSchedule::Power { exponent: -1.0 };
        assert!((cooling.temperature(0.2, 1) - 0.2).abs() < 1e-12);
        assert!((cooling.temperature(0.2, 2) - 0.1).abs() < 1e-12);
        assert!((cooling.temperature(0.2, 4) - 0.05).abs() < 1e-12);

        let steep = CoolingSchedule::Power { exponent: -2.0 };
        assert!((steep.temperature(1.0, 3) - 1.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_sweep_runs_hot() {
        let config = AnnealConfig::default();
        let expected = [1.0, 0.2, 0.1, 0.2 / 3.0, 0.05];
        for (k, t) in expected.iter().enumerate() {
            assert!((config.temperature_at(k + 1) - t).abs() < 1e-12, "sweep {}", k + 1);
        }
        assert!((config.temperature_at(10) - 0.2 / 9.0).abs() < 1e-12);

        let config = config.with_start_temperature(0.5);
        assert_eq!(config.temperature_at(1), 0.5);
        assert!((config.temperature_at(2) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_cooling() {
        let cooling = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((cooling.temperature(8.0, 1) - 8.0).abs() < 1e-12);
        assert!((cooling.temperature(8.0, 4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cooling_is_non_increasing() {
        let config = AnnealConfig::default();
        for k in 1..config.sweeps {
            assert!(config.temperature_at(k + 1) <= config.temperature_at(k));
        }
    }

    #[test]
    fn test_acceptance_scaling() {
        assert_eq!(AcceptanceScaling::Absolute.scale(50.0, 0.5), 0.5);
        assert_eq!(AcceptanceScaling::Relative.scale(50.0, 0.5), 25.0);
    }

    #[test]
    fn test_priority_weighting() {
        assert_eq!(PriorityWeighting::Urgency.weight(1), 9.0);
        assert_eq!(PriorityWeighting::Urgency.weight(9), 1.0);
        assert_eq!(PriorityWeighting::Raw.weight(1), 1.0);
        assert_eq!(PriorityWeighting::Raw.weight(9), 9.0);
    }

    #[test]
    fn test_urgency_weight_matches_task() {
        for priority in 1..=9 {
            let task = crate::models::Task::new("t", 1.0).with_priority(priority);
            assert_eq!(PriorityWeighting::Urgency.weight(priority), f64::from(task.urgency()));
        }
    }

    #[test]
    fn test_trial_budget() {
        assert_eq!(TrialBudget::Quadratic.trials(7), 49);
        assert_eq!(TrialBudget::Fixed(100).trials(7), 100);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            AnnealConfig::default().with_initial_temperature(0.0),
            AnnealConfig::default().with_start_temperature(-1.0),
            AnnealConfig::default().with_initial_temperature(f64::NAN),
            AnnealConfig::default().with_sweeps(0),
            AnnealConfig::default().with_trials(TrialBudget::Fixed(0)),
            AnnealConfig::default().with_cooling(CoolingSchedule::Power { exponent: 0.5 }),
            AnnealConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 }),
            AnnealConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 0.0 }),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(ScheduleError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_serde() {
        let config = AnnealConfig::default()
            .with_seed(42)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 });
        let json = serde_json::to_string(&config).unwrap();
        let back: AnnealConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
