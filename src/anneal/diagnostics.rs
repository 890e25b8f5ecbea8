//! Per-sweep convergence diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics of one annealing sweep.
///
/// Mean and variance are taken over the current energy after every trial
/// of the sweep, which is what convergence plots are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepStats {
    /// Sweep number (1-based).
    pub sweep: usize,
    /// Temperature held during the sweep.
    pub temperature: f64,
    /// Mean energy over the sweep.
    pub mean_energy: f64,
    /// Population variance of the energy over the sweep.
    pub energy_variance: f64,
    /// Fraction of proposals accepted (0.0..=1.0).
    pub acceptance_rate: f64,
}

impl SweepStats {
    /// The `(temperature, mean, variance)` triple used for plotting.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.temperature, self.mean_energy, self.energy_variance)
    }
}

/// Running mean/variance (Welford's online algorithm).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EnergyAccumulator {
    count: usize,
    mean: f64,
    m2: f64,
    accepted: usize,
}

impl EnergyAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the energy after one trial.
    pub(crate) fn push(&mut self, energy: f64, accepted: bool) {
        self.count += 1;
        if accepted {
            self.accepted += 1;
        }
        let delta = energy - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (energy - self.mean);
    }

    pub(crate) fn finish(&self, sweep: usize, temperature: f64) -> SweepStats {
        let (variance, acceptance_rate) = if self.count == 0 {
            (0.0, 0.0)
        } else {
            (
                self.m2 / self.count as f64,
                self.accepted as f64 / self.count as f64,
            )
        };
        SweepStats {
            sweep,
            temperature,
            mean_energy: self.mean,
            energy_variance: variance,
            acceptance_rate,
        }
    }
}
