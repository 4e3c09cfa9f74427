//! Fluent builder for sweep configurations
//!
//! Starts from the reference scenario defaults; every setter overrides one
//! knob. `build()` validates, so a `SweepConfig` obtained here is ready to
//! run.

use crate::config::{SweepConfig, TrialConfig};
use crate::error::ConfigError;
use crate::model::{LatencyProfile, RotationCadence, RotationMode};

#[derive(Debug, Clone, Default)]
pub struct SweepBuilder {
    config: SweepConfig,
}

impl SweepBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn days(mut self, days: u32) -> Self {
        self.config.trial.days = days;
        self
    }

    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn modes(mut self, modes: impl IntoIterator<Item = RotationMode>) -> Self {
        self.config.modes = modes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn rotation_periods(mut self, periods: impl IntoIterator<Item = u32>) -> Self {
        self.config.rotation_periods = periods.into_iter().collect();
        self
    }

    #[must_use]
    pub fn team_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.config.team_sizes = sizes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn rotation_cadence(mut self, cadence: RotationCadence) -> Self {
        self.config.trial.rotation_cadence = cadence;
        self
    }

    /// Daily probability of infection from the population at large.
    #[must_use]
    pub fn community_infection(mut self, p: f64) -> Self {
        self.config.trial.p_community = p;
        self
    }

    /// Per-contact probability of infection from an infectious coworker.
    #[must_use]
    pub fn coworker_infection(mut self, p: f64) -> Self {
        self.config.trial.p_coworker = p;
        self
    }

    /// Daily probability of quarantine once symptoms have appeared.
    #[must_use]
    pub fn quarantine_probability(mut self, p: f64) -> Self {
        self.config.trial.p_quarantine = p;
        self
    }

    #[must_use]
    pub fn infectious_latency(mut self, profile: LatencyProfile) -> Self {
        self.config.trial.infectious_latency = profile;
        self
    }

    #[must_use]
    pub fn symptom_latency(mut self, profile: LatencyProfile) -> Self {
        self.config.trial.symptom_latency = profile;
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
