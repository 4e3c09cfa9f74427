//! Simulation configuration
//!
//! `TrialConfig` holds everything one trial needs and is immutable for the
//! trial's duration. `SweepConfig` wraps a base trial with the Monte Carlo
//! iteration count, the seed, and the three sweep axes; the sweep driver
//! constructs a fresh `TrialConfig` per sweep point instead of mutating
//! shared values.
//!
//! # Builder DSL
//!
//! ```ignore
//! use rotasim_core::config::SweepBuilder;
//! use rotasim_core::model::RotationMode;
//!
//! let config = SweepBuilder::new()
//!     .days(100)
//!     .iterations(50)
//!     .seed(1023)
//!     .modes(RotationMode::ALL)
//!     .rotation_periods([1, 2, 5])
//!     .team_sizes([10, 30])
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{LatencyProfile, RotationCadence, RotationMode};

pub mod builder;

pub use builder::SweepBuilder;

fn validate_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}

/// Configuration for a single trial: one team, one policy, one horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    pub team_size: usize,
    /// Simulated workdays per trial.
    pub days: u32,
    pub mode: RotationMode,
    /// Days between attendance-policy re-evaluations.
    pub rotation_period: u32,
    #[serde(default)]
    pub rotation_cadence: RotationCadence,
    /// Daily probability of infection from the population at large,
    /// independent of attendance.
    pub p_community: f64,
    /// Per-contact probability of infection from an infectious coworker
    /// present on the same day.
    pub p_coworker: f64,
    /// Daily probability of quarantine once symptoms have appeared.
    pub p_quarantine: f64,
    /// Serial interval: days from infection to becoming infectious.
    pub infectious_latency: LatencyProfile,
    /// Incubation period: days from infection to symptom onset.
    pub symptom_latency: LatencyProfile,
}

impl Default for TrialConfig {
    /// The reference scenario of the original study: a team of 30 over 100
    /// days, published COVID-19 latency estimates, near-certain quarantine
    /// on symptoms.
    fn default() -> Self {
        Self {
            team_size: 30,
            days: 100,
            mode: RotationMode::FullTeam,
            rotation_period: 2,
            rotation_cadence: RotationCadence::default(),
            p_community: 0.001,
            p_coworker: 0.40,
            p_quarantine: 0.999,
            infectious_latency: LatencyProfile::Normal {
                mean: 4.0,
                std_dev: 4.75,
            },
            symptom_latency: LatencyProfile::Normal {
                mean: 5.1,
                std_dev: 4.0,
            },
        }
    }
}

impl TrialConfig {
    /// Detect every configuration error before any trial runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size < 2 {
            return Err(ConfigError::TeamTooSmall {
                team_size: self.team_size,
            });
        }
        if self.days == 0 {
            return Err(ConfigError::NonPositive { field: "days" });
        }
        if self.rotation_period == 0 {
            return Err(ConfigError::NonPositive {
                field: "rotation_period",
            });
        }
        validate_probability("p_community", self.p_community)?;
        validate_probability("p_coworker", self.p_coworker)?;
        validate_probability("p_quarantine", self.p_quarantine)?;
        self.infectious_latency.validate("infectious_latency")?;
        self.symptom_latency.validate("symptom_latency")?;
        Ok(())
    }
}

/// The full Monte Carlo sweep: base trial values plus the three axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Base values; `mode`, `rotation_period` and `team_size` are
    /// overridden per sweep point.
    pub trial: TrialConfig,
    /// Independent trials per sweep point.
    pub iterations: usize,
    pub seed: u64,
    pub modes: Vec<RotationMode>,
    pub rotation_periods: Vec<u32>,
    pub team_sizes: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trial: TrialConfig::default(),
            iterations: 10,
            seed: 1023,
            modes: RotationMode::ALL.to_vec(),
            rotation_periods: vec![2],
            team_sizes: vec![30],
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::NonPositive {
                field: "iterations",
            });
        }
        if self.modes.is_empty() {
            return Err(ConfigError::EmptySweepAxis { axis: "modes" });
        }
        if self.rotation_periods.is_empty() {
            return Err(ConfigError::EmptySweepAxis {
                axis: "rotation_periods",
            });
        }
        if self.team_sizes.is_empty() {
            return Err(ConfigError::EmptySweepAxis { axis: "team_sizes" });
        }
        self.trial.validate()?;
        for &mode in &self.modes {
            for &rotation_period in &self.rotation_periods {
                for &team_size in &self.team_sizes {
                    self.point(mode, rotation_period, team_size).validate()?;
                }
            }
        }
        Ok(())
    }

    /// Fresh immutable configuration for one sweep point.
    #[must_use]
    pub fn point(&self, mode: RotationMode, rotation_period: u32, team_size: usize) -> TrialConfig {
        TrialConfig {
            mode,
            rotation_period,
            team_size,
            ..self.trial.clone()
        }
    }
}
