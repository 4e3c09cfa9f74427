use rand::Rng;
use rand_distr::{Distribution, Gamma, Normal};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Latency distribution for an infection interval, parameterized by the
/// target mean and standard deviation in days.
///
/// The serial interval (infection → infectiousness) and the incubation
/// period (infection → symptom onset) each carry their own profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LatencyProfile {
    /// Degenerate profile: every draw is the same number of days.
    /// Useful for pinned test scenarios.
    Fixed { days: u32 },
    /// Gaussian family. Draws are rounded to the nearest day and negative
    /// draws clamp to zero, so a wide sigma shifts mass toward day zero.
    Normal { mean: f64, std_dev: f64 },
    /// Gamma/Erlang family with `theta = std_dev² / mean` and
    /// `alpha = mean / theta`. Guarantees non-negative draws and is the
    /// better fit for skewed, heavy-tailed latencies.
    Gamma { mean: f64, std_dev: f64 },
}

impl LatencyProfile {
    /// Check that the profile can be sampled from. `latency` names the
    /// field in error messages.
    pub fn validate(&self, latency: &'static str) -> Result<(), ConfigError> {
        match *self {
            LatencyProfile::Fixed { .. } => Ok(()),
            LatencyProfile::Normal { mean, std_dev } | LatencyProfile::Gamma { mean, std_dev } => {
                if !(mean.is_finite() && mean > 0.0) {
                    return Err(ConfigError::InvalidLatencyParameters {
                        latency,
                        mean,
                        std_dev,
                        reason: "mean must be positive and finite",
                    });
                }
                if !(std_dev.is_finite() && std_dev > 0.0) {
                    return Err(ConfigError::InvalidLatencyParameters {
                        latency,
                        mean,
                        std_dev,
                        reason: "std_dev must be positive and finite",
                    });
                }
                Ok(())
            }
        }
    }

    /// Build the ready-to-sample form. Construction is the only fallible
    /// step, so per-day draws inside a trial are infallible.
    pub fn sampler(&self, latency: &'static str) -> Result<LatencySampler, ConfigError> {
        self.validate(latency)?;
        match *self {
            LatencyProfile::Fixed { days } => Ok(LatencySampler::Fixed(days)),
            LatencyProfile::Normal { mean, std_dev } => Normal::new(mean, std_dev)
                .map(LatencySampler::Normal)
                .map_err(|_| ConfigError::InvalidLatencyParameters {
                    latency,
                    mean,
                    std_dev,
                    reason: "std_dev must be positive and finite",
                }),
            LatencyProfile::Gamma { mean, std_dev } => {
                let theta = std_dev * std_dev / mean;
                let alpha = mean / theta;
                Gamma::new(alpha, theta).map(LatencySampler::Gamma).map_err(
                    |_| ConfigError::InvalidLatencyParameters {
                        latency,
                        mean,
                        std_dev,
                        reason: "derived shape and scale must be positive and finite",
                    },
                )
            }
        }
    }
}

/// Pre-built sampling distribution for one latency type.
#[derive(Debug, Clone, Copy)]
pub enum LatencySampler {
    Fixed(u32),
    Normal(Normal<f64>),
    Gamma(Gamma<f64>),
}

impl LatencySampler {
    /// Draw a latency in whole days: round to the nearest day, clamp
    /// negative Gaussian draws to zero.
    pub fn sample_days<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let raw = match self {
            LatencySampler::Fixed(days) => return *days,
            LatencySampler::Normal(d) => d.sample(rng),
            LatencySampler::Gamma(d) => d.sample(rng),
        };
        raw.round().max(0.0) as u32
    }
}
