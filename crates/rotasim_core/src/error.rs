use std::fmt;

/// Errors detected while validating a configuration, before any trial runs.
///
/// There are no recoverable errors inside a trial; every per-day pass is a
/// total function over valid state. A run either starts with a valid
/// configuration or aborts with one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A count or period that must be strictly positive was zero.
    NonPositive { field: &'static str },
    /// A probability outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    /// Latency distribution parameters that cannot be sampled from.
    InvalidLatencyParameters {
        latency: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// Rotation policies split the roster in two; a team of fewer than
    /// two people cannot be rotated.
    TeamTooSmall { team_size: usize },
    /// A sweep axis with no values would produce no records.
    EmptySweepAxis { axis: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field } => {
                write!(f, "{field} must be strictly positive")
            }
            ConfigError::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must be a probability in [0, 1], got {value}")
            }
            ConfigError::InvalidLatencyParameters {
                latency,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {latency} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            ConfigError::TeamTooSmall { team_size } => {
                write!(f, "team size must be at least 2, got {team_size}")
            }
            ConfigError::EmptySweepAxis { axis } => {
                write!(f, "sweep axis {axis} is empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
