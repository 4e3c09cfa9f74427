mod health;
mod latency;
mod results;
mod rotation;

pub use health::{HealthState, Individual};
pub use latency::{LatencyProfile, LatencySampler};
pub use results::{MonteCarloSummary, SweepRecord, TrialOutcome};
pub use rotation::{RotationCadence, RotationMode};
