//! Workplace epidemic rotation simulator
//!
//! This crate provides a Monte Carlo engine for infection spread within a
//! fixed-size team under different workplace-attendance policies. It
//! supports:
//! - Four rotation modes (full team, fixed halves, coin-flip halves,
//!   resampled halves)
//! - Gaussian and Gamma/Erlang latency distributions for the serial
//!   interval and the incubation period
//! - Deterministic, seed-reproducible trials on a single random stream
//! - Parameter sweeps over mode, rotation period and team size
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic sweep setup:
//!
//! ```ignore
//! use rotasim_core::config::SweepBuilder;
//! use rotasim_core::model::RotationMode;
//! use rotasim_core::sweep::run_sweep;
//!
//! let config = SweepBuilder::new()
//!     .days(100)
//!     .iterations(50)
//!     .seed(1023)
//!     .modes(RotationMode::ALL)
//!     .rotation_periods([1, 2, 5])
//!     .team_sizes([10, 30])
//!     .build()?;
//! let records = run_sweep(&config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod simulation;
pub mod simulation_state;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SweepBuilder, SweepConfig, TrialConfig};
pub use error::ConfigError;
pub use model::{
    HealthState, Individual, LatencyProfile, LatencySampler, MonteCarloSummary, RotationCadence,
    RotationMode, SweepRecord, TrialOutcome,
};
pub use simulation::{monte_carlo_trial, run_trial};
pub use simulation_state::TrialState;
pub use sweep::{run_mode_summaries, run_sweep};
