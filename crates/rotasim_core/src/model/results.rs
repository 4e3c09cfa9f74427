//! Trial and sweep outputs
//!
//! A trial reduces to two counters; a sweep point accumulates those
//! counters over many trials and normalizes them into rates.

use serde::{Deserialize, Serialize};

use crate::model::rotation::RotationMode;

/// Summary statistics extracted from one completed trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Days of productive in-person presence, summed over the team.
    pub person_days: u64,
    /// Individuals still `Healthy` after the final simulated day.
    pub healthy_count: usize,
}

/// Running sums across the trials of one sweep point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub iterations: usize,
    pub total_person_days: u64,
    pub total_healthy: u64,
}

impl MonteCarloSummary {
    pub fn record(&mut self, outcome: TrialOutcome) {
        self.iterations += 1;
        self.total_person_days += outcome.person_days;
        self.total_healthy += outcome.healthy_count as u64;
    }

    /// Mean person-days of work per trial.
    #[must_use]
    pub fn mean_person_days(&self) -> f64 {
        self.total_person_days as f64 / self.iterations as f64
    }

    /// Mean final healthy count per trial.
    #[must_use]
    pub fn mean_healthy(&self) -> f64 {
        self.total_healthy as f64 / self.iterations as f64
    }
}

/// One normalized record per sweep point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub days: u32,
    pub mode: RotationMode,
    pub rotation_period: u32,
    pub team_size: usize,
    /// Mean person-days per trial, normalized by `team_size * days`.
    pub person_days_rate: f64,
    /// Mean final healthy count per trial, normalized by `team_size`.
    pub healthy_rate: f64,
}
