use crate::config::TrialConfig;
use crate::error::ConfigError;
use crate::model::{HealthState, Individual, LatencySampler, RotationMode};

/// Runtime state for one trial, mutated once per simulated day and
/// discarded after its two summary statistics are extracted.
#[derive(Debug, Clone)]
pub struct TrialState {
    /// Current simulated day, starting at zero.
    pub day: u32,
    /// The whole team, index-addressed.
    pub roster: Vec<Individual>,
    /// Running person-day tally for the trial.
    pub person_days: u64,
    pub(crate) infectious_sampler: LatencySampler,
    pub(crate) symptom_sampler: LatencySampler,
}

impl TrialState {
    /// Fresh state: everyone healthy, countdowns zero, attendance
    /// initialized per mode.
    pub fn from_config(config: &TrialConfig) -> Result<Self, ConfigError> {
        let infectious_sampler = config.infectious_latency.sampler("infectious_latency")?;
        let symptom_sampler = config.symptom_latency.sampler("symptom_latency")?;

        let mut roster = vec![Individual::healthy(false); config.team_size];
        match config.mode {
            RotationMode::FullTeam => {
                for person in &mut roster {
                    person.at_office = true;
                }
            }
            RotationMode::FixedHalves | RotationMode::CoinFlipHalves => {
                // Team A is the first half of the roster; membership is
                // fixed for the whole trial, only which half is "in"
                // alternates.
                for person in roster.iter_mut().take(config.team_size / 2) {
                    person.at_office = true;
                }
            }
            // The first rotation day draws the first half-team.
            RotationMode::ResampledHalves => {}
        }

        Ok(Self {
            day: 0,
            roster,
            person_days: 0,
            infectious_sampler,
            symptom_sampler,
        })
    }

    /// Individuals still healthy.
    #[must_use]
    pub fn healthy_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|p| p.health == HealthState::Healthy)
            .count()
    }

    /// Infectious individuals physically present today: the coworker
    /// exposure count for the transmission pass.
    #[must_use]
    pub fn infectious_at_office(&self) -> usize {
        self.roster
            .iter()
            .filter(|p| p.health == HealthState::Infectious && p.at_office)
            .count()
    }

    /// Individuals physically present today.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.roster.iter().filter(|p| p.at_office).count()
    }
}
