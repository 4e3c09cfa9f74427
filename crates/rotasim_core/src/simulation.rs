//! Epidemic trial engine
//!
//! One trial simulates a fixed number of workdays for one team under one
//! rotation policy. Each day is an explicit ordered sequence of passes over
//! the roster: attendance → countdowns → transmission → progression →
//! quarantine → tally. Passes are never fused or reordered, so every
//! transition observes the state left by the previous pass for the whole
//! team at once.
//!
//! All randomness flows through the caller's `Rng` in roster-index order,
//! so a fixed seed reproduces a trial bit for bit.

use rand::Rng;

use crate::config::TrialConfig;
use crate::error::ConfigError;
use crate::model::{HealthState, MonteCarloSummary, RotationMode, TrialOutcome};
use crate::simulation_state::TrialState;

/// Run one complete trial and reduce it to its two summary counters.
pub fn run_trial<R: Rng + ?Sized>(
    config: &TrialConfig,
    rng: &mut R,
) -> Result<TrialOutcome, ConfigError> {
    config.validate()?;
    let mut state = TrialState::from_config(config)?;
    for day in 0..config.days {
        state.day = day;
        advance_day(&mut state, config, rng);
    }
    Ok(TrialOutcome {
        person_days: state.person_days,
        healthy_count: state.healthy_count(),
    })
}

/// Run `iterations` independent trials on one shared random stream and
/// accumulate their outcomes.
pub fn monte_carlo_trial<R: Rng + ?Sized>(
    config: &TrialConfig,
    iterations: usize,
    rng: &mut R,
) -> Result<MonteCarloSummary, ConfigError> {
    if iterations == 0 {
        return Err(ConfigError::NonPositive {
            field: "iterations",
        });
    }
    let mut summary = MonteCarloSummary::default();
    for _ in 0..iterations {
        summary.record(run_trial(config, rng)?);
    }
    Ok(summary)
}

/// One simulated day: six ordered passes over the roster.
pub(crate) fn advance_day<R: Rng + ?Sized>(
    state: &mut TrialState,
    config: &TrialConfig,
    rng: &mut R,
) {
    update_attendance(state, config, rng);
    tick_countdowns(state);
    spread_infection(state, config, rng);
    promote_to_infectious(state);
    apply_quarantine(state, config, rng);
    tally_person_days(state);
}

/// Recompute who is at the office today, before transmission and the
/// work-day tally look at attendance.
pub(crate) fn update_attendance<R: Rng + ?Sized>(
    state: &mut TrialState,
    config: &TrialConfig,
    rng: &mut R,
) {
    if !config
        .rotation_cadence
        .rotates_on(state.day, config.rotation_period)
    {
        return;
    }
    match config.mode {
        // Attendance is fixed after initialization.
        RotationMode::FullTeam => {}
        RotationMode::FixedHalves => flip_halves(state),
        RotationMode::CoinFlipHalves => {
            // One coin flip for the whole team, not per individual.
            if rng.random::<f64>() < 0.5 {
                flip_halves(state);
            }
        }
        RotationMode::ResampledHalves => {
            for person in &mut state.roster {
                person.at_office = false;
            }
            // Quarantined individuals are not eligible for selection.
            let eligible: Vec<usize> = state
                .roster
                .iter()
                .enumerate()
                .filter(|(_, p)| p.health != HealthState::Quarantined)
                .map(|(i, _)| i)
                .collect();
            let half = eligible.len() / 2;
            for pick in rand::seq::index::sample(rng, eligible.len(), half) {
                state.roster[eligible[pick]].at_office = true;
            }
        }
    }
}

fn flip_halves(state: &mut TrialState) {
    for person in &mut state.roster {
        person.at_office = !person.at_office;
    }
}

fn tick_countdowns(state: &mut TrialState) {
    for person in &mut state.roster {
        if person.infectious_countdown > 0 {
            person.infectious_countdown -= 1;
        }
        if person.symptom_countdown > 0 {
            person.symptom_countdown -= 1;
        }
    }
}

/// Healthy → Infected. The exposure count is fixed at the start of the
/// pass; people infected today are `Infected`, never `Infectious`, so they
/// cannot transmit on the same day.
fn spread_infection<R: Rng + ?Sized>(state: &mut TrialState, config: &TrialConfig, rng: &mut R) {
    let num_infectious = state.infectious_at_office();
    for idx in 0..state.roster.len() {
        if state.roster[idx].health != HealthState::Healthy {
            continue;
        }
        // Community exposure is checked first and is attendance-independent;
        // one infection per individual per day, first qualifying event wins.
        let infected = if rng.random::<f64>() < config.p_community {
            true
        } else if state.roster[idx].at_office {
            (0..num_infectious).any(|_| rng.random::<f64>() < config.p_coworker)
        } else {
            false
        };
        if infected {
            let infectious_days = state.infectious_sampler.sample_days(rng);
            let symptom_days = state.symptom_sampler.sample_days(rng);
            state.roster[idx].infect(infectious_days, symptom_days);
        }
    }
}

/// Infected → Infectious once the serial-interval countdown runs out.
fn promote_to_infectious(state: &mut TrialState) {
    for person in &mut state.roster {
        if person.health == HealthState::Infected && person.infectious_countdown == 0 {
            person.health = HealthState::Infectious;
        }
    }
}

/// {Infected, Infectious} → Quarantined, with an independent draw per
/// symptomatic individual per day. Quarantined is absorbing.
fn apply_quarantine<R: Rng + ?Sized>(state: &mut TrialState, config: &TrialConfig, rng: &mut R) {
    for person in &mut state.roster {
        let symptomatic = matches!(
            person.health,
            HealthState::Infected | HealthState::Infectious
        ) && person.symptom_countdown == 0;
        if symptomatic && rng.random::<f64>() < config.p_quarantine {
            person.health = HealthState::Quarantined;
        }
    }
}

fn tally_person_days(state: &mut TrialState) {
    let worked = state
        .roster
        .iter()
        .filter(|p| p.health.is_productive() && p.at_office)
        .count();
    state.person_days += worked as u64;
}
