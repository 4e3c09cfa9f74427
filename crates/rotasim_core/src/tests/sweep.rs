//! Tests for Monte Carlo aggregation and the sweep driver

use crate::config::{SweepBuilder, SweepConfig, TrialConfig};
use crate::error::ConfigError;
use crate::model::{MonteCarloSummary, RotationMode, TrialOutcome};
use crate::sweep::{run_mode_summaries, run_sweep};

fn small_sweep() -> SweepConfig {
    SweepBuilder::new()
        .days(30)
        .iterations(3)
        .seed(1023)
        .modes([RotationMode::FullTeam, RotationMode::FixedHalves])
        .rotation_periods([2, 3])
        .team_sizes([10])
        .build()
        .unwrap()
}

#[test]
fn sweep_emits_one_record_per_point_in_axis_order() {
    let records = run_sweep(&small_sweep()).unwrap();
    assert_eq!(records.len(), 4);

    let order: Vec<(u8, u32, usize)> = records
        .iter()
        .map(|r| (r.mode.code(), r.rotation_period, r.team_size))
        .collect();
    // Mode outer, then rotation period, then team size.
    assert_eq!(order, vec![(1, 2, 10), (1, 3, 10), (2, 2, 10), (2, 3, 10)]);
    assert!(records.iter().all(|r| r.days == 30));
}

#[test]
fn rates_are_normalized_to_unit_ranges() {
    for record in run_sweep(&small_sweep()).unwrap() {
        assert!(
            (0.0..=1.0).contains(&record.person_days_rate),
            "person_days_rate {}",
            record.person_days_rate
        );
        assert!(
            (0.0..=1.0).contains(&record.healthy_rate),
            "healthy_rate {}",
            record.healthy_rate
        );
    }
}

#[test]
fn identical_seeds_reproduce_identical_records() {
    let config = small_sweep();
    assert_eq!(run_sweep(&config).unwrap(), run_sweep(&config).unwrap());
}

#[test]
fn mode_summaries_cover_each_mode_once() {
    let config = SweepConfig {
        iterations: 2,
        ..SweepConfig::default()
    };
    let summaries = run_mode_summaries(&config).unwrap();
    let codes: Vec<u8> = summaries.iter().map(|(mode, _)| mode.code()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4]);
    for (_, summary) in &summaries {
        assert_eq!(summary.iterations, 2);
        assert!(summary.total_person_days <= 2 * 30 * 100);
        assert!(summary.total_healthy <= 2 * 30);
    }
}

#[test]
fn summary_means_divide_by_iteration_count() {
    let mut summary = MonteCarloSummary::default();
    summary.record(TrialOutcome {
        person_days: 40,
        healthy_count: 7,
    });
    summary.record(TrialOutcome {
        person_days: 60,
        healthy_count: 9,
    });
    assert_eq!(summary.iterations, 2);
    assert_eq!(summary.mean_person_days(), 50.0);
    assert_eq!(summary.mean_healthy(), 8.0);
}

#[test]
fn invalid_probability_is_rejected_before_any_trial() {
    let config = SweepConfig {
        trial: TrialConfig {
            p_coworker: 1.5,
            ..TrialConfig::default()
        },
        ..SweepConfig::default()
    };
    assert_eq!(
        run_sweep(&config),
        Err(ConfigError::ProbabilityOutOfRange {
            field: "p_coworker",
            value: 1.5
        })
    );
}

#[test]
fn empty_axes_and_zero_counts_are_rejected() {
    let no_modes = SweepConfig {
        modes: vec![],
        ..SweepConfig::default()
    };
    assert_eq!(
        run_sweep(&no_modes),
        Err(ConfigError::EmptySweepAxis { axis: "modes" })
    );

    let no_iterations = SweepConfig {
        iterations: 0,
        ..SweepConfig::default()
    };
    assert_eq!(
        run_sweep(&no_iterations),
        Err(ConfigError::NonPositive {
            field: "iterations"
        })
    );

    let tiny_team = SweepConfig {
        team_sizes: vec![1],
        ..SweepConfig::default()
    };
    assert_eq!(
        run_sweep(&tiny_team),
        Err(ConfigError::TeamTooSmall { team_size: 1 })
    );
}

#[test]
fn builder_overrides_reference_defaults() {
    let config = SweepBuilder::new()
        .days(20)
        .iterations(5)
        .seed(7)
        .community_infection(0.01)
        .coworker_infection(0.2)
        .quarantine_probability(0.9)
        .team_sizes([6, 8])
        .build()
        .unwrap();

    assert_eq!(config.trial.days, 20);
    assert_eq!(config.iterations, 5);
    assert_eq!(config.seed, 7);
    assert_eq!(config.trial.p_community, 0.01);
    assert_eq!(config.trial.p_quarantine, 0.9);
    assert_eq!(config.team_sizes, vec![6, 8]);
    // Untouched knobs keep the reference scenario values.
    assert_eq!(config.rotation_periods, vec![2]);
    assert_eq!(config.trial.team_size, 30);
}

#[test]
fn builder_rejects_invalid_configurations() {
    let result = SweepBuilder::new().rotation_periods([0]).build();
    assert_eq!(
        result.unwrap_err(),
        ConfigError::NonPositive {
            field: "rotation_period"
        }
    );
}
