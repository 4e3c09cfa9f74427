//! Criterion benchmarks for rotasim_core simulation
//!
//! Run with: cargo bench -p rotasim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rotasim_core::config::{SweepBuilder, TrialConfig};
use rotasim_core::model::{LatencyProfile, RotationMode};
use rotasim_core::simulation::run_trial;
use rotasim_core::sweep::run_sweep;

fn gamma_trial_config(team_size: usize) -> TrialConfig {
    TrialConfig {
        team_size,
        mode: RotationMode::CoinFlipHalves,
        infectious_latency: LatencyProfile::Gamma {
            mean: 4.0,
            std_dev: 4.75,
        },
        symptom_latency: LatencyProfile::Gamma {
            mean: 5.1,
            std_dev: 4.0,
        },
        ..TrialConfig::default()
    }
}

fn bench_run_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_trial");
    for team_size in [10usize, 30, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(team_size),
            &team_size,
            |b, &size| {
                let config = gamma_trial_config(size);
                let mut rng = SmallRng::seed_from_u64(42);
                b.iter(|| run_trial(black_box(&config), &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_small_sweep(c: &mut Criterion) {
    let config = SweepBuilder::new()
        .iterations(5)
        .modes(RotationMode::ALL)
        .rotation_periods([2])
        .team_sizes([10, 30])
        .build()
        .unwrap();
    c.bench_function("run_sweep/4_modes_x_2_sizes", |b| {
        b.iter(|| run_sweep(black_box(&config)).unwrap());
    });
}

criterion_group!(benches, bench_run_trial, bench_small_sweep);
criterion_main!(benches);
