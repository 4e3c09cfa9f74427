//! Tests for latency distribution parameterization and sampling

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::ConfigError;
use crate::model::LatencyProfile;

#[test]
fn fixed_profile_always_draws_the_same_days() {
    let sampler = LatencyProfile::Fixed { days: 3 }
        .sampler("infectious_latency")
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        assert_eq!(sampler.sample_days(&mut rng), 3);
    }
}

#[test]
fn gamma_sampler_matches_target_mean_and_spread() {
    let sampler = LatencyProfile::Gamma {
        mean: 4.0,
        std_dev: 2.0,
    }
    .sampler("infectious_latency")
    .unwrap();
    let mut rng = SmallRng::seed_from_u64(42);

    let n = 40_000;
    let draws: Vec<f64> = (0..n)
        .map(|_| f64::from(sampler.sample_days(&mut rng)))
        .collect();
    let mean = draws.iter().sum::<f64>() / n as f64;
    let variance = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n as f64;

    // Rounding to whole days adds roughly 1/12 of variance and a small
    // bias; tolerances account for both.
    assert!((mean - 4.0).abs() < 0.15, "mean {mean} too far from 4.0");
    assert!(
        (variance - 4.0).abs() < 0.5,
        "variance {variance} too far from 4.0"
    );
}

#[test]
fn normal_negative_draws_clamp_to_zero() {
    // A wide sigma around a small mean pushes a lot of mass below zero.
    let sampler = LatencyProfile::Normal {
        mean: 0.5,
        std_dev: 3.0,
    }
    .sampler("symptom_latency")
    .unwrap();
    let mut rng = SmallRng::seed_from_u64(7);

    let n = 2_000;
    let draws: Vec<u32> = (0..n).map(|_| sampler.sample_days(&mut rng)).collect();
    let zeros = draws.iter().filter(|d| **d == 0).count();
    let mean = draws.iter().map(|d| f64::from(*d)).sum::<f64>() / n as f64;

    assert!(
        zeros > n / 5,
        "expected a large share of clamped draws, got {zeros}/{n}"
    );
    // Clamping shifts the sample mean well above the raw mean.
    assert!(mean > 1.0, "clamped mean {mean} unexpectedly low");
}

#[test]
fn non_positive_parameters_are_rejected() {
    let bad = [
        LatencyProfile::Normal {
            mean: 0.0,
            std_dev: 1.0,
        },
        LatencyProfile::Normal {
            mean: 4.0,
            std_dev: 0.0,
        },
        LatencyProfile::Gamma {
            mean: -1.0,
            std_dev: 2.0,
        },
        LatencyProfile::Gamma {
            mean: 4.0,
            std_dev: f64::NAN,
        },
    ];
    for profile in bad {
        assert!(matches!(
            profile.sampler("infectious_latency"),
            Err(ConfigError::InvalidLatencyParameters { .. })
        ));
    }
}
