use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::sample_gaussian;

#[test]
fn test_gaussian_moments() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let n = 20_000;

    let samples: Vec<f64> = (0..n).map(|_| sample_gaussian(&mut rng, 5.0, 2.0)).collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    assert!((mean - 5.0).abs() < 0.1);
    assert!((variance.sqrt() - 2.0).abs() < 0.1);
}

#[test]
fn test_gaussian_reproducibility() {
    let mut rng1 = ChaChaRng::seed_from_u64(1234);
    let mut rng2 = ChaChaRng::seed_from_u64(1234);

    for _ in 0..100 {
        assert_eq!(
            sample_gaussian(&mut rng1, 0.0, 1.0),
            sample_gaussian(&mut rng2, 0.0, 1.0)
        );
    }
}

#[test]
fn test_zero_std_dev_returns_mean() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..10 {
        assert_eq!(sample_gaussian(&mut rng, 3.5, 0.0), 3.5);
    }
}
