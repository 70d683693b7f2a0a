//! Distribution sampling helpers

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}
