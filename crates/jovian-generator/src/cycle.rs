//! Primary cycle synthesis
//!
//! The primary cycle is the backbone of every dataset: a superposition of up
//! to three phase signals selected by the configuration's trend policy, plus
//! a Gaussian noise term. The noise is the only non-deterministic element.

use std::f64::consts::PI;

use rand_chacha::ChaChaRng;

use jovian::{Configuration, TrendPolicy, END_YEAR, START_YEAR};

use crate::sampling::sample_gaussian;

/// Cloud-spot cycle length in Earth years (10-15 year band, modeled at 12.5)
pub const SPOT_CYCLE_YEARS: f64 = 12.5;

/// Solar activity cycle length in Earth years
pub const SOLAR_CYCLE_YEARS: f64 = 11.0;

/// Io-driven volcanic cycle length in Earth years
pub const VOLCANIC_CYCLE_YEARS: f64 = 7.3;

/// Absolute decay of the Shrinking policy, in output units per year
///
/// Not scaled by the configured amplitude. The inconsistency with the rest of
/// the formula is known; kept literally so existing outputs stay comparable.
const SHRINK_PER_YEAR: f64 = -0.01;

/// Noise standard deviation as a fraction of the configured amplitude
const NOISE_FRACTION: f64 = 0.1;

/// Sine of a phase signal: `(t mod period)` mapped onto one sinusoid cycle
fn phase_sin(t: f64, period: f64) -> f64 {
    let phase = t % period;
    (2.0 * PI * phase / period).sin()
}

/// Cosine counterpart of [`phase_sin`]
fn phase_cos(t: f64, period: f64) -> f64 {
    let phase = t % period;
    (2.0 * PI * phase / period).cos()
}

/// Deterministic primary-cycle value for one year (no noise term)
///
/// Dispatches on the trend policy:
/// - `JetStreams`: seasonal and spot cycles blended 60/40
/// - `Shrinking`: seasonal cycle plus the absolute linear decay term
/// - `SolarDependent`: solar and seasonal cycles blended 70/30
/// - `Volcanic`: a single 7.3-year cycle, ignoring the other phases
/// - `Stable`: seasonal cycle only
pub fn trend_value(year: i32, config: &Configuration) -> f64 {
    let t = f64::from(year - START_YEAR);

    let seasonal = phase_sin(t, config.cycle_years);
    let spot = phase_cos(t, SPOT_CYCLE_YEARS);
    let solar = phase_sin(t, SOLAR_CYCLE_YEARS);

    let base = config.base_value;
    let amplitude = config.amplitude;

    match config.trend {
        TrendPolicy::JetStreams => base + amplitude * (0.6 * seasonal + 0.4 * spot),
        TrendPolicy::Shrinking => base + amplitude * seasonal + SHRINK_PER_YEAR * t,
        TrendPolicy::SolarDependent => base + amplitude * (0.7 * solar + 0.3 * seasonal),
        TrendPolicy::Volcanic => {
            base + amplitude * (2.0 * PI * t / VOLCANIC_CYCLE_YEARS).sin()
        }
        TrendPolicy::Stable => base + amplitude * seasonal,
    }
}

/// Primary-cycle value for one year, including its Gaussian noise term
///
/// Noise is zero-mean with standard deviation `amplitude * 0.1`.
pub fn primary_cycle(rng: &mut ChaChaRng, year: i32, config: &Configuration) -> f64 {
    trend_value(year, config) + sample_gaussian(rng, 0.0, config.amplitude * NOISE_FRACTION)
}

/// The full primary-cycle series over 1610..=2025, one noise draw per year
///
/// Smoothing, the composite index, and the forward projection must all reuse
/// this exact series; regenerating it would draw fresh noise and make the
/// derived columns inconsistent within one run.
pub fn primary_cycle_series(rng: &mut ChaChaRng, config: &Configuration) -> Vec<f64> {
    (START_YEAR..=END_YEAR)
        .map(|year| primary_cycle(rng, year, config))
        .collect()
}
