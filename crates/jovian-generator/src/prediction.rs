//! Forward projection of the primary cycle

use rand_chacha::ChaChaRng;

use crate::sampling::sample_gaussian;

/// Last year treated as observed; projection starts after this
pub const PREDICTION_CUTOFF_YEAR: i32 = 2020;

/// Relative uncertainty growth per year past the cutoff
const UNCERTAINTY_PER_YEAR: f64 = 0.02;

/// Forward prediction for one year
///
/// Up to and including the cutoff the prediction is the primary-cycle value
/// unmodified. Beyond it, the long-term trend is applied and a relative
/// Gaussian perturbation grows linearly with distance past the cutoff,
/// independent of the noise already embedded in `base_value`.
pub fn future_prediction(
    rng: &mut ChaChaRng,
    year: i32,
    base_value: f64,
    long_term_trend: f64,
) -> f64 {
    if year <= PREDICTION_CUTOFF_YEAR {
        return base_value;
    }

    let uncertainty = UNCERTAINTY_PER_YEAR * f64::from(year - PREDICTION_CUTOFF_YEAR);
    base_value * long_term_trend * (1.0 + sample_gaussian(rng, 0.0, uncertainty))
}
