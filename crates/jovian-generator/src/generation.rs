//! Dataset assembly pipeline
//!
//! One pass over the fixed year range computes every column, then the event
//! overlay patches the finished table in place. The primary-cycle series is
//! generated once and shared by the smoothing, composite-index, and
//! prediction columns so their noise stays consistent within a run.

use rand_chacha::ChaChaRng;

use jovian::{Configuration, DatasetMetadata, JovianDataset, YearRecord, END_YEAR, START_YEAR};

use crate::cycle::primary_cycle_series;
use crate::events::apply_events;
use crate::prediction::future_prediction;
use crate::signals;
use crate::smoothing::{centered_moving_average, SMOOTHING_WINDOW_YEARS};

/// Composite index weights: primary cycle / storms / magnetic activity
const INDEX_BASE_WEIGHT: f64 = 0.4;
const INDEX_STORM_WEIGHT: f64 = 0.3;
const INDEX_MAGNETIC_WEIGHT: f64 = 0.3;

/// Rescale factors lifting the ratio-valued signals into the same order of
/// magnitude as the primary cycle before weighting
const INDEX_STORM_SCALE: f64 = 30.0;
const INDEX_MAGNETIC_SCALE: f64 = 1000.0;

/// Weighted composite of the primary cycle, storm activity, and magnetic
/// activity
pub fn jupiter_index(base_value: f64, storms: f64, magnetic: f64) -> f64 {
    base_value * INDEX_BASE_WEIGHT
        + storms * INDEX_STORM_SCALE * INDEX_STORM_WEIGHT
        + magnetic * INDEX_MAGNETIC_SCALE * INDEX_MAGNETIC_WEIGHT
}

/// Generate a complete dataset for a data-type key
///
/// Unknown keys resolve to the default configuration rather than failing.
/// Run metadata is created with a random UUID; use
/// [`generate_dataset_with_metadata`] for reproducible runs.
pub fn generate_dataset(rng: &mut ChaChaRng, data_type: &str) -> JovianDataset {
    generate_dataset_with_metadata(rng, data_type, DatasetMetadata::new_random())
}

/// Generate a complete dataset with caller-supplied run metadata
pub fn generate_dataset_with_metadata(
    rng: &mut ChaChaRng,
    data_type: &str,
    metadata: DatasetMetadata,
) -> JovianDataset {
    let config = Configuration::resolve(data_type);

    // One noise draw per year, in year order; shared downstream
    let base = primary_cycle_series(rng, &config);
    let smoothed = centered_moving_average(&base, SMOOTHING_WINDOW_YEARS);

    let mut rows = Vec::with_capacity(base.len());
    for (i, year) in (START_YEAR..=END_YEAR).enumerate() {
        let storms = signals::atmospheric_storms(year);
        let magnetic = signals::magnetic_activity(year);
        let trend = signals::long_term_trend(year, &config);

        rows.push(YearRecord {
            earth_year: year,
            jupiter_year: YearRecord::jovian_years_since_start(year),
            solar_distance: signals::solar_distance(year),
            base_value: base[i],
            seasonal_variation: signals::seasonal_variation(year),
            atmospheric_storms: storms,
            magnetic_activity: magnetic,
            great_red_spot_evolution: signals::great_red_spot_evolution(year),
            radiation_variations: signals::radiation_variations(year),
            moon_influences: signals::moon_influences(year),
            smoothed_value: smoothed[i],
            short_term_variation: signals::short_term_variation(year),
            long_term_trend: trend,
            jupiter_index: jupiter_index(base[i], storms, magnetic),
            observation_quality: signals::observation_quality(year),
            future_prediction: future_prediction(rng, year, base[i], trend),
            moons_activity: None,
        });
    }

    apply_events(&mut rows);

    JovianDataset::new(data_type, config, metadata, rows)
}
