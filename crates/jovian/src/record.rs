//! Per-year observation record and table layout constants

use serde::{Deserialize, Serialize};

/// First year of the observation range (discovery of the Galilean moons)
pub const START_YEAR: i32 = 1610;

/// Last year of the observation range (inclusive)
pub const END_YEAR: i32 = 2025;

/// Number of rows in a complete dataset
pub const YEAR_COUNT: usize = (END_YEAR - START_YEAR + 1) as usize;

/// Length of the Jovian year in Earth years
pub const JOVIAN_YEAR_EARTH_YEARS: f64 = 11.86;

/// CSV column headers, in the fixed output order
///
/// The first sixteen columns are the table contract; `Moons_Activity` is a
/// sparse trailing column populated only by mission-marker events.
pub const COLUMNS: [&str; 17] = [
    "Earth_Year",
    "Jupiter_Year",
    "Solar_Distance",
    "Base_Value",
    "Seasonal_Variation",
    "Atmospheric_Storms",
    "Magnetic_Activity",
    "Great_Red_Spot_Evolution",
    "Radiation_Variations",
    "Moon_Influences",
    "Smoothed_Value",
    "Short_Term_Variation",
    "Long_Term_Trend",
    "Jupiter_Index",
    "Observation_Quality",
    "Future_Prediction",
    "Moons_Activity",
];

/// One row of the generated dataset
///
/// Every field is derived from `earth_year` and the active [`Configuration`]
/// except `base_value` and `future_prediction`, which carry a Gaussian noise
/// term, and any field overwritten by the historical-event overlay.
///
/// [`Configuration`]: crate::Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// Earth calendar year, the primary key (strictly increasing, no gaps)
    pub earth_year: i32,

    /// Jovian years elapsed since [`START_YEAR`]
    pub jupiter_year: f64,

    /// Distance to the Sun in AU, oscillating around 5.20
    pub solar_distance: f64,

    /// Primary cycle value in the configuration's unit (includes noise)
    pub base_value: f64,

    /// Small seasonal oscillation around 1.0 (low axial tilt)
    pub seasonal_variation: f64,

    /// Multi-frequency storm activity ratio around 1.0
    pub atmospheric_storms: f64,

    /// Magnetic activity ratio around 1.0
    pub magnetic_activity: f64,

    /// Great Red Spot size factor by era times a short-term wobble
    pub great_red_spot_evolution: f64,

    /// Radiation-belt intensity ratio around 1.0
    pub radiation_variations: f64,

    /// Superposed influence of the four Galilean moons, around 1.0
    pub moon_influences: f64,

    /// 5-year centered moving average of `base_value`
    pub smoothed_value: f64,

    /// High-frequency rotation wobble around 1.0
    pub short_term_variation: f64,

    /// Monotone drift factor, sign depending on the trend policy
    pub long_term_trend: f64,

    /// Weighted composite of base value, storms, and magnetic activity
    pub jupiter_index: f64,

    /// Observation quality on a 0-100 scale (era step plus orbital variation)
    pub observation_quality: f64,

    /// Primary cycle up to 2020, stochastic projection beyond
    pub future_prediction: f64,

    /// Mission marker set by point events (1610 and 1979 only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moons_activity: Option<f64>,
}

impl YearRecord {
    /// Jovian years elapsed at a given Earth year
    pub fn jovian_years_since_start(earth_year: i32) -> f64 {
        f64::from(earth_year - START_YEAR) / JOVIAN_YEAR_EARTH_YEARS
    }
}
