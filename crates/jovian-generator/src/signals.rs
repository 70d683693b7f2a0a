//! Auxiliary signal bank
//!
//! Independent per-year signal functions sharing the "function of Earth year
//! (+ config)" shape. Ratio-valued signals oscillate around 1.0; the scaled
//! ones carry their own units. All of them are deterministic - no signal in
//! this module draws from the RNG.

use std::f64::consts::PI;

use jovian::{Configuration, TrendPolicy, START_YEAR};

use crate::cycle::SOLAR_CYCLE_YEARS;

/// Mean Jupiter-Sun distance in AU
const MEAN_SOLAR_DISTANCE_AU: f64 = 5.20;

/// Orbital eccentricity expressed as a distance half-swing in AU
const SOLAR_DISTANCE_SWING_AU: f64 = 0.05;

/// Jovian seasonal period in Earth years (also the orbital period)
const SEASONAL_PERIOD_YEARS: f64 = 11.86;

/// Storm cycle periods in Earth years (short / medium / long)
const STORM_SHORT_YEARS: f64 = 3.2;
const STORM_MEDIUM_YEARS: f64 = 7.5;
const STORM_LONG_YEARS: f64 = 15.8;

/// Magnetic activity cycle in Earth years, tied to the fast rotation
const MAGNETIC_CYCLE_YEARS: f64 = 9.7;

/// Short-term wobble period of the Great Red Spot in Earth years
const RED_SPOT_WOBBLE_YEARS: f64 = 5.3;

/// Galilean moon cycle periods in Earth years
///
/// Scaled stand-ins for the orbital periods of Io, Europa, Ganymede, and
/// Callisto; treat as opaque constants rather than physical values.
const IO_CYCLE_YEARS: f64 = 1.77;
const EUROPA_CYCLE_YEARS: f64 = 3.55;
const GANYMEDE_CYCLE_YEARS: f64 = 7.15;
const CALLISTO_CYCLE_YEARS: f64 = 16.69;

/// Rotation-driven wobble period, rescaled to the annual grid
const SHORT_TERM_PERIOD_YEARS: f64 = 0.1;

/// Long-term drift rates per year since 1610
const SHRINKING_DRIFT_PER_YEAR: f64 = 0.0005;
const STABLE_DRIFT_PER_YEAR: f64 = 0.0001;

fn t(year: i32) -> f64 {
    f64::from(year - START_YEAR)
}

fn sin_cycle(t: f64, period: f64) -> f64 {
    (2.0 * PI * t / period).sin()
}

fn cos_cycle(t: f64, period: f64) -> f64 {
    (2.0 * PI * t / period).cos()
}

/// Distance to the Sun in AU, oscillating with the orbital period
pub fn solar_distance(year: i32) -> f64 {
    MEAN_SOLAR_DISTANCE_AU + SOLAR_DISTANCE_SWING_AU * sin_cycle(t(year), SEASONAL_PERIOD_YEARS)
}

/// Seasonal variation ratio; weak because of the low axial tilt
pub fn seasonal_variation(year: i32) -> f64 {
    1.0 + 0.1 * sin_cycle(t(year), SEASONAL_PERIOD_YEARS)
}

/// Storm activity ratio: three superposed storm cycles
pub fn atmospheric_storms(year: i32) -> f64 {
    let t = t(year);
    1.0 + 0.3 * sin_cycle(t, STORM_SHORT_YEARS)
        + 0.2 * cos_cycle(t, STORM_MEDIUM_YEARS)
        + 0.1 * sin_cycle(t, STORM_LONG_YEARS)
}

/// Magnetic activity ratio, single cycle
pub fn magnetic_activity(year: i32) -> f64 {
    1.0 + 0.2 * sin_cycle(t(year), MAGNETIC_CYCLE_YEARS)
}

/// Documented era-by-era size factor of the Great Red Spot
///
/// Monotone decay past 2000: `1.0 - 0.001` per year.
pub fn red_spot_size_factor(year: i32) -> f64 {
    if year < 1800 {
        1.8
    } else if year < 1900 {
        1.5
    } else if year < 2000 {
        1.2
    } else {
        1.0 - 0.001 * f64::from(year - 2000)
    }
}

/// Great Red Spot evolution: era size factor times a short-term wobble
pub fn great_red_spot_evolution(year: i32) -> f64 {
    let short_term = 0.1 * sin_cycle(t(year), RED_SPOT_WOBBLE_YEARS);
    red_spot_size_factor(year) * (1.0 + short_term)
}

/// Radiation-belt ratio driven by the solar wind and the magnetic cycle
pub fn radiation_variations(year: i32) -> f64 {
    let t = t(year);
    1.0 + 0.3 * sin_cycle(t, SOLAR_CYCLE_YEARS) + 0.2 * cos_cycle(t, MAGNETIC_CYCLE_YEARS)
}

/// Superposed influence of the four Galilean moons
pub fn moon_influences(year: i32) -> f64 {
    let t = t(year);
    1.0 + 0.15 * sin_cycle(t, IO_CYCLE_YEARS)
        + 0.10 * cos_cycle(t, EUROPA_CYCLE_YEARS)
        + 0.05 * sin_cycle(t, GANYMEDE_CYCLE_YEARS)
        + 0.03 * cos_cycle(t, CALLISTO_CYCLE_YEARS)
}

/// High-frequency wobble from the 9.9-hour rotation, rescaled to years
pub fn short_term_variation(year: i32) -> f64 {
    1.0 + 0.05 * sin_cycle(t(year), SHORT_TERM_PERIOD_YEARS)
}

/// Monotone long-term drift factor; decays only for the Shrinking policy
pub fn long_term_trend(year: i32, config: &Configuration) -> f64 {
    let t = t(year);
    match config.trend {
        TrendPolicy::Shrinking => 1.0 - SHRINKING_DRIFT_PER_YEAR * t,
        _ => 1.0 + STABLE_DRIFT_PER_YEAR * t,
    }
}

/// Observation quality on a 0-100 scale
///
/// An era step function (instrument quality) plus a small orbital-position
/// oscillation, clamped above at 100.
pub fn observation_quality(year: i32) -> f64 {
    let step = if year < 1700 {
        10.0
    } else if year < 1800 {
        20.0
    } else if year < 1900 {
        40.0
    } else if year < 1970 {
        60.0
    } else if year < 1990 {
        80.0
    } else {
        95.0
    };

    let orbital_variation = 5.0 * sin_cycle(t(year), SEASONAL_PERIOD_YEARS);
    (step + orbital_variation).min(100.0)
}
