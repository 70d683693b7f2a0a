//! Per-run configuration and the data-type catalog
//!
//! Each data type resolves to one immutable [`Configuration`] that stays
//! active for the lifetime of a generation run. Unknown keys silently resolve
//! to the default configuration; the caller never sees an error.

use serde::{Deserialize, Serialize};

use crate::data_type::DataType;
use crate::record::JOVIAN_YEAR_EARTH_YEARS;

/// Rule selecting how the primary cycle combines its phase signals
///
/// A closed set: each data type carries exactly one policy, and the cycle
/// synthesizer dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendPolicy {
    /// Plain seasonal cycle around the base value
    Stable,

    /// Seasonal cycle blended with the spot cycle (jet-stream dynamics)
    JetStreams,

    /// Seasonal cycle plus a slow absolute linear decay
    ///
    /// The decay term is `-0.01` per year since 1610, not scaled by the
    /// configured amplitude. Kept literally from the reference behavior.
    Shrinking,

    /// Solar cycle dominant, seasonal cycle secondary
    SolarDependent,

    /// Single irregular cycle driven by moon volcanism
    Volcanic,
}

impl std::fmt::Display for TrendPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "Stable"),
            Self::JetStreams => write!(f, "Jet streams"),
            Self::Shrinking => write!(f, "Shrinking"),
            Self::SolarDependent => write!(f, "Solar dependent"),
            Self::Volcanic => write!(f, "Volcanic"),
        }
    }
}

/// Resolved parameters for one generation run
///
/// Exactly one `Configuration` is active per run. All data types share the
/// 11.86-year Jovian cycle; base value, amplitude, trend policy, and unit
/// differ per type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Center of the primary cycle, in `unit`
    pub base_value: f64,

    /// Seasonal cycle length in Earth years (11.86 for every data type)
    pub cycle_years: f64,

    /// Peak deviation of the primary cycle from `base_value`
    pub amplitude: f64,

    /// Trend policy dispatched by the cycle synthesizer
    pub trend: TrendPolicy,

    /// Physical unit of `base_value`
    #[serde(borrow)]
    pub unit: &'static str,

    /// Human-readable description of the data type
    #[serde(borrow)]
    pub description: &'static str,
}

impl Configuration {
    /// Resolve any data-type key to a configuration
    ///
    /// Unknown keys map to the default configuration; this is not an error
    /// condition from the caller's perspective.
    pub fn resolve(key: &str) -> Self {
        match DataType::from_key(key) {
            Some(data_type) => Self::for_data_type(data_type),
            None => Self::default(),
        }
    }

    /// Catalog entry for one of the ten named data types
    pub fn for_data_type(data_type: DataType) -> Self {
        match data_type {
            DataType::AtmosphericTemperature => Self::catalog_entry(
                -145.0,
                20.0,
                TrendPolicy::Stable,
                "°C",
                "Atmospheric temperature",
            ),
            DataType::WindSpeeds => Self::catalog_entry(
                150.0,
                100.0,
                TrendPolicy::JetStreams,
                "km/h",
                "Wind speeds",
            ),
            DataType::GreatRedSpot => Self::catalog_entry(
                16000.0,
                2000.0,
                TrendPolicy::Shrinking,
                "km diameter",
                "Great Red Spot",
            ),
            DataType::MagneticField => Self::catalog_entry(
                4_200_000.0,
                100_000.0,
                TrendPolicy::Stable,
                "nT",
                "Magnetic field",
            ),
            // The reference catalog tags this "variable", which dispatched to
            // the stable branch; it is modeled as Stable outright.
            DataType::RadiationBelts => Self::catalog_entry(
                3500.0,
                500.0,
                TrendPolicy::Stable,
                "rads/h",
                "Radiation belts",
            ),
            DataType::AuroralActivity => Self::catalog_entry(
                80.0,
                40.0,
                TrendPolicy::SolarDependent,
                "intensity",
                "Auroral activity",
            ),
            DataType::RingSystem => Self::catalog_entry(
                30.0,
                5.0,
                TrendPolicy::Stable,
                "albedo",
                "Ring system",
            ),
            DataType::MoonsActivity => Self::catalog_entry(
                65.0,
                20.0,
                TrendPolicy::Volcanic,
                "index",
                "Moons activity",
            ),
            DataType::AtmosphericComposition => Self::catalog_entry(
                90.0,
                5.0,
                TrendPolicy::Stable,
                "% hydrogen",
                "Atmospheric composition",
            ),
            DataType::OrbitalParameters => Self::catalog_entry(
                5.20,
                0.20,
                TrendPolicy::Stable,
                "AU",
                "Solar distance",
            ),
        }
    }

    fn catalog_entry(
        base_value: f64,
        amplitude: f64,
        trend: TrendPolicy,
        unit: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            base_value,
            cycle_years: JOVIAN_YEAR_EARTH_YEARS,
            amplitude,
            trend,
            unit,
            description,
        }
    }
}

impl Default for Configuration {
    /// Fallback configuration for unrecognized data-type keys
    fn default() -> Self {
        Self::catalog_entry(
            100.0,
            20.0,
            TrendPolicy::Stable,
            "units",
            "Generic Jovian data",
        )
    }
}
