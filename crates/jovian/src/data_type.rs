//! The closed set of selectable Jovian data types

use serde::{Deserialize, Serialize};

/// One of the ten observable quantities the generator can synthesize
///
/// Selection input is a string key or a 1-based ordinal; both map into this
/// closed set. The ordinal order matches [`DataType::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    AtmosphericTemperature,
    WindSpeeds,
    GreatRedSpot,
    MagneticField,
    RadiationBelts,
    AuroralActivity,
    RingSystem,
    MoonsActivity,
    AtmosphericComposition,
    OrbitalParameters,
}

impl DataType {
    /// All data types, in selection-menu order
    pub fn all() -> [DataType; 10] {
        [
            Self::AtmosphericTemperature,
            Self::WindSpeeds,
            Self::GreatRedSpot,
            Self::MagneticField,
            Self::RadiationBelts,
            Self::AuroralActivity,
            Self::RingSystem,
            Self::MoonsActivity,
            Self::AtmosphericComposition,
            Self::OrbitalParameters,
        ]
    }

    /// The canonical string key for this data type
    pub fn key(&self) -> &'static str {
        match self {
            Self::AtmosphericTemperature => "atmospheric_temperature",
            Self::WindSpeeds => "wind_speeds",
            Self::GreatRedSpot => "great_red_spot",
            Self::MagneticField => "magnetic_field",
            Self::RadiationBelts => "radiation_belts",
            Self::AuroralActivity => "auroral_activity",
            Self::RingSystem => "ring_system",
            Self::MoonsActivity => "moons_activity",
            Self::AtmosphericComposition => "atmospheric_composition",
            Self::OrbitalParameters => "orbital_parameters",
        }
    }

    /// Parse a canonical key; returns `None` for anything else
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|dt| dt.key() == key)
    }

    /// Look up a 1-based selection ordinal
    ///
    /// Returns `None` when the ordinal is out of range; the selection
    /// front-end is expected to fall back to [`DataType::WindSpeeds`].
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal == 0 {
            return None;
        }
        Self::all().get(ordinal - 1).copied()
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
