//! Historical-event overlay
//!
//! Specific years carry hand-specified values from documented observation
//! history. The overrides are data, not control flow: a static table of
//! field-level operations applied to the finished table in two ordered
//! passes - point events first, then the storm-year multipliers. Where both
//! touch the same year (2016), the multiplier applies on top of the patch.

use jovian::YearRecord;

/// Field of a [`YearRecord`] addressable by an overlay operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BaseValue,
    AtmosphericStorms,
    MagneticActivity,
    GreatRedSpotEvolution,
    RadiationVariations,
    JupiterIndex,
    ObservationQuality,
    MoonsActivity,
}

/// One field-level override: an unconditional assignment or a multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldOp {
    Set(Field, f64),
    Scale(Field, f64),
}

/// A hardcoded year with explicit field overrides
#[derive(Debug, Clone, Copy)]
pub struct PointEvent {
    pub year: i32,
    pub label: &'static str,
    pub ops: &'static [FieldOp],
}

/// Observation milestones, in chronological order
pub const POINT_EVENTS: &[PointEvent] = &[
    PointEvent {
        year: 1610,
        label: "Galileo discovers the Galilean moons",
        ops: &[
            FieldOp::Set(Field::ObservationQuality, 15.0),
            FieldOp::Set(Field::MoonsActivity, 50.0),
        ],
    },
    PointEvent {
        year: 1665,
        label: "First recorded observation of the Great Red Spot",
        ops: &[FieldOp::Set(Field::GreatRedSpotEvolution, 1.8)],
    },
    PointEvent {
        year: 1831,
        label: "Detailed drawings of the atmospheric bands",
        ops: &[FieldOp::Set(Field::ObservationQuality, 30.0)],
    },
    PointEvent {
        year: 1973,
        label: "Pioneer 10 flyby",
        ops: &[
            FieldOp::Set(Field::ObservationQuality, 70.0),
            FieldOp::Set(Field::RadiationVariations, 1.5),
        ],
    },
    PointEvent {
        year: 1979,
        label: "Voyager 1 and 2 flybys",
        ops: &[
            FieldOp::Set(Field::ObservationQuality, 85.0),
            FieldOp::Set(Field::AtmosphericStorms, 1.8),
            FieldOp::Set(Field::MoonsActivity, 80.0),
        ],
    },
    PointEvent {
        year: 1995,
        label: "Galileo orbit insertion",
        ops: &[
            FieldOp::Set(Field::ObservationQuality, 95.0),
            FieldOp::Scale(Field::BaseValue, 1.3),
        ],
    },
    PointEvent {
        year: 2000,
        label: "Cassini flyby",
        ops: &[FieldOp::Set(Field::ObservationQuality, 90.0)],
    },
    PointEvent {
        year: 2007,
        label: "New Horizons flyby",
        ops: &[FieldOp::Set(Field::ObservationQuality, 92.0)],
    },
    PointEvent {
        year: 2016,
        label: "Juno orbit insertion",
        ops: &[
            FieldOp::Set(Field::ObservationQuality, 98.0),
            FieldOp::Set(Field::MagneticActivity, 1.4),
            FieldOp::Scale(Field::BaseValue, 1.5),
        ],
    },
    PointEvent {
        year: 2021,
        label: "James Webb Space Telescope observations",
        ops: &[FieldOp::Set(Field::ObservationQuality, 99.0)],
    },
];

/// Years with documented giant storms
pub const STORM_YEARS: [i32; 5] = [1990, 2006, 2012, 2016, 2020];

const STORM_BOOST: f64 = 1.5;
const STORM_INDEX_BOOST: f64 = 1.2;

/// Apply both overlay passes to the finished table, in order
pub fn apply_events(rows: &mut [YearRecord]) {
    // Pass 1: point events
    for event in POINT_EVENTS {
        if let Some(row) = rows.iter_mut().find(|row| row.earth_year == event.year) {
            for op in event.ops {
                apply_op(row, *op);
            }
        }
    }

    // Pass 2: storm-year multipliers, on top of any point-event patch
    for row in rows.iter_mut() {
        if STORM_YEARS.contains(&row.earth_year) {
            row.atmospheric_storms *= STORM_BOOST;
            row.jupiter_index *= STORM_INDEX_BOOST;
        }
    }
}

fn apply_op(row: &mut YearRecord, op: FieldOp) {
    match op {
        FieldOp::Set(field, value) => match field {
            Field::BaseValue => row.base_value = value,
            Field::AtmosphericStorms => row.atmospheric_storms = value,
            Field::MagneticActivity => row.magnetic_activity = value,
            Field::GreatRedSpotEvolution => row.great_red_spot_evolution = value,
            Field::RadiationVariations => row.radiation_variations = value,
            Field::JupiterIndex => row.jupiter_index = value,
            Field::ObservationQuality => row.observation_quality = value,
            Field::MoonsActivity => row.moons_activity = Some(value),
        },
        FieldOp::Scale(field, factor) => match field {
            Field::BaseValue => row.base_value *= factor,
            Field::AtmosphericStorms => row.atmospheric_storms *= factor,
            Field::MagneticActivity => row.magnetic_activity *= factor,
            Field::GreatRedSpotEvolution => row.great_red_spot_evolution *= factor,
            Field::RadiationVariations => row.radiation_variations *= factor,
            Field::JupiterIndex => row.jupiter_index *= factor,
            Field::ObservationQuality => row.observation_quality *= factor,
            Field::MoonsActivity => {
                if let Some(marker) = row.moons_activity.as_mut() {
                    *marker *= factor;
                }
            }
        },
    }
}
