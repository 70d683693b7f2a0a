use approx::assert_relative_eq;

use jovian::YearRecord;

use crate::events::{apply_events, POINT_EVENTS, STORM_YEARS};

/// Synthetic row with recognizable pre-overlay values
fn marked_row(earth_year: i32) -> YearRecord {
    YearRecord {
        earth_year,
        jupiter_year: 0.0,
        solar_distance: 5.20,
        base_value: 10.0,
        seasonal_variation: 1.0,
        atmospheric_storms: 2.0,
        magnetic_activity: 0.9,
        great_red_spot_evolution: 1.1,
        radiation_variations: 1.05,
        moon_influences: 1.0,
        smoothed_value: 10.0,
        short_term_variation: 1.0,
        long_term_trend: 1.0,
        jupiter_index: 100.0,
        observation_quality: 60.0,
        future_prediction: 10.0,
        moons_activity: None,
    }
}

fn overlay(years: &[i32]) -> Vec<YearRecord> {
    let mut rows: Vec<YearRecord> = years.iter().copied().map(marked_row).collect();
    apply_events(&mut rows);
    rows
}

#[test]
fn test_point_event_assignments() {
    let rows = overlay(&[1610, 1665, 1831, 1973, 1979, 2021]);

    assert_relative_eq!(rows[0].observation_quality, 15.0);
    assert_eq!(rows[0].moons_activity, Some(50.0));

    assert_relative_eq!(rows[1].great_red_spot_evolution, 1.8);
    assert_relative_eq!(rows[2].observation_quality, 30.0);

    assert_relative_eq!(rows[3].observation_quality, 70.0);
    assert_relative_eq!(rows[3].radiation_variations, 1.5);

    assert_relative_eq!(rows[4].observation_quality, 85.0);
    assert_relative_eq!(rows[4].atmospheric_storms, 1.8);
    assert_eq!(rows[4].moons_activity, Some(80.0));

    assert_relative_eq!(rows[5].observation_quality, 99.0);
}

#[test]
fn test_base_value_multipliers() {
    let rows = overlay(&[1995, 2016]);

    assert_relative_eq!(rows[0].base_value, 10.0 * 1.3);
    assert_relative_eq!(rows[0].observation_quality, 95.0);

    assert_relative_eq!(rows[1].base_value, 10.0 * 1.5);
}

#[test]
fn test_storm_year_multipliers() {
    let rows = overlay(&[1990, 2006, 2012, 2020]);

    for row in &rows {
        assert_relative_eq!(row.atmospheric_storms, 2.0 * 1.5);
        assert_relative_eq!(row.jupiter_index, 100.0 * 1.2);
        // No point event touches these years' quality
        assert_relative_eq!(row.observation_quality, 60.0);
    }
}

#[test]
fn test_2016_receives_both_passes() {
    let rows = overlay(&[2016]);
    let row = &rows[0];

    // Point-event assignments
    assert_relative_eq!(row.observation_quality, 98.0);
    assert_relative_eq!(row.magnetic_activity, 1.4);
    assert_relative_eq!(row.base_value, 10.0 * 1.5);

    // Storm-year boost on top; 2016's point event leaves storms untouched,
    // so the multiplier sees the pre-overlay value
    assert_relative_eq!(row.atmospheric_storms, 2.0 * 1.5);
    assert_relative_eq!(row.jupiter_index, 100.0 * 1.2);
}

#[test]
fn test_non_event_years_are_untouched() {
    let rows = overlay(&[1700, 1850, 1999, 2024]);
    for row in &rows {
        assert_eq!(*row, marked_row(row.earth_year));
    }
}

#[test]
fn test_tables_match_the_documented_history() {
    let event_years: Vec<i32> = POINT_EVENTS.iter().map(|e| e.year).collect();
    assert_eq!(
        event_years,
        vec![1610, 1665, 1831, 1973, 1979, 1995, 2000, 2007, 2016, 2021]
    );
    assert_eq!(STORM_YEARS, [1990, 2006, 2012, 2016, 2020]);
}
