//! CSV persistence for generated datasets

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use jovian::{JovianDataset, COLUMNS, END_YEAR, START_YEAR};

/// Errors that can occur during CSV export.
#[derive(Error, Debug)]
pub enum CsvExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the dataset as CSV into `dir`, returning the file path
///
/// The file is named `jupiter_<data_type>_data_1610_2025.csv`. Columns follow
/// the fixed contract order; the sparse `Moons_Activity` marker trails the
/// sixteen contract columns and is left empty where unset.
pub fn export_dataset_csv(
    dataset: &JovianDataset,
    dir: &Path,
) -> Result<PathBuf, CsvExportError> {
    let file_name = format!(
        "jupiter_{}_data_{}_{}.csv",
        dataset.data_type, START_YEAR, END_YEAR
    );
    let path = dir.join(file_name);
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", COLUMNS.join(","))?;

    for row in &dataset.rows {
        write!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.earth_year,
            row.jupiter_year,
            row.solar_distance,
            row.base_value,
            row.seasonal_variation,
            row.atmospheric_storms,
            row.magnetic_activity,
            row.great_red_spot_evolution,
            row.radiation_variations,
            row.moon_influences,
            row.smoothed_value,
            row.short_term_variation,
            row.long_term_trend,
            row.jupiter_index,
            row.observation_quality,
            row.future_prediction,
        )?;
        match row.moons_activity {
            Some(marker) => writeln!(writer, ",{}", marker)?,
            None => writeln!(writer, ",")?,
        }
    }

    writer.flush()?;
    Ok(path)
}
