//! The assembled annual dataset

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::metadata::DatasetMetadata;
use crate::record::{YearRecord, END_YEAR, JOVIAN_YEAR_EARTH_YEARS, START_YEAR};

/// One fully generated dataset: 416 ordered rows plus run context
///
/// Rows are indexed by `earth_year`, strictly increasing from 1610 to 2025
/// with no gaps, regardless of the configuration. The table is assembled and
/// patched once by the event overlay, then handed off whole; downstream
/// consumers read it without mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct JovianDataset {
    /// The requested data-type key, as given by the caller
    ///
    /// Unrecognized keys still produce a dataset (with the default
    /// configuration), so this is stored verbatim rather than as a
    /// [`DataType`](crate::DataType).
    pub data_type: String,

    /// Configuration resolved for this run
    pub config: Configuration,

    /// Run identification and seed provenance
    pub metadata: DatasetMetadata,

    /// One record per year, ordered by `earth_year`
    pub rows: Vec<YearRecord>,
}

impl JovianDataset {
    /// Create a dataset from assembled rows
    ///
    /// # Panics
    /// Panics if the rows do not cover exactly 1610..=2025 in order. A
    /// violation here is a generator defect, not a runtime condition.
    pub fn new(
        data_type: impl Into<String>,
        config: Configuration,
        metadata: DatasetMetadata,
        rows: Vec<YearRecord>,
    ) -> Self {
        assert_eq!(
            rows.len(),
            (END_YEAR - START_YEAR + 1) as usize,
            "dataset must cover every year in {}..={}",
            START_YEAR,
            END_YEAR
        );
        debug_assert!(rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.earth_year == START_YEAR + i as i32));

        Self {
            data_type: data_type.into(),
            config,
            metadata,
            rows,
        }
    }

    /// Number of rows (always 416 for a complete dataset)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the record for an exact Earth year
    pub fn row_for_year(&self, earth_year: i32) -> Option<&YearRecord> {
        if !(START_YEAR..=END_YEAR).contains(&earth_year) {
            return None;
        }
        self.rows.get((earth_year - START_YEAR) as usize)
    }

    /// Jovian years spanned by the dataset (~35 for 1610-2025)
    pub fn jovian_years_covered(&self) -> f64 {
        f64::from(END_YEAR - START_YEAR) / JOVIAN_YEAR_EARTH_YEARS
    }
}
