//! Jovian observation dataset types
//!
//! This crate defines the common domain types shared by the synthesis engine
//! and its consumers: the data-type catalog, the per-run configuration, the
//! per-year record, and the assembled dataset with its generation metadata.

pub mod config;
pub mod data_type;
pub mod dataset;
pub mod metadata;
pub mod record;

// Re-export key types at crate root
pub use config::{Configuration, TrendPolicy};
pub use data_type::DataType;
pub use dataset::JovianDataset;
pub use metadata::DatasetMetadata;
pub use record::{YearRecord, COLUMNS, END_YEAR, JOVIAN_YEAR_EARTH_YEARS, START_YEAR, YEAR_COUNT};

#[cfg(test)]
mod metadata_test;
