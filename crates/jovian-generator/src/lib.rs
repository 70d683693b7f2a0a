//! Time-series synthesis for simulated Jovian observations
//!
//! Generates the annual 1610-2025 dataset for a selected data type: the
//! primary cycle with its trend policy, the auxiliary signal bank, smoothing,
//! the composite index, the forward projection, and the historical-event
//! overlay that patches specific years.
//!
//! All stochastic entry points take an explicit `&mut ChaChaRng`, so the same
//! seed reproduces the same dataset bit-for-bit.

pub mod cycle;
pub mod events;
pub mod generation;
pub mod prediction;
pub mod sampling;
pub mod signals;
pub mod smoothing;

// Re-export the main entry points
pub use generation::{generate_dataset, generate_dataset_with_metadata, jupiter_index};

pub use cycle::{primary_cycle, primary_cycle_series, trend_value};
pub use events::{apply_events, Field, FieldOp, PointEvent, POINT_EVENTS, STORM_YEARS};
pub use prediction::future_prediction;
pub use smoothing::centered_moving_average;

#[cfg(test)]
mod events_test;
#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod sampling_test;
