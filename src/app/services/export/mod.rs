//! Export of merged, plant-only and weather-only tables
//!
//! Writers for the pipeline outputs:
//! - CSV: merged analytic table, plant-only values, weather-only series
//! - JSON: merged table with run metadata
//! - Summary: per-parameter and per-channel descriptive statistics

pub mod csv;
pub mod json;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use self::csv::{write_merged_csv, write_plant_csv, write_weather_csv};
pub use json::{ExportMetadata, write_merged_json};
pub use summary::{ColumnStats, summarize, write_summary_csv};
