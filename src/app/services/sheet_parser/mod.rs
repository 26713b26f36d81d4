//! Telemetry sheet parser service
//!
//! Decodes the two-row-header plant telemetry sheet into typed records.
//! The parser consists of:
//! - Header decoder: maps the merged-style parameter header and the
//!   field-kind sub-header to absolute column positions
//! - Record extractor: walks the data rows, composes hourly timestamps,
//!   and collects per-parameter readings
//!
//! The sheet format has three fixed leading columns (outlet, date, time)
//! followed by repeating parameter column groups.

pub mod header;
pub mod records;

#[cfg(test)]
pub mod tests;

pub use header::SheetLayout;
pub use records::extract_records;

use crate::Result;
use crate::app::models::{CellGrid, PlantTable};

/// Parse a complete cell grid into a plant table
///
/// Decodes the header rows into a column layout, then extracts and sorts
/// the measurement records. Fails if the grid has no usable header or no
/// valid data rows.
pub fn parse_sheet(grid: &CellGrid) -> Result<PlantTable> {
    let layout = SheetLayout::decode(grid)?;
    extract_records(grid, &layout)
}
