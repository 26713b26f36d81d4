//! Record extraction from the telemetry sheet data rows
//!
//! Walks every row after the header block, composes an hourly timestamp from
//! the date and time cells, and collects the mapped parameter readings.
//! Rows with blank or unparseable date/time cells are skipped rather than
//! failing the whole sheet.

use crate::app::models::{CellGrid, ParameterReading, PlantRecord, PlantTable};
use crate::constants::{
    DATE_COL, DEFAULT_SHEET_TITLE, FIRST_DATA_ROW, HOUR_SUFFIX, OUTLET_COL,
    RECORD_TIMESTAMP_FORMAT, TIME_COL, TITLE_ROW,
};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::{debug, info};

use super::header::SheetLayout;

/// Extract all measurement records from a grid using a decoded layout
///
/// Records are returned sorted ascending by timestamp; rows sharing a
/// timestamp keep their sheet order. Fails when no row yields a valid
/// record.
pub fn extract_records(grid: &CellGrid, layout: &SheetLayout) -> Result<PlantTable> {
    let title = sheet_title(grid);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, row) in grid.iter().enumerate().skip(FIRST_DATA_ROW) {
        match extract_row(row, layout) {
            Some(record) => records.push(record),
            None => {
                if row.iter().any(|cell| !cell.trim().is_empty()) {
                    debug!("Skipping row {}: no valid timestamp", row_idx);
                    skipped += 1;
                }
            }
        }
    }

    if records.is_empty() {
        return Err(Error::malformed_sheet(
            "no valid measurement rows in sheet",
        ));
    }

    // Stable sort: rows with equal timestamps keep their sheet order
    records.sort_by_key(|record| record.timestamp);

    info!(
        "Extracted {} records ({} rows skipped) for '{}'",
        records.len(),
        skipped,
        title
    );

    Ok(PlantTable {
        title,
        parameters: layout.parameters.clone(),
        records,
    })
}

/// Extract a single data row, or `None` when its timestamp cannot be formed
fn extract_row(row: &[String], layout: &SheetLayout) -> Option<PlantRecord> {
    let date = row.get(DATE_COL)?.trim();
    let raw_time = row.get(TIME_COL)?.trim();
    if date.is_empty() || raw_time.is_empty() {
        return None;
    }

    let time = raw_time.trim_end_matches(HOUR_SUFFIX).trim();
    let composed = format!("{} {}:00", date, time);
    let timestamp = NaiveDateTime::parse_from_str(&composed, RECORD_TIMESTAMP_FORMAT).ok()?;

    let outlet = row
        .get(OUTLET_COL)
        .map(|cell| cell.trim().to_string())
        .unwrap_or_default();

    let mut readings: HashMap<String, ParameterReading> = HashMap::new();
    for parameter in &layout.parameters {
        let mut reading = ParameterReading::default();
        if let Some(columns) = layout.parameter_columns.get(parameter) {
            for (&kind, &col) in columns {
                let value = row
                    .get(col)
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_string);
                reading.set(kind, value);
            }
        }
        readings.insert(parameter.clone(), reading);
    }

    Some(PlantRecord {
        outlet,
        date: date.to_string(),
        time: time.to_string(),
        timestamp,
        readings,
    })
}

/// Title cell of the sheet, or the default when blank or absent
fn sheet_title(grid: &CellGrid) -> String {
    grid.get(TITLE_ROW)
        .and_then(|row| row.first())
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_SHEET_TITLE.to_string())
}
