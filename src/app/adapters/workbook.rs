//! Workbook reading adapter
//!
//! Loads the first worksheet of an Excel workbook into a plain cell grid of
//! trimmed strings, normalizing numeric and date cells into the textual
//! forms the sheet parser expects.

use crate::app::models::CellGrid;
use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;
use tracing::{debug, info};

/// Load the first worksheet of a workbook as a cell grid
pub fn load_grid(path: &Path) -> Result<CellGrid> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        Error::workbook(format!("failed to open {}: {}", path.display(), e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::workbook(format!("{} contains no worksheets", path.display())))?
        .map_err(|e| Error::workbook(format!("failed to read first worksheet: {}", e)))?;

    let grid: CellGrid = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    debug!("Worksheet dimensions: {} rows", grid.len());
    info!("Loaded workbook {}", path.display());
    Ok(grid)
}

/// Normalize one cell into trimmed text
///
/// Integral floats drop their fractional part (Excel stores most counts as
/// floats); date-time cells at midnight render as a bare date, matching how
/// the telemetry sheets present their date column.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => {
                if naive.time() == chrono::NaiveTime::MIN {
                    naive.format("%Y-%m-%d").to_string()
                } else {
                    naive.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            None => cell.to_string(),
        },
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(e) => {
            debug!("Error cell in worksheet: {:?}", e);
            String::new()
        }
    }
}
