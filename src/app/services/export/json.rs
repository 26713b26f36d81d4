//! JSON export of the merged table with run metadata

use crate::Result;
use crate::app::models::MergedTable;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Provenance block written alongside the merged rows
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Sheet title of the plant input
    pub title: String,

    /// Weather station name, or a label for the simulated source
    pub station_name: String,

    /// "kma_api" or "simulation"
    pub data_source: String,

    pub start: NaiveDate,
    pub end: NaiveDate,

    pub total_records: usize,
    pub parameters: Vec<String>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    metadata: &'a ExportMetadata,
    data: &'a [crate::app::models::MergedRow],
}

/// Write the merged table and its metadata as pretty-printed JSON
///
/// Timestamps serialize in ISO-8601 form; absent weather values serialize
/// as `null`.
pub fn write_merged_json(table: &MergedTable, metadata: &ExportMetadata, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| crate::Error::io(format!("failed to create {}", path.display()), e))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(
        writer,
        &ExportDocument {
            metadata,
            data: &table.rows,
        },
    )?;

    info!("Wrote {} merged rows to {}", table.rows.len(), path.display());
    Ok(())
}
