//! Descriptive statistics over the merged table

use crate::Result;
use crate::app::models::{Channel, MergedTable};
use std::path::Path;
use tracing::info;

/// Statistics of one numeric column of the merged table
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; absent with fewer than two values
    pub std_dev: Option<f64>,
}

/// Compute statistics for every parameter value column and weather channel
///
/// Parameter columns use the measurement value field, parsed leniently:
/// non-numeric cells (status text and the like) are ignored. Columns with no
/// numeric values are omitted.
pub fn summarize(table: &MergedTable) -> Vec<ColumnStats> {
    let mut stats = Vec::new();

    for parameter in &table.parameters {
        let values: Vec<f64> = table
            .rows
            .iter()
            .filter_map(|row| row.readings.get(parameter))
            .filter_map(|reading| reading.value.as_deref())
            .filter_map(|raw| raw.parse::<f64>().ok())
            .collect();
        if let Some(column) = column_stats(format!("{}_value", parameter), &values) {
            stats.push(column);
        }
    }

    for channel in Channel::ALL {
        let values: Vec<f64> = table
            .rows
            .iter()
            .filter_map(|row| row.channels.get(channel))
            .collect();
        if let Some(column) = column_stats(channel.as_str().to_string(), &values) {
            stats.push(column);
        }
    }

    stats
}

/// Write the summary as a small CSV table
pub fn write_summary_csv(table: &MergedTable, path: &Path) -> Result<()> {
    let stats = summarize(table);
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["column", "count", "mean", "min", "max", "std_dev"])?;
    for column in &stats {
        writer.write_record([
            column.name.clone(),
            column.count.to_string(),
            format!("{:.4}", column.mean),
            format!("{:.4}", column.min),
            format!("{:.4}", column.max),
            column
                .std_dev
                .map(|s| format!("{:.4}", s))
                .unwrap_or_default(),
        ])?;
    }

    writer.flush().map_err(crate::Error::from)?;
    info!("Wrote summary of {} columns to {}", stats.len(), path.display());
    Ok(())
}

fn column_stats(name: String, values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        Some(variance.sqrt())
    } else {
        None
    };

    Some(ColumnStats {
        name,
        count,
        mean,
        min,
        max,
        std_dev,
    })
}
