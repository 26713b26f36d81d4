//! Hourly reconciliation of plant records with weather observations
//!
//! Left-joins the plant table against the weather series on hour-truncated
//! timestamps, then linearly interpolates interior gaps in each weather
//! channel. Every plant record produces exactly one output row; weather
//! hours with no plant record are discarded.

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::{
    Channel, ChannelValues, MergedRow, MergedTable, PlantTable, WeatherObservation,
    truncate_to_hour,
};
use crate::constants::HOUR_KEY_FORMAT;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::{debug, info};

/// Join a plant table with a weather series into the merged analytic table
///
/// Output rows preserve the plant table's order and count. When the weather
/// series carries duplicate hours, the first observation for an hour wins.
pub fn reconcile(plant: &PlantTable, weather: &[WeatherObservation]) -> Result<MergedTable> {
    let mut by_hour: HashMap<NaiveDateTime, &ChannelValues> = HashMap::new();
    for observation in weather {
        by_hour
            .entry(truncate_to_hour(observation.timestamp))
            .or_insert(&observation.channels);
    }

    let mut rows: Vec<MergedRow> = plant
        .records
        .iter()
        .map(|record| {
            let hour = record.hour_key();
            let channels = by_hour.get(&hour).map(|c| (*c).clone()).unwrap_or_default();
            MergedRow {
                timestamp: record.timestamp,
                hour_key: hour.format(HOUR_KEY_FORMAT).to_string(),
                outlet: record.outlet.clone(),
                date: record.date.clone(),
                time: record.time.clone(),
                readings: record.readings.clone(),
                channels,
            }
        })
        .collect();

    let unmatched = rows
        .iter()
        .filter(|row| row.channels == ChannelValues::default())
        .count();
    if unmatched > 0 {
        debug!("{} rows had no weather observation for their hour", unmatched);
    }

    interpolate_channels(&mut rows);

    info!(
        "Reconciled {} plant records against {} weather observations",
        rows.len(),
        weather.len()
    );

    Ok(MergedTable {
        title: plant.title.clone(),
        parameters: plant.parameters.clone(),
        rows,
    })
}

/// Linearly interpolate interior gaps in each weather channel
///
/// Interpolation is positional over the row sequence, not time-weighted.
/// Leading and trailing absences have no bracketing values and stay absent.
fn interpolate_channels(rows: &mut [MergedRow]) {
    for channel in Channel::ALL {
        let mut series: Vec<Option<f64>> = rows.iter().map(|row| row.channels.get(channel)).collect();
        fill_linear(&mut series);
        for (row, value) in rows.iter_mut().zip(series) {
            row.channels.set(channel, value);
        }
    }
}

/// Fill interior `None` runs by linear interpolation between their neighbors
pub fn fill_linear(series: &mut [Option<f64>]) {
    let mut last_known: Option<usize> = None;
    for idx in 0..series.len() {
        if series[idx].is_none() {
            continue;
        }
        if let Some(prev) = last_known {
            let gap = idx - prev;
            if gap > 1 {
                let start = series[prev].unwrap_or_default();
                let end = series[idx].unwrap_or_default();
                let step = (end - start) / gap as f64;
                for offset in 1..gap {
                    series[prev + offset] = Some(start + step * offset as f64);
                }
            }
        }
        last_known = Some(idx);
    }
}
