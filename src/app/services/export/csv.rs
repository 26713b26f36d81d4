//! CSV writers for the pipeline tables

use crate::app::models::{Channel, FieldKind, MergedTable, PlantTable, WeatherObservation};
use crate::constants::HOUR_KEY_FORMAT;
use crate::Result;
use std::path::Path;
use tracing::info;

/// Write the merged analytic table as CSV
///
/// Columns: timestamp, outlet, date, time, then one column per parameter and
/// field kind (`<parameter>_<kind>`), then the five weather channels. Absent
/// values are written as empty cells.
pub fn write_merged_csv(table: &MergedTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "timestamp".to_string(),
        "outlet".to_string(),
        "date".to_string(),
        "time".to_string(),
    ];
    for parameter in &table.parameters {
        for kind in FieldKind::ALL {
            header.push(format!("{}_{}", parameter, kind.as_str()));
        }
    }
    for channel in Channel::ALL {
        header.push(channel.as_str().to_string());
    }
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![
            row.timestamp.format(HOUR_KEY_FORMAT).to_string(),
            row.outlet.clone(),
            row.date.clone(),
            row.time.clone(),
        ];
        for parameter in &table.parameters {
            let reading = row.readings.get(parameter);
            for kind in FieldKind::ALL {
                record.push(
                    reading
                        .and_then(|r| r.get(kind))
                        .unwrap_or_default()
                        .to_string(),
                );
            }
        }
        for channel in Channel::ALL {
            record.push(format_value(row.channels.get(channel)));
        }
        writer.write_record(&record)?;
    }

    writer.flush().map_err(crate::Error::from)?;
    info!("Wrote {} merged rows to {}", table.rows.len(), path.display());
    Ok(())
}

/// Write the plant table alone, one value column per parameter
pub fn write_plant_csv(table: &PlantTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "timestamp".to_string(),
        "outlet".to_string(),
    ];
    for parameter in &table.parameters {
        header.push(format!("{}_value", parameter));
    }
    writer.write_record(&header)?;

    for record in &table.records {
        let mut row = vec![
            record.timestamp.format(HOUR_KEY_FORMAT).to_string(),
            record.outlet.clone(),
        ];
        for parameter in &table.parameters {
            row.push(
                record
                    .readings
                    .get(parameter)
                    .and_then(|r| r.value.as_deref())
                    .unwrap_or_default()
                    .to_string(),
            );
        }
        writer.write_record(&row)?;
    }

    writer.flush().map_err(crate::Error::from)?;
    info!("Wrote {} plant rows to {}", table.records.len(), path.display());
    Ok(())
}

/// Write a weather series alone, one column per channel
pub fn write_weather_csv(observations: &[WeatherObservation], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["hour".to_string()];
    for channel in Channel::ALL {
        header.push(channel.as_str().to_string());
    }
    writer.write_record(&header)?;

    for observation in observations {
        let mut row = vec![observation.hour_key.clone()];
        for channel in Channel::ALL {
            row.push(format_value(observation.channels.get(channel)));
        }
        writer.write_record(&row)?;
    }

    writer.flush().map_err(crate::Error::from)?;
    info!(
        "Wrote {} weather rows to {}",
        observations.len(),
        path.display()
    );
    Ok(())
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
