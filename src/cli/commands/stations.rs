//! Stations command: list the known weather stations

use crate::cli::args::{OutputFormat, StationsArgs};
use crate::cli::commands::shared::setup_logging;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;

pub fn run(args: StationsArgs) -> Result<()> {
    setup_logging(match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    });

    let config = Config::default();
    let rendered = match args.output_format {
        OutputFormat::Human => render_human(&config),
        OutputFormat::Json => serde_json::to_string_pretty(&config.stations)?,
        OutputFormat::Csv => render_csv(&config)?,
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))?;
            println!("Wrote {} stations to {}", config.stations.len(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn render_human(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Known Weather Stations".bold()));
    out.push_str(&format!(
        "{:<6} {:<14} {:>9} {:>10}  {}\n",
        "ID", "Name", "Lat", "Lon", "Region"
    ));
    for station in &config.stations {
        let marker = if station.id == config.default_station_id {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<6} {:<14} {:>9.5} {:>10.5}  {}{}\n",
            station.id, station.name, station.lat, station.lon, station.region, marker
        ));
    }
    out
}

fn render_csv(config: &Config) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "lat", "lon", "region"])?;
    for station in &config.stations {
        writer.write_record([
            station.id.to_string(),
            station.name.clone(),
            station.lat.to_string(),
            station.lon.to_string(),
            station.region.clone(),
        ])?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| Error::configuration(format!("failed to finalize station CSV: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| Error::configuration(format!("station CSV was not UTF-8: {}", e)))
}
