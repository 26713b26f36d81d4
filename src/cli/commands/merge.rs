//! Merge command: workbook in, merged analytic table out

use crate::app::adapters::workbook;
use crate::app::models::PlantTable;
use crate::app::services::export::{
    ExportMetadata, write_merged_csv, write_merged_json, write_plant_csv, write_summary_csv,
    write_weather_csv,
};
use crate::app::services::range_fetcher::{KmaTransport, RangeFetcher};
use crate::app::services::reconciler::reconcile;
use crate::app::services::sheet_parser::parse_sheet;
use crate::app::services::simulation::SimulatedWeather;
use crate::cli::args::{ExportFormat, MergeArgs};
use crate::cli::commands::shared::{MergeStats, setup_logging};
use crate::config::Config;
use crate::{Error, Result};
use chrono::NaiveDate;
use colored::Colorize;
use tracing::info;

pub fn run(args: MergeArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    args.validate().map_err(Error::configuration)?;

    let mut config = Config::default();
    if let Some(key) = &args.api_key {
        config = config.with_auth_key(key);
    }
    let station = config
        .station(args.station)
        .ok_or_else(|| Error::configuration(format!("unknown station number {}", args.station)))?
        .clone();

    info!("Reading workbook {}", args.input.display());
    let grid = workbook::load_grid(&args.input)?;
    let plant = parse_sheet(&grid)?;

    let (start, end) = resolve_range(&args, &plant)?;
    info!("Weather range: {} to {} at station {}", start, end, station.name);

    let live = config.api.auth_key.is_some();
    let weather = if live {
        let transport = KmaTransport::new(&config.api)?;
        RangeFetcher::new(transport)
            .with_progress(args.show_progress())
            .fetch(station.id, start, end)?
    } else {
        info!("No API credential; using simulated weather");
        let source = match args.seed {
            Some(seed) => SimulatedWeather::with_seed(seed),
            None => SimulatedWeather::new(),
        };
        source.generate(start, end)?
    };

    let merged = reconcile(&plant, &weather)?;

    match args.format {
        ExportFormat::Csv => write_merged_csv(&merged, &args.output)?,
        ExportFormat::Json => {
            let metadata = ExportMetadata {
                title: merged.title.clone(),
                station_name: station.name.clone(),
                data_source: if live { "kma_api" } else { "simulation" }.to_string(),
                start,
                end,
                total_records: merged.rows.len(),
                parameters: merged.parameters.clone(),
            };
            write_merged_json(&merged, &metadata, &args.output)?;
        }
    }

    if let Some(path) = &args.summary {
        write_summary_csv(&merged, path)?;
    }
    if let Some(path) = &args.plant_csv {
        write_plant_csv(&plant, path)?;
    }
    if let Some(path) = &args.weather_csv {
        write_weather_csv(&weather, path)?;
    }

    let stats = MergeStats {
        plant_records: plant.records.len(),
        weather_observations: weather.len(),
        merged_rows: merged.rows.len(),
        parameters: merged.parameters.len(),
    };
    if !args.quiet {
        print_summary(&args, &stats, &station.name, live);
    }
    Ok(())
}

/// Date range from the CLI, falling back to the span of the sheet records
fn resolve_range(args: &MergeArgs, plant: &PlantTable) -> Result<(NaiveDate, NaiveDate)> {
    // extract_records guarantees a non-empty, sorted record list
    let first = plant
        .records
        .first()
        .ok_or_else(|| Error::malformed_sheet("no records to derive a date range from"))?;
    let last = plant
        .records
        .last()
        .ok_or_else(|| Error::malformed_sheet("no records to derive a date range from"))?;

    let start = args.start.unwrap_or_else(|| first.timestamp.date());
    let end = args.end.unwrap_or_else(|| last.timestamp.date());
    if start > end {
        return Err(Error::configuration(format!(
            "invalid date range: {} is after {}",
            start, end
        )));
    }
    Ok((start, end))
}

fn print_summary(args: &MergeArgs, stats: &MergeStats, station_name: &str, live: bool) {
    println!("\n{}", "Merge Complete".bold().green());
    println!("{}", "=".repeat(40));
    println!("Plant records:        {}", stats.plant_records);
    println!("Parameters:           {}", stats.parameters);
    println!(
        "Weather observations: {} ({})",
        stats.weather_observations,
        if live {
            format!("station {}", station_name)
        } else {
            "simulated".to_string()
        }
    );
    println!("Merged rows:          {}", stats.merged_rows);
    println!("Output:               {}", args.output.display().to_string().cyan());
}
