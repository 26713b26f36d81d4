//! Command-line argument definitions

use crate::constants::DEFAULT_STATION_ID;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Merge plant telemetry spreadsheets with hourly weather observations
#[derive(Parser, Debug)]
#[command(name = "wtms-merger")]
#[command(about = "Merge wastewater plant telemetry with KMA weather observations")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a telemetry workbook, fetch weather, and write the merged table
    Merge(MergeArgs),

    /// List the known weather stations
    Stations(StationsArgs),
}

#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Path to the telemetry workbook (.xlsx)
    pub input: PathBuf,

    /// Weather station number
    #[arg(short, long, default_value_t = DEFAULT_STATION_ID)]
    pub station: u32,

    /// Range start (YYYY-MM-DD); derived from the sheet when omitted
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD); derived from the sheet when omitted
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// KMA API hub credential; without it weather is simulated
    #[arg(long, env = "KMA_AUTH_KEY")]
    pub api_key: Option<String>,

    /// Random seed for the simulated weather source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output path for the merged table
    #[arg(short, long, default_value = "merged.csv")]
    pub output: PathBuf,

    /// Output format of the merged table
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Also write summary statistics to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Also write the plant table alone to this path
    #[arg(long)]
    pub plant_csv: Option<PathBuf>,

    /// Also write the weather series alone to this path
    #[arg(long)]
    pub weather_csv: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl MergeArgs {
    /// Validate argument consistency
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(format!("Start date {} is after end date {}", start, end));
        }
        if self.quiet && self.verbose > 0 {
            return Err("Cannot use both --quiet and --verbose".to_string());
        }
        if !self.input.exists() {
            return Err(format!("Input file does not exist: {}", self.input.display()));
        }
        Ok(())
    }

    /// Get the effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether to show progress indicators
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
pub struct StationsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
    Csv,
}
