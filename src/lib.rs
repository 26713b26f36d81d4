//! WTMS Merger Library
//!
//! A Rust library for reconciling wastewater treatment plant telemetry
//! spreadsheets with hourly surface weather observations from the KMA
//! (Korea Meteorological Administration) API hub.
//!
//! This library provides tools for:
//! - Decoding the two-row-header telemetry spreadsheet layout into typed records
//! - Parsing the KMA marker-delimited fixed-field response protocol
//! - Fetching arbitrary date ranges across the provider's 31-day request window
//! - Generating synthetic weather observations when no API credential is available
//! - Left-joining both series on an hourly key with linear gap interpolation
//! - Exporting the merged table as CSV or JSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export;
        pub mod kma_protocol;
        pub mod range_fetcher;
        pub mod reconciler;
        pub mod sheet_parser;
        pub mod simulation;
    }
    pub mod adapters {
        pub mod workbook;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Channel, FieldKind, MergedRow, MergedTable, PlantRecord, PlantTable, WeatherObservation,
};
pub use config::Config;

use chrono::NaiveDate;

/// Result type alias for the WTMS merger
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the merge pipeline
///
/// Variants follow the pipeline's failure taxonomy: a malformed sheet and a
/// malformed provider response are distinct, non-retried failures; a transport
/// failure is reported with the sub-window it occurred in. Absent weather
/// values after reconciliation are a normal output state, not an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unreadable grid structure, or zero valid data rows after extraction
    #[error("Malformed sheet: {message}")]
    MalformedSheet { message: String },

    /// Missing response markers, or zero surviving data lines in a response window
    #[error("KMA protocol parse failure: {message}")]
    ProtocolParse { message: String },

    /// Underlying HTTP request error for one window
    #[error("Transport failure: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A sub-window of a range fetch failed; earlier partial results are discarded
    #[error("Weather fetch failed for window {start} to {end}")]
    FetchWindow {
        start: NaiveDate,
        end: NaiveDate,
        #[source]
        source: Box<Error>,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error: {message}")]
    Workbook { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV export error
    #[error("CSV export error: {0}")]
    CsvExport(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-sheet error
    pub fn malformed_sheet(message: impl Into<String>) -> Self {
        Self::MalformedSheet {
            message: message.into(),
        }
    }

    /// Create a protocol parse error
    pub fn protocol_parse(message: impl Into<String>) -> Self {
        Self::ProtocolParse {
            message: message.into(),
        }
    }

    /// Create a transport error without an underlying request error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a failure with the sub-window it occurred in
    pub fn fetch_window(start: NaiveDate, end: NaiveDate, source: Error) -> Self {
        Self::FetchWindow {
            start,
            end,
            source: Box::new(source),
        }
    }

    /// Create a workbook error
    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(error: calamine::XlsxError) -> Self {
        Self::Workbook {
            message: error.to_string(),
        }
    }
}
