//! Data models for the merge pipeline
//!
//! This module contains the core data structures: the raw cell grid decoded
//! from a workbook, per-parameter plant measurement records, hourly weather
//! observations, and the merged analytic rows. Each pipeline stage fully
//! constructs its output table before handing it to the next stage.

use crate::constants::{HOUR_KEY_FORMAT, field_labels, fields};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::collections::HashMap;

/// A raw worksheet as rows of trimmed cell text; blank cells are empty strings
pub type CellGrid = Vec<Vec<String>>;

// =============================================================================
// Field Kinds
// =============================================================================

/// Sub-column role under a measurement parameter
///
/// Each parameter in the sheet spans up to five columns, one per field kind.
/// The secondary header row labels each column with the source-language name
/// of its kind; unrecognized labels leave the column unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Standard,
    Value,
    Status,
    Replacement,
    ReplacementCode,
}

impl FieldKind {
    /// All field kinds, in the order they appear within a column group
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Standard,
        FieldKind::Value,
        FieldKind::Status,
        FieldKind::Replacement,
        FieldKind::ReplacementCode,
    ];

    /// Match a secondary-header label to its field kind
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            field_labels::STANDARD => Some(FieldKind::Standard),
            field_labels::VALUE => Some(FieldKind::Value),
            field_labels::STATUS => Some(FieldKind::Status),
            field_labels::REPLACEMENT => Some(FieldKind::Replacement),
            field_labels::REPLACEMENT_CODE => Some(FieldKind::ReplacementCode),
            _ => None,
        }
    }

    /// Canonical column-name suffix for exports
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Standard => "standard",
            FieldKind::Value => "value",
            FieldKind::Status => "status",
            FieldKind::Replacement => "replacement",
            FieldKind::ReplacementCode => "replacement_code",
        }
    }
}

// =============================================================================
// Weather Channels
// =============================================================================

/// One of the five weather quantities carried through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Temperature,
    Humidity,
    Precipitation,
    Sunshine,
    Irradiance,
}

impl Channel {
    /// All channels in export order
    pub const ALL: [Channel; 5] = [
        Channel::Temperature,
        Channel::Humidity,
        Channel::Precipitation,
        Channel::Sunshine,
        Channel::Irradiance,
    ];

    /// Canonical column name for exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Humidity => "humidity",
            Channel::Precipitation => "precipitation",
            Channel::Sunshine => "sunshine",
            Channel::Irradiance => "irradiance",
        }
    }

    /// Measurement unit, for report output
    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Humidity => "%",
            Channel::Precipitation => "mm",
            Channel::Sunshine => "hr",
            Channel::Irradiance => "MJ/m²",
        }
    }

    /// Position of this channel in a provider observation line
    pub fn field_index(&self) -> usize {
        match self {
            Channel::Temperature => fields::TEMPERATURE,
            Channel::Humidity => fields::HUMIDITY,
            Channel::Precipitation => fields::PRECIPITATION,
            Channel::Sunshine => fields::SUNSHINE,
            Channel::Irradiance => fields::IRRADIANCE,
        }
    }

    /// Value substituted when the provider reports the missing sentinel
    ///
    /// Temperature and humidity have no meaningful default and stay absent.
    /// Precipitation, sunshine and irradiance default to zero: the provider
    /// does not distinguish "no rain measured" from a missing reading.
    pub fn missing_default(&self) -> Option<f64> {
        match self {
            Channel::Temperature | Channel::Humidity => None,
            Channel::Precipitation | Channel::Sunshine | Channel::Irradiance => Some(0.0),
        }
    }
}

/// The five channel values of one hour, each possibly absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelValues {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation: Option<f64>,
    pub sunshine: Option<f64>,
    pub irradiance: Option<f64>,
}

impl ChannelValues {
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Precipitation => self.precipitation,
            Channel::Sunshine => self.sunshine,
            Channel::Irradiance => self.irradiance,
        }
    }

    pub fn set(&mut self, channel: Channel, value: Option<f64>) {
        match channel {
            Channel::Temperature => self.temperature = value,
            Channel::Humidity => self.humidity = value,
            Channel::Precipitation => self.precipitation = value,
            Channel::Sunshine => self.sunshine = value,
            Channel::Irradiance => self.irradiance = value,
        }
    }
}

// =============================================================================
// Plant Measurement Records
// =============================================================================

/// The up-to-five raw values recorded for one parameter in one row
///
/// Values are kept as raw cell text: measurement and standard values are
/// numeric in practice, but status and replacement-code columns carry free
/// text (e.g. equipment status strings).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterReading {
    pub standard: Option<String>,
    pub value: Option<String>,
    pub status: Option<String>,
    pub replacement: Option<String>,
    pub replacement_code: Option<String>,
}

impl ParameterReading {
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Standard => self.standard.as_deref(),
            FieldKind::Value => self.value.as_deref(),
            FieldKind::Status => self.status.as_deref(),
            FieldKind::Replacement => self.replacement.as_deref(),
            FieldKind::ReplacementCode => self.replacement_code.as_deref(),
        }
    }

    pub fn set(&mut self, kind: FieldKind, value: Option<String>) {
        match kind {
            FieldKind::Standard => self.standard = value,
            FieldKind::Value => self.value = value,
            FieldKind::Status => self.status = value,
            FieldKind::Replacement => self.replacement = value,
            FieldKind::ReplacementCode => self.replacement_code = value,
        }
    }
}

/// One measurement row of the plant sheet with a derived hourly timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantRecord {
    /// Outlet identifier from the fixed first column
    pub outlet: String,

    /// Raw date cell text
    pub date: String,

    /// Time cell text with the hour-unit suffix stripped
    pub time: String,

    /// Composed timestamp (date + hour, no sub-hour precision)
    pub timestamp: NaiveDateTime,

    /// Per-parameter readings, keyed by canonical parameter name
    pub readings: HashMap<String, ParameterReading>,
}

impl PlantRecord {
    /// Timestamp truncated to the hour, the reconciliation join key
    pub fn hour_key(&self) -> NaiveDateTime {
        truncate_to_hour(self.timestamp)
    }
}

/// The fully extracted plant table, ordered ascending by timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct PlantTable {
    /// Sheet title (row 0), or the fallback default when blank
    pub title: String,

    /// Distinct parameter names in first-seen column order
    pub parameters: Vec<String>,

    pub records: Vec<PlantRecord>,
}

// =============================================================================
// Weather Observations
// =============================================================================

/// One hourly weather observation, live-parsed or simulated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    pub timestamp: NaiveDateTime,

    /// Hour-truncated display/merge key, e.g. `2025-05-01 03:00`
    pub hour_key: String,

    #[serde(flatten)]
    pub channels: ChannelValues,
}

impl WeatherObservation {
    pub fn new(timestamp: NaiveDateTime, channels: ChannelValues) -> Self {
        Self {
            timestamp,
            hour_key: truncate_to_hour(timestamp).format(HOUR_KEY_FORMAT).to_string(),
            channels,
        }
    }
}

// =============================================================================
// Merged Output
// =============================================================================

/// One reconciled row: a plant record plus its (interpolated) weather hour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    pub timestamp: NaiveDateTime,

    /// Hour join key the weather values were matched on
    pub hour_key: String,

    pub outlet: String,
    pub date: String,
    pub time: String,

    pub readings: HashMap<String, ParameterReading>,

    #[serde(flatten)]
    pub channels: ChannelValues,
}

/// The reconciled analytic table; same row count and order as the plant input
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    pub title: String,
    pub parameters: Vec<String>,
    pub rows: Vec<MergedRow>,
}

/// Truncate a timestamp to the start of its hour
pub fn truncate_to_hour(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_field_kind_labels() {
        assert_eq!(FieldKind::from_label("기준치"), Some(FieldKind::Standard));
        assert_eq!(FieldKind::from_label("측정치"), Some(FieldKind::Value));
        assert_eq!(FieldKind::from_label("상태정보"), Some(FieldKind::Status));
        assert_eq!(FieldKind::from_label("대체값"), Some(FieldKind::Replacement));
        assert_eq!(
            FieldKind::from_label("대체코드"),
            Some(FieldKind::ReplacementCode)
        );
        assert_eq!(FieldKind::from_label("unknown"), None);
        assert_eq!(FieldKind::from_label(""), None);
    }

    #[test]
    fn test_channel_missing_defaults() {
        assert_eq!(Channel::Temperature.missing_default(), None);
        assert_eq!(Channel::Humidity.missing_default(), None);
        assert_eq!(Channel::Precipitation.missing_default(), Some(0.0));
        assert_eq!(Channel::Sunshine.missing_default(), Some(0.0));
        assert_eq!(Channel::Irradiance.missing_default(), Some(0.0));
    }

    #[test]
    fn test_truncate_to_hour() {
        let ts = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(13, 42, 17)
            .unwrap();
        let truncated = truncate_to_hour(ts);
        assert_eq!(truncated.hour(), 13);
        assert_eq!(truncated.minute(), 0);
        assert_eq!(truncated.second(), 0);
    }

    #[test]
    fn test_channel_values_roundtrip() {
        let mut values = ChannelValues::default();
        for channel in Channel::ALL {
            assert_eq!(values.get(channel), None);
        }
        values.set(Channel::Temperature, Some(18.5));
        values.set(Channel::Precipitation, Some(0.0));
        assert_eq!(values.get(Channel::Temperature), Some(18.5));
        assert_eq!(values.get(Channel::Precipitation), Some(0.0));
        assert_eq!(values.get(Channel::Humidity), None);
    }
}
