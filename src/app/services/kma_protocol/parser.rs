//! Observation line parsing for the KMA fixed-field response format

use crate::app::models::{Channel, ChannelValues, WeatherObservation};
use crate::constants::{
    KMA_TIMESTAMP_FORMAT, MIN_DATA_LINE_LEN, MIN_FIELD_COUNT, MIN_RESPONSE_LEN,
    MISSING_SENTINELS, RESPONSE_END_MARKER, RESPONSE_START_MARKER,
};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, warn};

/// Parser for KMA surface observation responses
///
/// Holds the compiled data-line pattern; construct once and reuse across
/// response windows.
pub struct KmaResponseParser {
    /// Observation lines start with a 10+ digit timestamp
    data_line: Regex,
}

impl Default for KmaResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KmaResponseParser {
    pub fn new() -> Self {
        Self {
            // Pattern is a literal constant; compilation cannot fail
            data_line: Regex::new(r"^\d{10}").expect("invalid data line pattern"),
        }
    }

    /// Parse a complete response body into observations
    ///
    /// Observations are returned in response order. Individual malformed
    /// lines are dropped; a response in which no line survives is an error.
    pub fn parse_response(&self, body: &str) -> Result<Vec<WeatherObservation>> {
        if body.len() < MIN_RESPONSE_LEN {
            return Err(Error::protocol_parse(format!(
                "response too short ({} bytes)",
                body.len()
            )));
        }

        let payload = self.extract_payload(body)?;
        let mut observations = Vec::new();
        let mut dropped = 0usize;

        for line in payload.lines() {
            if !self.is_data_line(line) {
                continue;
            }
            match self.parse_line(line) {
                Some(observation) => observations.push(observation),
                None => {
                    dropped += 1;
                    debug!("Dropping malformed observation line: {}", line);
                }
            }
        }

        if observations.is_empty() {
            return Err(Error::protocol_parse(
                "no valid observation lines in response",
            ));
        }
        if dropped > 0 {
            warn!("Dropped {} malformed observation lines", dropped);
        }

        Ok(observations)
    }

    /// Slice the payload between the start and end markers
    ///
    /// Both markers must be present; a response missing either one is
    /// truncated or garbled and fails as a whole.
    fn extract_payload<'a>(&self, body: &'a str) -> Result<&'a str> {
        let start = body
            .find(RESPONSE_START_MARKER)
            .ok_or_else(|| {
                Error::protocol_parse(format!("missing {} marker", RESPONSE_START_MARKER))
            })?
            + RESPONSE_START_MARKER.len();

        let end = body[start..].find(RESPONSE_END_MARKER).ok_or_else(|| {
            Error::protocol_parse(format!("missing {} marker", RESPONSE_END_MARKER))
        })?;
        Ok(&body[start..start + end])
    }

    /// Whether a payload line is a candidate observation line
    fn is_data_line(&self, line: &str) -> bool {
        let line = line.trim();
        line.len() > MIN_DATA_LINE_LEN
            && !line.starts_with('#')
            && !line.starts_with('-')
            && self.data_line.is_match(line)
    }

    /// Parse one observation line, or `None` when it is unusable
    ///
    /// Temperature, humidity and precipitation positions must be present or
    /// the line is dropped. The trailing sunshine and irradiance positions
    /// are optional; lines cut short before them yield absent values.
    fn parse_line(&self, line: &str) -> Option<WeatherObservation> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELD_COUNT {
            return None;
        }

        let timestamp = NaiveDateTime::parse_from_str(fields[0], KMA_TIMESTAMP_FORMAT).ok()?;

        let mut channels = ChannelValues::default();
        for channel in [Channel::Temperature, Channel::Humidity, Channel::Precipitation] {
            let raw = fields.get(channel.field_index())?;
            channels.set(channel, parse_field(raw, channel.missing_default()));
        }
        for channel in [Channel::Sunshine, Channel::Irradiance] {
            let value = fields
                .get(channel.field_index())
                .and_then(|raw| parse_field(raw, channel.missing_default()));
            channels.set(channel, value);
        }

        Some(WeatherObservation::new(timestamp, channels))
    }
}

/// Parse one field value, substituting the channel default for sentinels
///
/// Sentinel matching is an exact string comparison against each formatting
/// variant the provider emits. Unparseable text also falls back to the
/// default rather than dropping the line.
fn parse_field(raw: &str, default: Option<f64>) -> Option<f64> {
    if MISSING_SENTINELS.contains(&raw) {
        return default;
    }
    raw.parse::<f64>().ok().or(default)
}
