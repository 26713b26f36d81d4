//! Windowed weather fetching over the provider's request-span limit
//!
//! The KMA service rejects requests spanning more than 31 days, so an
//! arbitrary date range is partitioned into consecutive inclusive windows
//! and fetched sequentially. Transport is abstracted behind a trait so the
//! fetch loop can be tested without the network.

pub mod http;

#[cfg(test)]
pub mod tests;

pub use http::KmaTransport;

use crate::app::models::WeatherObservation;
use crate::app::services::kma_protocol::KmaResponseParser;
use crate::constants::MAX_WINDOW_DAYS;
use crate::{Error, Result};
use chrono::{Duration, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Raw response retrieval for one request window
pub trait WeatherTransport {
    /// Fetch the raw response body for one station over one inclusive window
    fn fetch_window(&self, station_id: u32, start: NaiveDate, end: NaiveDate) -> Result<String>;
}

/// Fetches an arbitrary date range as a sequence of bounded windows
pub struct RangeFetcher<T: WeatherTransport> {
    transport: T,
    parser: KmaResponseParser,
    show_progress: bool,
}

impl<T: WeatherTransport> RangeFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            parser: KmaResponseParser::new(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and parse all observations for a station over an inclusive range
    ///
    /// Windows are fetched in order and their observations concatenated.
    /// The first failing window aborts the fetch; partial results are
    /// discarded rather than returned as a silently incomplete series.
    pub fn fetch(
        &self,
        station_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeatherObservation>> {
        if start > end {
            return Err(Error::configuration(format!(
                "invalid date range: {} is after {}",
                start, end
            )));
        }

        let windows = partition_windows(start, end);
        info!(
            "Fetching station {} from {} to {} in {} window(s)",
            station_id,
            start,
            end,
            windows.len()
        );

        let progress = self.create_progress_bar(windows.len() as u64);

        let mut observations = Vec::new();
        for (window_start, window_end) in windows {
            debug!("Fetching window {} to {}", window_start, window_end);
            let body = self
                .transport
                .fetch_window(station_id, window_start, window_end)
                .map_err(|e| Error::fetch_window(window_start, window_end, e))?;
            let mut parsed = self
                .parser
                .parse_response(&body)
                .map_err(|e| Error::fetch_window(window_start, window_end, e))?;
            observations.append(&mut parsed);

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &progress {
            bar.finish_with_message("Weather fetch complete");
        }

        info!("Fetched {} observations", observations.len());
        Ok(observations)
    }

    fn create_progress_bar(&self, windows: u64) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let bar = ProgressBar::new(windows);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} windows {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    }
}

/// Partition an inclusive date range into consecutive inclusive windows
///
/// Each window spans at most the provider's maximum; the next window starts
/// the day after the previous one ends, so no day is fetched twice.
pub fn partition_windows(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut current = start;
    while current <= end {
        let window_end = (current + Duration::days(MAX_WINDOW_DAYS - 1)).min(end);
        windows.push((current, window_end));
        current = window_end + Duration::days(1);
    }
    windows
}
