//! Tests for the windowed range fetcher


use crate::Result;
use crate::app::services::kma_protocol::tests::{observation_line, response_with_lines};
use crate::app::services::range_fetcher::WeatherTransport;
use chrono::{Duration, NaiveDate};
use std::cell::RefCell;

/// Transport that records requested windows and synthesizes valid responses
pub struct MockTransport {
    pub windows: RefCell<Vec<(NaiveDate, NaiveDate)>>,
    /// Windows (1-based index) that should fail
    pub fail_on_window: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            windows: RefCell::new(Vec::new()),
            fail_on_window: None,
        }
    }

    pub fn failing_on(window: usize) -> Self {
        Self {
            windows: RefCell::new(Vec::new()),
            fail_on_window: Some(window),
        }
    }
}

impl WeatherTransport for MockTransport {
    fn fetch_window(&self, _station_id: u32, start: NaiveDate, end: NaiveDate) -> Result<String> {
        self.windows.borrow_mut().push((start, end));
        let window_number = self.windows.borrow().len();
        if self.fail_on_window == Some(window_number) {
            return Err(crate::Error::transport("simulated network failure"));
        }

        // One observation per hour of the window
        let mut lines = Vec::new();
        let mut day = start;
        while day <= end {
            for hour in 0..24 {
                let stamp = day
                    .and_hms_opt(hour, 0, 0)
                    .unwrap()
                    .format("%Y%m%d%H%M")
                    .to_string();
                lines.push(observation_line(&stamp, "15.0", "60.0", "0.0", "0.0", "0.0"));
            }
            day += Duration::days(1);
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        Ok(response_with_lines(&refs))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
