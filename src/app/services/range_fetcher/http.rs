//! HTTP transport for the KMA API hub

use super::WeatherTransport;
use crate::config::ApiConfig;
use crate::constants::KMA_TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP transport against the KMA surface observation endpoint
pub struct KmaTransport {
    client: reqwest::blocking::Client,
    base_url: String,
    auth_key: String,
}

impl KmaTransport {
    /// Build a transport from API settings; fails without a credential
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let auth_key = api
            .auth_key
            .clone()
            .ok_or_else(|| Error::configuration("KMA API auth key is required for live fetch"))?;

        // The API hub serves an incomplete certificate chain on some
        // regional mirrors, so certificate verification is relaxed
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.clone(),
            auth_key,
        })
    }
}

impl WeatherTransport for KmaTransport {
    fn fetch_window(&self, station_id: u32, start: NaiveDate, end: NaiveDate) -> Result<String> {
        let tm1 = start
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::transport("invalid window start"))?
            .format(KMA_TIMESTAMP_FORMAT)
            .to_string();
        let tm2 = end
            .and_hms_opt(23, 59, 0)
            .ok_or_else(|| Error::transport("invalid window end"))?
            .format(KMA_TIMESTAMP_FORMAT)
            .to_string();

        debug!("GET {} tm1={} tm2={} stn={}", self.base_url, tm1, tm2, station_id);

        let stn = station_id.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("tm1", tm1.as_str()),
                ("tm2", tm2.as_str()),
                ("stn", stn.as_str()),
                ("help", "0"),
                ("authKey", self.auth_key.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "KMA API returned HTTP {}",
                status
            )));
        }

        Ok(response.text()?)
    }
}
