//! Synthetic weather generation
//!
//! Produces a plausible hourly observation series when no API credential is
//! available, so the merge pipeline can run end to end offline. The model
//! superimposes a seasonal and a diurnal temperature cycle, derives humidity
//! inversely from temperature, and draws occasional rain hours; sunshine and
//! irradiance are gated to daylight hours on dry days.

use crate::app::models::{ChannelValues, WeatherObservation};
use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use tracing::info;

/// Fraction of hours that receive rainfall
const RAIN_PROBABILITY: f64 = 0.12;

/// Synthetic hourly weather source
pub struct SimulatedWeather {
    seed: Option<u64>,
}

impl SimulatedWeather {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fix the random seed for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generate one observation per hour over an inclusive date range
    pub fn generate(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WeatherObservation>> {
        if start > end {
            return Err(Error::configuration(format!(
                "invalid date range: {} is after {}",
                start, end
            )));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut observations = Vec::new();
        let mut day = start;
        while day <= end {
            for hour in 0..24 {
                let timestamp = day
                    .and_hms_opt(hour, 0, 0)
                    .ok_or_else(|| Error::configuration("invalid simulated hour"))?;
                observations.push(WeatherObservation::new(
                    timestamp,
                    simulate_hour(&mut rng, timestamp),
                ));
            }
            day += Duration::days(1);
        }

        info!(
            "Simulated {} observations from {} to {}",
            observations.len(),
            start,
            end
        );
        Ok(observations)
    }
}

impl Default for SimulatedWeather {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel values for one simulated hour
fn simulate_hour(rng: &mut StdRng, timestamp: chrono::NaiveDateTime) -> ChannelValues {
    let day_of_year = timestamp.ordinal() as f64;
    let hour = timestamp.hour() as f64;

    // Seasonal cycle peaking in summer, diurnal cycle peaking at 14:00
    let seasonal = 22.0 + ((day_of_year - 120.0) * PI / 90.0).sin() * 6.0;
    let diurnal = -4.0 * ((hour - 14.0) * PI / 12.0).cos();
    let temperature = seasonal + diurnal + rng.gen_range(-1.5..1.5);

    let humidity = (85.0 - (temperature - 15.0) * 1.8 + rng.gen_range(-8.0..8.0)).clamp(30.0, 95.0);

    let precipitation = if rng.gen_bool(RAIN_PROBABILITY) {
        // Exponentially distributed intensity, mostly light rain
        (-rng.gen_range(0.0f64..1.0).max(f64::MIN_POSITIVE).ln() * 1.5 * 10.0).round() / 10.0
    } else {
        0.0
    };

    let daylight = (6.0..18.0).contains(&hour);
    let sunshine: f64 = if daylight && precipitation == 0.0 {
        rng.gen_range(0.7..1.0)
    } else {
        0.0
    };
    let irradiance: f64 = if sunshine > 0.0 {
        sunshine * rng.gen_range(2.5..4.0)
    } else {
        0.0
    };

    ChannelValues {
        temperature: Some((temperature * 10.0).round() / 10.0),
        humidity: Some(humidity.round()),
        precipitation: Some(precipitation),
        sunshine: Some((sunshine * 10.0).round() / 10.0),
        irradiance: Some((irradiance * 100.0).round() / 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_observation_per_hour() {
        let source = SimulatedWeather::with_seed(42);
        let observations = source.generate(date(2025, 5, 1), date(2025, 5, 3)).unwrap();
        assert_eq!(observations.len(), 3 * 24);
        assert_eq!(observations[0].hour_key, "2025-05-01 00:00");
        assert_eq!(observations.last().unwrap().hour_key, "2025-05-03 23:00");
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = SimulatedWeather::with_seed(7)
            .generate(date(2025, 5, 1), date(2025, 5, 2))
            .unwrap();
        let b = SimulatedWeather::with_seed(7)
            .generate(date(2025, 5, 1), date(2025, 5, 2))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_within_plausible_ranges() {
        let observations = SimulatedWeather::with_seed(1)
            .generate(date(2025, 1, 1), date(2025, 1, 7))
            .unwrap();
        for obs in &observations {
            let humidity = obs.channels.humidity.unwrap();
            assert!((30.0..=95.0).contains(&humidity));
            assert!(obs.channels.precipitation.unwrap() >= 0.0);
            assert!(obs.channels.sunshine.unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_dry_daylight_hours_get_fractional_sunshine() {
        let observations = SimulatedWeather::with_seed(9)
            .generate(date(2025, 6, 1), date(2025, 6, 3))
            .unwrap();
        let dry_daylight = observations.iter().filter(|o| {
            (6..18).contains(&o.timestamp.hour()) && o.channels.precipitation == Some(0.0)
        });
        for obs in dry_daylight {
            let sunshine = obs.channels.sunshine.unwrap();
            assert!((0.7..=1.0).contains(&sunshine), "sunshine {}", sunshine);
            assert!(obs.channels.irradiance.unwrap() > 0.0);
        }
    }

    #[test]
    fn test_no_sunshine_at_night() {
        let observations = SimulatedWeather::with_seed(3)
            .generate(date(2025, 6, 1), date(2025, 6, 5))
            .unwrap();
        for obs in observations.iter().filter(|o| o.timestamp.hour() < 6) {
            assert_eq!(obs.channels.sunshine, Some(0.0));
            assert_eq!(obs.channels.irradiance, Some(0.0));
        }
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = SimulatedWeather::new().generate(date(2025, 5, 2), date(2025, 5, 1));
        assert!(result.is_err());
    }
}
