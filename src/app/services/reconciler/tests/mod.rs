//! Tests for the hourly reconciler


use crate::app::models::{
    ChannelValues, ParameterReading, PlantRecord, PlantTable, WeatherObservation,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

pub fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
}

/// A plant table with one record per given hour of 2025-05-01
pub fn plant_table(hours: &[u32]) -> PlantTable {
    let records = hours
        .iter()
        .map(|&hour| PlantRecord {
            outlet: "제1방류구".to_string(),
            date: "2025-05-01".to_string(),
            time: hour.to_string(),
            timestamp: ts(2025, 5, 1, hour),
            readings: HashMap::from([(
                "TOC".to_string(),
                ParameterReading {
                    value: Some("4.2".to_string()),
                    ..Default::default()
                },
            )]),
        })
        .collect();
    PlantTable {
        title: "test".to_string(),
        parameters: vec!["TOC".to_string()],
        records,
    }
}

/// An observation with only temperature set
pub fn temp_obs(timestamp: NaiveDateTime, temperature: Option<f64>) -> WeatherObservation {
    WeatherObservation::new(
        timestamp,
        ChannelValues {
            temperature,
            ..Default::default()
        },
    )
}
