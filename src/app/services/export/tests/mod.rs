//! Tests for the export writers

pub mod csv_tests;
pub mod summary_tests;

use crate::app::models::{
    ChannelValues, MergedRow, MergedTable, ParameterReading, PlantRecord, PlantTable,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

pub fn ts(h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 1).unwrap().and_hms_opt(h, 0, 0).unwrap()
}

fn toc_reading(value: &str) -> HashMap<String, ParameterReading> {
    HashMap::from([(
        "TOC".to_string(),
        ParameterReading {
            standard: Some("25".to_string()),
            value: Some(value.to_string()),
            ..Default::default()
        },
    )])
}

/// A merged table with two rows; the second row's temperature is absent
pub fn sample_merged_table() -> MergedTable {
    let rows = vec![
        MergedRow {
            timestamp: ts(0),
            hour_key: "2025-05-01 00:00".to_string(),
            outlet: "제1방류구".to_string(),
            date: "2025-05-01".to_string(),
            time: "0".to_string(),
            readings: toc_reading("4.2"),
            channels: ChannelValues {
                temperature: Some(15.0),
                humidity: Some(60.0),
                precipitation: Some(0.0),
                ..Default::default()
            },
        },
        MergedRow {
            timestamp: ts(1),
            hour_key: "2025-05-01 01:00".to_string(),
            outlet: "제1방류구".to_string(),
            date: "2025-05-01".to_string(),
            time: "1".to_string(),
            readings: toc_reading("4.6"),
            channels: ChannelValues {
                humidity: Some(62.0),
                precipitation: Some(0.5),
                ..Default::default()
            },
        },
    ];
    MergedTable {
        title: "하수처리장 측정데이터".to_string(),
        parameters: vec!["TOC".to_string()],
        rows,
    }
}

pub fn sample_plant_table() -> PlantTable {
    PlantTable {
        title: "하수처리장 측정데이터".to_string(),
        parameters: vec!["TOC".to_string()],
        records: vec![PlantRecord {
            outlet: "제1방류구".to_string(),
            date: "2025-05-01".to_string(),
            time: "0".to_string(),
            timestamp: ts(0),
            readings: toc_reading("4.2"),
        }],
    }
}
