//! Tests for the CSV writers

use super::{sample_merged_table, sample_plant_table, ts};
use crate::app::models::{ChannelValues, WeatherObservation};
use crate::app::services::export::{write_merged_csv, write_plant_csv, write_weather_csv};
use tempfile::tempdir;

#[test]
fn test_merged_csv_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("merged.csv");
    write_merged_csv(&sample_merged_table(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "timestamp,outlet,date,time,\
         TOC_standard,TOC_value,TOC_status,TOC_replacement,TOC_replacement_code,\
         temperature,humidity,precipitation,sunshine,irradiance"
    );
    assert!(lines[1].starts_with("2025-05-01 00:00,제1방류구,2025-05-01,0,25,4.2"));
    assert!(lines[1].contains(",15,60,0,,"));
}

#[test]
fn test_merged_csv_absent_values_are_empty_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("merged.csv");
    write_merged_csv(&sample_merged_table(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let second_row = content.lines().nth(2).unwrap();
    let cells: Vec<&str> = second_row.split(',').collect();
    // temperature column (absent) right before humidity
    assert_eq!(cells[9], "");
    assert_eq!(cells[10], "62");
}

#[test]
fn test_plant_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plant.csv");
    write_plant_csv(&sample_plant_table(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "timestamp,outlet,TOC_value");
    assert_eq!(lines[1], "2025-05-01 00:00,제1방류구,4.2");
}

#[test]
fn test_weather_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather.csv");
    let observations = vec![WeatherObservation::new(
        ts(3),
        ChannelValues {
            temperature: Some(18.5),
            precipitation: Some(0.0),
            ..Default::default()
        },
    )];
    write_weather_csv(&observations, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "hour,temperature,humidity,precipitation,sunshine,irradiance"
    );
    assert_eq!(lines[1], "2025-05-01 03:00,18.5,,0,,");
}
