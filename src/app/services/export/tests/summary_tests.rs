//! Tests for summary statistics

use super::sample_merged_table;
use crate::app::services::export::{summarize, write_summary_csv};
use tempfile::tempdir;

#[test]
fn test_summarize_columns() {
    let stats = summarize(&sample_merged_table());
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();

    // Sunshine and irradiance are entirely absent and omitted
    assert_eq!(
        names,
        vec!["TOC_value", "temperature", "humidity", "precipitation"]
    );

    let toc = &stats[0];
    assert_eq!(toc.count, 2);
    assert!((toc.mean - 4.4).abs() < 1e-9);
    assert_eq!(toc.min, 4.2);
    assert_eq!(toc.max, 4.6);
    // Sample std dev of {4.2, 4.6}
    assert!((toc.std_dev.unwrap() - 0.2828).abs() < 1e-3);
}

#[test]
fn test_single_value_has_no_std_dev() {
    let stats = summarize(&sample_merged_table());
    let temperature = stats.iter().find(|s| s.name == "temperature").unwrap();
    assert_eq!(temperature.count, 1);
    assert_eq!(temperature.std_dev, None);
}

#[test]
fn test_write_summary_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.csv");
    write_summary_csv(&sample_merged_table(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "column,count,mean,min,max,std_dev");
    assert!(lines[1].starts_with("TOC_value,2,4.4000,4.2000,4.6000"));
    // The single-sample temperature row ends with an empty std_dev cell
    let temp_line = lines.iter().find(|l| l.starts_with("temperature")).unwrap();
    assert!(temp_line.ends_with(','));
}
