//! Tests for the telemetry sheet parser
//!
//! Organized by component:
//! - `header_tests`: header-row decoding into column layouts
//! - `record_tests`: data-row extraction and timestamp composition


use crate::app::models::CellGrid;

/// Build a grid from string-slice rows
pub fn grid(rows: &[&[&str]]) -> CellGrid {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// A minimal valid sheet: one parameter with three field kinds, two data rows
pub fn sample_grid() -> CellGrid {
    grid(&[
        &["하수처리장 방류수 수질", "", "", "", "", ""],
        &["방류구", "날짜", "시간", "TOC(mg/L)", "", ""],
        &["", "", "", "기준치", "측정치", "상태정보"],
        &["제1방류구", "2025-05-01", "0시", "25", "4.2", "정상"],
        &["제1방류구", "2025-05-01", "1시", "25", "4.5", "정상"],
    ])
}
