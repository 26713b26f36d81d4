//! Header decoding for the two-row telemetry sheet layout
//!
//! Row 1 carries parameter names over the first column of each parameter's
//! column group (the remaining cells of the group are blank, as left behind
//! by merged header cells). Row 2 carries the field-kind label of every
//! column. Decoding walks both rows with a cursor, attributing each
//! sub-column to the most recently seen parameter.

use crate::app::models::{CellGrid, FieldKind};
use crate::constants::{PRIMARY_HEADER_ROW, SECONDARY_HEADER_ROW, TIME_COL};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Decoded column layout of a telemetry sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Column positions per parameter, keyed by field kind
    pub parameter_columns: HashMap<String, HashMap<FieldKind, usize>>,

    /// Parameter names in first-seen column order
    pub parameters: Vec<String>,
}

impl SheetLayout {
    /// Decode the header rows of a grid into a column layout
    ///
    /// Parameter names are taken up to the first `(` so unit suffixes like
    /// `TOC(mg/L)` do not fragment the parameter namespace. Sub-columns with
    /// unrecognized field-kind labels are skipped but still consume cursor
    /// positions, keeping later parameters correctly attributed.
    pub fn decode(grid: &CellGrid) -> Result<Self> {
        if grid.len() <= SECONDARY_HEADER_ROW {
            return Err(Error::malformed_sheet(format!(
                "expected at least {} header rows, found {}",
                SECONDARY_HEADER_ROW + 1,
                grid.len()
            )));
        }

        let primary = &grid[PRIMARY_HEADER_ROW];
        let secondary = &grid[SECONDARY_HEADER_ROW];
        let width = primary.len().max(secondary.len());

        let mut parameter_columns: HashMap<String, HashMap<FieldKind, usize>> = HashMap::new();
        let mut parameters: Vec<String> = Vec::new();
        let mut current_parameter: Option<String> = None;

        for col in (TIME_COL + 1)..width {
            let primary_cell = primary.get(col).map(String::as_str).unwrap_or("");
            if !primary_cell.trim().is_empty() {
                let name = canonical_parameter_name(primary_cell);
                if !parameter_columns.contains_key(&name) {
                    parameters.push(name.clone());
                    // Registered even if none of its sub-columns turn out to
                    // carry a recognized label
                    parameter_columns.insert(name.clone(), HashMap::new());
                }
                current_parameter = Some(name);
            }

            let Some(parameter) = current_parameter.as_ref() else {
                continue;
            };

            let secondary_cell = secondary.get(col).map(String::as_str).unwrap_or("");
            let label = secondary_cell.trim();
            if label.is_empty() {
                continue;
            }

            match FieldKind::from_label(label) {
                Some(kind) => {
                    parameter_columns
                        .entry(parameter.clone())
                        .or_default()
                        .insert(kind, col);
                }
                None => {
                    warn!("Unrecognized field label '{}' in column {}", label, col);
                }
            }
        }

        if parameters.is_empty() {
            return Err(Error::malformed_sheet(
                "no parameter columns found in header rows",
            ));
        }

        debug!(
            "Decoded sheet layout: {} parameters, {} mapped columns",
            parameters.len(),
            parameter_columns.values().map(HashMap::len).sum::<usize>()
        );

        Ok(Self {
            parameter_columns,
            parameters,
        })
    }

    /// Column position of one field of one parameter, if mapped
    pub fn column(&self, parameter: &str, kind: FieldKind) -> Option<usize> {
        self.parameter_columns.get(parameter)?.get(&kind).copied()
    }
}

/// Strip the parenthesized unit suffix and surrounding whitespace
fn canonical_parameter_name(cell: &str) -> String {
    let trimmed = cell.trim();
    match trimmed.find('(') {
        Some(pos) => trimmed[..pos].trim().to_string(),
        None => trimmed.to_string(),
    }
}
