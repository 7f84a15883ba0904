//! Teamset export workbook parsing.
//!
//! The export holds one worksheet per teamset. Each sheet has a title row
//! followed by one row per team with the columns listed below.

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use tracing::debug;

use crate::models::{CellValue, RawTeamRow};

// ============================================================================
// Column Layout
// ============================================================================

const TEAM_ID_COLUMN: usize = 0;
const ACTIVE_COLUMN: usize = 1;
const LAB_SECTION_COLUMN: usize = 4;
const FIRST_MEMBER_COLUMN: usize = 6;

/// Number of title rows before team data starts
const HEADER_ROWS: usize = 1;

/// An in-memory teamset export.
pub struct TeamsetWorkbook {
    workbook: Xlsx<Cursor<Vec<u8>>>,
    sheet_names: Vec<String>,
}

impl TeamsetWorkbook {
    /// Open an xlsx export from its raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
            .context("Failed to open teamset export as an xlsx workbook")?;
        let sheet_names = workbook.sheet_names();
        debug!(sheets = ?sheet_names, "Opened teamset workbook");

        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Read every team row from the named worksheet.
    pub fn team_rows(&mut self, sheet: &str) -> Result<Vec<RawTeamRow>> {
        let range = self
            .workbook
            .worksheet_range(sheet)
            .with_context(|| format!("Failed to read worksheet '{}'", sheet))?;
        let rows = rows_from_range(&range);
        debug!(sheet, rows = rows.len(), "Read team rows");
        Ok(rows)
    }
}

/// Decide which worksheet to read without prompting.
///
/// An explicit name must exist in `names`. With `latest` the last worksheet
/// wins. Returns `Ok(None)` when neither was given and the caller has to ask.
pub fn resolve_sheet(names: &[String], requested: Option<&str>, latest: bool) -> Result<Option<String>> {
    if let Some(name) = requested {
        if names.iter().any(|n| n == name) {
            return Ok(Some(name.to_string()));
        }
        return Err(anyhow!(
            "Worksheet '{}' not found. Available worksheets: {}",
            name,
            names.join(", ")
        ));
    }

    if latest {
        return names
            .last()
            .cloned()
            .map(Some)
            .ok_or_else(|| anyhow!("Teamset export contains no worksheets"));
    }

    Ok(None)
}

/// Convert a worksheet range to raw team rows, skipping the title row and
/// any row with no values at all.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawTeamRow> {
    // Range rows are relative to its start, which may not be the sheet's first row
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .enumerate()
        .filter(|(index, _)| first_row + index >= HEADER_ROWS)
        .filter(|(_, cells)| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|(index, cells)| {
            let cell = |column: usize| {
                column
                    .checked_sub(first_col)
                    .and_then(|i| cells.get(i))
                    .map(to_cell_value)
                    .unwrap_or_default()
            };
            RawTeamRow {
                row_number: first_row + index + 1,
                team_id: cell(TEAM_ID_COLUMN),
                active: cell(ACTIVE_COLUMN),
                lab_section: cell(LAB_SECTION_COLUMN),
                members: [
                    cell(FIRST_MEMBER_COLUMN),
                    cell(FIRST_MEMBER_COLUMN + 1),
                    cell(FIRST_MEMBER_COLUMN + 2),
                ],
            }
        })
        .collect()
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
