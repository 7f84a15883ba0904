//! CSV rendering for the student and staff reports.
//!
//! Rows are rendered into memory first so the caller can write both files
//! only once every row has been produced.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pairing::PairingReport;

/// Student report file name
pub const STUDENTS_FILE: &str = "students.csv";

/// Staff report file name
pub const STAFF_FILE: &str = "staff.csv";

/// Serialize rows as CSV, header first, into `writer`.
pub fn write_csv<W: Write, R: Serialize>(writer: W, rows: &[R]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).context("Failed to serialize report row")?;
    }
    csv_writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Both reports rendered as CSV bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReports {
    pub students: Vec<u8>,
    pub staff: Vec<u8>,
}

impl RenderedReports {
    pub fn render(report: &PairingReport) -> Result<Self> {
        let mut students = Vec::new();
        write_csv(&mut students, &report.students).context("Failed to render student report")?;

        let mut staff = Vec::new();
        write_csv(&mut staff, &report.staff).context("Failed to render staff report")?;

        Ok(Self { students, staff })
    }
}
