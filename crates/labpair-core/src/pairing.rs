//! End-to-end pairing of raw roster rows with staff members.
//!
//! Raw rows are parsed into teams, narrowed to one lab section, split across
//! the rotated staff list, and flattened into the two report row sets. No I/O
//! happens here; the caller writes the reports.

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::models::{RawTeamRow, Team};
use crate::roster::select_lab_teams;
use crate::summary::{assign_groups, staff_rows, student_rows, StaffRow, StudentRow};

/// Staff assignment settings for a single lab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRequest {
    pub lab_section: i64,
    pub offset: i64,
    pub staff: Vec<String>,
}

/// Both report row sets for a lab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingReport {
    pub students: Vec<StudentRow>,
    pub staff: Vec<StaffRow>,
}

/// Parse every raw row, failing on the first invalid one.
pub fn parse_roster(rows: &[RawTeamRow]) -> CoreResult<Vec<Team>> {
    rows.iter().map(Team::from_raw).collect()
}

/// Build both reports from an already parsed roster.
pub fn build_report(teams: Vec<Team>, request: &PairingRequest) -> CoreResult<PairingReport> {
    if request.staff.is_empty() {
        return Err(CoreError::InvalidRotation);
    }

    let lab_teams = select_lab_teams(teams, request.lab_section);
    if lab_teams.is_empty() {
        return Err(CoreError::EmptyRoster(request.lab_section));
    }

    let assignments = assign_groups(&lab_teams, &request.staff, request.offset)?;
    let staff = staff_rows(&assignments);
    for row in &staff {
        info!(
            group = row.group,
            staff = %row.staff,
            start = ?row.start,
            end = ?row.end,
            count = row.count,
            "{}",
            row.summary()
        );
    }

    Ok(PairingReport {
        students: student_rows(&assignments),
        staff,
    })
}

/// Parse raw rows and build both reports.
pub fn pair_teams(rows: &[RawTeamRow], request: &PairingRequest) -> CoreResult<PairingReport> {
    let teams = parse_roster(rows)?;
    debug!(rows = rows.len(), teams = teams.len(), "Parsed roster");
    build_report(teams, request)
}

// ============================================================================
// Tests
// ============================================================================
