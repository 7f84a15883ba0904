use thiserror::Error;

/// Validation failures raised by the pairing core.
///
/// None of these are transient: they describe bad roster data or a bad
/// configuration, so the caller reports them and aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Cannot split teams into {0} groups - at least one group is required")]
    InvalidPartition(usize),

    #[error("Cannot rotate an empty staff list - at least one staff member is required")]
    InvalidRotation,

    #[error("No active teams found for lab section {0}")]
    EmptyRoster(i64),

    #[error("Malformed member data for team {team_id}: {reason}")]
    MalformedMemberData { team_id: i64, reason: String },

    #[error("Invalid {column} value in row {row}: {value}")]
    InvalidCell {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
