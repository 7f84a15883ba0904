//! Team roster records.
//!
//! `RawTeamRow` is the loosely typed shape a spreadsheet row arrives in;
//! `Team::from_raw` is the only place cell values are coerced, so everything
//! downstream works on validated `Team` values.

use crate::error::{CoreError, CoreResult};
use crate::utils::strip_email;

/// Value that marks a team as active in the export.
const ACTIVE_MARKER: &str = "Yes";

/// A single spreadsheet cell, independent of the workbook library.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Coerce to an integer. Floats must be whole numbers within `i64`,
    /// text must parse. Returns `Ok(None)` for empty cells.
    fn as_integer(&self) -> Result<Option<i64>, String> {
        // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
        const MIN: f64 = i64::MIN as f64;
        const MAX: f64 = i64::MAX as f64;

        match self {
            CellValue::Empty => Ok(None),
            CellValue::Int(i) => Ok(Some(*i)),
            CellValue::Float(f) if f.fract() == 0.0 && *f >= MIN && *f < MAX => Ok(Some(*f as i64)),
            CellValue::Text(s) if s.trim().is_empty() => Ok(None),
            CellValue::Text(s) => s.trim().parse().map(Some).map_err(|_| s.clone()),
            other => Err(other.to_string()),
        }
    }

    /// Coerce to a member name with any email annotation removed.
    /// Empty cells, and names that are empty once stripped, yield `None`.
    fn as_member_name(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let name = strip_email(&self.to_string());
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    fn as_active_flag(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Text(s) => s.trim().eq_ignore_ascii_case(ACTIVE_MARKER),
            _ => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One roster row as read from the export, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTeamRow {
    /// 1-based row number in the source sheet, used in error messages
    pub row_number: usize,
    pub team_id: CellValue,
    pub active: CellValue,
    pub lab_section: CellValue,
    pub members: [CellValue; 3],
}

/// A validated student team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub team_id: i64,
    pub active: bool,
    pub lab_section: Option<i64>,
    pub member1: String,
    pub member2: Option<String>,
    pub member3: Option<String>,
}

impl Team {
    /// Build a team, checking the member invariants.
    pub fn new(
        team_id: i64,
        active: bool,
        lab_section: Option<i64>,
        member1: impl Into<String>,
        member2: Option<String>,
        member3: Option<String>,
    ) -> CoreResult<Self> {
        let member1 = member1.into();
        if member1.trim().is_empty() {
            return Err(CoreError::MalformedMemberData {
                team_id,
                reason: "first member is missing".to_string(),
            });
        }
        if member3.is_some() && member2.is_none() {
            return Err(CoreError::MalformedMemberData {
                team_id,
                reason: "third member is present without a second member".to_string(),
            });
        }

        Ok(Self {
            team_id,
            active,
            lab_section,
            member1,
            member2,
            member3,
        })
    }

    /// Parse a raw spreadsheet row into a team.
    pub fn from_raw(row: &RawTeamRow) -> CoreResult<Self> {
        let invalid = |column: &'static str, value: String| CoreError::InvalidCell {
            row: row.row_number,
            column,
            value,
        };

        let team_id = row
            .team_id
            .as_integer()
            .map_err(|v| invalid("team id", v))?
            .ok_or_else(|| invalid("team id", "<empty>".to_string()))?;

        let lab_section = row
            .lab_section
            .as_integer()
            .map_err(|v| invalid("lab section", v))?;

        let [m1, m2, m3] = &row.members;

        Self::new(
            team_id,
            row.active.as_active_flag(),
            lab_section,
            m1.as_member_name().unwrap_or_default(),
            m2.as_member_name(),
            m3.as_member_name(),
        )
    }

    /// Human-readable member list.
    ///
    /// Three-member teams are listed last member first ("Carol, Bob, and Alice").
    /// That ordering is long-standing output that channel names depend on.
    pub fn member_names(&self) -> String {
        match (&self.member2, &self.member3) {
            (Some(m2), Some(m3)) => format!("{}, {}, and {}", m3, m2, self.member1),
            (Some(m2), None) => format!("{} and {}", self.member1, m2),
            _ => self.member1.clone(),
        }
    }

    pub fn channel_name(&self) -> String {
        format!("Team {} - {}", self.team_id, self.member_names())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn raw(team_id: CellValue, members: [CellValue; 3]) -> RawTeamRow {
        RawTeamRow {
            row_number: 2,
            team_id,
            active: text("Yes"),
            lab_section: CellValue::Int(31234),
            members,
        }
    }

    fn team(m1: &str, m2: Option<&str>, m3: Option<&str>) -> Team {
        Team::new(7, true, Some(1), m1, m2.map(String::from), m3.map(String::from))
            .expect("valid team")
    }

    // -------------------------------------------------------------------------
    // Member Names
    // -------------------------------------------------------------------------

    #[test]
    fn test_member_names_single() {
        assert_eq!(team("Alice", None, None).member_names(), "Alice");
    }

    #[test]
    fn test_member_names_pair() {
        assert_eq!(team("Alice", Some("Bob"), None).member_names(), "Alice and Bob");
    }

    #[test]
    fn test_member_names_trio_is_reversed() {
        // Documented ordering: last member first
        assert_eq!(
            team("Alice", Some("Bob"), Some("Carol")).member_names(),
            "Carol, Bob, and Alice"
        );
    }

    #[test]
    fn test_channel_name() {
        assert_eq!(
            team("Alice", Some("Bob"), None).channel_name(),
            "Team 7 - Alice and Bob"
        );
    }

    // -------------------------------------------------------------------------
    // Invariants
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_rejects_third_member_without_second() {
        let err = Team::new(3, true, None, "Alice", None, Some("Carol".into())).unwrap_err();
        assert!(matches!(err, CoreError::MalformedMemberData { team_id: 3, .. }));
    }

    #[test]
    fn test_new_rejects_blank_first_member() {
        let err = Team::new(4, true, None, "  ", None, None).unwrap_err();
        assert!(matches!(err, CoreError::MalformedMemberData { team_id: 4, .. }));
    }

    // -------------------------------------------------------------------------
    // Raw Row Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_from_raw_strips_emails() {
        let row = raw(
            CellValue::Int(12),
            [
                text("Alice Smith <asmith@example.edu>"),
                text("Bob Jones <bjones@example.edu>"),
                CellValue::Empty,
            ],
        );
        let team = Team::from_raw(&row).unwrap();
        assert_eq!(team.team_id, 12);
        assert!(team.active);
        assert_eq!(team.lab_section, Some(31234));
        assert_eq!(team.member1, "Alice Smith");
        assert_eq!(team.member2.as_deref(), Some("Bob Jones"));
        assert_eq!(team.member3, None);
    }

    #[test]
    fn test_from_raw_coerces_numeric_cells() {
        let mut row = raw(CellValue::Float(5.0), [text("A"), CellValue::Empty, CellValue::Empty]);
        row.lab_section = text(" 40001 ");
        let team = Team::from_raw(&row).unwrap();
        assert_eq!(team.team_id, 5);
        assert_eq!(team.lab_section, Some(40001));
    }

    #[test]
    fn test_from_raw_missing_lab_section() {
        let mut row = raw(CellValue::Int(1), [text("A"), CellValue::Empty, CellValue::Empty]);
        row.lab_section = CellValue::Empty;
        assert_eq!(Team::from_raw(&row).unwrap().lab_section, None);
    }

    #[test]
    fn test_from_raw_active_flag() {
        let mut row = raw(CellValue::Int(1), [text("A"), CellValue::Empty, CellValue::Empty]);
        row.active = text("No");
        assert!(!Team::from_raw(&row).unwrap().active);
        row.active = text("yes");
        assert!(Team::from_raw(&row).unwrap().active);
        row.active = CellValue::Bool(true);
        assert!(Team::from_raw(&row).unwrap().active);
        row.active = CellValue::Empty;
        assert!(!Team::from_raw(&row).unwrap().active);
    }

    #[test]
    fn test_from_raw_third_member_without_second() {
        let row = raw(CellValue::Int(9), [text("Alice"), CellValue::Empty, text("Carol")]);
        let err = Team::from_raw(&row).unwrap_err();
        assert!(matches!(err, CoreError::MalformedMemberData { team_id: 9, .. }));
    }

    #[test]
    fn test_from_raw_missing_first_member() {
        let row = raw(
            CellValue::Int(9),
            [text("<ghost@example.edu>"), CellValue::Empty, CellValue::Empty],
        );
        assert!(matches!(
            Team::from_raw(&row),
            Err(CoreError::MalformedMemberData { .. })
        ));
    }

    #[test]
    fn test_from_raw_invalid_team_id() {
        let row = raw(text("abc"), [text("A"), CellValue::Empty, CellValue::Empty]);
        assert_eq!(
            Team::from_raw(&row).unwrap_err(),
            CoreError::InvalidCell {
                row: 2,
                column: "team id",
                value: "abc".to_string(),
            }
        );

        let row = raw(CellValue::Float(2.5), [text("A"), CellValue::Empty, CellValue::Empty]);
        assert!(matches!(
            Team::from_raw(&row),
            Err(CoreError::InvalidCell { column: "team id", .. })
        ));
    }

    #[test]
    fn test_from_raw_out_of_range_float() {
        let row = raw(CellValue::Float(1e20), [text("A"), CellValue::Empty, CellValue::Empty]);
        assert!(matches!(
            Team::from_raw(&row),
            Err(CoreError::InvalidCell { column: "team id", .. })
        ));

        let mut row = raw(CellValue::Int(1), [text("A"), CellValue::Empty, CellValue::Empty]);
        row.lab_section = CellValue::Float(-1e30);
        assert!(matches!(
            Team::from_raw(&row),
            Err(CoreError::InvalidCell { column: "lab section", .. })
        ));

        row.lab_section = CellValue::Float(f64::INFINITY);
        assert!(Team::from_raw(&row).is_err());

        // Largest magnitudes that still fit are accepted
        row.lab_section = CellValue::Float(-9_223_372_036_854_775_808.0);
        assert_eq!(Team::from_raw(&row).unwrap().lab_section, Some(i64::MIN));
    }

    #[test]
    fn test_from_raw_empty_team_id() {
        let row = raw(CellValue::Empty, [text("A"), CellValue::Empty, CellValue::Empty]);
        assert!(matches!(
            Team::from_raw(&row),
            Err(CoreError::InvalidCell { column: "team id", .. })
        ));
    }
}
