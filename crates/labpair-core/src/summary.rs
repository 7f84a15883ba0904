//! Staff group assignments and the report rows derived from them.

use serde::Serialize;

use crate::error::CoreResult;
use crate::models::Team;
use crate::partition::divide_evenly;
use crate::rotation::rotate_staff;

/// One staff member's share of a lab's teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment<'a> {
    pub group_index: usize,
    pub staff_name: &'a str,
    pub teams: &'a [Team],
}

impl GroupAssignment<'_> {
    /// First and last team id, or `None` when the group has no teams.
    pub fn id_range(&self) -> Option<(i64, i64)> {
        match (self.teams.first(), self.teams.last()) {
            (Some(first), Some(last)) => Some((first.team_id, last.team_id)),
            _ => None,
        }
    }

    pub fn min_id(&self) -> Option<i64> {
        self.id_range().map(|(min, _)| min)
    }

    pub fn max_id(&self) -> Option<i64> {
        self.id_range().map(|(_, max)| max)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Label for the staff member's channel covering this group.
    pub fn channel_label(&self) -> String {
        match self.id_range() {
            Some((min, max)) => format!("Groups ({}-{}) - {}", min, max, self.staff_name),
            None => format!("Groups (none) - {}", self.staff_name),
        }
    }
}

/// Pair each staff member with a contiguous slice of `teams`.
///
/// `teams` must already be sorted by id. The teams are split into exactly
/// `staff.len()` groups, and group `i` goes to the staff member at position
/// `i` after rotating the list by `offset`.
pub fn assign_groups<'a>(
    teams: &'a [Team],
    staff: &'a [String],
    offset: i64,
) -> CoreResult<Vec<GroupAssignment<'a>>> {
    let names: Vec<&'a str> = staff.iter().map(String::as_str).collect();
    let rotated = rotate_staff(&names, offset)?;
    let groups = divide_evenly(teams, rotated.len())?;

    Ok(rotated
        .into_iter()
        .zip(groups)
        .enumerate()
        .map(|(group_index, (staff_name, teams))| GroupAssignment {
            group_index,
            staff_name,
            teams,
        })
        .collect())
}

/// Per-student report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    #[serde(rename = "Group")]
    pub group: usize,
    #[serde(rename = "Team")]
    pub team_id: i64,
    #[serde(rename = "Staff")]
    pub staff: String,
    #[serde(rename = "Member 1")]
    pub member1: String,
    #[serde(rename = "Member 2")]
    pub member2: Option<String>,
    #[serde(rename = "Member 3")]
    pub member3: Option<String>,
    #[serde(rename = "Teams Channel Name")]
    pub channel_name: String,
}

/// Per-staff summary row. `start`/`end` are empty for a group with no teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffRow {
    #[serde(rename = "Group")]
    pub group: usize,
    #[serde(rename = "Start")]
    pub start: Option<i64>,
    #[serde(rename = "End")]
    pub end: Option<i64>,
    #[serde(rename = "Staff")]
    pub staff: String,
    #[serde(rename = "Teams Channel Name")]
    pub channel_label: String,
    #[serde(rename = "Count")]
    pub count: usize,
}

impl StaffRow {
    /// One-line description of the group, e.g. `Group 0: Groups (1-3) - Y, 3 teams`.
    pub fn summary(&self) -> String {
        let noun = if self.count == 1 { "team" } else { "teams" };
        format!("Group {}: {}, {} {}", self.group, self.channel_label, self.count, noun)
    }
}

pub fn student_rows(assignments: &[GroupAssignment<'_>]) -> Vec<StudentRow> {
    assignments
        .iter()
        .flat_map(|assignment| {
            assignment.teams.iter().map(move |team| StudentRow {
                group: assignment.group_index,
                team_id: team.team_id,
                staff: assignment.staff_name.to_string(),
                member1: team.member1.clone(),
                member2: team.member2.clone(),
                member3: team.member3.clone(),
                channel_name: team.channel_name(),
            })
        })
        .collect()
}

pub fn staff_rows(assignments: &[GroupAssignment<'_>]) -> Vec<StaffRow> {
    assignments
        .iter()
        .map(|assignment| StaffRow {
            group: assignment.group_index,
            start: assignment.min_id(),
            end: assignment.max_id(),
            staff: assignment.staff_name.to_string(),
            channel_label: assignment.channel_label(),
            count: assignment.team_count(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn teams(ids: impl IntoIterator<Item = i64>) -> Vec<Team> {
        ids.into_iter()
            .map(|id| Team::new(id, true, Some(1), format!("Student {}", id), None, None).unwrap())
            .collect()
    }

    fn staff(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assign_groups_ranges() {
        let teams = teams(1..=7);
        let staff = staff(&["X", "Y", "Z"]);
        let groups = assign_groups(&teams, &staff, 0).unwrap();

        let ranges: Vec<_> = groups.iter().map(|g| g.id_range()).collect();
        assert_eq!(ranges, vec![Some((1, 3)), Some((4, 5)), Some((6, 7))]);
        let owners: Vec<_> = groups.iter().map(|g| g.staff_name).collect();
        assert_eq!(owners, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_assign_groups_with_offset() {
        let teams = teams(1..=7);
        let staff = staff(&["X", "Y", "Z"]);
        let groups = assign_groups(&teams, &staff, 1).unwrap();

        assert_eq!(groups[0].staff_name, "Y");
        assert_eq!(groups[0].id_range(), Some((1, 3)));
        assert_eq!(groups[2].staff_name, "X");
        assert_eq!(groups[2].group_index, 2);
    }

    #[test]
    fn test_assign_groups_one_per_staff_member() {
        let teams = teams([10, 20]);
        let staff = staff(&["A", "B", "C", "D"]);
        let groups = assign_groups(&teams, &staff, 0).unwrap();

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[1].id_range(), Some((20, 20)));
        assert_eq!(groups[2].id_range(), None);
        assert_eq!(groups[3].min_id(), None);
        assert_eq!(groups[3].channel_label(), "Groups (none) - D");
    }

    #[test]
    fn test_assign_groups_no_staff() {
        let teams = teams(1..=3);
        assert_eq!(
            assign_groups(&teams, &[], 0).unwrap_err(),
            CoreError::InvalidRotation
        );
    }

    #[test]
    fn test_channel_label() {
        let teams = teams(4..=5);
        let group = GroupAssignment {
            group_index: 1,
            staff_name: "Y",
            teams: &teams,
        };
        assert_eq!(group.channel_label(), "Groups (4-5) - Y");
    }

    #[test]
    fn test_student_and_staff_rows() {
        let teams = teams(1..=3);
        let staff = staff(&["X", "Y"]);
        let groups = assign_groups(&teams, &staff, 0).unwrap();

        let students = student_rows(&groups);
        assert_eq!(students.len(), 3);
        assert_eq!(students[2].group, 1);
        assert_eq!(students[2].staff, "Y");
        assert_eq!(students[2].channel_name, "Team 3 - Student 3");

        let summary = staff_rows(&groups);
        assert_eq!(
            summary[0],
            StaffRow {
                group: 0,
                start: Some(1),
                end: Some(2),
                staff: "X".to_string(),
                channel_label: "Groups (1-2) - X".to_string(),
                count: 2,
            }
        );
        assert_eq!(summary[1].count, 1);
    }

    #[test]
    fn test_staff_row_summary() {
        let few = teams(1..=3);
        let staff = staff(&["X", "Y", "Z", "W"]);
        let groups = assign_groups(&few, &staff, 0).unwrap();
        let summary = staff_rows(&groups);

        assert_eq!(summary[0].summary(), "Group 0: Groups (1-1) - X, 1 team");
        assert_eq!(summary[3].summary(), "Group 3: Groups (none) - W, 0 teams");

        let pair = teams(4..=5);
        let groups = assign_groups(&pair, &staff[..1], 0).unwrap();
        assert_eq!(
            staff_rows(&groups)[0].summary(),
            "Group 0: Groups (4-5) - X, 2 teams"
        );
    }
}
