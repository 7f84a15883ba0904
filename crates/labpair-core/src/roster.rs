use tracing::debug;

use crate::models::Team;

/// Select the active teams in `lab_section`, ordered by team id.
///
/// The sort is stable and keyed on `team_id` alone, so partition boundaries
/// depend only on ids.
pub fn select_lab_teams<I>(teams: I, lab_section: i64) -> Vec<Team>
where
    I: IntoIterator<Item = Team>,
{
    let mut selected: Vec<Team> = teams
        .into_iter()
        .filter(|team| team.active && team.lab_section == Some(lab_section))
        .collect();
    selected.sort_by_key(|team| team.team_id);

    debug!(lab_section, count = selected.len(), "Selected lab teams");
    selected
}
