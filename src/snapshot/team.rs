use serde::Serialize;
use tracing::info;

use crate::data_fetcher::NhlClient;
use crate::data_fetcher::api::build_team_path;
use crate::data_fetcher::models::{NamedRef, RosterEntry, TeamInfo};
use crate::data_fetcher::processors::{ScheduleBuckets, ScheduleEntry, TeamRecordSummary};
use crate::error::AppError;

/// Everything known about one team for the current season.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSnapshot {
    pub id: u32,
    pub name: String,
    pub venue: Option<String>,
    pub conference: String,
    pub division: String,
    /// Team info expanded with `teamStats`.
    pub stats: TeamInfo,
    pub roster: Vec<RosterEntry>,
    pub schedule: ScheduleBuckets,
    pub record: Option<TeamRecordSummary>,
    pub division_rank: Option<u32>,
    pub conference_rank: Option<u32>,
    pub league_rank: Option<u32>,
}

fn required_name(named: Option<&NamedRef>, field: &str, team_id: u32) -> Result<String, AppError> {
    named
        .map(|named| named.name.clone())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("team {team_id} has no {field}"),
                build_team_path(team_id),
            )
        })
}

impl TeamSnapshot {
    /// Resolves `team` (name, city or alias) and fetches its snapshot.
    pub async fn fetch(client: &NhlClient, team: &str) -> Result<Self, AppError> {
        let team_id = client.resolve_team(team)?;
        Self::fetch_by_id(client, team_id).await
    }

    pub async fn fetch_by_id(client: &NhlClient, team_id: u32) -> Result<Self, AppError> {
        let info = client.team_info(team_id).await?;
        info!("Building team snapshot for {} ({team_id})", info.name);

        let conference = required_name(info.conference.as_ref(), "conference", team_id)?;
        let division = required_name(info.division.as_ref(), "division", team_id)?;

        let stats = client.team_stats(team_id).await?;
        let roster = client.team_roster(team_id, None).await?;
        let schedule = client.team_schedule_buckets(team_id, None).await?;
        let standings = client.standings().await?;

        Ok(TeamSnapshot {
            id: team_id,
            venue: info.venue.as_ref().map(|venue| venue.name.clone()),
            record: standings.record(&info.name).copied(),
            division_rank: standings.division_rank(&division, &info.name),
            conference_rank: standings.conference_rank(&conference, &info.name),
            league_rank: standings.league_rank(&info.name),
            name: info.name,
            conference,
            division,
            stats,
            roster,
            schedule,
        })
    }

    pub fn remaining_games(&self) -> &[ScheduleEntry] {
        &self.schedule.unplayed
    }
}
