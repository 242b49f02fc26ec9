//! Standings and wildcard tables.

use crate::data_fetcher::api::urls::{STANDINGS, WILDCARD_STANDINGS};
use crate::data_fetcher::models::{LeagueRecord, StandingsResponse};
use crate::error::AppError;
use crate::league::StandingsSchema;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTeam {
    pub team: String,
    pub rank: u32,
}

/// Record-only view of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamRecordSummary {
    pub record: LeagueRecord,
    pub games_played: u32,
    pub points: u32,
}

/// Full standings, rebuilt from scratch on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    /// Conference name to teams ordered by conference rank.
    pub conference: BTreeMap<String, Vec<RankedTeam>>,
    /// Division name to teams ordered by division rank.
    pub division: BTreeMap<String, Vec<RankedTeam>>,
    /// Every team ordered by league rank, ascending.
    pub league: Vec<RankedTeam>,
    pub records: BTreeMap<String, TeamRecordSummary>,
}

impl Standings {
    pub fn conference_rank(&self, conference: &str, team: &str) -> Option<u32> {
        find_rank(self.conference.get(conference)?, team)
    }

    pub fn division_rank(&self, division: &str, team: &str) -> Option<u32> {
        find_rank(self.division.get(division)?, team)
    }

    pub fn league_rank(&self, team: &str) -> Option<u32> {
        find_rank(&self.league, team)
    }

    pub fn record(&self, team: &str) -> Option<&TeamRecordSummary> {
        self.records.get(team)
    }
}

fn find_rank(table: &[RankedTeam], team: &str) -> Option<u32> {
    table.iter().find(|entry| entry.team == team).map(|entry| entry.rank)
}

fn parse_rank(raw: Option<&str>, kind: &str, team: &str, endpoint: &str) -> Result<u32, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::api_unexpected_structure(format!("missing {kind} for {team}"), endpoint)
    })?;
    raw.trim().parse::<u32>().map_err(|_| {
        AppError::api_unexpected_structure(
            format!("{kind} '{raw}' for {team} is not a number"),
            endpoint,
        )
    })
}

/// Indexes every team's conference, division and league rank plus its record.
///
/// Conference and division tables named in `schema` are present even when the
/// payload has no teams for them.
pub fn shape_standings(
    response: &StandingsResponse,
    schema: &StandingsSchema,
) -> Result<Standings, AppError> {
    let mut standings = Standings::default();
    for name in &schema.conference {
        standings.conference.entry(name.clone()).or_default();
    }
    for name in &schema.division {
        standings.division.entry(name.clone()).or_default();
    }

    for block in &response.records {
        let conference_name = &block.conference.name;
        let division_name = block
            .division
            .as_ref()
            .map(|division| division.name.as_str())
            .ok_or_else(|| {
                AppError::api_unexpected_structure(
                    format!("standings block in {conference_name} has no division"),
                    STANDINGS,
                )
            })?;

        for record in &block.team_records {
            let name = &record.team.name;
            let conference_rank =
                parse_rank(record.conference_rank.as_deref(), "conferenceRank", name, STANDINGS)?;
            let division_rank =
                parse_rank(record.division_rank.as_deref(), "divisionRank", name, STANDINGS)?;
            let league_rank =
                parse_rank(record.league_rank.as_deref(), "leagueRank", name, STANDINGS)?;

            standings
                .conference
                .entry(conference_name.clone())
                .or_default()
                .push(RankedTeam {
                    team: name.clone(),
                    rank: conference_rank,
                });
            standings
                .division
                .entry(division_name.to_string())
                .or_default()
                .push(RankedTeam {
                    team: name.clone(),
                    rank: division_rank,
                });
            standings.league.push(RankedTeam {
                team: name.clone(),
                rank: league_rank,
            });
            standings.records.insert(
                name.clone(),
                TeamRecordSummary {
                    record: record.league_record,
                    games_played: record.games_played,
                    points: record.points,
                },
            );
        }
    }

    for table in standings
        .conference
        .values_mut()
        .chain(standings.division.values_mut())
    {
        table.sort_by_key(|entry| entry.rank);
    }
    standings.league.sort_by_key(|entry| entry.rank);

    Ok(standings)
}

/// Record-only view: wins/losses/OT, games played and points for every team.
pub fn shape_team_records(response: &StandingsResponse) -> BTreeMap<String, TeamRecordSummary> {
    response
        .records
        .iter()
        .flat_map(|block| block.team_records.iter())
        .map(|record| {
            (
                record.team.name.clone(),
                TeamRecordSummary {
                    record: record.league_record,
                    games_played: record.games_played,
                    points: record.points,
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub fn name(&self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }
}

impl FromStr for Conference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eastern" => Ok(Conference::Eastern),
            "western" => Ok(Conference::Western),
            _ => Err(AppError::invalid_conference(s)),
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WildcardStandings {
    pub conference: String,
    /// Teams in upstream order, which is wildcard rank order.
    pub standings: Vec<RankedTeam>,
}

/// Extracts one conference's wildcard ranks from a `standings/wildCard` payload.
pub fn shape_wildcard(
    response: &StandingsResponse,
    conference: Conference,
) -> Result<WildcardStandings, AppError> {
    let block = response
        .records
        .iter()
        .find(|block| block.conference.name.eq_ignore_ascii_case(conference.name()))
        .ok_or_else(|| {
            AppError::api_no_data(
                format!("no wildcard standings for the {conference} conference"),
                WILDCARD_STANDINGS,
            )
        })?;

    let standings = block
        .team_records
        .iter()
        .map(|record| {
            let rank = parse_rank(
                record.wild_card_rank.as_deref(),
                "wildCardRank",
                &record.team.name,
                WILDCARD_STANDINGS,
            )?;
            Ok(RankedTeam {
                team: record.team.name.clone(),
                rank,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(WildcardStandings {
        conference: block.conference.name.clone(),
        standings,
    })
}
