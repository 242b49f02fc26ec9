use super::common::NamedRef;
use serde::{Deserialize, Serialize};

/// Payload of `standings` and `standings/wildCard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub records: Vec<DivisionRecord>,
}

/// One block of team records. For `standings` there is one per division;
/// for `standings/wildCard` one per conference (without a division).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRecord {
    #[serde(rename = "standingsType", default)]
    pub standings_type: Option<String>,
    #[serde(default)]
    pub division: Option<NamedRef>,
    pub conference: NamedRef,
    #[serde(rename = "teamRecords", default)]
    pub team_records: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: NamedRef,
    #[serde(rename = "leagueRecord")]
    pub league_record: LeagueRecord,
    #[serde(rename = "divisionRank", default)]
    pub division_rank: Option<String>,
    #[serde(rename = "conferenceRank", default)]
    pub conference_rank: Option<String>,
    #[serde(rename = "leagueRank", default)]
    pub league_rank: Option<String>,
    #[serde(rename = "wildCardRank", default)]
    pub wild_card_rank: Option<String>,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: u32,
    #[serde(default)]
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LeagueRecord {
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ot: u32,
}
