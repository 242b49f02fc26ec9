use super::common::{NamedRef, Position};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `people/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub people: Vec<PlayerInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: u32,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "currentTeam", default, skip_serializing_if = "Option::is_none")]
    pub current_team: Option<NamedRef>,
    #[serde(rename = "primaryPosition", default, skip_serializing_if = "Option::is_none")]
    pub primary_position: Option<Position>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `people/{id}/stats?stats=..`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSplit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default)]
    pub stat: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<NamedRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One season of a player's stats plus the player's current team.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeasonStats {
    #[serde(flatten)]
    pub split: StatSplit,
    /// ID of the team the player currently plays for, if any.
    pub current_team_id: Option<u32>,
}

/// Payload of the bulk player directory (`player` on the records host).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDirectoryResponse {
    #[serde(default)]
    pub data: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: u32,
    #[serde(rename = "prName", default)]
    pub pr_name: Option<String>,
    #[serde(rename = "yearsPro", default)]
    pub years_pro: Option<u32>,
}
