use super::common::{NamedRef, Position};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `teams/{id}` and `teams/{id}?expand=team.stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<NamedRef>,
    /// Present only with `expand=team.stats`.
    #[serde(rename = "teamStats", default, skip_serializing_if = "Vec::is_empty")]
    pub team_stats: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Payload of `teams/{id}/roster`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub person: PersonRef,
    #[serde(rename = "jerseyNumber", default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: u32,
    #[serde(rename = "fullName")]
    pub full_name: String,
}
