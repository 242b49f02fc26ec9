//! Skater, goalie and team stat leader boards

use crate::data_fetcher::api::urls::LEADERS;
use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub player: String,
    /// Comma separated abbreviations when the player was traded mid-season.
    pub teams: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamLeaderEntry {
    pub team: String,
    pub value: Value,
}

fn text_field(row: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    row.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(format!("leaders row has no '{key}'"), LEADERS)
        })
}

fn stat_value(row: &Map<String, Value>, stat: &str) -> Result<Value, AppError> {
    row.get(stat).cloned().ok_or_else(|| AppError::unknown_stat(stat))
}

/// Ranks player rows by `stat`.
///
/// Rows arrive ascending by the sort key, so `reverse` puts the leaders first.
pub fn shape_leaders(
    mut rows: Vec<Map<String, Value>>,
    stat: &str,
    reverse: bool,
    num_players: usize,
) -> Result<Vec<LeaderEntry>, AppError> {
    if reverse {
        rows.reverse();
    }
    rows.truncate(num_players);

    rows.iter()
        .map(|row| {
            Ok(LeaderEntry {
                player: text_field(row, "playerName")?,
                teams: row
                    .get("playerTeamsPlayedFor")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                value: stat_value(row, stat)?,
            })
        })
        .collect()
}

/// Ranks team rows by `stat`. Rows arrive descending, so `reverse` gives
/// ascending order.
pub fn shape_team_leaders(
    mut rows: Vec<Map<String, Value>>,
    stat: &str,
    reverse: bool,
) -> Result<Vec<TeamLeaderEntry>, AppError> {
    if reverse {
        rows.reverse();
    }

    rows.iter()
        .map(|row| {
            Ok(TeamLeaderEntry {
                team: text_field(row, "teamFullName")?,
                value: stat_value(row, stat)?,
            })
        })
        .collect()
}
