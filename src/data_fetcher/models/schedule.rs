use super::common::NamedRef;
use serde::{Deserialize, Serialize};

/// Payload of `schedule?date=..` and `schedule?teamId=..&season=..`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleResponse {
    #[serde(rename = "totalGames", default)]
    pub total_games: u32,
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: u64,
    #[serde(rename = "gameType")]
    pub game_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(rename = "gameDate", default, skip_serializing_if = "Option::is_none")]
    pub game_date: Option<String>,
    pub status: GameStatus,
    pub teams: GameTeams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStatus {
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: String,
    #[serde(rename = "detailedState", default, skip_serializing_if = "Option::is_none")]
    pub detailed_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTeams {
    pub away: GameTeam,
    pub home: GameTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTeam {
    pub team: NamedRef,
    #[serde(default)]
    pub score: Option<u32>,
}

/// Games scheduled on a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesOnDate {
    pub date: String,
    pub games: Vec<ScheduleGame>,
}

impl ScheduleResponse {
    /// First date entry as a games container, or `None` when the day has no games.
    pub fn into_games_on_date(self) -> Option<GamesOnDate> {
        if self.total_games == 0 {
            return None;
        }
        self.dates.into_iter().next().map(|date| GamesOnDate {
            date: date.date,
            games: date.games,
        })
    }
}

/// Payload of `game/{id}/linescore`; only the live-clock fields are typed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Linescore {
    #[serde(rename = "currentPeriodOrdinal", default)]
    pub current_period_ordinal: Option<String>,
    #[serde(rename = "currentPeriodTimeRemaining", default)]
    pub current_period_time_remaining: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}
