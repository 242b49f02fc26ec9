//! Leader report rows and query parameters

use crate::constants::season::DEFAULT_LEADERS;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::season::Season;

/// Which summary report a leaderboard comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Skater,
    Goalie,
}

impl PlayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerType::Skater => "skater",
            PlayerType::Goalie => "goalie",
        }
    }

    /// Path segment of the report on the leaders host (`skaters`, `goalies`).
    pub fn report_path(&self) -> String {
        format!("{}s", self.as_str())
    }

    /// `reportName` query value (`skatersummary`, `goaliesummary`).
    pub fn report_name(&self) -> String {
        format!("{}summary", self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skater" => Ok(PlayerType::Skater),
            "goalie" => Ok(PlayerType::Goalie),
            other => Err(AppError::invalid_player_type(other)),
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regular season or playoffs; maps to the upstream `gameTypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonType {
    #[default]
    RegularSeason,
    Playoffs,
}

impl SeasonType {
    pub fn game_type_id(&self) -> u8 {
        match self {
            SeasonType::RegularSeason => 2,
            SeasonType::Playoffs => 3,
        }
    }
}

impl FromStr for SeasonType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2" | "regular" | "regular season" | "regular_season" => Ok(SeasonType::RegularSeason),
            "3" | "playoffs" | "postseason" => Ok(SeasonType::Playoffs),
            other => Err(AppError::config_error(format!("Unknown season type '{other}'"))),
        }
    }
}

/// Options for a skater or goalie leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderQuery {
    /// Report column to rank by, e.g. `points` or `savePctg`.
    pub stat: String,
    pub player_type: PlayerType,
    /// Defaults to the current season.
    pub season: Option<Season>,
    pub season_type: SeasonType,
    pub num_players: usize,
    /// Upstream order is ascending by the sort key; reversing yields leaders first.
    pub reverse: bool,
    /// Minimum time on ice in seconds. `None` lets the client decide from
    /// the season's age.
    pub time_filter: Option<u32>,
}

impl LeaderQuery {
    pub fn new(stat: impl Into<String>, player_type: PlayerType) -> Self {
        LeaderQuery {
            stat: stat.into(),
            player_type,
            season: None,
            season_type: SeasonType::default(),
            num_players: DEFAULT_LEADERS,
            reverse: true,
            time_filter: None,
        }
    }

    pub fn skaters(stat: impl Into<String>) -> Self {
        Self::new(stat, PlayerType::Skater)
    }

    pub fn goalies(stat: impl Into<String>) -> Self {
        Self::new(stat, PlayerType::Goalie)
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn season_type(mut self, season_type: SeasonType) -> Self {
        self.season_type = season_type;
        self
    }

    pub fn num_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn time_filter(mut self, seconds: u32) -> Self {
        self.time_filter = Some(seconds);
        self
    }
}

/// Options for a team leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLeaderQuery {
    pub stat: String,
    pub season: Option<Season>,
    pub season_type: SeasonType,
    /// Upstream already sorts descending; reversing yields ascending order.
    pub reverse: bool,
}

impl TeamLeaderQuery {
    pub fn new(stat: impl Into<String>) -> Self {
        TeamLeaderQuery {
            stat: stat.into(),
            season: None,
            season_type: SeasonType::default(),
            reverse: false,
        }
    }
}

/// Payload of the summary reports on the leaders host. Rows stay untyped
/// since their columns depend on the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadersResponse {
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_type_parsing() {
        assert_eq!("skater".parse::<PlayerType>().unwrap(), PlayerType::Skater);
        assert_eq!("goalie".parse::<PlayerType>().unwrap(), PlayerType::Goalie);
        let err = "referee".parse::<PlayerType>().unwrap_err();
        assert!(matches!(err, AppError::InvalidPlayerType { ref player_type } if player_type == "referee"));
    }

    #[test]
    fn test_player_type_report_names() {
        assert_eq!(PlayerType::Skater.report_path(), "skaters");
        assert_eq!(PlayerType::Goalie.report_name(), "goaliesummary");
    }

    #[test]
    fn test_season_type_parsing() {
        assert_eq!("regular season".parse::<SeasonType>().unwrap(), SeasonType::RegularSeason);
        assert_eq!("3".parse::<SeasonType>().unwrap(), SeasonType::Playoffs);
        assert!("exhibition".parse::<SeasonType>().is_err());
        assert_eq!(SeasonType::default().game_type_id(), 2);
    }

    #[test]
    fn test_leader_query_defaults() {
        let query = LeaderQuery::skaters("points");
        assert_eq!(query.num_players, 10);
        assert!(query.reverse);
        assert_eq!(query.time_filter, None);
        assert_eq!(query.season_type, SeasonType::RegularSeason);

        let query = LeaderQuery::goalies("wins").num_players(3).reverse(false).time_filter(0);
        assert_eq!(query.num_players, 3);
        assert!(!query.reverse);
        assert_eq!(query.time_filter, Some(0));

        let team_query = TeamLeaderQuery::new("points");
        assert!(!team_query.reverse);
    }
}
