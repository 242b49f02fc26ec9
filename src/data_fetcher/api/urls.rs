//! URL building utilities for API endpoints
//!
//! Paths are relative to one of the three configured hosts. An [`Endpoint`]
//! pairs a path with its host, query parameters and TLS mode.

use crate::constants::season::LEAGUE_ID;
use crate::data_fetcher::models::{PlayerType, Season, SeasonType};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Url;

pub const STANDINGS: &str = "standings";
pub const WILDCARD_STANDINGS: &str = "standings/wildCard";
pub const CURRENT_SEASON: &str = "seasons/current";
/// Bulk player directory on the records host.
pub const PLAYER_DIRECTORY: &str = "player";
/// Team summary report on the stats host.
pub const TEAM_SUMMARY: &str = "team";
/// Label for diagnostics about leaderboard rows.
pub const LEADERS: &str = "leaders";

/// A fully described upstream request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub verify_tls: bool,
}

impl Endpoint {
    pub fn new(base_url: &str, path: impl Into<String>) -> Self {
        Endpoint {
            base_url: base_url.to_string(),
            path: path.into(),
            query: Vec::new(),
            verify_tls: true,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn insecure(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Joins host, path and query into a request URL, percent-encoding the
    /// query values.
    ///
    /// # Example
    /// ```
    /// use nhl_stats::data_fetcher::api::Endpoint;
    ///
    /// let url = Endpoint::new("https://api.example.com/v1/", "schedule")
    ///     .query("teamId", 6)
    ///     .url()
    ///     .unwrap();
    /// assert_eq!(url.as_str(), "https://api.example.com/v1/schedule?teamId=6");
    /// ```
    pub fn url(&self) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.base_url, self.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::config_error(format!("Invalid request URL '{raw}': {e}")))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

/// Games scheduled on one day.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use nhl_stats::data_fetcher::api::build_schedule_path;
///
/// let date = NaiveDate::from_ymd_opt(2019, 2, 16).unwrap();
/// assert_eq!(build_schedule_path(date), "schedule?date=2019-02-16");
/// ```
pub fn build_schedule_path(date: NaiveDate) -> String {
    format!("schedule?date={}", date.format("%Y-%m-%d"))
}

/// A team's full season schedule.
pub fn build_team_schedule_path(team_id: u32, season: Season) -> String {
    format!("schedule?teamId={team_id}&season={season}")
}

pub fn build_team_path(team_id: u32) -> String {
    format!("teams/{team_id}")
}

pub fn build_team_stats_path(team_id: u32) -> String {
    format!("teams/{team_id}?expand=team.stats")
}

pub fn build_roster_path(team_id: u32, season: Season) -> String {
    format!("teams/{team_id}/roster?season={season}")
}

pub fn build_person_path(player_id: u32) -> String {
    format!("people/{player_id}")
}

pub fn build_season_stats_path(player_id: u32, season: Season) -> String {
    format!("people/{player_id}/stats?stats=statsSingleSeason&season={season}")
}

pub fn build_career_stats_path(player_id: u32) -> String {
    format!("people/{player_id}/stats?stats=yearByYear")
}

pub fn build_linescore_path(game_pk: u64) -> String {
    format!("game/{game_pk}/linescore")
}

/// Query for the skater or goalie summary report.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_leaders_query;
/// use nhl_stats::data_fetcher::models::{PlayerType, Season, SeasonType};
///
/// let query = build_leaders_query(
///     PlayerType::Skater,
///     "points",
///     Season::new(2018),
///     SeasonType::RegularSeason,
///     25200,
/// );
/// assert_eq!(
///     query[2],
///     (
///         "cayenneExp".to_string(),
///         "seasonId=20182019 and gameTypeId=2 and timeOnIce>25200".to_string()
///     )
/// );
/// ```
pub fn build_leaders_query(
    player_type: PlayerType,
    stat: &str,
    season: Season,
    season_type: SeasonType,
    time_filter: u32,
) -> Vec<(String, String)> {
    vec![
        ("reportType".to_string(), "season".to_string()),
        ("reportName".to_string(), player_type.report_name()),
        (
            "cayenneExp".to_string(),
            format!(
                "seasonId={season} and gameTypeId={} and timeOnIce>{time_filter}",
                season_type.game_type_id()
            ),
        ),
        ("sort".to_string(), stat.to_string()),
    ]
}

/// Query for the team summary report, sorted descending by `stat`.
pub fn build_team_leaders_query(
    stat: &str,
    season: Season,
    season_type: SeasonType,
) -> Vec<(String, String)> {
    let sort = serde_json::json!({ "property": stat, "direction": "DESC" });
    vec![
        ("isAggregate".to_string(), "false".to_string()),
        ("reportType".to_string(), "basic".to_string()),
        ("isGame".to_string(), "false".to_string()),
        ("reportName".to_string(), "teamsummary".to_string()),
        ("sort".to_string(), sort.to_string()),
        (
            "cayenneExp".to_string(),
            format!(
                "leagueId={LEAGUE_ID} and gameTypeId={} and seasonId>={season} and seasonId<={season}",
                season_type.game_type_id()
            ),
        ),
    ]
}
