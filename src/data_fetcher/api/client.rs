//! The NHL statistics client.
//!
//! Every operation fetches fresh data. Requests are awaited one after
//! another, so results keep upstream order.

use chrono::{Duration, NaiveDate};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::fetch_utils::{RetryPolicy, fetch};
use super::http_client::HttpClients;
use super::player_directory::PlayerIndex;
use super::season::{
    CurrentSeason, current_season_from_response, local_current_season_at, today,
};
use super::urls::{
    CURRENT_SEASON, Endpoint, PLAYER_DIRECTORY, STANDINGS, TEAM_SUMMARY, WILDCARD_STANDINGS,
    build_career_stats_path, build_leaders_query, build_linescore_path, build_person_path,
    build_roster_path, build_schedule_path, build_season_stats_path, build_team_leaders_query,
    build_team_path, build_team_schedule_path, build_team_stats_path,
};
use crate::config::{Config, SeasonSource};
use crate::constants::season::FILTERED_TIME_ON_ICE_SECONDS;
use crate::data_fetcher::models::{
    GamesOnDate, LeaderQuery, LeadersResponse, Linescore, PeopleResponse,
    PlayerDirectoryResponse, PlayerInfo, PlayerSeasonStats, PlayerType, RosterEntry,
    RosterResponse, ScheduleDate, ScheduleResponse, Season, SeasonsResponse, StandingsResponse,
    StatSplit, StatsResponse, TeamInfo, TeamLeaderQuery, TeamsResponse,
};
use crate::data_fetcher::processors::{
    Conference, GameScore, LeaderEntry, ScheduleBuckets, ScoreStatus, Standings, TeamLeaderEntry,
    TeamRecordSummary, WildcardStandings, attach_linescore, shape_leaders, shape_schedule,
    shape_scores, shape_standings, shape_team_leaders, shape_team_records, shape_wildcard,
};
use crate::error::AppError;
use crate::league::league_data;
use std::collections::BTreeMap;

/// Read-only client over the stats API, the leaders host and the player
/// directory.
#[derive(Debug, Clone)]
pub struct NhlClient {
    clients: HttpClients,
    api_base_url: String,
    stats_base_url: String,
    records_base_url: String,
    season_source: SeasonSource,
    retry_policy: RetryPolicy,
}

impl NhlClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(NhlClient {
            clients: HttpClients::new(config.http_timeout_seconds)?,
            api_base_url: config.api_base_url.clone(),
            stats_base_url: config.stats_base_url.clone(),
            records_base_url: config.records_base_url.clone(),
            season_source: config.season_source,
            retry_policy: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn season_source(&self) -> SeasonSource {
        self.season_source
    }

    fn api(&self, path: impl Into<String>) -> Endpoint {
        Endpoint::new(&self.api_base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, AppError> {
        let url = endpoint.url()?;
        let client = self.clients.for_tls(endpoint.verify_tls);
        fetch(client, &url, &self.retry_policy).await
    }

    // Seasons

    /// The running season, from `seasons/current` or today's date depending
    /// on the configured source.
    #[instrument(skip(self))]
    pub async fn current_season(&self) -> Result<CurrentSeason, AppError> {
        match self.season_source {
            SeasonSource::Remote => {
                let response: SeasonsResponse = self.get(&self.api(CURRENT_SEASON)).await?;
                current_season_from_response(&response)
            }
            SeasonSource::Local => local_current_season_at(today()),
        }
    }

    pub async fn season(&self) -> Result<Season, AppError> {
        Ok(self.current_season().await?.season)
    }

    pub async fn stats_filter_active(&self) -> Result<bool, AppError> {
        Ok(self.current_season().await?.stats_filter_active())
    }

    async fn season_or_current(&self, season: Option<Season>) -> Result<Season, AppError> {
        match season {
            Some(season) => Ok(season),
            None => self.season().await,
        }
    }

    // Games and scores

    /// Games on `date`, or `None` when nothing is scheduled.
    #[instrument(skip(self))]
    pub async fn games_on_date(&self, date: NaiveDate) -> Result<Option<GamesOnDate>, AppError> {
        let response: ScheduleResponse = self.get(&self.api(build_schedule_path(date))).await?;
        Ok(response.into_games_on_date())
    }

    pub async fn todays_games(&self) -> Result<Option<GamesOnDate>, AppError> {
        self.games_on_date(today()).await
    }

    /// Yesterday's games.
    pub async fn recent_games(&self) -> Result<Option<GamesOnDate>, AppError> {
        self.games_on_date(today() - Duration::days(1)).await
    }

    pub async fn linescore(&self, game_pk: u64) -> Result<Linescore, AppError> {
        self.get(&self.api(build_linescore_path(game_pk))).await
    }

    /// Scores of the games in `status`, optionally with period and clock.
    ///
    /// Linescores are fetched one game at a time, in game order.
    #[instrument(skip(self, games))]
    pub async fn scores(
        &self,
        games: Option<&GamesOnDate>,
        status: ScoreStatus,
        with_linescore: bool,
    ) -> Result<Vec<GameScore>, AppError> {
        let Some(games) = games else {
            debug!("No games scheduled, no {status} scores");
            return Ok(Vec::new());
        };

        let mut scores = shape_scores(games, status);
        if with_linescore {
            for score in scores.iter_mut() {
                let linescore = self.linescore(score.game_id).await?;
                attach_linescore(score, &linescore);
            }
        }
        Ok(scores)
    }

    /// Today's games in progress, with period and time remaining.
    pub async fn live_scores(&self) -> Result<Vec<GameScore>, AppError> {
        let games = self.todays_games().await?;
        self.scores(games.as_ref(), ScoreStatus::Live, true).await
    }

    /// Yesterday's final scores.
    pub async fn recent_scores(&self) -> Result<Vec<GameScore>, AppError> {
        let games = self.recent_games().await?;
        self.scores(games.as_ref(), ScoreStatus::Final, false).await
    }

    // Standings

    #[instrument(skip(self))]
    pub async fn standings(&self) -> Result<Standings, AppError> {
        let response: StandingsResponse = self.get(&self.api(STANDINGS)).await?;
        shape_standings(&response, league_data()?.standings_schema())
    }

    pub async fn team_records(&self) -> Result<BTreeMap<String, TeamRecordSummary>, AppError> {
        let response: StandingsResponse = self.get(&self.api(STANDINGS)).await?;
        Ok(shape_team_records(&response))
    }

    #[instrument(skip(self))]
    pub async fn wildcard_standings(
        &self,
        conference: Conference,
    ) -> Result<WildcardStandings, AppError> {
        let response: StandingsResponse = self.get(&self.api(WILDCARD_STANDINGS)).await?;
        shape_wildcard(&response, conference)
    }

    // Teams

    #[instrument(skip(self))]
    pub async fn team_info(&self, team_id: u32) -> Result<TeamInfo, AppError> {
        self.first_team(self.api(build_team_path(team_id))).await
    }

    /// Team info expanded with the season's team stats.
    #[instrument(skip(self))]
    pub async fn team_stats(&self, team_id: u32) -> Result<TeamInfo, AppError> {
        self.first_team(self.api(build_team_stats_path(team_id))).await
    }

    async fn first_team(&self, endpoint: Endpoint) -> Result<TeamInfo, AppError> {
        let response: TeamsResponse = self.get(&endpoint).await?;
        response.teams.into_iter().next().ok_or_else(|| {
            AppError::api_no_data("No team in response", endpoint.path.clone())
        })
    }

    /// Roster for `season`, defaulting to the current one.
    #[instrument(skip(self))]
    pub async fn team_roster(
        &self,
        team_id: u32,
        season: Option<Season>,
    ) -> Result<Vec<RosterEntry>, AppError> {
        let season = self.season_or_current(season).await?;
        let response: RosterResponse = self.get(&self.api(build_roster_path(team_id, season))).await?;
        Ok(response.roster)
    }

    /// Raw schedule date entries for a team's season.
    #[instrument(skip(self))]
    pub async fn team_schedule(
        &self,
        team_id: u32,
        season: Option<Season>,
    ) -> Result<Vec<ScheduleDate>, AppError> {
        let season = self.season_or_current(season).await?;
        let response: ScheduleResponse = self
            .get(&self.api(build_team_schedule_path(team_id, season)))
            .await?;
        Ok(response.dates)
    }

    pub async fn team_schedule_buckets(
        &self,
        team_id: u32,
        season: Option<Season>,
    ) -> Result<ScheduleBuckets, AppError> {
        let dates = self.team_schedule(team_id, season).await?;
        Ok(shape_schedule(&dates))
    }

    // Players

    #[instrument(skip(self))]
    pub async fn player_info(&self, player_id: u32) -> Result<PlayerInfo, AppError> {
        let path = build_person_path(player_id);
        let response: PeopleResponse = self.get(&self.api(path.as_str())).await?;
        response
            .people
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data(format!("No player {player_id}"), path))
    }

    /// One season of stats. Without `season`, active players get the current
    /// season and inactive players fail with [`AppError::SeasonRequired`].
    #[instrument(skip(self))]
    pub async fn player_season_stats(
        &self,
        player_id: u32,
        season: Option<Season>,
    ) -> Result<PlayerSeasonStats, AppError> {
        let info = self.player_info(player_id).await?;
        let current_team_id = info.current_team.as_ref().and_then(|team| team.id);

        let season = match season {
            Some(season) => season,
            None if !info.active => return Err(AppError::SeasonRequired { player_id }),
            None => self.season().await?,
        };

        let path = build_season_stats_path(player_id, season);
        let response: StatsResponse = self.get(&self.api(path.as_str())).await?;
        let split = first_splits(response)
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data(format!("No {season} stats"), path))?;

        Ok(PlayerSeasonStats {
            split,
            current_team_id,
        })
    }

    /// Year-by-year stat lines across the player's career.
    #[instrument(skip(self))]
    pub async fn player_career_stats(&self, player_id: u32) -> Result<Vec<StatSplit>, AppError> {
        let response: StatsResponse = self
            .get(&self.api(build_career_stats_path(player_id)))
            .await?;
        Ok(first_splits(response))
    }

    // Leaders

    /// Skater or goalie leaderboard.
    ///
    /// Without an explicit time filter or season, the current season's
    /// stats-filter guard picks between the filtered minimum time on ice and 0.
    #[instrument(skip(self))]
    pub async fn leaders(&self, query: &LeaderQuery) -> Result<Vec<LeaderEntry>, AppError> {
        let known_stats = league_data()?.stat_keys(query.player_type);
        if !known_stats.iter().any(|key| key == &query.stat) {
            return Err(AppError::unknown_stat(&query.stat));
        }

        let (season, time_filter) = match (query.season, query.time_filter) {
            (Some(season), filter) => (season, filter.unwrap_or(0)),
            (None, Some(filter)) => (self.season().await?, filter),
            (None, None) => {
                let current = self.current_season().await?;
                let filter = if current.stats_filter_active() {
                    FILTERED_TIME_ON_ICE_SECONDS
                } else {
                    0
                };
                (current.season, filter)
            }
        };
        info!(
            "Fetching {} leaders for {} in {season} (timeOnIce>{time_filter})",
            query.player_type, query.stat
        );

        let endpoint = Endpoint {
            query: build_leaders_query(
                query.player_type,
                &query.stat,
                season,
                query.season_type,
                time_filter,
            ),
            ..Endpoint::new(&self.stats_base_url, query.player_type.report_path()).insecure()
        };
        let response: LeadersResponse = self.get(&endpoint).await?;
        shape_leaders(response.data, &query.stat, query.reverse, query.num_players)
    }

    pub async fn skater_leaders(&self, query: &LeaderQuery) -> Result<Vec<LeaderEntry>, AppError> {
        self.leaders(&LeaderQuery {
            player_type: PlayerType::Skater,
            ..query.clone()
        })
        .await
    }

    pub async fn goalie_leaders(&self, query: &LeaderQuery) -> Result<Vec<LeaderEntry>, AppError> {
        self.leaders(&LeaderQuery {
            player_type: PlayerType::Goalie,
            ..query.clone()
        })
        .await
    }

    /// Team leaderboard from the team summary report.
    #[instrument(skip(self))]
    pub async fn team_leaders(
        &self,
        query: &TeamLeaderQuery,
    ) -> Result<Vec<TeamLeaderEntry>, AppError> {
        let season = self.season_or_current(query.season).await?;
        let endpoint = Endpoint {
            query: build_team_leaders_query(&query.stat, season, query.season_type),
            ..Endpoint::new(&self.stats_base_url, TEAM_SUMMARY)
        };
        let response: LeadersResponse = self.get(&endpoint).await?;
        shape_team_leaders(response.data, &query.stat, query.reverse)
    }

    // Identifier resolution

    pub fn resolve_team(&self, team: &str) -> Result<u32, AppError> {
        league_data()?.team_id(team)
    }

    /// Looks up a player ID by name in the bulk player directory.
    #[instrument(skip(self))]
    pub async fn resolve_player(&self, player: &str) -> Result<u32, AppError> {
        let directory: PlayerDirectoryResponse = self
            .get(&Endpoint::new(&self.records_base_url, PLAYER_DIRECTORY))
            .await?;
        let index = PlayerIndex::from_directory(&directory);
        debug!("Player directory holds {} entries", index.len());
        index.resolve(player)
    }
}

fn first_splits(response: StatsResponse) -> Vec<StatSplit> {
    response
        .stats
        .into_iter()
        .next()
        .map(|group| group.splits)
        .unwrap_or_default()
}
