use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::data_fetcher::NhlClient;
use crate::data_fetcher::models::{GamesOnDate, Season};
use crate::data_fetcher::processors::{
    Conference, GameScore, ScoreStatus, Standings, WildcardStandings,
};
use crate::error::AppError;

/// League-wide view: season, standings, wildcard races and scores.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueSnapshot {
    pub season: Season,
    pub standings: Standings,
    /// Keyed by conference name.
    pub wildcard: BTreeMap<String, WildcardStandings>,
    pub todays_games: Option<GamesOnDate>,
    pub recent_games: Option<GamesOnDate>,
    pub live_scores: Vec<GameScore>,
    pub recent_scores: Vec<GameScore>,
}

impl LeagueSnapshot {
    pub async fn fetch(client: &NhlClient) -> Result<Self, AppError> {
        let season = client.season().await?;
        info!("Building league snapshot for {season}");

        let standings = client.standings().await?;
        let mut wildcard = BTreeMap::new();
        for conference in [Conference::Eastern, Conference::Western] {
            let table = client.wildcard_standings(conference).await?;
            wildcard.insert(conference.name().to_string(), table);
        }

        let todays_games = client.todays_games().await?;
        let recent_games = client.recent_games().await?;
        let live_scores = client
            .scores(todays_games.as_ref(), ScoreStatus::Live, true)
            .await?;
        let recent_scores = client
            .scores(recent_games.as_ref(), ScoreStatus::Final, false)
            .await?;

        Ok(LeagueSnapshot {
            season,
            standings,
            wildcard,
            todays_games,
            recent_games,
            live_scores,
            recent_scores,
        })
    }
}
