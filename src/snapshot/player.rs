use serde::Serialize;

use crate::data_fetcher::NhlClient;
use crate::data_fetcher::models::{PlayerInfo, PlayerSeasonStats, StatSplit};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub info: PlayerInfo,
    /// Current-season line; only fetched for active players.
    pub season_stats: Option<PlayerSeasonStats>,
    pub career_stats: Vec<StatSplit>,
}

impl PlayerSnapshot {
    pub async fn fetch(client: &NhlClient, player: &str) -> Result<Self, AppError> {
        let player_id = client.resolve_player(player).await?;
        Self::fetch_by_id(client, player_id).await
    }

    pub async fn fetch_by_id(client: &NhlClient, player_id: u32) -> Result<Self, AppError> {
        let info = client.player_info(player_id).await?;
        let season_stats = if info.active {
            Some(client.player_season_stats(player_id, None).await?)
        } else {
            None
        };
        let career_stats = client.player_career_stats(player_id).await?;

        Ok(PlayerSnapshot {
            id: player_id,
            info,
            season_stats,
            career_stats,
        })
    }
}
