//! Live and final game score summaries

use super::schedule::TeamSide;
use crate::constants::game::{STATE_FINAL, STATE_LIVE, TYPE_PRESEASON};
use crate::data_fetcher::models::{GamesOnDate, Linescore};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreStatus {
    Live,
    Final,
}

impl ScoreStatus {
    /// The upstream `abstractGameState` this status matches.
    pub fn game_state(&self) -> &'static str {
        match self {
            ScoreStatus::Live => STATE_LIVE,
            ScoreStatus::Final => STATE_FINAL,
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.game_state())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameScore {
    pub game_id: u64,
    pub date: String,
    pub status: ScoreStatus,
    pub away: TeamSide,
    pub home: TeamSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_left: Option<String>,
}

/// Scores of every non-preseason game on `games` whose state matches `status`.
pub fn shape_scores(games: &GamesOnDate, status: ScoreStatus) -> Vec<GameScore> {
    games
        .games
        .iter()
        .filter(|game| {
            game.status.abstract_game_state == status.game_state()
                && game.game_type != TYPE_PRESEASON
        })
        .map(|game| GameScore {
            game_id: game.game_pk,
            date: games.date.clone(),
            status,
            away: TeamSide::with_score(&game.teams.away),
            home: TeamSide::with_score(&game.teams.home),
            period: None,
            time_left: None,
        })
        .collect()
}

/// Copies the current period and clock from a game's linescore.
pub fn attach_linescore(score: &mut GameScore, linescore: &Linescore) {
    score.period = linescore.current_period_ordinal.clone();
    score.time_left = linescore.current_period_time_remaining.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn day() -> GamesOnDate {
        GamesOnDate {
            date: "2019-02-16".to_string(),
            games: vec![
                TestDataBuilder::game(10, "Live").scores(2, 1).build(),
                TestDataBuilder::game(11, "Final").scores(5, 3).build(),
                TestDataBuilder::game(12, "Preview").build(),
                TestDataBuilder::game(13, "Live").scores(0, 0).build(),
            ],
        }
    }

    #[test]
    fn test_filters_by_status() {
        let live = shape_scores(&day(), ScoreStatus::Live);
        let ids: Vec<u64> = live.iter().map(|score| score.game_id).collect();
        assert_eq!(ids, vec![10, 13]);
        assert!(live.iter().all(|score| score.status == ScoreStatus::Live));

        let final_scores = shape_scores(&day(), ScoreStatus::Final);
        assert_eq!(final_scores.len(), 1);
        assert_eq!(final_scores[0].away.score, Some(5));
        assert_eq!(final_scores[0].date, "2019-02-16");
    }

    #[test]
    fn test_preseason_games_are_skipped() {
        let games = GamesOnDate {
            date: "2018-09-20".to_string(),
            games: vec![
                TestDataBuilder::game(1, "Final").game_type("PR").scores(3, 2).build(),
                TestDataBuilder::game(2, "Live").game_type("PR").scores(1, 0).build(),
                TestDataBuilder::game(3, "Final").scores(4, 1).build(),
            ],
        };

        let final_ids: Vec<u64> = shape_scores(&games, ScoreStatus::Final)
            .iter()
            .map(|score| score.game_id)
            .collect();
        assert_eq!(final_ids, vec![3]);
        assert!(shape_scores(&games, ScoreStatus::Live).is_empty());
    }

    #[test]
    fn test_attach_linescore() {
        let mut scores = shape_scores(&day(), ScoreStatus::Live);
        let linescore: Linescore = serde_json::from_value(serde_json::json!({
            "currentPeriodOrdinal": "3rd",
            "currentPeriodTimeRemaining": "04:12"
        }))
        .unwrap();

        attach_linescore(&mut scores[0], &linescore);
        assert_eq!(scores[0].period.as_deref(), Some("3rd"));
        assert_eq!(scores[0].time_left.as_deref(), Some("04:12"));
        assert_eq!(scores[1].period, None);
    }
}
