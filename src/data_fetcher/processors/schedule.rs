//! Played and unplayed schedule buckets

use crate::constants::game::{STATE_FINAL, STATE_PREVIEW, TYPE_PRESEASON};
use crate::data_fetcher::models::{GameTeam, ScheduleDate, ScheduleGame};
use serde::Serialize;
use tracing::{debug, warn};

/// One side of a game. `score` is only present once the game is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSide {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl TeamSide {
    pub(crate) fn with_score(side: &GameTeam) -> Self {
        TeamSide {
            name: side.team.name.clone(),
            score: side.score,
        }
    }

    pub(crate) fn without_score(side: &GameTeam) -> Self {
        TeamSide {
            name: side.team.name.clone(),
            score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub game_id: u64,
    pub game_type: String,
    pub away: TeamSide,
    pub home: TeamSide,
}

/// A team's season split into completed and upcoming games, in date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleBuckets {
    pub played: Vec<ScheduleEntry>,
    pub unplayed: Vec<ScheduleEntry>,
}

fn entry(date: &str, game: &ScheduleGame, away: TeamSide, home: TeamSide) -> ScheduleEntry {
    ScheduleEntry {
        date: date.to_string(),
        game_id: game.game_pk,
        game_type: game.game_type.clone(),
        away,
        home,
    }
}

/// Splits a season schedule into played and unplayed games.
///
/// Preseason games are skipped. Final games need both scores to count as
/// played; games in any other state than `Final` or `Preview` are dropped.
pub fn shape_schedule(dates: &[ScheduleDate]) -> ScheduleBuckets {
    let mut buckets = ScheduleBuckets::default();

    for date in dates {
        for game in &date.games {
            if game.game_type == TYPE_PRESEASON {
                continue;
            }

            match game.status.abstract_game_state.as_str() {
                STATE_FINAL => {
                    let (away, home) = (&game.teams.away, &game.teams.home);
                    if away.score.is_none() || home.score.is_none() {
                        warn!(
                            "Final game {} on {} is missing a score, skipping",
                            game.game_pk, date.date
                        );
                        continue;
                    }
                    buckets.played.push(entry(
                        &date.date,
                        game,
                        TeamSide::with_score(away),
                        TeamSide::with_score(home),
                    ));
                }
                STATE_PREVIEW => buckets.unplayed.push(entry(
                    &date.date,
                    game,
                    TeamSide::without_score(&game.teams.away),
                    TeamSide::without_score(&game.teams.home),
                )),
                other => debug!("Dropping game {} in state {other}", game.game_pk),
            }
        }
    }

    buckets
}
