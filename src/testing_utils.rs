//! Fixture builders for unit and integration tests.
//!
//! Payloads mirror the upstream JSON shapes closely enough to go through
//! the same deserialization as live responses.

use crate::config::Config;
use crate::data_fetcher::models::{
    GameStatus, GameTeam, GameTeams, NamedRef, ScheduleDate, ScheduleGame,
};
use serde_json::{Map, Value, json};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Starts a regular-season game between Boston (home) and Montréal (away).
    pub fn game(game_pk: u64, state: &str) -> GameBuilder {
        GameBuilder {
            game_pk,
            game_type: "R".to_string(),
            state: state.to_string(),
            away: "Montréal Canadiens".to_string(),
            home: "Boston Bruins".to_string(),
            scores: None,
        }
    }
}

pub struct GameBuilder {
    game_pk: u64,
    game_type: String,
    state: String,
    away: String,
    home: String,
    scores: Option<(u32, u32)>,
}

impl GameBuilder {
    pub fn game_type(mut self, game_type: &str) -> Self {
        self.game_type = game_type.to_string();
        self
    }

    pub fn teams(mut self, away: &str, home: &str) -> Self {
        self.away = away.to_string();
        self.home = home.to_string();
        self
    }

    pub fn scores(mut self, away: u32, home: u32) -> Self {
        self.scores = Some((away, home));
        self
    }

    pub fn build(self) -> ScheduleGame {
        let side = |name: String, score: Option<u32>| GameTeam {
            team: NamedRef { id: None, name },
            score,
        };
        ScheduleGame {
            game_pk: self.game_pk,
            game_type: self.game_type,
            season: Some("20182019".to_string()),
            game_date: None,
            status: GameStatus {
                abstract_game_state: self.state.clone(),
                detailed_state: Some(self.state),
            },
            teams: GameTeams {
                away: side(self.away, self.scores.map(|(away, _)| away)),
                home: side(self.home, self.scores.map(|(_, home)| home)),
            },
        }
    }
}

pub fn schedule_dates(days: Vec<(&str, Vec<ScheduleGame>)>) -> Vec<ScheduleDate> {
    days.into_iter()
        .map(|(date, games)| ScheduleDate {
            date: date.to_string(),
            games,
        })
        .collect()
}

/// `schedule?date=..` payload holding `games` on a single date.
pub fn games_on_date_json(date: &str, games: Vec<ScheduleGame>) -> Value {
    json!({
        "totalGames": games.len(),
        "dates": [{"date": date, "games": games}]
    })
}

/// `schedule?teamId=..` payload spread over several dates.
pub fn team_schedule_json(days: Vec<(&str, Vec<ScheduleGame>)>) -> Value {
    let dates = schedule_dates(days);
    let total: usize = dates.iter().map(|date| date.games.len()).sum();
    json!({"totalGames": total, "dates": dates})
}

pub fn seasons_json(season_id: &str, regular_season_start: &str) -> Value {
    json!({
        "seasons": [{
            "seasonId": season_id,
            "regularSeasonStartDate": regular_season_start,
            "regularSeasonEndDate": "2019-04-06",
            "seasonEndDate": "2019-06-12"
        }]
    })
}

fn team_record(
    id: u32,
    name: &str,
    record: (u32, u32, u32),
    division_rank: u32,
    conference_rank: u32,
    league_rank: u32,
    points: u32,
) -> Value {
    let (wins, losses, ot) = record;
    json!({
        "team": {"id": id, "name": name},
        "leagueRecord": {"wins": wins, "losses": losses, "ot": ot, "type": "league"},
        "divisionRank": division_rank.to_string(),
        "conferenceRank": conference_rank.to_string(),
        "leagueRank": league_rank.to_string(),
        "wildCardRank": "0",
        "gamesPlayed": wins + losses + ot,
        "points": points
    })
}

/// `standings` payload with Atlantic, Metropolitan and Central blocks.
/// The Pacific division is deliberately absent.
pub fn standings_json() -> Value {
    json!({
        "records": [
            {
                "standingsType": "regularSeason",
                "division": {"id": 17, "name": "Atlantic"},
                "conference": {"id": 6, "name": "Eastern"},
                "teamRecords": [
                    team_record(6, "Boston Bruins", (49, 24, 9), 2, 2, 3, 107),
                    team_record(14, "Tampa Bay Lightning", (62, 16, 4), 1, 1, 1, 128),
                    team_record(10, "Toronto Maple Leafs", (46, 28, 8), 3, 5, 8, 100)
                ]
            },
            {
                "standingsType": "regularSeason",
                "division": {"id": 18, "name": "Metropolitan"},
                "conference": {"id": 6, "name": "Eastern"},
                "teamRecords": [
                    team_record(15, "Washington Capitals", (48, 26, 8), 1, 3, 5, 104),
                    team_record(2, "New York Islanders", (48, 27, 7), 2, 4, 6, 103)
                ]
            },
            {
                "standingsType": "regularSeason",
                "division": {"id": 16, "name": "Central"},
                "conference": {"id": 5, "name": "Western"},
                "teamRecords": [
                    team_record(52, "Winnipeg Jets", (47, 30, 5), 2, 2, 9, 99),
                    team_record(18, "Nashville Predators", (47, 29, 6), 1, 1, 7, 100)
                ]
            }
        ]
    })
}

fn wildcard_record(id: u32, name: &str, rank: u32) -> Value {
    json!({
        "team": {"id": id, "name": name},
        "leagueRecord": {"wins": 44, "losses": 30, "ot": 8},
        "wildCardRank": rank.to_string(),
        "gamesPlayed": 82,
        "points": 96
    })
}

/// `standings/wildCard` payload. The Western block comes first.
pub fn wildcard_json() -> Value {
    json!({
        "records": [
            {
                "standingsType": "wildCard",
                "conference": {"id": 5, "name": "Western"},
                "teamRecords": [
                    wildcard_record(25, "Dallas Stars", 1),
                    wildcard_record(21, "Colorado Avalanche", 2),
                    wildcard_record(16, "Chicago Blackhawks", 3)
                ]
            },
            {
                "standingsType": "wildCard",
                "conference": {"id": 6, "name": "Eastern"},
                "teamRecords": [
                    wildcard_record(12, "Carolina Hurricanes", 1),
                    wildcard_record(8, "Montréal Canadiens", 2),
                    wildcard_record(29, "Columbus Blue Jackets", 3)
                ]
            }
        ]
    })
}

pub fn team_json(id: u32, name: &str, venue: &str, conference: &str, division: &str) -> Value {
    json!({
        "teams": [{
            "id": id,
            "name": name,
            "venue": {"name": venue},
            "conference": {"name": conference},
            "division": {"name": division},
            "active": true
        }]
    })
}

pub fn roster_json(players: &[(u32, &str, &str)]) -> Value {
    let roster: Vec<Value> = players
        .iter()
        .map(|(id, name, number)| {
            json!({
                "person": {"id": id, "fullName": name},
                "jerseyNumber": number,
                "position": {"code": "C", "name": "Center", "type": "Forward", "abbreviation": "C"}
            })
        })
        .collect();
    json!({"roster": roster})
}

/// Bulk directory with two pros, one player with zero pro years and one
/// with none recorded.
pub fn player_directory_json() -> Value {
    json!({
        "data": [
            {"id": 8470638, "prName": "Patrice Bergeron", "yearsPro": 15},
            {"id": 8473419, "prName": "Brad Marchand", "yearsPro": 10},
            {"id": 8480001, "prName": "Unsigned Prospect", "yearsPro": 0},
            {"id": 8480002, "prName": "Draft Pick", "yearsPro": null}
        ],
        "total": 4
    })
}

fn leader_row(name: &str, teams: &str, points: u32, goals: u32) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("playerName".to_string(), json!(name));
    row.insert("playerTeamsPlayedFor".to_string(), json!(teams));
    row.insert("points".to_string(), json!(points));
    row.insert("goals".to_string(), json!(goals));
    row
}

/// Skater summary rows in upstream order: ascending by points.
pub fn skater_rows() -> Vec<Map<String, Value>> {
    vec![
        leader_row("Brad Marchand", "BOS", 100, 36),
        leader_row("Patrick Kane", "CHI", 110, 44),
        leader_row("Connor McDavid", "EDM", 116, 41),
        leader_row("Nikita Kucherov", "TBL", 128, 41),
    ]
}

/// Team summary rows in upstream order: descending by points.
pub fn team_rows() -> Vec<Map<String, Value>> {
    [
        ("Tampa Bay Lightning", 128),
        ("Calgary Flames", 107),
        ("Boston Bruins", 107),
    ]
    .into_iter()
    .map(|(name, points)| {
        let mut row = Map::new();
        row.insert("teamFullName".to_string(), json!(name));
        row.insert("points".to_string(), json!(points));
        row
    })
    .collect()
}

/// Config pointing every host at a mock server.
pub fn test_config(server_uri: &str) -> Config {
    Config {
        api_base_url: format!("{server_uri}/api/v1/"),
        stats_base_url: format!("{server_uri}/stats/rest/"),
        records_base_url: format!("{server_uri}/records/"),
        http_timeout_seconds: 5,
        ..Config::default()
    }
}
