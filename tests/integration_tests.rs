use nhl_stats::data_fetcher::api::RetryPolicy;
use nhl_stats::data_fetcher::processors::Conference;
use nhl_stats::testing_utils::{
    TestDataBuilder, games_on_date_json, player_directory_json, roster_json, seasons_json,
    skater_rows, standings_json, team_json, team_schedule_json, team_rows, test_config,
    wildcard_json,
};
use nhl_stats::{
    AppError, LeaderQuery, LeagueSnapshot, NhlClient, PlayerSnapshot, Season, TeamLeaderQuery,
    TeamSnapshot,
};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NhlClient {
    NhlClient::new(&test_config(&server.uri()))
        .expect("client")
        .with_retry_policy(RetryPolicy::immediate())
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_current_season(server: &MockServer) {
    mount_json(
        server,
        "/api/v1/seasons/current",
        seasons_json("20182019", "2018-10-03"),
    )
    .await;
}

/// Test the full team snapshot for Boston
#[tokio::test]
async fn test_boston_team_snapshot() {
    let server = MockServer::start().await;
    mount_current_season(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/6"))
        .and(query_param("expand", "team.stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{
                "id": 6,
                "name": "Boston Bruins",
                "teamStats": [{"splits": [{"stat": {"wins": 49}}]}]
            }]
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/api/v1/teams/6",
        team_json(6, "Boston Bruins", "TD Garden", "Eastern", "Atlantic"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/6/roster"))
        .and(query_param("season", "20182019"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_json(&[
            (8470638, "Patrice Bergeron", "37"),
            (8473419, "Brad Marchand", "63"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/schedule"))
        .and(query_param("teamId", "6"))
        .and(query_param("season", "20182019"))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_schedule_json(vec![
            (
                "2018-09-18",
                vec![TestDataBuilder::game(2018010001, "Final").game_type("PR").scores(2, 5).build()],
            ),
            (
                "2018-10-03",
                vec![TestDataBuilder::game(2018020001, "Final")
                    .teams("Boston Bruins", "Washington Capitals")
                    .scores(0, 7)
                    .build()],
            ),
            (
                "2019-04-06",
                vec![TestDataBuilder::game(2018021271, "Preview")
                    .teams("Tampa Bay Lightning", "Boston Bruins")
                    .build()],
            ),
        ])))
        .mount(&server)
        .await;

    mount_json(&server, "/api/v1/standings", standings_json()).await;

    let client = client_for(&server);
    let team = TeamSnapshot::fetch(&client, "Boston").await.unwrap();

    assert_eq!(team.id, 6);
    assert_eq!(team.name, "Boston Bruins");
    assert_eq!(team.venue.as_deref(), Some("TD Garden"));
    assert_eq!(team.conference, "Eastern");
    assert_eq!(team.division, "Atlantic");
    assert!(!team.roster.is_empty());
    assert!(!team.stats.team_stats.is_empty());

    assert_eq!(team.schedule.played.len(), 1);
    assert_eq!(team.schedule.played[0].home.score, Some(7));
    assert_eq!(team.remaining_games().len(), 1);
    assert_eq!(team.remaining_games()[0].away.score, None);

    let record = team.record.expect("Boston has a record");
    assert_eq!(record.record.wins, 49);
    assert_eq!(record.points, 107);
    assert_eq!(team.division_rank, Some(2));
    assert_eq!(team.conference_rank, Some(2));
    assert_eq!(team.league_rank, Some(3));
}

/// Test that unknown team names fail before any request
#[tokio::test]
async fn test_unknown_team_snapshot() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = TeamSnapshot::fetch(&client, "Quebec Nordiques").await.unwrap_err();
    assert!(matches!(err, AppError::UnknownTeam { ref team } if team == "Quebec Nordiques"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

/// Test eastern wildcard ordering and conference validation
#[tokio::test]
async fn test_eastern_wildcard() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/v1/standings/wildCard", wildcard_json()).await;
    let client = client_for(&server);

    let conference: Conference = "eastern".parse().unwrap();
    let eastern = client.wildcard_standings(conference).await.unwrap();
    let teams: Vec<&str> = eastern.standings.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(
        teams,
        vec!["Carolina Hurricanes", "Montréal Canadiens", "Columbus Blue Jackets"]
    );

    let err = "atlantic".parse::<Conference>().unwrap_err();
    assert!(matches!(err, AppError::InvalidConference { .. }));
    assert!(err.is_invalid_input());
}

/// Test the league snapshot assembles every table
#[tokio::test]
async fn test_league_snapshot() {
    let server = MockServer::start().await;
    mount_current_season(&server).await;
    mount_json(&server, "/api/v1/standings", standings_json()).await;
    mount_json(&server, "/api/v1/standings/wildCard", wildcard_json()).await;
    mount_json(
        &server,
        "/api/v1/schedule",
        games_on_date_json(
            "2019-02-16",
            vec![
                TestDataBuilder::game(301, "Live").scores(1, 2).build(),
                TestDataBuilder::game(302, "Final").scores(3, 3).build(),
                TestDataBuilder::game(303, "Preview").build(),
            ],
        ),
    )
    .await;
    mount_json(
        &server,
        "/api/v1/game/301/linescore",
        json!({"currentPeriodOrdinal": "2nd", "currentPeriodTimeRemaining": "11:42"}),
    )
    .await;

    let client = client_for(&server);
    let league = LeagueSnapshot::fetch(&client).await.unwrap();

    assert_eq!(league.season, Season::new(2018));
    assert_eq!(league.standings.league[0].team, "Tampa Bay Lightning");
    assert_eq!(league.wildcard.len(), 2);
    assert_eq!(league.wildcard["Western"].standings[0].team, "Dallas Stars");
    assert!(league.todays_games.is_some());

    assert_eq!(league.live_scores.len(), 1);
    assert_eq!(league.live_scores[0].period.as_deref(), Some("2nd"));
    assert_eq!(league.recent_scores.len(), 1);
    assert_eq!(league.recent_scores[0].game_id, 302);
}

/// Test the player snapshot for an active player
#[tokio::test]
async fn test_player_snapshot() {
    let server = MockServer::start().await;
    mount_current_season(&server).await;
    mount_json(&server, "/records/player", player_directory_json()).await;
    mount_json(
        &server,
        "/api/v1/people/8470638",
        json!({"people": [{
            "id": 8470638,
            "fullName": "Patrice Bergeron",
            "active": true,
            "currentTeam": {"id": 6, "name": "Boston Bruins"},
            "primaryPosition": {"code": "C", "name": "Center"}
        }]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8470638/stats"))
        .and(query_param("stats", "statsSingleSeason"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": [{"splits": [{"season": "20182019", "stat": {"goals": 32, "points": 79}}]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8470638/stats"))
        .and(query_param("stats", "yearByYear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": [{"splits": [
                {"season": "20032004", "stat": {"goals": 16}},
                {"season": "20052006", "stat": {"goals": 31}}
            ]}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let player = PlayerSnapshot::fetch(&client, "Patrice Bergeron").await.unwrap();

    assert_eq!(player.id, 8470638);
    assert_eq!(player.info.full_name, "Patrice Bergeron");
    let season = player.season_stats.expect("active player has season stats");
    assert_eq!(season.current_team_id, Some(6));
    assert_eq!(season.split.stat.get("goals"), Some(&json!(32)));
    assert_eq!(player.career_stats.len(), 2);
    assert_eq!(player.career_stats[0].season.as_deref(), Some("20032004"));
}

/// Test skater leaders are reversed and truncated
#[tokio::test]
async fn test_skater_leaders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/rest/skaters"))
        .and(query_param("sort", "goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": skater_rows()})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = LeaderQuery::skaters("goals").season(Season::new(2018)).num_players(2);
    let leaders = client.skater_leaders(&query).await.unwrap();

    let names: Vec<&str> = leaders.iter().map(|l| l.player.as_str()).collect();
    assert_eq!(names, vec!["Nikita Kucherov", "Connor McDavid"]);
    assert_eq!(leaders[0].value, json!(41));
}

/// Test team leaders keep the descending upstream order
#[tokio::test]
async fn test_team_leaders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/rest/team"))
        .and(query_param("reportName", "teamsummary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": team_rows()})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = TeamLeaderQuery {
        season: Some(Season::new(2018)),
        ..TeamLeaderQuery::new("points")
    };
    let leaders = client.team_leaders(&query).await.unwrap();
    assert_eq!(leaders.len(), 3);
    assert_eq!(leaders[0].team, "Tampa Bay Lightning");
    assert_eq!(leaders[0].value, json!(128));
}

/// Test transient server errors are retried through the client
#[tokio::test]
async fn test_standings_recover_from_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/standings"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;
    mount_json(&server, "/api/v1/standings", standings_json()).await;

    let client = client_for(&server);
    let standings = client.standings().await.unwrap();
    assert_eq!(standings.league.len(), 7);
}

/// Test request failures carry status, URL and body
#[tokio::test]
async fn test_missing_team_reports_request_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Object not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.team_info(99).await.unwrap_err();
    match err {
        AppError::RequestFailed { status, url, body } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/v1/teams/99"));
            assert_eq!(body, "Object not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
