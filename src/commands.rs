use crate::cli::{Command, StandingsView};
use nhl_stats::config::{Config, SeasonSource};
use nhl_stats::data_fetcher::NhlClient;
use nhl_stats::data_fetcher::models::{
    LeaderQuery, PlayerType, Season, SeasonType, TeamLeaderQuery,
};
use nhl_stats::data_fetcher::processors::Conference;
use nhl_stats::error::AppError;
use nhl_stats::league::league_data;
use nhl_stats::snapshot::{PlayerSnapshot, TeamSnapshot};
use serde::Serialize;
use serde_json::json;
use tracing::info;

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn season_type(playoffs: bool) -> SeasonType {
    if playoffs {
        SeasonType::Playoffs
    } else {
        SeasonType::RegularSeason
    }
}

/// Runs one subcommand against the configured hosts and prints the result.
pub async fn run(command: Command, config: Config) -> Result<(), AppError> {
    if let Command::Config {
        log_file_path,
        clear_log_file,
        season_source,
        http_timeout_seconds,
    } = command
    {
        return handle_config_command(
            config,
            log_file_path,
            clear_log_file,
            season_source,
            http_timeout_seconds,
        )
        .await;
    }

    let client = NhlClient::new(&config)?;
    info!("Running {command:?}");

    match command {
        Command::Season => {
            let current = client.current_season().await?;
            print_json(&json!({
                "season": current.season,
                "regular_season_start": current.regular_season_start,
                "stats_filter_active": current.stats_filter_active(),
                "source": client.season_source().to_string(),
            }))
        }
        Command::Teams => print_json(&league_data()?.teams()),
        Command::Standings { view } => handle_standings(&client, view).await,
        Command::Wildcard { conference } => {
            let conference: Conference = conference.parse()?;
            print_json(&client.wildcard_standings(conference).await?)
        }
        Command::Scores { live } => {
            let scores = if live {
                client.live_scores().await?
            } else {
                client.recent_scores().await?
            };
            print_json(&scores)
        }
        Command::Team { name } => print_json(&TeamSnapshot::fetch(&client, &name).await?),
        Command::Roster { team, season } => {
            let team_id = client.resolve_team(&team)?;
            print_json(&client.team_roster(team_id, season).await?)
        }
        Command::Schedule { team, season } => {
            let team_id = client.resolve_team(&team)?;
            print_json(&client.team_schedule_buckets(team_id, season).await?)
        }
        Command::Player { name, season } => handle_player(&client, &name, season).await,
        Command::Career { name } => {
            let player_id = client.resolve_player(&name).await?;
            print_json(&client.player_career_stats(player_id).await?)
        }
        Command::Leaders {
            player_type,
            stat,
            season,
            playoffs,
            num_players,
            ascending,
            time_filter,
        } => {
            let player_type: PlayerType = player_type.parse()?;
            let query = LeaderQuery {
                season,
                season_type: season_type(playoffs),
                num_players,
                reverse: !ascending,
                time_filter,
                ..LeaderQuery::new(stat, player_type)
            };
            print_json(&client.leaders(&query).await?)
        }
        Command::TeamLeaders {
            stat,
            season,
            playoffs,
            ascending,
        } => {
            let query = TeamLeaderQuery {
                season,
                season_type: season_type(playoffs),
                reverse: ascending,
                ..TeamLeaderQuery::new(stat)
            };
            print_json(&client.team_leaders(&query).await?)
        }
        Command::Config { .. } => Ok(()),
    }
}

async fn handle_standings(client: &NhlClient, view: StandingsView) -> Result<(), AppError> {
    if view == StandingsView::Records {
        return print_json(&client.team_records().await?);
    }

    let standings = client.standings().await?;
    match view {
        StandingsView::League => print_json(&standings.league),
        StandingsView::Conference => print_json(&standings.conference),
        StandingsView::Division => print_json(&standings.division),
        StandingsView::Records => print_json(&standings.records),
    }
}

/// With an explicit season only that season's line is shown; otherwise the
/// full player snapshot.
async fn handle_player(
    client: &NhlClient,
    name: &str,
    season: Option<Season>,
) -> Result<(), AppError> {
    let player_id = client.resolve_player(name).await?;
    match season {
        Some(season) => print_json(&client.player_season_stats(player_id, Some(season)).await?),
        None => print_json(&PlayerSnapshot::fetch_by_id(client, player_id).await?),
    }
}

/// Applies configuration updates, or shows the configuration when none
/// are given.
async fn handle_config_command(
    mut config: Config,
    log_file_path: Option<String>,
    clear_log_file: bool,
    season_source: Option<String>,
    http_timeout_seconds: Option<u64>,
) -> Result<(), AppError> {
    let updating = log_file_path.is_some()
        || clear_log_file
        || season_source.is_some()
        || http_timeout_seconds.is_some();
    if !updating {
        return Config::display().await;
    }

    if let Some(path) = log_file_path {
        config.log_file_path = Some(path);
    } else if clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
    if let Some(source) = season_source {
        config.season_source = source.parse::<SeasonSource>()?;
    }
    if let Some(timeout) = http_timeout_seconds {
        config.http_timeout_seconds = timeout;
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
