use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use nhl_stats::data_fetcher::models::Season;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NHL statistics from the command line
///
/// Fetches standings, scores, schedules, rosters, player stats and stat
/// leaders from the public NHL APIs and prints them as JSON.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Mirror log output to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Write logs to this file instead of the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current season and whether stats filtering is active.
    Season,

    /// List every franchise with its ID and accepted aliases.
    Teams,

    /// Show league standings.
    Standings {
        #[arg(long, value_enum, default_value_t = StandingsView::League)]
        view: StandingsView,
    },

    /// Show the wildcard race for a conference (eastern or western).
    Wildcard { conference: String },

    /// Show yesterday's final scores, or today's live scores with --live.
    Scores {
        #[arg(long)]
        live: bool,
    },

    /// Show everything about one team.
    Team { name: String },

    /// Show a team's roster.
    Roster {
        team: String,
        /// Season token such as 20182019. Defaults to the current season.
        #[arg(long)]
        season: Option<Season>,
    },

    /// Show a team's played and upcoming games.
    Schedule {
        team: String,
        #[arg(long)]
        season: Option<Season>,
    },

    /// Show a player's info and season stats.
    Player {
        name: String,
        /// Required for retired players.
        #[arg(long)]
        season: Option<Season>,
    },

    /// Show a player's year-by-year stats.
    Career { name: String },

    /// Show skater or goalie stat leaders.
    Leaders {
        /// skater or goalie
        player_type: String,
        /// Report column, e.g. points, goals, savePctg
        stat: String,
        #[arg(long)]
        season: Option<Season>,
        #[arg(long)]
        playoffs: bool,
        #[arg(short = 'n', long = "num", default_value_t = 10)]
        num_players: usize,
        /// Keep the report's ascending order.
        #[arg(long)]
        ascending: bool,
        /// Minimum time on ice in seconds.
        #[arg(long = "time-filter")]
        time_filter: Option<u32>,
    },

    /// Show team stat leaders.
    TeamLeaders {
        stat: String,
        #[arg(long)]
        season: Option<Season>,
        #[arg(long)]
        playoffs: bool,
        /// Show the lowest values first.
        #[arg(long)]
        ascending: bool,
    },

    /// Show or update the configuration file.
    Config {
        #[arg(long = "set-log-file", help_heading = "Configuration")]
        log_file_path: Option<String>,

        #[arg(long = "clear-log-file", help_heading = "Configuration")]
        clear_log_file: bool,

        /// remote or local
        #[arg(long = "season-source", help_heading = "Configuration")]
        season_source: Option<String>,

        #[arg(long = "timeout", help_heading = "Configuration")]
        http_timeout_seconds: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StandingsView {
    League,
    Conference,
    Division,
    Records,
}
