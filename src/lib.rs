//! Read-only NHL Statistics Client Library
//!
//! This library fetches standings, schedules, scores, team and player stats
//! and stat leaders from the public NHL APIs and reshapes them into plain
//! Rust structures.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_stats::config::Config;
//! use nhl_stats::data_fetcher::{Conference, LeaderQuery, NhlClient};
//! use nhl_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = NhlClient::new(&config)?;
//!
//!     let season = client.season().await?;
//!     println!("Season {season}");
//!
//!     let eastern = client.wildcard_standings(Conference::Eastern).await?;
//!     for entry in &eastern.standings {
//!         println!("{:>2} {}", entry.rank, entry.team);
//!     }
//!
//!     let leaders = client
//!         .skater_leaders(&LeaderQuery::skaters("points").num_players(5))
//!         .await?;
//!     for leader in &leaders {
//!         println!("{} ({}) {}", leader.player, leader.teams, leader.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod league;
pub mod snapshot;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{Config, SeasonSource};
pub use data_fetcher::NhlClient;
pub use data_fetcher::models::{LeaderQuery, PlayerType, Season, SeasonType, TeamLeaderQuery};
pub use error::AppError;
pub use league::resolve_team;
pub use snapshot::{LeagueSnapshot, PlayerSnapshot, TeamSnapshot};
