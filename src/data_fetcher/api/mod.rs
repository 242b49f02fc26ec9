mod client;
pub mod fetch_utils;
pub mod http_client;
pub mod player_directory;
pub mod season;
pub mod urls;

pub use client::NhlClient;
pub use fetch_utils::{RetryPolicy, fetch, fetch_json};
pub use http_client::{HttpClients, create_http_client_with_timeout};
pub use player_directory::PlayerIndex;
pub use season::{
    CurrentSeason, current_season_from_response, local_current_season_at, local_season_start,
    season_for_date, today,
};
// Re-export URL utilities
pub use urls::*;
