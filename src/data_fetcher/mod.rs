pub mod api;
pub mod models;
pub mod processors;

pub use api::NhlClient;
pub use models::{LeaderQuery, PlayerType, Season, SeasonType, TeamLeaderQuery};
pub use processors::{Conference, ScoreStatus};
