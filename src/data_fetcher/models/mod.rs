pub mod common;
pub mod leaders;
pub mod players;
pub mod schedule;
pub mod season;
pub mod standings;
pub mod teams;

pub use common::{NamedRef, Position};
pub use leaders::{LeaderQuery, LeadersResponse, PlayerType, SeasonType, TeamLeaderQuery};
pub use players::{
    DirectoryEntry, PeopleResponse, PlayerDirectoryResponse, PlayerInfo, PlayerSeasonStats,
    StatGroup, StatSplit, StatsResponse,
};
pub use schedule::{
    GameStatus, GameTeam, GameTeams, GamesOnDate, Linescore, ScheduleDate, ScheduleGame,
    ScheduleResponse,
};
pub use season::{Season, SeasonInfo, SeasonsResponse};
pub use standings::{DivisionRecord, LeagueRecord, StandingsResponse, TeamRecord};
pub use teams::{PersonRef, RosterEntry, RosterResponse, TeamInfo, TeamsResponse, Venue};
