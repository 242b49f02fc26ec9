//! Response shapers: turn upstream payloads into the tables and lists
//! callers consume.

pub mod leaders;
pub mod schedule;
pub mod scores;
pub mod standings;

pub use leaders::{LeaderEntry, TeamLeaderEntry, shape_leaders, shape_team_leaders};
pub use schedule::{ScheduleBuckets, ScheduleEntry, TeamSide, shape_schedule};
pub use scores::{GameScore, ScoreStatus, attach_linescore, shape_scores};
pub use standings::{
    Conference, RankedTeam, Standings, TeamRecordSummary, WildcardStandings, shape_standings,
    shape_team_records, shape_wildcard,
};
