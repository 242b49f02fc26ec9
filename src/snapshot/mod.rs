//! Aggregate views built from several client calls.
//!
//! Snapshots are plain data: constructing one performs every request up
//! front, and nothing is refreshed afterwards.

mod league;
mod player;
mod team;

pub use league::LeagueSnapshot;
pub use player::PlayerSnapshot;
pub use team::TeamSnapshot;
