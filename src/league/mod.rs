//! Static league data: team aliases, the franchise list, the standings
//! skeleton and the leaders report column orders.
//!
//! The document is compiled into the binary and parsed once per process.
//! Everything handed out is read-only.

use crate::data_fetcher::models::PlayerType;
use crate::error::AppError;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

mod resolver;

pub use resolver::resolve_team;

const EMBEDDED_LEAGUE_DATA: &str = include_str!("../../data/league.json");

static LEAGUE_DATA: OnceCell<LeagueData> = OnceCell::new();

/// One franchise: display name, numeric API ID and every alias that maps to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamIdentity {
    pub id: u32,
    pub name: String,
    pub aliases: Vec<String>,
}

/// Conference and division names the standings tables are seeded with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsSchema {
    pub conference: Vec<String>,
    pub division: Vec<String>,
}

/// Column orders of the skater and goalie summary reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatKeys {
    pub skaters: Vec<String>,
    pub goalies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawLeagueData {
    team_names_and_cities: HashMap<String, Option<u32>>,
    full_team_names: BTreeMap<String, u32>,
    standings_schema: StandingsSchema,
    stat_keys: StatKeys,
}

#[derive(Debug, Clone)]
pub struct LeagueData {
    aliases: HashMap<String, Option<u32>>,
    full_team_names: BTreeMap<String, u32>,
    standings_schema: StandingsSchema,
    stat_keys: StatKeys,
}

impl LeagueData {
    /// Parses a league data document.
    ///
    /// Alias keys are lower-cased; two aliases that collapse to the same key
    /// but point at different IDs are rejected.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let raw: RawLeagueData = serde_json::from_str(json)
            .map_err(|e| AppError::league_data_error(format!("invalid league data: {e}")))?;

        let mut aliases: HashMap<String, Option<u32>> =
            HashMap::with_capacity(raw.team_names_and_cities.len());
        for (alias, id) in raw.team_names_and_cities {
            let key = alias.trim().to_lowercase();
            match aliases.get(&key) {
                Some(existing) if *existing != id => {
                    return Err(AppError::league_data_error(format!(
                        "alias '{key}' maps to both {existing:?} and {id:?}"
                    )));
                }
                _ => {
                    aliases.insert(key, id);
                }
            }
        }

        debug!(
            "Loaded league data: {} aliases, {} teams",
            aliases.len(),
            raw.full_team_names.len()
        );

        Ok(LeagueData {
            aliases,
            full_team_names: raw.full_team_names,
            standings_schema: raw.standings_schema,
            stat_keys: raw.stat_keys,
        })
    }

    /// Raw alias lookup. `Some(None)` means the alias exists but has no usable ID.
    pub fn alias(&self, alias: &str) -> Option<Option<u32>> {
        self.aliases.get(&alias.to_lowercase()).copied()
    }

    /// Display names of every franchise, alphabetical.
    pub fn full_team_names(&self) -> impl Iterator<Item = &str> {
        self.full_team_names.keys().map(String::as_str)
    }

    /// Numeric ID for an exact display name.
    pub fn team_id_by_full_name(&self, name: &str) -> Option<u32> {
        self.full_team_names.get(name).copied()
    }

    /// One identity per franchise with its aliases sorted.
    pub fn teams(&self) -> Vec<TeamIdentity> {
        self.full_team_names
            .iter()
            .map(|(name, id)| {
                let mut aliases: Vec<String> = self
                    .aliases
                    .iter()
                    .filter(|(_, alias_id)| **alias_id == Some(*id))
                    .map(|(alias, _)| alias.clone())
                    .collect();
                aliases.sort();
                TeamIdentity {
                    id: *id,
                    name: name.clone(),
                    aliases,
                }
            })
            .collect()
    }

    pub fn standings_schema(&self) -> &StandingsSchema {
        &self.standings_schema
    }

    /// Expected column order of the summary report for a player type.
    pub fn stat_keys(&self, player_type: PlayerType) -> &[String] {
        match player_type {
            PlayerType::Skater => &self.stat_keys.skaters,
            PlayerType::Goalie => &self.stat_keys.goalies,
        }
    }
}

/// Process-wide league data, parsed from the embedded document on first use.
pub fn league_data() -> Result<&'static LeagueData, AppError> {
    LEAGUE_DATA.get_or_try_init(|| LeagueData::from_json(EMBEDDED_LEAGUE_DATA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_league_data_loads() {
        let data = league_data().unwrap();
        assert_eq!(data.full_team_names().count(), 31);
        assert_eq!(data.teams().len(), 31);
        assert_eq!(data.team_id_by_full_name("Boston Bruins"), Some(6));
    }

    #[test]
    fn test_every_team_has_an_alias() {
        let data = league_data().unwrap();
        for team in data.teams() {
            assert!(
                !team.aliases.is_empty(),
                "{} has no aliases",
                team.name
            );
            for alias in &team.aliases {
                assert_eq!(alias, &alias.to_lowercase());
            }
        }
    }

    #[test]
    fn test_aliases_are_lowercased_on_load() {
        let json = r#"{
            "team_names_and_cities": {"Boston": 6, "BRUINS": 6},
            "full_team_names": {"Boston Bruins": 6},
            "standings_schema": {"conference": ["Eastern"], "division": ["Atlantic"]},
            "stat_keys": {"skaters": [], "goalies": []}
        }"#;
        let data = LeagueData::from_json(json).unwrap();
        assert_eq!(data.alias("boston"), Some(Some(6)));
        assert_eq!(data.alias("bruins"), Some(Some(6)));
        assert_eq!(data.teams()[0].aliases, vec!["boston", "bruins"]);
    }

    #[test]
    fn test_conflicting_aliases_are_rejected() {
        let json = r#"{
            "team_names_and_cities": {"New York": 2, "new york": 3},
            "full_team_names": {},
            "standings_schema": {"conference": [], "division": []},
            "stat_keys": {"skaters": [], "goalies": []}
        }"#;
        let result = LeagueData::from_json(json);
        assert!(matches!(result, Err(AppError::LeagueData(_))));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            LeagueData::from_json("{\"team_names_and_cities\": []}"),
            Err(AppError::LeagueData(_))
        ));
    }

    #[test]
    fn test_standings_schema_and_stat_keys() {
        let data = league_data().unwrap();
        assert_eq!(data.standings_schema().conference, vec!["Eastern", "Western"]);
        assert_eq!(data.standings_schema().division.len(), 4);

        let skaters = data.stat_keys(PlayerType::Skater);
        assert!(skaters.iter().any(|k| k == "points"));
        assert!(skaters.iter().any(|k| k == "playerTeamsPlayedFor"));
        let goalies = data.stat_keys(PlayerType::Goalie);
        assert!(goalies.iter().any(|k| k == "savePctg"));
        assert!(goalies.iter().any(|k| k == "goalsAgainstAverage"));
    }
}
