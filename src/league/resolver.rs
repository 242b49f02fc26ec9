use super::{LeagueData, league_data};
use crate::error::AppError;
use tracing::debug;

impl LeagueData {
    /// Maps a team alias (city, nickname or full name) to its numeric ID.
    ///
    /// Lookup is case-insensitive. An alias that is present but carries no
    /// usable ID (`null` or `0`) means the league data is corrupt and yields
    /// `ResolutionError` rather than a silent zero.
    pub fn team_id(&self, team: &str) -> Result<u32, AppError> {
        match self.alias(team.trim()) {
            None => Err(AppError::unknown_team(team)),
            Some(None) | Some(Some(0)) => Err(AppError::resolution_error(team)),
            Some(Some(id)) => {
                debug!("Resolved team '{team}' to {id}");
                Ok(id)
            }
        }
    }
}

/// Resolves a team alias against the process-wide league data.
pub fn resolve_team(team: &str) -> Result<u32, AppError> {
    league_data()?.team_id(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrupt_data() -> LeagueData {
        LeagueData::from_json(
            r#"{
                "team_names_and_cities": {"boston": 6, "hartford": null, "quebec": 0},
                "full_team_names": {"Boston Bruins": 6},
                "standings_schema": {"conference": [], "division": []},
                "stat_keys": {"skaters": [], "goalies": []}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_team_is_case_insensitive() {
        for alias in ["boston", "Boston", "BOSTON", "bruins", "Boston Bruins", " boston "] {
            assert_eq!(resolve_team(alias).unwrap(), 6, "alias {alias}");
        }
    }

    #[test]
    fn test_resolve_team_is_stable_across_calls() {
        let data = league_data().unwrap();
        for team in data.teams() {
            for alias in &team.aliases {
                let first = resolve_team(alias).unwrap();
                let second = resolve_team(&alias.to_uppercase()).unwrap();
                assert_eq!(first, team.id);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_unknown_team() {
        let result = resolve_team("springfield");
        assert!(matches!(result, Err(AppError::UnknownTeam { ref team }) if team == "springfield"));
        assert!(matches!(resolve_team(""), Err(AppError::UnknownTeam { .. })));
    }

    #[test]
    fn test_alias_without_id_is_a_resolution_error() {
        let data = corrupt_data();
        assert_eq!(data.team_id("boston").unwrap(), 6);
        assert!(matches!(
            data.team_id("hartford"),
            Err(AppError::ResolutionError { .. })
        ));
        assert!(matches!(
            data.team_id("Quebec"),
            Err(AppError::ResolutionError { .. })
        ));
    }
}
