//! Player name index built from the bulk player directory

use std::collections::HashMap;

use crate::data_fetcher::models::PlayerDirectoryResponse;
use crate::error::AppError;

/// Lower-cased player name to player ID, built from the bulk directory.
///
/// Only players with at least one professional year are indexed.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    ids: HashMap<String, u32>,
}

impl PlayerIndex {
    pub fn from_directory(directory: &PlayerDirectoryResponse) -> Self {
        let ids = directory
            .data
            .iter()
            .filter(|entry| entry.years_pro.is_some_and(|years| years > 0))
            .filter_map(|entry| {
                let name = entry.pr_name.as_deref()?.trim();
                (!name.is_empty()).then(|| (name.to_lowercase(), entry.id))
            })
            .collect();
        PlayerIndex { ids }
    }

    pub fn resolve(&self, player: &str) -> Result<u32, AppError> {
        self.ids
            .get(&player.trim().to_lowercase())
            .copied()
            .ok_or_else(|| AppError::player_not_found(player))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::player_directory_json;

    fn index() -> PlayerIndex {
        let directory: PlayerDirectoryResponse =
            serde_json::from_value(player_directory_json()).unwrap();
        PlayerIndex::from_directory(&directory)
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let index = index();
        assert_eq!(index.resolve("Patrice Bergeron").unwrap(), 8470638);
        assert_eq!(index.resolve("patrice bergeron").unwrap(), 8470638);
        assert_eq!(index.resolve("  PATRICE BERGERON ").unwrap(), 8470638);
    }

    #[test]
    fn test_players_without_pro_years_are_skipped() {
        let index = index();
        assert!(index.resolve("Unsigned Prospect").is_err());
        assert!(index.resolve("Draft Pick").is_err());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_player() {
        let err = index().resolve("Nobody Atall").unwrap_err();
        assert!(matches!(err, AppError::PlayerNotFound { ref player } if player == "Nobody Atall"));
    }
}
