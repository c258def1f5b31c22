use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::MatchModel;
use crate::shared::AppError;

/// Trait for match store operations
#[async_trait]
pub trait MatchRepository {
    /// Stores a new match; matches are immutable so an existing id is rejected
    async fn save(&self, game_match: &MatchModel) -> Result<MatchModel, AppError>;
    async fn delete_all(&self, matches: &[MatchModel]) -> Result<(), AppError>;
    async fn find_by_player(&self, player_id: &str) -> Result<Vec<MatchModel>, AppError>;
}

/// In-memory implementation of MatchRepository for development and testing
///
/// Each match keeps the sequence number it was stored under, so matches from
/// the same day list in the order they were played.
pub struct InMemoryMatchRepository {
    store: RwLock<MatchStore>,
}

#[derive(Default)]
struct MatchStore {
    next_seq: u64,
    matches: HashMap<String, (u64, MatchModel)>,
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            store: RwLock::new(MatchStore::default()),
        }
    }

    /// Returns the number of stored matches across all players
    #[cfg(test)]
    pub async fn match_count(&self) -> usize {
        self.store.read().await.matches.len()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, game_match))]
    async fn save(&self, game_match: &MatchModel) -> Result<MatchModel, AppError> {
        debug!(match_id = %game_match.id, player_id = %game_match.player_id, "Saving match in memory");

        let mut store = self.store.write().await;
        if store.matches.contains_key(&game_match.id) {
            warn!(match_id = %game_match.id, "Match already exists in memory");
            return Err(AppError::DatabaseError("Match already exists".to_string()));
        }
        let seq = store.next_seq;
        store.next_seq += 1;
        store
            .matches
            .insert(game_match.id.clone(), (seq, game_match.clone()));

        Ok(game_match.clone())
    }

    #[instrument(skip(self, to_delete))]
    async fn delete_all(&self, to_delete: &[MatchModel]) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let before = store.matches.len();

        for game_match in to_delete {
            store.matches.remove(&game_match.id);
        }

        debug!(
            requested = to_delete.len(),
            removed = before - store.matches.len(),
            "Matches deleted from memory"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, player_id: &str) -> Result<Vec<MatchModel>, AppError> {
        let store = self.store.read().await;
        let mut ordered: Vec<&(u64, MatchModel)> = store
            .matches
            .values()
            .filter(|(_, m)| m.player_id == player_id)
            .collect();
        ordered.sort_by_key(|(seq, m)| (m.played_on, *seq));

        let player_matches: Vec<MatchModel> =
            ordered.into_iter().map(|(_, m)| m.clone()).collect();

        debug!(player_id = %player_id, match_count = player_matches.len(), "Matches fetched from memory");
        Ok(player_matches)
    }
}
