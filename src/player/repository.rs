use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::PlayerModel;
use crate::shared::AppError;

/// Trait for player store operations
#[async_trait]
pub trait PlayerRepository {
    /// Inserts or replaces the player with the same id
    async fn save(&self, player: &PlayerModel) -> Result<PlayerModel, AppError>;
    async fn find_by_id(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    async fn find_all(&self) -> Result<Vec<PlayerModel>, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
///
/// Data is lost when the process exits.
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, PlayerModel>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<PlayerModel>) -> Self {
        let player_map = players
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect();

        Self {
            players: RwLock::new(player_map),
        }
    }

    /// Returns the current number of players in the repository
    #[cfg(test)]
    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn save(&self, player: &PlayerModel) -> Result<PlayerModel, AppError> {
        debug!(player_id = %player.id, name = %player.name, success_rate = player.success_rate, "Saving player in memory");

        let mut players = self.players.write().await;
        players.insert(player.id.clone(), player.clone());

        Ok(player.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        debug!(player_id = %player_id, "Fetching player from memory");

        let players = self.players.read().await;
        let player = players.get(player_id).cloned();

        match &player {
            Some(p) => debug!(player_id = %player_id, name = %p.name, "Player found in memory"),
            None => debug!(player_id = %player_id, "Player not found in memory"),
        }

        Ok(player)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let mut player_list: Vec<PlayerModel> = players.values().cloned().collect();

        // Registration order; ids that are not numbers sort last
        player_list.sort_by(|a, b| {
            let key = |p: &PlayerModel| (p.id.parse::<u64>().unwrap_or(u64::MAX), p.id.clone());
            key(a).cmp(&key(b))
        });

        debug!(player_count = player_list.len(), "Players listed from memory");
        Ok(player_list)
    }
}
