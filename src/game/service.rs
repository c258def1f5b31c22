use chrono::Local;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    dice::DiceRoller, models::MatchModel, repository::MatchRepository, types::MatchResponse,
};
use crate::{player::PlayerService, shared::AppError};

/// Service for playing matches and managing a player's match history
pub struct GameService {
    player_service: Arc<PlayerService>,
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
    dice: Arc<dyn DiceRoller>,
    win_threshold: u8,
}

impl GameService {
    pub fn new(
        player_service: Arc<PlayerService>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        dice: Arc<dyn DiceRoller>,
        win_threshold: u8,
    ) -> Self {
        Self {
            player_service,
            match_repository,
            dice,
            win_threshold,
        }
    }

    /// Rolls the dice once for the player, records the match dated today and
    /// refreshes the player's success rate
    #[instrument(skip(self))]
    pub async fn play_match(&self, player_id: &str) -> Result<MatchResponse, AppError> {
        let _guard = self.player_service.lock_player(player_id).await;
        let player = self.player_service.find_player(player_id).await?;

        let roll = self.dice.roll();
        let won = roll <= self.win_threshold;
        debug!(player_id = %player.id, roll, won, "Dice rolled");

        let game_match = MatchModel::new(player.id.clone(), Local::now().date_naive(), won);
        let saved = self.match_repository.save(&game_match).await?;

        let success_rate = self
            .player_service
            .refresh_success_rate_locked(&player.id)
            .await?;

        info!(
            player_id = %player.id,
            match_id = %saved.id,
            won,
            success_rate,
            "Match played"
        );
        Ok(MatchResponse::from(&saved))
    }

    /// Lists the player's matches; a player without matches is an error
    #[instrument(skip(self))]
    pub async fn list_matches(&self, player_id: &str) -> Result<Vec<MatchResponse>, AppError> {
        let player = self.player_service.find_player(player_id).await?;
        let matches = self.match_repository.find_by_player(&player.id).await?;

        if matches.is_empty() {
            warn!(player_id = %player.id, "Player has no matches to list");
            return Err(AppError::NoMatchesForPlayer(player.id));
        }

        Ok(matches.iter().map(MatchResponse::from).collect())
    }

    /// Deletes every match of the player and resets its success rate.
    /// Returns how many matches were removed. No match for the same player can
    /// be recorded while the deletion runs.
    #[instrument(skip(self))]
    pub async fn delete_matches(&self, player_id: &str) -> Result<usize, AppError> {
        let _guard = self.player_service.lock_player(player_id).await;
        let player = self.player_service.find_player(player_id).await?;
        let matches = self.match_repository.find_by_player(&player.id).await?;

        if matches.is_empty() {
            warn!(player_id = %player.id, "Player has no matches to delete");
            return Err(AppError::NoMatchesForPlayer(player.id));
        }

        self.match_repository.delete_all(&matches).await?;
        self.player_service
            .refresh_success_rate_locked(&player.id)
            .await?;

        info!(player_id = %player.id, deleted = matches.len(), "Player matches deleted");
        Ok(matches.len())
    }
}
