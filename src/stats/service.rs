use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    calculator::{self, RankingDirection},
    types::GlobalWinRateResponse,
};
use crate::{
    player::{repository::PlayerRepository, PlayerResponse},
    shared::AppError,
};

/// Read-only ranking queries over all stored players
pub struct StatsService {
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(player_repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { player_repository }
    }

    #[instrument(skip(self))]
    pub async fn global_win_rate(&self) -> Result<GlobalWinRateResponse, AppError> {
        let players = self.player_repository.find_all().await?;
        let success_rate = calculator::global_win_rate(&players);

        info!(player_count = players.len(), success_rate, "Global win rate computed");
        Ok(GlobalWinRateResponse { success_rate })
    }

    pub async fn best_players(&self) -> Result<Vec<PlayerResponse>, AppError> {
        self.ranking(RankingDirection::Best).await
    }

    pub async fn worst_players(&self) -> Result<Vec<PlayerResponse>, AppError> {
        self.ranking(RankingDirection::Worst).await
    }

    #[instrument(skip(self))]
    async fn ranking(&self, direction: RankingDirection) -> Result<Vec<PlayerResponse>, AppError> {
        let players = self.player_repository.find_all().await?;

        let selected = calculator::select_extremal_players(&players, direction).map_err(|e| {
            warn!(?direction, error = %e, "Ranking requested with no players");
            e
        })?;

        info!(?direction, selected = selected.len(), "Ranking computed");
        Ok(selected.into_iter().map(PlayerResponse::from).collect())
    }
}
