use std::sync::Arc;
use thiserror::Error;

use crate::config::GameConfig;
use crate::game::{
    dice::{DiceRoller, RandomDiceRoller},
    repository::MatchRepository,
    GameService,
};
use crate::player::{repository::PlayerRepository, PlayerService};
use crate::stats::StatsService;

/// Shared application state containing all services wired to the same stores
#[derive(Clone)]
pub struct AppState {
    pub player_service: Arc<PlayerService>,
    pub game_service: Arc<GameService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        config: GameConfig,
    ) -> Self {
        let dice = Arc::new(RandomDiceRoller::new(config.max_roll));
        Self::with_dice(player_repository, match_repository, dice, config)
    }

    /// Same as `new` but with an explicit dice roller, used to script outcomes
    pub fn with_dice(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        dice: Arc<dyn DiceRoller>,
        config: GameConfig,
    ) -> Self {
        let player_service = Arc::new(PlayerService::new(
            Arc::clone(&player_repository),
            Arc::clone(&match_repository),
        ));
        let game_service = Arc::new(GameService::new(
            Arc::clone(&player_service),
            match_repository,
            dice,
            config.win_threshold,
        ));
        let stats_service = Arc::new(StatsService::new(player_repository));

        Self {
            player_service,
            game_service,
            stats_service,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AppError {
    #[error("Player list is empty")]
    EmptyCollection,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Player {0} has no matches")]
    NoMatchesForPlayer(String),

    #[error("Invalid player id: {0}")]
    InvalidPlayerId(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
