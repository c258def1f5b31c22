// Library crate for the dice ranking service
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod player;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::GameConfig;
pub use game::{GameService, MatchModel, MatchResponse};
pub use player::{PlayerModel, PlayerResponse, PlayerService};
pub use shared::{AppError, AppState};
pub use stats::{GlobalWinRateResponse, RankingDirection, StatsService};
