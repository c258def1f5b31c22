// Public API - what other modules can use
pub use models::{sanitize_player_name, PlayerModel, ANONYMOUS_NAME};
pub use generators::next_player_id;
pub use service::PlayerService;
pub use types::PlayerResponse;

// Internal modules
mod generators;
pub mod models;
pub mod repository;
mod service;
mod types;
