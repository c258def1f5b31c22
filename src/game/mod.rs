// Public API
pub use models::MatchModel;
pub use service::GameService;
pub use types::MatchResponse;

// Internal modules
pub mod dice;
pub mod models;
pub mod repository;
mod service;
pub mod types;
