pub mod calculator;
mod service;
mod types;

pub use calculator::RankingDirection;
pub use service::StatsService;
pub use types::GlobalWinRateResponse;
