use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored record of a single dice match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchModel {
    pub id: String, // UUID v4 as string
    pub played_on: NaiveDate,
    pub wins: u8,   // 1 for a win, otherwise 0
    pub losses: u8, // 1 for a loss, otherwise 0
    pub player_id: String,
}

impl MatchModel {
    /// Creates a match with a generated ID; exactly one of `wins`/`losses` is set
    pub fn new(player_id: String, played_on: NaiveDate, won: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            played_on,
            wins: u8::from(won),
            losses: u8::from(!won),
            player_id,
        }
    }

    pub fn is_win(&self) -> bool {
        self.wins == 1
    }
}
