use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::MatchModel;

pub const WIN_MESSAGE: &str = "You won :D";
pub const LOSS_MESSAGE: &str = "You lost :V";

/// Outward view of a played match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub id: String,
    pub played_on: NaiveDate, // Serialized as YYYY-MM-DD
    pub message: String,
}

impl From<&MatchModel> for MatchResponse {
    fn from(game_match: &MatchModel) -> Self {
        let message = if game_match.is_win() {
            WIN_MESSAGE
        } else {
            LOSS_MESSAGE
        };

        Self {
            id: game_match.id.clone(),
            played_on: game_match.played_on,
            message: message.to_string(),
        }
    }
}
