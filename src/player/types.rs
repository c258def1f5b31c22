use serde::{Deserialize, Serialize};

use super::models::PlayerModel;

/// Outward view of a player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub success_rate: u8,
}

impl From<PlayerModel> for PlayerResponse {
    fn from(player: PlayerModel) -> Self {
        Self {
            id: player.id,
            name: player.name,
            success_rate: player.success_rate,
        }
    }
}
