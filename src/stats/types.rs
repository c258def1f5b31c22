use serde::{Deserialize, Serialize};

/// Average success rate across all players
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalWinRateResponse {
    pub success_rate: u8,
}
