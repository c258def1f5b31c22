use tracing::warn;

use super::models::PlayerModel;
use crate::shared::AppError;

/// Returns the id for the next registered player.
///
/// Ids are compared numerically, so `"10"` is greater than `"9"`. An empty
/// store starts at `"1"`.
pub fn next_player_id(existing: &[PlayerModel]) -> Result<String, AppError> {
    let mut max_id: u64 = 0;

    for player in existing {
        let id: u64 = player.id.parse().map_err(|_| {
            warn!(player_id = %player.id, "Stored player id is not numeric");
            AppError::InvalidPlayerId(player.id.clone())
        })?;
        max_id = max_id.max(id);
    }

    Ok((max_id + 1).to_string())
}
