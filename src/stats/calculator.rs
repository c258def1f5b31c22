//! Win-percentage arithmetic over matches and players.
//!
//! All percentages are integers in `0..=100`, truncated toward zero.

use crate::{game::MatchModel, player::PlayerModel, shared::AppError};

/// Which end of the ranking to select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingDirection {
    Best,
    Worst,
}

/// `floor(100 * wins / matches)`, or 0 when the player has no matches
pub fn player_success_rate(matches: &[MatchModel]) -> u8 {
    if matches.is_empty() {
        return 0;
    }

    let wins: usize = matches.iter().map(|m| usize::from(m.wins)).sum();
    ((wins * 100) / matches.len()) as u8
}

/// Average of the players' stored (already truncated) percentages, or 0 for
/// no players
pub fn global_win_rate(players: &[PlayerModel]) -> u8 {
    if players.is_empty() {
        return 0;
    }

    let total: usize = players.iter().map(|p| usize::from(p.success_rate)).sum();
    (total / players.len()) as u8
}

/// Every player tied at the best or worst success rate, in input order
pub fn select_extremal_players(
    players: &[PlayerModel],
    direction: RankingDirection,
) -> Result<Vec<PlayerModel>, AppError> {
    if players.is_empty() {
        return Err(AppError::EmptyCollection);
    }

    let mut extremal = match direction {
        RankingDirection::Best => 0,
        RankingDirection::Worst => 100,
    };
    let mut selected = Vec::new();

    for player in players {
        let rate = player.success_rate;
        let improves = match direction {
            RankingDirection::Best => rate > extremal,
            RankingDirection::Worst => rate < extremal,
        };

        if improves {
            selected.clear();
            extremal = rate;
        }
        if rate == extremal {
            selected.push(player.clone());
        }
    }

    Ok(selected)
}
