use serde::{Deserialize, Serialize};

/// Name given to players registered without a usable name
pub const ANONYMOUS_NAME: &str = "Anónimo";

/// Stored player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String,       // Numeric string, assigned in increasing order
    pub name: String,     // Already sanitized
    pub success_rate: u8, // Truncated win percentage, 0..=100
}

impl PlayerModel {
    /// Creates a player with no matches played yet
    pub fn new(id: String, name: Option<&str>) -> Self {
        Self {
            id,
            name: sanitize_player_name(name),
            success_rate: 0,
        }
    }

    pub fn rename(&mut self, name: Option<&str>) {
        self.name = sanitize_player_name(name);
    }
}

/// Strips whitespace and digits from a player name.
///
/// Missing or blank input, or input that is nothing but whitespace and
/// digits, becomes [`ANONYMOUS_NAME`]. Any other character is kept; restricting
/// names to letters is the caller's validation concern.
pub fn sanitize_player_name(input: Option<&str>) -> String {
    let filtered: String = input
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
        .collect();

    if filtered.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        filtered
    }
}
