use tracing::{debug, warn};

const DEFAULT_MAX_ROLL: u8 = 12;
const DEFAULT_WIN_THRESHOLD: u8 = 7;
const DEFAULT_ROUNDS: u32 = 10;

/// Dice game settings, read from the environment with fixed defaults
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Upper bound of the inclusive draw `[1, max_roll]`
    pub max_roll: u8,
    /// A draw at or below this value is a win
    pub win_threshold: u8,
    /// Matches played per player by the demo binary
    pub rounds: u32,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a key lookup. Missing or unparsable
    /// values, and a `max_roll` of 0, fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_roll = parse_value(&lookup, "DICE_MAX_ROLL")
            .filter(|max: &u8| *max >= 1)
            .unwrap_or(DEFAULT_MAX_ROLL);
        let win_threshold =
            parse_value(&lookup, "DICE_WIN_THRESHOLD").unwrap_or(DEFAULT_WIN_THRESHOLD);
        let rounds = parse_value(&lookup, "DICE_ROUNDS").unwrap_or(DEFAULT_ROUNDS);

        debug!(max_roll, win_threshold, rounds, "Loaded game configuration");

        Self {
            max_roll,
            win_threshold,
            rounds,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_roll: DEFAULT_MAX_ROLL,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

fn parse_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value = %raw, "Ignoring invalid configuration value");
    }
    parsed
}
