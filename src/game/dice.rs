use rand::Rng;

/// Source of dice draws for a match
pub trait DiceRoller: Send + Sync {
    fn roll(&self) -> u8;
}

/// Uniform draw over the inclusive range `[1, max_roll]`.
///
/// The default bound of 12 stands in for two six-sided dice but keeps 1 as a
/// possible outcome, which the win threshold of 7 is calibrated against.
pub struct RandomDiceRoller {
    max_roll: u8,
}

impl RandomDiceRoller {
    pub fn new(max_roll: u8) -> Self {
        Self {
            max_roll: max_roll.max(1),
        }
    }
}

impl Default for RandomDiceRoller {
    fn default() -> Self {
        Self::new(12)
    }
}

impl DiceRoller for RandomDiceRoller {
    fn roll(&self) -> u8 {
        rand::rng().random_range(1..=self.max_roll)
    }
}

/// Hands out a fixed sequence of draws, repeating the last one when exhausted
#[cfg(test)]
pub struct ScriptedDiceRoller {
    rolls: Vec<u8>,
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedDiceRoller {
    pub fn new(rolls: Vec<u8>) -> Self {
        Self {
            rolls,
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl DiceRoller for ScriptedDiceRoller {
    fn roll(&self) -> u8 {
        let index = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.rolls[index.min(self.rolls.len() - 1)]
    }
}
