use std::collections::VecDeque;
use std::sync::Mutex;

use dice_ranking::game::dice::DiceRoller;

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Dice roller returning queued draws; falls back to a fixed draw when empty
pub struct MockDiceRoller {
    queued: Mutex<VecDeque<u8>>,
    fallback: u8,
}

impl MockDiceRoller {
    pub fn new(fallback: u8) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    /// Queues draws to be handed out in the given order
    pub fn queue(&self, rolls: &[u8]) {
        self.queued.lock().unwrap().extend(rolls.iter().copied());
    }
}

impl DiceRoller for MockDiceRoller {
    fn roll(&self) -> u8 {
        self.queued.lock().unwrap().pop_front().unwrap_or(self.fallback)
    }
}
