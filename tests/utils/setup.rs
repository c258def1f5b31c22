use std::sync::Arc;

use dice_ranking::{
    game::repository::InMemoryMatchRepository, player::repository::InMemoryPlayerRepository,
    AppState, GameConfig, PlayerResponse,
};

use super::mocks::MockDiceRoller;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const WINNING_ROLL: u8 = 2;
pub const LOSING_ROLL: u8 = 11;

pub struct TestSetup {
    pub state: AppState,
    pub dice: Arc<MockDiceRoller>,
    pub match_repository: Arc<InMemoryMatchRepository>,
    pub players: Vec<PlayerResponse>,
}

pub struct TestSetupBuilder {
    names: Vec<Option<String>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { names: vec![] }
    }

    pub fn with_players(mut self, names: Vec<&str>) -> Self {
        self.names = names.into_iter().map(|n| Some(n.to_string())).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["alice", "bob", "carol"])
    }

    pub async fn build(self) -> TestSetup {
        let dice = Arc::new(MockDiceRoller::new(WINNING_ROLL));
        let match_repository = Arc::new(InMemoryMatchRepository::new());

        let state = AppState::with_dice(
            Arc::new(InMemoryPlayerRepository::new()),
            match_repository.clone(),
            dice.clone(),
            GameConfig::default(),
        );

        let mut players = Vec::new();
        for name in &self.names {
            let player = state
                .player_service
                .create_player(name.as_deref())
                .await
                .unwrap();
            players.push(player);
        }

        TestSetup {
            state,
            dice,
            match_repository,
            players,
        }
    }
}

impl TestSetup {
    pub fn player_id(&self, index: usize) -> &str {
        &self.players[index].id
    }

    /// Plays one match per roll for the player, in order
    pub async fn play_rolls(&self, index: usize, rolls: &[u8]) {
        self.dice.queue(rolls);
        for _ in rolls {
            self.state
                .game_service
                .play_match(self.player_id(index))
                .await
                .unwrap();
        }
    }

    pub async fn play_record(&self, index: usize, wins: usize, losses: usize) {
        let mut rolls = vec![WINNING_ROLL; wins];
        rolls.extend(vec![LOSING_ROLL; losses]);
        self.play_rolls(index, &rolls).await;
    }
}
