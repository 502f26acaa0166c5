use std::time::Duration;

use crate::constants::DEFAULT_TICK_MS;

/// When a lock ends the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum GameOverRule {
    /// The newly spawned piece overlaps the stack.
    SpawnCollision,
    /// Any cell of the top row is filled after the lock, or the spawn overlaps.
    TopRow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOptions {
    pub tick_interval: Duration,
    pub game_over_rule: GameOverRule,
    pub hard_drop_enabled: bool,
    /// Seed for piece selection; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            game_over_rule: GameOverRule::SpawnCollision,
            hard_drop_enabled: false,
            seed: None,
        }
    }
}
