use common::config::Validate;
use common::games::tictactoe::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};

const MAX_BOT_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Friend,
    Bot,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeLobbyConfig {
    pub mode: ModeKind,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl TicTacToeLobbyConfig {
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeKind::Friend => GameMode::Friend,
            ModeKind::Bot => GameMode::Bot(self.difficulty),
        }
    }

    /// Remembers the last mode; friend mode keeps the previous difficulty.
    pub fn remember_mode(&mut self, mode: GameMode) {
        match mode {
            GameMode::Friend => self.mode = ModeKind::Friend,
            GameMode::Bot(difficulty) => {
                self.mode = ModeKind::Bot;
                self.difficulty = difficulty;
            }
        }
    }
}

impl Validate for TicTacToeLobbyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeLobbyConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::Bot,
            difficulty: Difficulty::Beginner,
            bot_delay_ms: 500,
        }
    }
}
