use common::games::GameBroadcaster;
use common::games::tictactoe::GameStateUpdate;

use crate::game_ui::TicTacToeGameUi;

/// Redraws the board on stdout for every state update.
#[derive(Clone, Default)]
pub struct TerminalBroadcaster;

impl TerminalBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        println!("\n{}", TicTacToeGameUi::render_game(&state));
    }
}
