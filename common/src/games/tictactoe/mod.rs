mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::{BotTurn, GameController};
pub use session::{
    DEFAULT_BOT_DELAY, GameStateUpdate, TicTacToeSession, TicTacToeSessionSettings,
};
pub use types::{
    BOARD_SIZE, Cells, Difficulty, GameMode, GameOutcome, Mark, MoveError, Position, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, find_winner};
