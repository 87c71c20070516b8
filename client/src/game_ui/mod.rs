pub mod tictactoe;

pub use tictactoe::TicTacToeGameUi;
