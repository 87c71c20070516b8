use common::games::tictactoe::{GameOutcome, GameStateUpdate, Mark, Position, BOARD_SIZE};

/// Text rendering of one game state. Empty cells show their keypad number,
/// cells of a winning line are wrapped in brackets.
pub struct TicTacToeGameUi;

impl TicTacToeGameUi {
    const SEPARATOR: &'static str = "-----+-----+-----";

    pub fn render_game(state: &GameStateUpdate) -> String {
        let mut lines = vec![format!("Tic-Tac-Toe | {}", state.mode), String::new()];
        lines.extend(Self::render_board(state));
        lines.push(String::new());
        lines.push(Self::render_status(state));
        lines.join("\n")
    }

    fn render_board(state: &GameStateUpdate) -> Vec<String> {
        let mut lines = Vec::new();
        for row in 0..BOARD_SIZE {
            if row > 0 {
                lines.push(Self::SEPARATOR.to_string());
            }
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|col| Self::render_cell(state, Position::new(row, col)))
                .collect();
            lines.push(cells.join("|"));
        }
        lines
    }

    fn render_cell(state: &GameStateUpdate, position: Position) -> String {
        let mark = state
            .board
            .get(position.row, position.col)
            .unwrap_or(Mark::Empty);

        let symbol = match mark {
            Mark::Empty => (position.row * BOARD_SIZE + position.col + 1).to_string(),
            _ => mark.to_string(),
        };

        let highlighted = state
            .winning_line
            .is_some_and(|line| line.contains(position));

        if highlighted {
            format!(" [{}] ", symbol)
        } else {
            format!("  {}  ", symbol)
        }
    }

    fn render_status(state: &GameStateUpdate) -> String {
        match state.outcome {
            GameOutcome::Win(_) | GameOutcome::Draw => {
                format!("{} Type 'reset' to play again.", state.outcome)
            }
            GameOutcome::InProgress if state.bot_thinking => "Bot is thinking...".to_string(),
            GameOutcome::InProgress => format!("{} to move.", state.current_mark),
        }
    }
}
