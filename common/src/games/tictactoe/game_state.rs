use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{GameMode, GameOutcome, Mark, MoveError, Position, WinningLine};

/// Ticket for a pending bot move, valid only within the epoch it was
/// issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTurn {
    pub epoch: u64,
    pub mark: Mark,
}

/// Owns the single live board and the turn order for one game.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    mode: GameMode,
    current_mark: Mark,
    last_move: Option<Position>,
    epoch: u64,
}

impl GameController {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
            last_move: None,
            epoch: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode.bot_mark() == Some(self.current_mark)
    }

    /// Human move for the side to move.
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(MoveError::GameOver(outcome));
        }

        if self.is_bot_turn() {
            return Err(MoveError::NotYourTurn);
        }

        self.apply_move(row, col)
    }

    pub fn bot_turn(&self) -> Option<BotTurn> {
        if !self.is_bot_turn() || self.outcome().is_over() {
            return None;
        }
        Some(BotTurn {
            epoch: self.epoch,
            mark: self.current_mark,
        })
    }

    /// Plays the ticket's move. A ticket from an earlier epoch, or one that
    /// no longer matches the side to move, is discarded with `Ok(None)`.
    pub fn play_bot_turn(
        &mut self,
        turn: BotTurn,
        rng: &mut SessionRng,
    ) -> Result<Option<Position>, MoveError> {
        if turn.epoch != self.epoch {
            log!(
                "Discarding stale bot turn from epoch {} (current epoch {})",
                turn.epoch,
                self.epoch
            );
            return Ok(None);
        }

        let Some(difficulty) = self.mode.difficulty() else {
            return Ok(None);
        };

        if self.bot_turn() != Some(turn) {
            return Ok(None);
        }

        let input = BotInput::new(self.board, turn.mark);
        let Some(pos) = calculate_move(difficulty, input, rng) else {
            return Ok(None);
        };

        self.apply_move(pos.row, pos.col)?;
        log!("{} bot played {} as {}", difficulty, pos, turn.mark);
        Ok(Some(pos))
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.last_move = None;
        self.epoch += 1;
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.board.place(row, col, self.current_mark)?;
        self.last_move = Some(Position::new(row, col));

        if !self.outcome().is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
