use std::fmt;

use super::types::{Cells, GameOutcome, Mark, MoveError, Position, WinningLine, BOARD_SIZE};
use super::win_detector::{check_win_with_line, find_winner};

fn get_available_moves(cells: &Cells) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, marks) in cells.iter().enumerate() {
        for (col, &cell) in marks.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

fn is_valid_move(cells: &Cells, row: usize, col: usize) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    cells[row][col] == Mark::Empty
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|marks| marks.get(col)).copied()
    }

    /// Refuses out-of-range cells, occupied cells and `Mark::Empty`; the
    /// board is left untouched on any error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }

        if mark == Mark::Empty {
            return Err(MoveError::EmptyMark);
        }

        let existing = self.cells[row][col];
        if existing != Mark::Empty {
            return Err(MoveError::CellOccupied {
                row,
                col,
                mark: existing,
            });
        }

        self.cells[row][col] = mark;
        Ok(())
    }

    /// Clears a cell during search. Only the bot's make-and-undo loop uses it.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn winner(&self) -> Option<Mark> {
        find_winner(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(mark) = self.winner() {
            return GameOutcome::Win(mark);
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        get_available_moves(&self.cells)
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        is_valid_move(&self.cells, row, col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
