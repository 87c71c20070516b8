use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps keypad-style cell numbers 1..=9 (row-major) to a position.
    pub fn from_cell_number(number: usize) -> Option<Self> {
        if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&number) {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(mark) => write!(f, "{} wins!", mark),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[BOARD_SIZE - 1]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Moderate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Moderate,
        Difficulty::Advanced,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "moderate" => Some(Difficulty::Moderate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Moderate => write!(f, "Moderate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Friend,
    Bot(Difficulty),
}

impl GameMode {
    /// The human always opens as X against the bot.
    pub const BOT_MARK: Mark = Mark::O;

    pub fn bot_mark(&self) -> Option<Mark> {
        match self {
            GameMode::Friend => None,
            GameMode::Bot(_) => Some(Self::BOT_MARK),
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::Friend => None,
            GameMode::Bot(difficulty) => Some(*difficulty),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Friend => write!(f, "Play with Friend"),
            GameMode::Bot(difficulty) => write!(f, "Play with Bot ({})", difficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize },
    CellOccupied { row: usize, col: usize, mark: Mark },
    EmptyMark,
    NotYourTurn,
    GameOver(GameOutcome),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            MoveError::CellOccupied { row, col, mark } => {
                write!(f, "Cell ({}, {}) is already marked with {}", row, col, mark)
            }
            MoveError::EmptyMark => write!(f, "Cannot place an empty mark"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::GameOver(outcome) => write!(f, "Game is already over: {}", outcome),
        }
    }
}

impl std::error::Error for MoveError {}
