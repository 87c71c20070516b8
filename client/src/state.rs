use common::games::tictactoe::{Difficulty, GameMode, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark(Position),
    Reset,
    ChangeMode(GameMode),
    Help,
    Quit,
}

impl ClientCommand {
    /// Parses one line typed by the player. `current_difficulty` is used for
    /// `mode bot` without an explicit tier.
    pub fn parse(line: &str, current_difficulty: Difficulty) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err("Empty command".to_string()),
            ["reset" | "r"] => Ok(ClientCommand::Reset),
            ["help" | "h" | "?"] => Ok(ClientCommand::Help),
            ["quit" | "q" | "exit"] => Ok(ClientCommand::Quit),
            ["mode", "friend"] => Ok(ClientCommand::ChangeMode(GameMode::Friend)),
            ["mode", "bot"] => Ok(ClientCommand::ChangeMode(GameMode::Bot(current_difficulty))),
            ["mode", "bot", name] => Difficulty::from_name(name)
                .map(|difficulty| ClientCommand::ChangeMode(GameMode::Bot(difficulty)))
                .ok_or_else(|| format!("Unknown difficulty: {}", name)),
            ["mode", ..] => Err("Usage: mode friend | mode bot [beginner|moderate|advanced]".to_string()),
            [cell] => {
                let number: usize = cell
                    .parse()
                    .map_err(|_| format!("Unknown command: {}", cell))?;
                Position::from_cell_number(number)
                    .map(ClientCommand::PlaceMark)
                    .ok_or_else(|| "Cell number must be between 1 and 9".to_string())
            }
            [row, col] => {
                let row: usize = row.parse().map_err(|_| format!("Invalid row: {}", row))?;
                let col: usize = col.parse().map_err(|_| format!("Invalid column: {}", col))?;
                Ok(ClientCommand::PlaceMark(Position::new(row, col)))
            }
            _ => Err(format!("Unknown command: {}", line.trim())),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (cells numbered left to right, top to bottom)
  <row> <col>         place your mark by coordinates (0-2)
  reset               start a new game in the current mode
  mode friend         play with a friend on this terminal
  mode bot [level]    play against the bot (beginner, moderate, advanced)
  help                show this text
  quit                leave the game";
