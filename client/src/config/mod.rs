mod config;
mod tictactoe_lobby_config;

pub use config::{get_config_manager, load_config};
pub use tictactoe_lobby_config::ModeKind;
