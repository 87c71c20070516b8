mod config;
mod game_ui;
mod offline;
mod state;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, TicTacToeSession, TicTacToeSessionSettings};
use common::logger::{self, LogTarget};
use common::log;

use config::{ModeKind, get_config_manager, load_config};
use offline::{TerminalBroadcaster, run_tictactoe_game};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Friend,
    Bot,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Moderate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Moderate => Difficulty::Moderate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version = common::version::VERSION)]
struct Args {
    /// Play against a friend or the bot
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Bot strength
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the bot replies, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Config file path (defaults to a file next to the executable)
    #[arg(long)]
    config: Option<String>,

    /// Tag log lines with "Client"
    #[arg(long)]
    use_log_prefix: bool,

    /// Write log lines to stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    let target = if args.verbose { LogTarget::Stderr } else { LogTarget::Off };
    logger::init_logger(prefix, target);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = load_config(&config_manager)?;

    if let Some(mode) = args.mode {
        config.tictactoe.mode = match mode {
            ModeArg::Friend => ModeKind::Friend,
            ModeArg::Bot => ModeKind::Bot,
        };
    }
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty.into();
    }
    if let Some(delay) = args.bot_delay_ms {
        config.tictactoe.bot_delay_ms = delay;
    }
    config.validate()?;

    let settings = TicTacToeSessionSettings {
        mode: config.tictactoe.game_mode(),
        bot_delay: Duration::from_millis(config.tictactoe.bot_delay_ms),
    };
    let session = TicTacToeSession::new(
        settings,
        SessionRng::from_optional_seed(args.seed),
        TerminalBroadcaster::new(),
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let final_mode = run_tictactoe_game(&session, stdin, &mut std::io::stdout()).await?;

    config.tictactoe.remember_mode(final_mode);
    if let Err(e) = config_manager.set_config(&config) {
        log!("Failed to save config: {}", e);
        eprintln!("Failed to save config: {}", e);
    }

    Ok(())
}
