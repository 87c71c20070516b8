use std::io::Write;

use common::games::GameBroadcaster;
use common::games::tictactoe::{GameMode, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::state::{ClientCommand, HELP_TEXT};

/// Feeds player commands from `input` into the session until `quit` or end
/// of input. Returns the mode in effect when the player left.
pub async fn run_tictactoe_game<R, B, W>(
    session: &TicTacToeSession<B>,
    input: R,
    messages: &mut W,
) -> std::io::Result<GameMode>
where
    R: AsyncBufRead + Unpin,
    B: GameBroadcaster,
    W: Write,
{
    session.broadcast_current().await;
    writeln!(messages, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let difficulty = session
            .snapshot()
            .await
            .mode
            .difficulty()
            .unwrap_or_default();

        let command = match ClientCommand::parse(&line, difficulty) {
            Ok(command) => command,
            Err(e) => {
                writeln!(messages, "{}", e)?;
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark(pos) => {
                if let Err(e) = session.handle_place(pos.row, pos.col).await {
                    writeln!(messages, "{}", e)?;
                }
            }
            ClientCommand::Reset => session.reset().await,
            ClientCommand::ChangeMode(mode) => session.change_mode(mode).await,
            ClientCommand::Help => writeln!(messages, "{}", HELP_TEXT)?,
            ClientCommand::Quit => break,
        }
    }

    let mode = session.snapshot().await.mode;
    log!("Leaving game in mode: {}", mode);
    Ok(mode)
}
