use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::board::Board;
use super::game_state::{BotTurn, GameController};
use super::types::{GameMode, GameOutcome, Mark, MoveError, Position, WinningLine};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

/// Snapshot pushed to the presentation layer after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateUpdate {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<Position>,
    pub mode: GameMode,
    pub bot_thinking: bool,
    pub epoch: u64,
}

impl GameStateUpdate {
    pub fn from_controller(controller: &GameController) -> Self {
        Self {
            board: *controller.board(),
            current_mark: controller.current_mark(),
            outcome: controller.outcome(),
            winning_line: controller.winning_line(),
            last_move: controller.last_move(),
            mode: controller.mode(),
            bot_thinking: controller.bot_turn().is_some(),
            epoch: controller.epoch(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub bot_delay: Duration,
}

impl TicTacToeSessionSettings {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            bot_delay: DEFAULT_BOT_DELAY,
        }
    }
}

/// Drives a `GameController` for the presentation layer. The bot's reply is
/// scheduled as a tokio task after `bot_delay`; reset and mode changes abort
/// it, and the controller epoch rejects it if it already woke up.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    controller: Arc<Mutex<GameController>>,
    rng: Arc<Mutex<SessionRng>>,
    pending_bot: Arc<Mutex<Option<JoinHandle<()>>>>,
    bot_delay: Duration,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, broadcaster: B) -> Self {
        log!(
            "Starting game: {} (seed {}, bot delay {} ms)",
            settings.mode,
            rng.seed(),
            settings.bot_delay.as_millis()
        );
        Self {
            controller: Arc::new(Mutex::new(GameController::new(settings.mode))),
            rng: Arc::new(Mutex::new(rng)),
            pending_bot: Arc::new(Mutex::new(None)),
            bot_delay: settings.bot_delay,
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> GameStateUpdate {
        let controller = self.controller.lock().await;
        GameStateUpdate::from_controller(&controller)
    }

    pub async fn broadcast_current(&self) {
        let controller = self.controller.lock().await;
        self.broadcast_locked(&controller).await;
    }

    pub async fn handle_place(&self, row: usize, col: usize) -> Result<(), MoveError> {
        let bot_turn = {
            let mut controller = self.controller.lock().await;
            if let Err(e) = controller.place_mark(row, col) {
                log!("Rejected move at ({}, {}): {}", row, col, e);
                return Err(e);
            }
            self.broadcast_locked(&controller).await;
            controller.bot_turn()
        };

        if let Some(turn) = bot_turn {
            self.schedule_bot_turn(turn).await;
        }

        Ok(())
    }

    pub async fn reset(&self) {
        self.cancel_pending_bot().await;
        let bot_turn = {
            let mut controller = self.controller.lock().await;
            controller.reset();
            log!("Game reset (epoch {})", controller.epoch());
            self.broadcast_locked(&controller).await;
            controller.bot_turn()
        };
        if let Some(turn) = bot_turn {
            self.schedule_bot_turn(turn).await;
        }
    }

    pub async fn change_mode(&self, mode: GameMode) {
        self.cancel_pending_bot().await;
        let bot_turn = {
            let mut controller = self.controller.lock().await;
            controller.change_mode(mode);
            log!("Mode changed to {} (epoch {})", mode, controller.epoch());
            self.broadcast_locked(&controller).await;
            controller.bot_turn()
        };
        if let Some(turn) = bot_turn {
            self.schedule_bot_turn(turn).await;
        }
    }

    pub async fn is_bot_pending(&self) -> bool {
        let pending = self.pending_bot.lock().await;
        pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    async fn schedule_bot_turn(&self, turn: BotTurn) {
        let session = self.clone();
        let delay = self.bot_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.play_bot_turn(turn).await;
        });

        let mut pending = self.pending_bot.lock().await;
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    async fn cancel_pending_bot(&self) {
        let mut pending = self.pending_bot.lock().await;
        if let Some(handle) = pending.take() {
            if !handle.is_finished() {
                log!("Cancelling pending bot move");
            }
            handle.abort();
        }
    }

    async fn play_bot_turn(&self, turn: BotTurn) {
        let mut controller = self.controller.lock().await;
        let played = {
            let mut rng = self.rng.lock().await;
            controller.play_bot_turn(turn, &mut rng)
        };
        match played {
            Ok(Some(_)) => self.broadcast_locked(&controller).await,
            Ok(None) => {}
            Err(e) => log!("Bot failed to move: {}", e),
        }
    }

    /// Called with the controller lock held, so updates reach the
    /// broadcaster in the order the controller changed.
    async fn broadcast_locked(&self, controller: &GameController) {
        let update = GameStateUpdate::from_controller(controller);
        self.broadcaster.broadcast_state(update).await;
    }
}
