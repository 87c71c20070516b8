use std::future::Future;

use super::tictactoe::GameStateUpdate;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;
}
