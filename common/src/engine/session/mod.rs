mod tictactoe_session;

use std::future::Future;

use crate::engine::tictactoe::{Board, Score, StatusLine, WinningLine};

pub use tictactoe_session::{
    DEFAULT_AI_MOVE_DELAY, HUMAN_MARK, TicTacToeSession, TicTacToeSessionSettings,
};

/// Notifications a presentation layer renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged(Board),
    StatusChanged(StatusLine),
    /// Only sent after a winning move.
    ScoreChanged(Score),
    /// Only sent after a winning move.
    WinHighlight(WinningLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    HumanMove { index: usize },
    Reset,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}
