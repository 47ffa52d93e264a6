pub mod config;
pub mod engine;
pub mod logger;

pub use engine::session::{GameBroadcaster, GameEvent, SessionCommand};
pub use engine::tictactoe::{Board, GameStatus, Mark, Score, StatusLine, TicTacToeGameState};
