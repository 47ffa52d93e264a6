mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{BotInput, best_move, calculate_minimax_move, minimax, AI_MARK, WIN_SCORE};
pub use game_state::{MoveError, MoveOutcome, StatusLine, TicTacToeGameState};
pub use types::{GameStatus, Mark, Position, Score, WinningLine, BOARD_SIZE};
pub use win_detector::{Evaluation, WIN_COMBOS, check_win, check_win_with_line, evaluate};
