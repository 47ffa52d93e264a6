use std::fmt;

use super::board::Board;
use super::types::{GameStatus, Mark, Score, WinningLine};
use super::win_detector::{Evaluation, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds(usize),
    CellOccupied(usize),
    InvalidMark,
    NotYourTurn { expected: Mark, got: Mark },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::InvalidMark => write!(f, "Cannot place an empty mark"),
            MoveError::NotYourTurn { expected, got } => {
                write!(f, "Not {}'s turn, {} is to move", got, expected)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// What the status label shows: whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub status: GameStatus,
    pub current_mark: Mark,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            GameStatus::InProgress => write!(f, "Player {}'s turn", self.current_mark),
            GameStatus::XWon => write!(f, "Player X wins!"),
            GameStatus::OWon => write!(f, "Player O wins!"),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Mark },
    Won(WinningLine),
    Draw,
}

/// One game of tic-tac-toe plus the running score of the session it belongs to.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    score: Score,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            score: Score::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            status: self.status,
            current_mark: self.current_mark,
        }
    }

    /// Places `mark` at `index` and settles the game if the move ends it.
    ///
    /// A rejected move leaves the state untouched. After a terminal move the
    /// current mark stays on the player who made it.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, MoveError> {
        if !self.status.is_active() {
            return Err(MoveError::GameOver);
        }

        if mark.is_empty() {
            return Err(MoveError::InvalidMark);
        }

        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn {
                expected: self.current_mark,
                got: mark,
            });
        }

        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(MoveError::CellOccupied(index)),
        }

        self.board.place(index, mark);

        match evaluate(&self.board) {
            Evaluation::Win(line) => {
                // won_by only fails for an empty mark, which was rejected above
                self.status = GameStatus::won_by(line.mark).unwrap_or(GameStatus::Draw);
                self.winning_line = Some(line);
                self.score.record_win(line.mark);
                Ok(MoveOutcome::Won(line))
            }
            Evaluation::Draw => {
                self.status = GameStatus::Draw;
                Ok(MoveOutcome::Draw)
            }
            Evaluation::Ongoing => {
                self.switch_turn();
                Ok(MoveOutcome::Continue {
                    next: self.current_mark,
                })
            }
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    /// Starts a new game. The score carries over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board, current_mark: Mark) {
        self.board = board;
        self.current_mark = current_mark;
    }
}
