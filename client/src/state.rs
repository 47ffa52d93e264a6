use std::sync::{Arc, Mutex, MutexGuard};

use tictactoe_common::engine::session::HUMAN_MARK;
use tictactoe_common::engine::tictactoe::WinningLine;
use tictactoe_common::{Board, GameEvent, GameStatus, Mark, Score, StatusLine};

/// Everything the window needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub board: Board,
    pub status: StatusLine,
    pub score: Score,
    pub winning_line: Option<WinningLine>,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            board: Board::new(),
            status: StatusLine {
                status: GameStatus::InProgress,
                current_mark: Mark::X,
            },
            score: Score::default(),
            winning_line: None,
        }
    }
}

impl GameView {
    pub fn apply_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::BoardChanged(board) => {
                self.board = board;
                self.winning_line = None;
            }
            GameEvent::StatusChanged(status) => self.status = status,
            GameEvent::ScoreChanged(score) => self.score = score,
            GameEvent::WinHighlight(line) => self.winning_line = Some(line),
        }
    }

    pub fn accepts_clicks(&self) -> bool {
        self.status.status.is_active() && self.status.current_mark == HUMAN_MARK
    }
}

#[derive(Clone, Default)]
pub struct SharedState {
    view: Arc<Mutex<GameView>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_event(&self, event: GameEvent) {
        lock(&self.view).apply_event(event);
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn get_view(&self) -> GameView {
        lock(&self.view).clone()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_board() -> Board {
        Board::from_symbols(["X", "X", "X", "O", "O", "", "", "", ""]).unwrap()
    }

    #[test]
    fn test_default_view_waits_for_x() {
        let view = GameView::default();
        assert!(view.accepts_clicks());
        assert_eq!(view.status.to_string(), "Player X's turn");
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn test_win_events_set_highlight_and_block_clicks() {
        let state = SharedState::new();
        let line = WinningLine::new(Mark::X, [0, 1, 2]);
        state.apply_event(GameEvent::BoardChanged(won_board()));
        state.apply_event(GameEvent::StatusChanged(StatusLine {
            status: GameStatus::XWon,
            current_mark: Mark::X,
        }));
        state.apply_event(GameEvent::ScoreChanged(Score { x: 1, o: 0 }));
        state.apply_event(GameEvent::WinHighlight(line));

        let view = state.get_view();
        assert_eq!(view.board, won_board());
        assert_eq!(view.score.x, 1);
        assert_eq!(view.winning_line, Some(line));
        assert!(!view.accepts_clicks());
        assert_eq!(view.status.to_string(), "Player X wins!");
    }

    #[test]
    fn test_board_change_clears_highlight() {
        let mut view = GameView::default();
        view.apply_event(GameEvent::WinHighlight(WinningLine::new(Mark::O, [2, 4, 6])));
        view.apply_event(GameEvent::BoardChanged(Board::new()));
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn test_clicks_blocked_on_ai_turn() {
        let mut view = GameView::default();
        view.apply_event(GameEvent::StatusChanged(StatusLine {
            status: GameStatus::InProgress,
            current_mark: Mark::O,
        }));
        assert!(!view.accepts_clicks());
    }

    #[test]
    fn test_clones_share_the_view() {
        let state = SharedState::new();
        let clone = state.clone();
        clone.apply_event(GameEvent::ScoreChanged(Score { x: 0, o: 3 }));
        assert_eq!(state.get_view().score.o, 3);
        assert!(!state.has_context());
    }
}
