use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::{Evaluation, evaluate};

/// The computer always plays O.
pub const AI_MARK: Mark = Mark::O;

/// Score of an immediate win for the bot; deeper wins score less.
pub const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    best_move(&input.board, input.bot_mark)
}

/// Picks the cell with the highest minimax score for `bot_mark`.
///
/// Candidates are tried in ascending index order and only a strictly better
/// score replaces the current choice, so ties go to the lowest index. Returns
/// `None` when the board is already won or full.
///
/// Boards must come from alternating play; debug builds assert it.
pub fn best_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    debug_assert!(
        board.has_consistent_counts(),
        "board was not reached by alternating moves:\n{}",
        board
    );

    if bot_mark.is_empty() || evaluate(board).is_terminal() {
        return None;
    }

    let mut board = *board;
    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        board.place(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark);
        board.clear(index);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

/// Exhaustive minimax without pruning.
///
/// A bot win scores `WIN_SCORE - depth`, an opponent win `depth - WIN_SCORE`
/// and a draw `0`. The board is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match evaluate(board) {
        Evaluation::Win(line) if line.mark == bot_mark => return WIN_SCORE - depth,
        Evaluation::Win(_) => return depth - WIN_SCORE,
        Evaluation::Draw => return 0,
        Evaluation::Ongoing => {}
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.place(index, bot_mark);
            max_eval = max_eval.max(minimax(board, depth + 1, false, bot_mark));
            board.clear(index);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.place(index, opponent_mark);
            min_eval = min_eval.min(minimax(board, depth + 1, true, bot_mark));
            board.clear(index);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::check_win;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn board(symbols: [&str; 9]) -> Board {
        Board::from_symbols(symbols).unwrap()
    }

    #[test]
    fn test_answers_center_with_corner() {
        let board = board(["", "", "", "", "X", "", "", "", ""]);
        let chosen = best_move(&board, AI_MARK).unwrap();
        assert_eq!(chosen, 0);
        assert!([0, 2, 6, 8].contains(&chosen));
    }

    #[test]
    fn test_every_first_move_draws_so_lowest_index_is_chosen() {
        assert_eq!(best_move(&Board::new(), Mark::X), Some(0));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board(["X", "X", "", "O", "O", "", "", "", ""]);
        assert_eq!(best_move(&board, AI_MARK), Some(5));
    }

    #[test]
    fn test_blocks_open_line() {
        let board = board(["X", "X", "", "", "O", "", "", "", ""]);
        assert_eq!(best_move(&board, AI_MARK), Some(2));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board(["X", "X", "X", "O", "O", "", "", "", ""]);
        assert_eq!(best_move(&won, AI_MARK), None);

        let drawn = board(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(best_move(&drawn, AI_MARK), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "alternating moves")]
    fn test_rejects_board_with_too_many_o_marks() {
        let board = board(["O", "O", "", "", "X", "", "", "", ""]);
        best_move(&board, AI_MARK);
    }

    #[test]
    fn test_best_move_is_deterministic() {
        let board = board(["X", "", "", "", "", "", "", "", ""]);
        let first = best_move(&board, AI_MARK);
        for _ in 0..5 {
            assert_eq!(best_move(&board, AI_MARK), first);
        }
    }

    #[test]
    fn test_terminal_scores_are_depth_scaled() {
        let mut o_wins = board(["O", "O", "O", "X", "X", "", "X", "", ""]);
        assert_eq!(minimax(&mut o_wins, 0, true, AI_MARK), 10);
        assert_eq!(minimax(&mut o_wins, 3, true, AI_MARK), 7);

        let mut x_wins = board(["X", "X", "X", "O", "O", "", "", "", ""]);
        assert_eq!(minimax(&mut x_wins, 2, false, AI_MARK), -8);

        let mut drawn = board(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(minimax(&mut drawn, 4, true, AI_MARK), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let original = board(["X", "", "", "", "O", "", "", "", "X"]);
        let mut board = original;
        minimax(&mut board, 0, true, AI_MARK);
        assert_eq!(board, original);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let mut board = board(["X", "", "", "", "", "", "", "", ""]);
        for index in board.available_moves() {
            board.place(index, AI_MARK);
            let score = minimax(&mut board, 0, false, AI_MARK);
            board.clear(index);
            assert!((-WIN_SCORE..=WIN_SCORE).contains(&score));
        }
    }

    /// Tries every human reply at every turn and lets the bot answer.
    fn assert_bot_never_loses(board: &mut Board, to_move: Mark, bot_mark: Mark, games: &mut usize) {
        if let Some(winner) = check_win(board) {
            assert_ne!(winner, bot_mark.opponent().unwrap(), "bot lost on\n{}", board);
            *games += 1;
            return;
        }
        if board.is_full() {
            *games += 1;
            return;
        }

        if to_move == bot_mark {
            let index = best_move(board, bot_mark).unwrap();
            board.place(index, bot_mark);
            assert_bot_never_loses(board, to_move.opponent().unwrap(), bot_mark, games);
            board.clear(index);
        } else {
            for index in board.available_moves() {
                board.place(index, to_move);
                assert_bot_never_loses(board, bot_mark, bot_mark, games);
                board.clear(index);
            }
        }
    }

    #[test]
    fn test_bot_playing_o_never_loses() {
        let mut games = 0;
        assert_bot_never_loses(&mut Board::new(), Mark::X, Mark::O, &mut games);
        assert!(games > 0);
    }

    #[test]
    fn test_bot_playing_x_never_loses() {
        let mut games = 0;
        assert_bot_never_loses(&mut Board::new(), Mark::X, Mark::X, &mut games);
        assert!(games > 0);
    }

    #[test]
    fn test_self_play_is_a_draw() {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        while let Some(index) = best_move(&board, to_move) {
            board.place(index, to_move);
            to_move = to_move.opponent().unwrap();
        }
        assert_eq!(evaluate(&board), Evaluation::Draw);
    }

    #[test]
    fn test_random_opponent_never_beats_bot() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new();
            let mut to_move = Mark::X;
            while !evaluate(&board).is_terminal() {
                let index = if to_move == AI_MARK {
                    best_move(&board, AI_MARK).unwrap()
                } else {
                    *board.available_moves().choose(&mut rng).unwrap()
                };
                board.place(index, to_move);
                to_move = to_move.opponent().unwrap();
            }
            assert_ne!(check_win(&board), Some(Mark::X));
        }
    }
}
