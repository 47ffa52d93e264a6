use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals. The order decides which line is
/// reported when a board holds more than one.
pub const WIN_COMBOS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Ongoing,
    Draw,
    Win(WinningLine),
}

impl Evaluation {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::Ongoing)
    }
}

pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(line) = check_win_with_line(board) {
        return Evaluation::Win(line);
    }

    if board.is_full() {
        Evaluation::Draw
    } else {
        Evaluation::Ongoing
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_COMBOS.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if !mark.is_empty() && cells[b] == mark && cells[c] == mark {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}
