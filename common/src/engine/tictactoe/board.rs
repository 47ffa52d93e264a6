use std::fmt;

use super::types::{BOARD_SIZE, Mark};

pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 9 cells of a 3x3 board in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from cell symbols: `"X"`, `"O"`, or one of `""`, `" "`,
    /// `"-"`, `"."` for an empty cell.
    pub fn from_symbols(symbols: [&str; CELL_COUNT]) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, symbol) in symbols.iter().enumerate() {
            cells[index] = match symbol.trim() {
                "X" | "x" => Mark::X,
                "O" | "o" => Mark::O,
                "" | "-" | "." => Mark::Empty,
                other => {
                    return Err(format!("Unknown cell symbol {:?} at index {}", other, index));
                }
            };
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X moves first and players alternate, so X is level with O or one ahead.
    pub fn has_consistent_counts(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_empty() { "." } else { cell.symbol() })
                .collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_symbols() {
        let board = Board::from_symbols(["X", "X", "", "O", "O", "", "", "", ""]).unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.available_moves(), vec![2, 5, 6, 7, 8]);
        assert!(board.has_consistent_counts());
    }

    #[test]
    fn test_from_symbols_rejects_unknown_symbol() {
        assert!(Board::from_symbols(["X", "Z", "", "", "", "", "", "", ""]).is_err());
    }

    #[test]
    fn test_out_of_range_cell_is_not_empty() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_cell_empty(9));
    }

    #[test]
    fn test_inconsistent_counts() {
        let board = Board::from_symbols(["O", "", "", "", "", "", "", "", ""]).unwrap();
        assert!(!board.has_consistent_counts());
        let board = Board::from_symbols(["X", "X", "", "", "", "", "", "", ""]).unwrap();
        assert!(!board.has_consistent_counts());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert_eq!(board.count(Mark::X), 1);
        board.clear(4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = Board::from_symbols(["X", "", "O", "", "X", "", "", "", "O"]).unwrap();
        assert_eq!(board.to_string(), "X . O\n. X .\n. . O");
    }
}
