use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Run length that wins the game.
pub const CONNECT: usize = 4;

/// Step directions scanned for runs: right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    fn digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::One => '1',
            Cell::Two => '2',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: COLS,
            });
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Whether `cell` owns at least one run of [`CONNECT`] pieces.
    pub fn has_line(&self, cell: Cell) -> bool {
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_at(row, col, dr, dc, cell, CONNECT))
            })
        })
    }

    /// Count every window of `len` consecutive cells, in any of the four
    /// line directions, whose cells all equal `cell`.
    ///
    /// Overlapping windows are counted separately, so a horizontal run of
    /// three pieces contributes two windows of length 2.
    pub fn count_runs(&self, cell: Cell, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        let mut count = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    if self.run_at(row, col, dr, dc, cell, len) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Whether the `len` cells starting at (row, col) along (dr, dc) are all
    /// on the grid and all equal to `cell`.
    fn run_at(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
        len: usize,
    ) -> bool {
        (0..len).all(|step| {
            offset(row, col, dr, dc, step).is_some_and(|(r, c)| self.cells[r][c] == cell)
        })
    }

    /// Number of windows of `len` cells that fit on the grid.
    pub fn window_count(len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        let mut count = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    if offset(row, col, dr, dc, len - 1).is_some() {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

/// Position `step` cells away from (row, col) along (dr, dc), if on the grid.
fn offset(row: usize, col: usize, dr: isize, dc: isize, step: usize) -> Option<(usize, usize)> {
    let r = row as isize + dr * step as isize;
    let c = col as isize + dc * step as isize;
    if r < 0 || c < 0 || r >= ROWS as isize || c >= COLS as isize {
        return None;
    }
    Some((r as usize, c as usize))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "   ")?;
                }
                write!(f, "{}", cell.digit())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straightforward per-direction scan used to cross-check `count_runs`.
    fn brute_force_runs(board: &Board, cell: Cell, len: usize) -> usize {
        let mut count = 0;
        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - len {
                if (0..len).all(|i| board.get(row, col + i) == cell) {
                    count += 1;
                }
            }
        }
        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - len {
                if (0..len).all(|i| board.get(row + i, col) == cell) {
                    count += 1;
                }
            }
        }
        // Diagonal (top-left to bottom-right)
        for row in 0..=ROWS - len {
            for col in 0..=COLS - len {
                if (0..len).all(|i| board.get(row + i, col + i) == cell) {
                    count += 1;
                }
            }
        }
        // Diagonal (bottom-left to top-right)
        for row in len - 1..ROWS {
            for col in 0..=COLS - len {
                if (0..len).all(|i| board.get(row - i, col + i) == cell) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(
            board.drop_piece(0, Cell::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before, "rejected move must not touch the grid");
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Cell::One),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_line() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.has_line(Cell::One));
        assert!(!board.has_line(Cell::Two));
    }

    #[test]
    fn test_vertical_line() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Two).unwrap();
        }
        assert!(board.has_line(Cell::Two));
    }

    #[test]
    fn test_diagonal_up_line() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        assert!(!board.has_line(Cell::One));
        board.drop_piece(3, Cell::One).unwrap();

        assert!(board.has_line(Cell::One));
    }

    #[test]
    fn test_diagonal_down_line() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::One).unwrap();

        board.drop_piece(5, Cell::Two).unwrap();
        board.drop_piece(5, Cell::One).unwrap();

        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::One).unwrap();

        assert!(board.has_line(Cell::One));
    }

    #[test]
    fn test_no_line_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(!board.has_line(Cell::One));
    }

    #[test]
    fn test_count_runs_overlapping_windows() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert_eq!(board.count_runs(Cell::One, 3), 1);
        assert_eq!(board.count_runs(Cell::One, 2), 2);
        assert_eq!(board.count_runs(Cell::Two, 2), 0);
    }

    #[test]
    fn test_count_runs_matches_brute_force() {
        // Deterministic pseudo-random fill: column sequence from a simple LCG.
        let mut board = Board::new();
        let mut seed: u64 = 0x5eed;
        let mut turn = Cell::One;
        for _ in 0..30 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let col = (seed >> 33) as usize % COLS;
            if board.drop_piece(col, turn).is_ok() {
                turn = if turn == Cell::One { Cell::Two } else { Cell::One };
            }
        }

        for cell in [Cell::One, Cell::Two, Cell::Empty] {
            for len in 2..=4 {
                assert_eq!(
                    board.count_runs(cell, len),
                    brute_force_runs(&board, cell, len),
                    "mismatch for {cell:?} len {len}"
                );
            }
        }
    }

    #[test]
    fn test_window_count() {
        assert_eq!(Board::window_count(4), 69);
        assert_eq!(Board::window_count(3), 98);
        assert_eq!(Board::window_count(2), 131);
        assert_eq!(Board::window_count(0), 0);
        assert_eq!(Board::window_count(4), Board::new().count_runs(Cell::Empty, 4));
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(6, Cell::Two).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "0   0   0   0   0   0   0");
        assert_eq!(lines[ROWS - 1], "1   0   0   0   0   0   2");
    }
}
