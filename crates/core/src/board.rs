//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of occupancy flags stored as a flat array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single [`Board::clear_full_rows`] call, in scan order.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Remove row `y`, shift every row above it down by one and leave an
    /// empty row at the top. Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(false);
        true
    }

    /// Clear all full rows in a single top-to-bottom pass.
    ///
    /// Rows above a cleared row have already been scanned when they shift
    /// into its index, so one forward pass visits every original row once
    /// and catches non-adjacent full rows in the same call.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Fill every in-bounds cell of `shape` placed at origin (x, y).
    /// Returns the number of cells written.
    pub fn lock_cells(&mut self, shape: &[(i8, i8)], x: i8, y: i8) -> usize {
        shape
            .iter()
            .filter(|&&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(cx), Some(cy)) => self.set(cx, cy, true),
                _ => false,
            })
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a 0/1 grid (row-major), for snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            for (x, dst) in row.iter_mut().enumerate() {
                *dst = self.cells[start + x] as u8;
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Create from a 2D vector (converts to flat array)
    ///
    /// Panics if the grid is not exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [false; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, true);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(4, 17, true);
        fill_row(&mut board, 18);

        assert!(board.clear_row(18));

        assert!(board.is_occupied(4, 18));
        assert!(!board.is_occupied(4, 17));
        assert!(!board.is_row_full(18));
        assert!(!board.clear_row(BOARD_HEIGHT as usize));
    }

    #[test]
    fn test_clear_full_rows_non_adjacent() {
        let mut board = Board::new();
        fill_row(&mut board, 10);
        fill_row(&mut board, 19);
        board.set(0, 15, true);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[10, 19]);
        // The marker at row 15 sat below one cleared row and above the other.
        assert!(board.is_occupied(0, 16));
        assert_eq!(board.cells().iter().filter(|&&c| c).count(), 1);
    }

    #[test]
    fn test_clear_full_rows_whole_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            fill_row(&mut board, y);
        }

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
        assert!(board.is_empty());
    }

    #[test]
    fn test_lock_cells_skips_out_of_bounds() {
        let mut board = Board::new();
        let written = board.lock_cells(&[(0, 0), (1, 0), (0, -1), (10, 0)], 0, 0);
        assert_eq!(written, 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 0));
    }

    #[test]
    fn test_lock_cells_skips_overflowing_offsets() {
        let mut board = Board::new();
        let written = board.lock_cells(&[(0, 0), (i8::MAX, 0), (0, i8::MIN)], 1, 1);
        assert_eq!(written, 1);
        assert!(board.is_occupied(1, 1));
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(3, 7, true);
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[7][3], 1);
        assert_eq!(grid.iter().flatten().filter(|&&v| v == 1).count(), 1);
    }
}
