//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Rows above the board (y < 0) are not stored. Pieces may protrude there while
//! spawning: collision only bounds them horizontally, and merging drops them.

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single absolute cell is blocked for a piece.
    ///
    /// Out of bounds horizontally or below the floor is blocked. Cells above the
    /// top edge are free; cells on the board are blocked when occupied.
    #[inline]
    fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.cells[(y as usize) * WIDTH + (x as usize)].is_some()
    }

    /// Collision test for `piece` shifted by (dx, dy) and turned by `drot` quarter turns.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8, drot: i8) -> bool {
        piece
            .cells_at(dx, dy, drot)
            .iter()
            .any(|&(x, y)| self.blocks(x, y))
    }

    /// Write the piece's kind into each of its cells that lies on the board.
    ///
    /// Cells above the top edge are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    fn remove_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);
    }

    /// Remove every full row and return how many were removed (0-4).
    ///
    /// Rows are scanned bottom to top. After a removal the same row index is
    /// examined again, since the row shifted into it may be full as well.
    pub fn sweep_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Copy the board as piece tags (0 = empty) into a presentation grid.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, |k| k.tag());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// Each row is 10 chars: `.` or space is empty, a piece letter fills the
    /// cell with that kind, any other char fills it with `I`.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_str(other.encode_utf8(&mut [0; 4]))
                            .unwrap_or(PieceKind::I),
                    ),
                };
                board.set(x as i8, (offset + i) as i8, cell);
            }
        }
        board
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
    use crate::types::Rotation;

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
    fn test_cells_above_board_only_bounded_horizontally() {
        let board = Board::new();
        assert!(!board.blocks(0, -3));
        assert!(board.blocks(-1, -3));
        assert!(board.blocks(10, -1));
        assert!(board.blocks(4, 20));
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let mut board = Board::new();
        let piece = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 0,
            y: -2,
        };
        // Column 2, rows -2..=1.
        board.merge(&piece);
        assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_sweep_rechecks_row_after_shift() {
        let mut board = Board::from_rows(&[
            "T.........",
            "##########",
            "##########",
            "#.########",
            "##########",
        ]);
        assert_eq!(board.sweep_full_lines(), 3);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 19), Some(None));
        assert!(board.rows().take(18).all(|r| r.iter().all(|c| c.is_none())));
    }

    #[test]
    fn test_write_u8_grid_uses_tags() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][0], PieceKind::L.tag());
        assert_eq!(grid[19][1], 0);
    }
}
