//! Board module - manages the playfield grid
//!
//! The board is a `width x height` grid of cells, sized at construction
//! and fixed for the life of the session. Storage is a flat row-major
//! `Vec` indexed by `row * width + col`. Coordinates are `(row, col)`
//! with row 0 at the top; signed arguments let callers probe positions
//! off the edges, which simply read as blocked.

use arrayvec::ArrayVec;

use termtris_types::{Cell, PieceKind};

/// At most four rows can complete in a single landing.
pub type ClearedRows = ArrayVec<usize, 4>;

/// The playfield grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= self.height as i16 || col < 0 || col >= self.width as i16 {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col); `None` if out of bounds.
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds.
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is open (within bounds and empty).
    pub fn is_open(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a position is occupied (within bounds and filled).
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Merge a landed piece's cells into the board.
    ///
    /// Callers guarantee the cells were validated while the piece was
    /// active; out-of-bounds offsets are ignored by `set`.
    pub fn merge_piece(&mut self, shape: &[(i8, i8)], row: i16, col: i16, kind: PieceKind) {
        for &(dr, dc) in shape {
            self.set(row + i16::from(dr), col + i16::from(dc), Some(kind));
        }
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top. Returns the pre-removal indices of the
    /// cleared rows in ascending order.
    ///
    /// Compaction walks bottom-up with a write pointer, so removing
    /// several rows at once never skips or double-shifts a row.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = self.width;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // One fresh empty row at the top per cleared row.
        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        // Scanned bottom-up, so reverse into ascending order.
        cleared.reverse();
        cleared
    }

    /// Empty the whole board.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Row-major view of the settled cells, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells, used by invariant checks in tests.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Fill an entire row, for test setup.
    #[cfg(test)]
    pub fn fill_row(&mut self, row: usize, kind: PieceKind) {
        for col in 0..self.width as i16 {
            self.set(row as i16, col, Some(kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let board = Board::new(12, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 11), Some(11));
        assert_eq!(board.index(1, 0), Some(12));
        assert_eq!(board.index(19, 11), Some(239));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 12), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_clear_full_rows_reports_ascending() {
        let mut board = Board::new(12, 20);
        board.fill_row(5, PieceKind::I);
        board.fill_row(2, PieceKind::T);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[2, 5]);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_shifts_partial_rows_down() {
        let mut board = Board::new(12, 20);
        // A lone block above a full bottom row.
        board.set(18, 3, Some(PieceKind::J));
        board.fill_row(19, PieceKind::O);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(19, 3), Some(Some(PieceKind::J)));
        assert_eq!(board.get(18, 3), Some(None));
    }
}
