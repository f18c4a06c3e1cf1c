//! Board module - the square grid of tile cells
//!
//! The board is an N x N grid where each cell is empty or holds a tile color.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left.

use arrayvec::ArrayVec;

use tui_collapse_types::{Cell, Tile};

use crate::rng::SimpleRng;

/// A square grid of tile cells, row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; a board's dimensions are fixed at
    /// construction and a zero-sized board is meaningless.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Generate a full board from a board number (the seed).
    ///
    /// Cells are filled in row-major order from one seeded stream, mapping
    /// each draw uniformly onto the three tile colors. Deterministic: the
    /// same `(size, board_number)` always yields the same layout, and no
    /// cell starts empty.
    pub fn generate(size: usize, board_number: u32) -> Self {
        let mut board = Self::new(size);
        let mut rng = SimpleRng::new(board_number);
        for cell in &mut board.cells {
            *cell = Some(Tile::ALL[rng.next_range(3) as usize]);
        }
        board
    }

    /// Calculate flat index from (row, col), bounds-checked.
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Board dimension (both width and height).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (row, col) is in bounds and empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Number of non-empty cells left on the board.
    pub fn tiles_remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell on the board is empty.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Whether every cell in the given column is empty.
    pub fn column_is_empty(&self, col: usize) -> bool {
        (0..self.size).all(|row| self.is_empty_at(row, col))
    }

    /// In-bounds orthogonal neighbors of (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 4> {
        let mut out = ArrayVec::new();
        if row > 0 {
            out.push((row - 1, col));
        }
        if row + 1 < self.size {
            out.push((row + 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if col + 1 < self.size {
            out.push((row, col + 1));
        }
        out
    }

    /// Replace every cell with empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Flat view of the cells, row-major. For rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from rows of cells. Rows must be square.
    ///
    /// Mainly useful for setting up positions in tests and tools.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(size > 0, "board size must be positive");
        assert!(
            rows.iter().all(|r| r.len() == size),
            "board rows must form a square"
        );
        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}
