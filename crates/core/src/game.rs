//! Game module - turn handling and board reflow
//!
//! `CollapseGame` owns the board plus the move counter and the cheat
//! snapshot. A turn on a tile with at least one matching orthogonal neighbor
//! removes the whole connected group, then reflows the survivors: gravity
//! compacts each column downward, and empty columns are closed up toward the
//! board's center.

use std::collections::VecDeque;

use tui_collapse_types::Tile;

use crate::board::Board;

/// One game of Collapse on a seeded board.
#[derive(Debug, Clone)]
pub struct CollapseGame {
    board: Board,
    /// Full board saved while the cheat state is active.
    saved: Option<Board>,
    board_number: u32,
    moves: u32,
}

impl CollapseGame {
    /// Start a fresh game on the given board number.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero (see [`Board::new`]).
    pub fn new(size: usize, board_number: u32) -> Self {
        Self {
            board: Board::generate(size, board_number),
            saved: None,
            board_number,
            moves: 0,
        }
    }

    /// Resume play from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            saved: None,
            board_number: 0,
            moves: 0,
        }
    }

    /// Read-only view of the current grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed this game was generated from.
    pub fn board_number(&self) -> u32 {
        self.board_number
    }

    /// Number of accepted turns so far.
    pub fn moves_made(&self) -> u32 {
        self.moves
    }

    /// Number of tiles left to clear.
    pub fn tiles_remaining(&self) -> usize {
        self.board.tiles_remaining()
    }

    /// Whether the board is fully cleared. This is the only terminal state;
    /// starting the next board is the front end's call.
    pub fn is_over(&self) -> bool {
        self.board.is_cleared()
    }

    /// Whether the cheat state is active.
    pub fn is_cheating(&self) -> bool {
        self.saved.is_some()
    }

    /// Take a turn on the cell at (row, col).
    ///
    /// Returns whether the turn was accepted. Out-of-range coordinates and
    /// empty cells are rejected with no state change at all. An accepted turn
    /// costs exactly one move; it removes tiles only when the target has an
    /// orthogonal neighbor of the same color (minimum group size is 2 - a
    /// lone tile just costs the move).
    pub fn take_turn(&mut self, row: usize, col: usize) -> bool {
        let target = match self.board.get(row, col) {
            Some(Some(tile)) => tile,
            _ => return false,
        };

        self.moves += 1;

        if self.has_matching_neighbor(row, col, target) {
            self.remove_group(row, col, target);
            self.apply_gravity();
            self.recenter_columns();
        }

        true
    }

    /// Toggle the cheat state.
    ///
    /// Entering saves the whole board and replaces it with a near-solved
    /// residue (two adjacent green tiles). Leaving restores the saved board
    /// verbatim. The move counter is untouched either way.
    pub fn toggle_cheat(&mut self) {
        match self.saved.take() {
            Some(saved) => self.board = saved,
            None => {
                self.saved = Some(self.board.clone());
                self.board.clear();
                self.board.set(0, 0, Some(Tile::Green));
                if self.board.size() > 1 {
                    self.board.set(0, 1, Some(Tile::Green));
                }
            }
        }
    }

    fn has_matching_neighbor(&self, row: usize, col: usize, target: Tile) -> bool {
        self.board
            .neighbors(row, col)
            .iter()
            .any(|&(r, c)| self.board.get(r, c) == Some(Some(target)))
    }

    /// Flood fill over 4-connected cells of the target color.
    ///
    /// Explicit work queue rather than recursion; cells are marked empty as
    /// they are dequeued, so a cell enqueued twice is a no-op the second
    /// time.
    fn remove_group(&mut self, row: usize, col: usize, target: Tile) {
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back((row, col));

        while let Some((r, c)) = queue.pop_front() {
            if self.board.get(r, c) != Some(Some(target)) {
                continue;
            }
            self.board.set(r, c, None);

            for (nr, nc) in self.board.neighbors(r, c) {
                if self.board.get(nr, nc) == Some(Some(target)) {
                    queue.push_back((nr, nc));
                }
            }
        }
    }

    /// Drop every tile to the lowest empty cell below it in its column.
    ///
    /// Scanning from the second-to-last row upward preserves the relative
    /// vertical order of the survivors.
    fn apply_gravity(&mut self) {
        let n = self.board.size();
        for row in (0..n.saturating_sub(1)).rev() {
            for col in 0..n {
                let tile = match self.board.get(row, col) {
                    Some(Some(tile)) => tile,
                    _ => continue,
                };
                if !self.board.is_empty_at(row + 1, col) {
                    continue;
                }
                let mut dest = row + 1;
                while dest + 1 < n && self.board.is_empty_at(dest + 1, col) {
                    dest += 1;
                }
                self.board.set(dest, col, Some(tile));
                self.board.set(row, col, None);
            }
        }
    }

    /// Close up empty columns toward the center.
    ///
    /// Two independent passes, right of center first: each empty column
    /// pulls in the nearest non-empty column from further out on its side,
    /// pushing empty columns to the board's outer edges. On even widths the
    /// left pass references the column immediately left of the midpoint.
    fn recenter_columns(&mut self) {
        let n = self.board.size();
        let mut center = n / 2;

        for col in center..n.saturating_sub(1) {
            if self.board.column_is_empty(col) {
                if let Some(donor) = (col + 1..n).find(|&c| !self.board.column_is_empty(c)) {
                    self.pull_column(col, donor);
                }
            }
        }

        if n % 2 == 0 {
            center -= 1;
        }

        for col in (1..=center).rev() {
            if self.board.column_is_empty(col) {
                if let Some(donor) = (0..col).rev().find(|&c| !self.board.column_is_empty(c)) {
                    self.pull_column(col, donor);
                }
            }
        }
    }

    /// Move the donor column's full content into `dst`, emptying the donor.
    fn pull_column(&mut self, dst: usize, donor: usize) {
        for row in 0..self.board.size() {
            let cell = self.board.get(row, donor).unwrap_or(None);
            self.board.set(row, dst, cell);
            self.board.set(row, donor, None);
        }
    }
}
