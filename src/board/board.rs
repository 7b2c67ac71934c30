//! Board structure with checked and unchecked placement

use thiserror::Error;

use super::{Coord, Mark, BOARD_SIZE};

/// Errors from checked placement.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}

/// The 3x3 game board.
///
/// Cells start `Empty` and transition to a mark exactly once; the only way
/// back to `Empty` is `clear` (used by the search to undo a probe) or a full
/// `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, coord: Coord) -> Mark {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Mark::Empty
    }

    /// Place a mark with full validation.
    ///
    /// This is the entry point for game moves; it rejects off-board
    /// coordinates and occupied cells instead of overwriting them.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), MoveError> {
        debug_assert!(mark != Mark::Empty);
        if !coord.in_bounds() {
            return Err(MoveError::OutOfRange {
                row: coord.row,
                col: coord.col,
            });
        }
        if !self.is_empty(coord) {
            return Err(MoveError::Occupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.set(coord, mark);
        Ok(())
    }

    /// Set a mark without validation.
    ///
    /// Used by the search, which only probes cells it already knows to be
    /// empty and restores them with `clear` before returning.
    #[inline]
    pub fn set(&mut self, coord: Coord, mark: Mark) {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row as usize][coord.col as usize] = mark;
    }

    /// Restore a cell to empty
    #[inline]
    pub fn clear(&mut self, coord: Coord) {
        debug_assert!(coord.in_bounds());
        self.cells[coord.row as usize][coord.col as usize] = Mark::Empty;
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Iterate over empty cells in row-major order.
    ///
    /// The search and the move selector both rely on this enumeration order
    /// for their tie-break behavior.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE)
                .map(move |col| Coord::new(row as u8, col as u8))
                .filter(move |&coord| self.is_empty(coord))
        })
    }

    /// Total marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    /// Clear all cells
    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
