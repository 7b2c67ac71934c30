//! Win and outcome evaluation
//!
//! A game is won by occupying all three cells of one of the 8 fixed lines:
//! 3 rows, 3 columns and the two diagonals. With no winner and no empty
//! cell left, the game is a draw.

use crate::board::{Board, Coord, Mark};

/// The 8 winning lines
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Result of a position, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// Whether the game has ended
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Check if the given mark occupies a full line
pub fn has_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Find the completed line for the given mark, if any.
///
/// Returns the first matching line in `LINES` order; used by the UI to
/// highlight the win.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Coord; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&coord| board.get(coord) == mark))
}

/// Evaluate the outcome of the current position.
///
/// Computer wins are checked before human wins; the ordering is part of the
/// evaluator's contract even though both can never hold in a legal game.
pub fn outcome(board: &Board) -> Outcome {
    if has_win(board, Mark::Computer) {
        Outcome::ComputerWin
    } else if has_win(board, Mark::Human) {
        Outcome::HumanWin
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
