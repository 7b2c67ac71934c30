//! Move selector integrating the search with the difficulty policies
//!
//! The engine chooses one computer move per call, based on the active
//! difficulty:
//!
//! - **Easy**: a uniformly random empty cell, no lookahead
//! - **Medium** and **Hard**: the identical full-depth minimax search —
//!   the tiers were never given distinct search budgets in the original
//!   game, and that behavior is kept as-is
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Coord, Difficulty, Engine, Mark};
//!
//! let mut board = Board::new();
//! board.place(Coord::new(1, 1), Mark::Human).unwrap();
//!
//! let mut engine = Engine::new();
//! let result = engine.select_move(&mut board, Difficulty::Hard);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.mark_count(), 2);
//! ```

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Instant;
use tracing::debug;

use crate::board::{Board, Coord, Mark};
use crate::search::{self, SearchResult};

/// Difficulty level selected before or between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Policy that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePolicy {
    /// Uniform random choice among empty cells
    Random,
    /// Full-depth minimax search
    Minimax,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell the engine played, `None` iff the board was already full
    pub best_move: Option<Coord>,
    /// Minimax score of the move (always 0 for the random policy)
    pub score: i32,
    /// Policy that selected the move
    pub policy: MovePolicy,
    /// Time taken in microseconds
    pub time_us: u64,
    /// Number of search nodes visited (0 for the random policy)
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result for the random policy
    #[inline]
    fn random(best_move: Option<Coord>, time_us: u64) -> Self {
        Self {
            best_move,
            score: 0,
            policy: MovePolicy::Random,
            time_us,
            nodes: 0,
        }
    }

    /// Create a result from a minimax search
    #[inline]
    fn from_search(result: SearchResult, time_us: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            policy: MovePolicy::Minimax,
            time_us,
            nodes: result.nodes,
        }
    }
}

/// Computer move selector.
///
/// Holds no state of its own; the board and the difficulty are passed in
/// explicitly on every call, so a single engine can serve any number of
/// consecutive games.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Choose and apply one computer move.
    ///
    /// Places exactly one `Mark::Computer` on the board, or nothing if no
    /// empty cell remains (a documented no-op, not an error).
    pub fn select_move(&mut self, board: &mut Board, difficulty: Difficulty) -> MoveResult {
        let start = Instant::now();

        let result = match difficulty {
            Difficulty::Easy => {
                let candidates: Vec<Coord> = board.empty_cells().collect();
                let best_move = candidates.choose(&mut thread_rng()).copied();
                MoveResult::random(best_move, start.elapsed().as_micros() as u64)
            }
            Difficulty::Medium | Difficulty::Hard => {
                let search = search::best_move(board);
                MoveResult::from_search(search, start.elapsed().as_micros() as u64)
            }
        };

        if let Some(coord) = result.best_move {
            board.set(coord, Mark::Computer);
        }

        debug!(
            ?difficulty,
            policy = ?result.policy,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_us = result.time_us,
            "computer move selected"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board_from(rows: [[char; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let mark = match cell {
                    'C' => Mark::Computer,
                    'H' => Mark::Human,
                    _ => continue,
                };
                board.set(Coord::new(row as u8, col as u8), mark);
            }
        }
        board
    }

    #[test]
    fn test_select_places_exactly_one_mark() {
        for difficulty in Difficulty::ALL {
            let mut board = board_from([
                ['H', ' ', ' '],
                [' ', ' ', ' '],
                [' ', ' ', ' '],
            ]);
            let mut engine = Engine::new();
            let result = engine.select_move(&mut board, difficulty);

            let coord = result.best_move.expect("move available");
            assert_eq!(board.get(coord), Mark::Computer);
            assert_eq!(board.mark_count(), 2, "difficulty {:?}", difficulty);
        }
    }

    #[test]
    fn test_select_on_full_board_is_no_op() {
        for difficulty in Difficulty::ALL {
            let mut board = board_from([
                ['C', 'H', 'C'],
                ['C', 'H', 'H'],
                ['H', 'C', 'C'],
            ]);
            let before = board.clone();
            let mut engine = Engine::new();
            let result = engine.select_move(&mut board, difficulty);

            assert_eq!(result.best_move, None);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_medium_and_hard_agree() {
        // The two tiers run the same search and must pick the same cell.
        let layout = [
            ['C', ' ', ' '],
            ['H', 'H', ' '],
            [' ', ' ', ' '],
        ];
        let mut engine = Engine::new();

        let mut medium_board = board_from(layout);
        let medium = engine.select_move(&mut medium_board, Difficulty::Medium);

        let mut hard_board = board_from(layout);
        let hard = engine.select_move(&mut hard_board, Difficulty::Hard);

        assert_eq!(medium.best_move, hard.best_move);
        assert_eq!(medium.best_move, Some(Coord::new(1, 2)));
        assert_eq!(medium.policy, MovePolicy::Minimax);
    }

    #[test]
    fn test_minimax_selection_is_deterministic() {
        let layout = [
            [' ', ' ', ' '],
            [' ', 'H', ' '],
            [' ', ' ', ' '],
        ];
        let mut engine = Engine::new();

        let mut reference_board = board_from(layout);
        let reference = engine.select_move(&mut reference_board, Difficulty::Hard);

        for _ in 0..10 {
            let mut board = board_from(layout);
            let result = engine.select_move(&mut board, Difficulty::Hard);
            assert_eq!(result.best_move, reference.best_move);
            assert_eq!(result.score, reference.score);
        }
    }

    #[test]
    fn test_easy_only_plays_empty_cells() {
        let layout = [
            ['C', 'H', ' '],
            ['H', 'C', ' '],
            [' ', ' ', 'H'],
        ];
        let empties: HashSet<Coord> = board_from(layout).empty_cells().collect();
        let mut engine = Engine::new();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let mut board = board_from(layout);
            let result = engine.select_move(&mut board, Difficulty::Easy);
            let coord = result.best_move.expect("move available");
            assert!(empties.contains(&coord));
            assert_eq!(result.policy, MovePolicy::Random);
            seen.insert(coord);
        }

        // With 200 uniform draws over 4 cells, missing one is astronomically
        // unlikely.
        assert_eq!(seen, empties);
    }
}
