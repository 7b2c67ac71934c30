//! Full-depth minimax with in-place backtracking
//!
//! The search mutates the shared board transiently: place a hypothetical
//! mark, recurse, restore the cell. Every `set` is paired with a `clear`,
//! so the board is unchanged once a call returns.
//!
//! Terminal scoring is +1 for a computer win, -1 for a human win and 0 for
//! a full board, checked in that order at every recursion entry. Both the
//! top level and the maximizing ply update their best score with a strict
//! comparison, so among equally scored moves the first one in row-major
//! enumeration order always wins. Depth is threaded through the recursion
//! for statistics only; a quick win scores no better than a slow one.

use crate::board::{Board, Coord, Mark};
use crate::rules::has_win;

/// Result of a minimax search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` iff the board had no empty cell
    pub best_move: Option<Coord>,
    /// Minimax score of the best move (+1 win, 0 draw, -1 loss)
    pub score: i32,
    /// Number of nodes visited
    pub nodes: u64,
    /// Deepest ply reached
    pub depth: u8,
}

/// Search statistics accumulated during recursion.
#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    max_depth: u8,
}

/// Find the best computer move in the current position.
///
/// Enumerates empty cells in row-major order, scores each by placing the
/// computer's mark and minimizing from the human's side, and keeps the
/// first cell achieving the strict maximum. On a full board no move is
/// made and `best_move` is `None`.
pub fn best_move(board: &mut Board) -> SearchResult {
    let mut stats = SearchStats::default();
    let mut best_score = i32::MIN;
    let mut best: Option<Coord> = None;

    let candidates: Vec<Coord> = board.empty_cells().collect();
    for coord in candidates {
        board.set(coord, Mark::Computer);
        let score = minimax(board, 1, false, &mut stats);
        board.clear(coord);

        if score > best_score {
            best_score = score;
            best = Some(coord);
        }
    }

    SearchResult {
        best_move: best,
        score: if best.is_some() { best_score } else { 0 },
        nodes: stats.nodes,
        depth: stats.max_depth,
    }
}

/// Score a position for the side to move.
///
/// `maximizing` is true on the computer's plies. `depth` counts plies from
/// the root and feeds the statistics; it never terminates the search or
/// biases the score.
fn minimax(board: &mut Board, depth: u8, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if has_win(board, Mark::Computer) {
        return 1;
    }
    if has_win(board, Mark::Human) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (Mark::Computer, i32::MIN)
    } else {
        (Mark::Human, i32::MAX)
    };

    let candidates: Vec<Coord> = board.empty_cells().collect();
    for coord in candidates {
        board.set(coord, mark);
        let score = minimax(board, depth + 1, !maximizing, stats);
        board.clear(coord);

        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}
