//! Tic-Tac-Toe game engine with a desktop GUI
//!
//! A human-versus-computer Tic-Tac-Toe game with a difficulty-selectable
//! decision engine:
//! - 3x3 board, win on any of the 8 lines (rows, columns, diagonals)
//! - Easy difficulty plays a uniformly random legal move
//! - Medium and Hard run a full-depth minimax search (the tiny state space
//!   makes exhaustive search instantaneous)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: 3x3 board representation and placement rules
//! - [`rules`]: Win detection and outcome evaluation
//! - [`search`]: Full-depth minimax with in-place backtracking
//! - [`engine`]: Move selector dispatching on difficulty
//! - [`ui`]: egui/eframe presentation shell
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{outcome, Board, Coord, Difficulty, Engine, Mark, Outcome};
//!
//! let mut board = Board::new();
//! board.place(Coord::new(0, 0), Mark::Human).unwrap();
//!
//! // Computer responds
//! let mut engine = Engine::new();
//! let result = engine.select_move(&mut board, Difficulty::Hard);
//! assert!(result.best_move.is_some());
//! assert_eq!(outcome(&board), Outcome::InProgress);
//! ```
//!
//! # Determinism
//!
//! Under Medium and Hard the selection is fully deterministic: empty cells
//! are enumerated in row-major order and ties are broken in favor of the
//! first cell reaching the best score.

pub mod board;
pub mod engine;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Mark, MoveError, BOARD_SIZE};
pub use engine::{Difficulty, Engine, MovePolicy, MoveResult};
pub use rules::{outcome, Outcome};
pub use search::SearchResult;
