//! Adversarial search for the computer player
//!
//! The 3x3 state space is small enough (at most 9 plies) that the minimax
//! search always runs to full depth; there is no pruning, hashing or
//! iterative deepening.

pub mod minimax;

pub use minimax::{best_move, SearchResult};
