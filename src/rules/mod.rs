//! Game rules: win detection and outcome evaluation

pub mod win;

pub use win::{has_win, outcome, winning_line, Outcome, LINES};
