//! Game session state for the Tic-Tac-Toe GUI

use crate::board::{Board, Coord, Mark};
use crate::engine::{Difficulty, Engine, MoveResult};
use crate::rules::{self, Outcome};
use std::time::{Duration, Instant};
use tracing::debug;

/// Pause before the computer replies. The 3x3 search itself is
/// instantaneous; the delay only makes the reply readable as a move.
pub const COMPUTER_THINK_TIME: Duration = Duration::from_millis(200);

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub winning_line: Option<[Coord; 3]>,
}

impl GameResult {
    /// Display message
    pub fn message(self) -> &'static str {
        match self.outcome {
            Outcome::HumanWin => "Player Wins!",
            Outcome::ComputerWin => "AI Wins!",
            Outcome::Draw => "It's a Draw!",
            Outcome::InProgress => "",
        }
    }
}

/// Main game state.
///
/// Owns the board, the active difficulty and the engine; every core call
/// receives them explicitly, so there is no global game state anywhere.
pub struct GameState {
    pub board: Board,
    pub difficulty: Difficulty,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Coord>,
    pub last_result: Option<MoveResult>,
    pub message: Option<String>,
    computer_wait: Option<Instant>,
    engine: Engine,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            current_turn: Mark::Human,
            game_over: None,
            last_move: None,
            last_result: None,
            message: None,
            computer_wait: None,
            engine: Engine::new(),
        }
    }

    /// Start a fresh game, keeping the selected difficulty
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::Human;
        self.game_over = None;
        self.last_move = None;
        self.last_result = None;
        self.message = None;
        self.computer_wait = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Mark::Human
    }

    /// Check if the computer's reply is pending
    pub fn is_computer_thinking(&self) -> bool {
        self.computer_wait.is_some()
    }

    /// Time since the computer's reply became pending
    pub fn thinking_elapsed(&self) -> Option<Duration> {
        self.computer_wait.map(|started| started.elapsed())
    }

    /// Attempt to place the human's mark at the given cell
    pub fn try_place(&mut self, coord: Coord) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_computer_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.board
            .place(coord, Mark::Human)
            .map_err(|err| err.to_string())?;
        self.finish_move(coord, Mark::Human);
        Ok(())
    }

    /// Run the computer's move once its think delay has elapsed.
    ///
    /// Called every frame while a game is in progress.
    pub fn poll_computer(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let Some(started) = self.computer_wait else {
            return;
        };
        if started.elapsed() < COMPUTER_THINK_TIME {
            return;
        }
        self.computer_wait = None;

        let result = self.engine.select_move(&mut self.board, self.difficulty);
        self.last_result = Some(result);

        if let Some(coord) = result.best_move {
            self.finish_move(coord, Mark::Computer);
        }
    }

    /// Record a placed move, update the outcome and hand over the turn
    fn finish_move(&mut self, coord: Coord, mark: Mark) {
        self.last_move = Some(coord);
        self.message = None;

        let outcome = rules::outcome(&self.board);
        if outcome.is_terminal() {
            let winner = match outcome {
                Outcome::HumanWin => Mark::Human,
                Outcome::ComputerWin => Mark::Computer,
                _ => Mark::Empty,
            };
            let result = GameResult {
                outcome,
                winning_line: rules::winning_line(&self.board, winner),
            };
            debug!(?outcome, "game over");
            self.game_over = Some(result);
            self.computer_wait = None;
            return;
        }

        self.current_turn = mark.opponent();
        if self.current_turn == Mark::Computer {
            self.computer_wait = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_computer_now(state: &mut GameState) {
        // Skip the presentation delay
        state.computer_wait = Some(Instant::now() - COMPUTER_THINK_TIME);
        state.poll_computer();
    }

    #[test]
    fn test_human_moves_first() {
        let state = GameState::new(Difficulty::Hard);
        assert!(state.is_human_turn());
        assert!(!state.is_computer_thinking());
    }

    #[test]
    fn test_place_then_computer_replies() {
        let mut state = GameState::new(Difficulty::Hard);
        state.try_place(Coord::new(0, 0)).unwrap();

        assert!(state.is_computer_thinking());
        assert_eq!(state.board.mark_count(), 1);

        play_computer_now(&mut state);
        assert_eq!(state.board.mark_count(), 2);
        assert!(state.is_human_turn());
        assert!(state.last_result.is_some());
    }

    #[test]
    fn test_think_delay_holds_reply() {
        let mut state = GameState::new(Difficulty::Hard);
        state.try_place(Coord::new(0, 0)).unwrap();

        // Delay has not elapsed yet
        state.poll_computer();
        assert_eq!(state.board.mark_count(), 1);
        assert!(state.is_computer_thinking());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(Difficulty::Hard);
        state.try_place(Coord::new(1, 1)).unwrap();
        play_computer_now(&mut state);

        assert!(state.try_place(Coord::new(1, 1)).is_err());
    }

    #[test]
    fn test_game_over_blocks_placement() {
        let mut state = GameState::new(Difficulty::Hard);
        // Hand-build a finished game: human completes the top row
        state.board.set(Coord::new(0, 0), Mark::Human);
        state.board.set(Coord::new(0, 1), Mark::Human);
        state.board.set(Coord::new(1, 0), Mark::Computer);
        state.board.set(Coord::new(1, 1), Mark::Computer);
        state.try_place(Coord::new(0, 2)).unwrap();

        let result = state.game_over.expect("game over");
        assert_eq!(result.outcome, Outcome::HumanWin);
        assert_eq!(result.message(), "Player Wins!");
        assert!(result.winning_line.is_some());
        assert!(state.try_place(Coord::new(2, 2)).is_err());
        assert!(!state.is_computer_thinking());
    }

    #[test]
    fn test_reset_keeps_difficulty() {
        let mut state = GameState::new(Difficulty::Easy);
        state.try_place(Coord::new(0, 0)).unwrap();
        play_computer_now(&mut state);

        state.reset();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert!(state.is_human_turn());
        assert!(state.game_over.is_none());
    }
}
