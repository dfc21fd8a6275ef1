//! Game status classification: check, checkmate and stalemate.

use std::fmt;

use crate::color::Color;
use crate::movegen::generate_legal_moves;
use crate::position::Position;

/// Outcome of inspecting the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check and at least one legal move.
    Normal,
    /// In check with at least one legal move.
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// `true` for checkmate and stalemate.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Normal => "Normal",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        f.write_str(name)
    }
}

/// Snapshot of the side to move's situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub side_to_move: Color,
    pub in_check: bool,
    pub legal_moves: usize,
    pub status: GameStatus,
}

/// Classify the position for the side to move.
pub fn classify(pos: &Position) -> GameStatus {
    pos.game_state().status
}

impl Position {
    /// Check flag, legal move count and status in one pass.
    pub fn game_state(&self) -> GameState {
        let in_check = self.is_in_check();
        let legal_moves = generate_legal_moves(self).len();
        let status = match (in_check, legal_moves == 0) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Normal,
        };
        GameState {
            side_to_move: self.side_to_move(),
            in_check,
            legal_moves,
            status,
        }
    }
}
