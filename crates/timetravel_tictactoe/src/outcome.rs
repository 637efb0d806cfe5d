//! Result of a game as seen from one snapshot.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of the game at the displayed step.
///
/// Always derived from a board snapshot, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Player completed a line.
    Winner(Player),
    /// Board is full and nobody completed a line.
    Draw,
}

impl GameResult {
    /// Returns true once no further moves are accepted.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Winner(player) => write!(f, "Player {} wins", player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
