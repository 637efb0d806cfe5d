//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history and turn handling so they can be run
//! against any snapshot, including ones reached by time travel.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, evaluate};

use super::{Board, GameResult};
use tracing::instrument;

/// Derives the result of the game from a single snapshot.
#[instrument(skip(board))]
pub fn result_of(board: &Board) -> GameResult {
    match evaluate(board) {
        Some(line) => GameResult::Winner(line.player()),
        None if is_full(board) => GameResult::Draw,
        None => GameResult::InProgress,
    }
}
