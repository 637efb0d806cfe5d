//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player whose turn it is once `step` moves have been played.
    ///
    /// X moves on even steps, O on odd ones. This is the only source of
    /// turn order; it is never stored.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// One immutable snapshot of the 3x3 board.
///
/// Snapshots are never modified in place. [`Board::with_mark`] returns a new
/// snapshot and leaves the receiver untouched, so every entry in the game
/// history keeps describing the position it was recorded at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// The move that produced this snapshot. `None` for the starting board.
    last_move: Option<Position>,
}

impl Board {
    /// Creates the empty starting board.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            last_move: None,
        }
    }

    /// Creates a snapshot from arbitrary cells, with no recorded last move.
    ///
    /// Useful for evaluating positions that were not reached through play.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self {
            cells,
            last_move: None,
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the position of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns a new snapshot with `player`'s mark at `pos`.
    ///
    /// The caller is responsible for checking that `pos` is empty.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Occupied(player);
        Self {
            cells,
            last_move: Some(pos),
        }
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(8), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let before = Board::empty();
        let after = before.with_mark(Position::Center, Player::X);

        assert_eq!(before, Board::empty());
        assert_eq!(after.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(after.last_move(), Some(Position::Center));
        assert_eq!(before.last_move(), None);
    }

    #[test]
    fn test_counts() {
        let board = Board::empty()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::X);

        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_display() {
        let board = Board::empty().with_mark(Position::TopLeft, Player::X);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
