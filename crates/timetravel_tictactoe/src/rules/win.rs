//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines that win the game, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    positions: [Position; 3],
}

impl WinningLine {
    /// Returns the player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Evaluates the board for a completed line.
///
/// Every one of the eight lines is examined before concluding that nobody
/// has won. When several lines are complete the first in [`LINES`] order is
/// reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(player)
            if board.get(b) == Cell::Occupied(player)
                && board.get(c) == Cell::Occupied(player) =>
        {
            Some(WinningLine {
                player,
                positions: [a, b, c],
            })
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        let marks = marks.chars().filter(|c| !c.is_whitespace());
        for (cell, ch) in cells.iter_mut().zip(marks) {
            *cell = match ch {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::empty()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let line = evaluate(&board_of("XXX OO. ...")).expect("X has the top row");
        assert_eq!(line.player(), Player::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_found_on_last_line() {
        let line = evaluate(&board_of("..O .O. O..")).expect("O has the anti-diagonal");
        assert_eq!(line.player(), Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_winner_column() {
        let line = evaluate(&board_of(".X. OXO .X.")).expect("X has the middle column");
        assert_eq!(line.indices(), [1, 4, 7]);
    }

    #[test]
    fn test_near_misses_on_every_line_are_not_wins() {
        assert_eq!(evaluate(&board_of("XXO OXX XOO")), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(evaluate(&board_of("XX. ... ...")), None);
    }
}
