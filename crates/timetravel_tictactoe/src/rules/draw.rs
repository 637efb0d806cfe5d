//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{GameResult, Player, Position};
    use super::super::result_of;
    use super::*;

    fn play(moves: &[Position]) -> Board {
        moves
            .iter()
            .enumerate()
            .fold(Board::empty(), |board, (step, pos)| {
                board.with_mark(*pos, Player::for_step(step))
            })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = play(&[Position::Center]);
        assert!(!is_full(&board));
        assert_eq!(result_of(&board), GameResult::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = play(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert!(is_full(&board));
        assert_eq!(result_of(&board), GameResult::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X fills the last cell and completes the left column.
        let board = play(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
            Position::Center,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ]);
        assert!(is_full(&board));
        assert_eq!(result_of(&board), GameResult::Winner(Player::X));
    }
}
