//! Single mark step invariant: each snapshot is its predecessor plus one move.

use super::super::{Board, HistoryStore, Player};
use super::Invariant;

/// Invariant: snapshots grow by exactly one mark per step.
///
/// - Step 0 is the empty board with no last move.
/// - Step `n` records its move in `last_move`; that cell was empty at step
///   `n - 1` and now holds the mark of the player who moves at `n - 1`.
/// - No other cell differs between consecutive steps.
pub struct SingleMarkStepInvariant;

impl Invariant<HistoryStore> for SingleMarkStepInvariant {
    fn holds(history: &HistoryStore) -> bool {
        let snapshots = history.snapshots();

        if snapshots.first() != Some(&Board::empty()) {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(step, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(pos) = after.last_move() else {
                return false;
            };
            before.is_empty(pos) && *after == before.with_mark(pos, Player::for_step(step))
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark, for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_history_holds() {
        let first = Board::empty().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::O);
        let history = HistoryStore {
            snapshots: vec![Board::empty(), first, second],
            cursor: 2,
        };
        assert!(SingleMarkStepInvariant::holds(&history));
    }

    #[test]
    fn test_wrong_player_violates() {
        let first = Board::empty().with_mark(Position::Center, Player::O);
        let history = HistoryStore {
            snapshots: vec![Board::empty(), first],
            cursor: 1,
        };
        assert!(!SingleMarkStepInvariant::holds(&history));
    }

    #[test]
    fn test_skipped_step_violates() {
        let two_moves = Board::empty()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let history = HistoryStore {
            snapshots: vec![Board::empty(), two_moves],
            cursor: 1,
        };
        assert!(!SingleMarkStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let first = Board::empty().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::Center, Player::O);
        let history = HistoryStore {
            snapshots: vec![Board::empty(), first, second],
            cursor: 2,
        };
        assert!(!SingleMarkStepInvariant::holds(&history));
    }
}
