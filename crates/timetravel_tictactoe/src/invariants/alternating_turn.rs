//! Alternating turn invariant: X is never behind O, and never two ahead.

use super::super::{HistoryStore, Player};
use super::Invariant;

/// Invariant: every snapshot holds as many X marks as O marks, or one more.
///
/// X always moves first and players alternate, so any other count means a
/// snapshot was produced out of turn.
pub struct AlternatingTurnInvariant;

impl Invariant<HistoryStore> for AlternatingTurnInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.snapshots().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Mark counts alternate (X - O is 0 or 1 in every snapshot)"
    }
}
