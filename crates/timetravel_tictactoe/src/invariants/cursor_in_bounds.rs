//! Cursor bounds invariant: the cursor always names a recorded step.

use super::super::HistoryStore;
use super::Invariant;

/// Invariant: `0 <= cursor < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<HistoryStore> for CursorInBoundsInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_new_history_holds() {
        assert!(CursorInBoundsInvariant::holds(&HistoryStore::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let history = HistoryStore {
            snapshots: vec![Board::empty()],
            cursor: 1,
        };
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}
