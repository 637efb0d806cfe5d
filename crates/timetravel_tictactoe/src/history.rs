//! Snapshot history with a movable cursor.
//!
//! The history is append-only with one exception: appending while the
//! cursor points into the past discards every snapshot after the cursor
//! first. Jumping only moves the cursor.

use super::error::HistoryError;
use super::invariants::assert_invariants;
use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered board snapshots plus the step currently displayed.
///
/// Invariant: `cursor < snapshots.len()`, and the history is never empty.
///
/// Snapshots are only appended through [`GameController`](crate::GameController),
/// which always extends the current snapshot by one legal mark:
///
/// ```compile_fail
/// use timetravel_tictactoe::{Board, HistoryStore};
///
/// let mut history = HistoryStore::new();
/// history.append(Board::empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStore {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::empty()],
            cursor: 0,
        }
    }

    /// Appends a snapshot after the cursor.
    ///
    /// Snapshots recorded after the cursor are dropped first, then the new
    /// snapshot becomes the current one.
    ///
    /// Callers must pass the snapshot at the cursor extended by one mark for
    /// the player whose turn it was; debug builds assert this.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub(crate) fn append(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots before branching");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;

        assert_invariants(self);
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` is not a recorded step.
    /// The cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.cursor = step;

        assert_invariants(self);
        Ok(())
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the step the cursor points at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot recorded at `step`, if any.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Returns all snapshots in step order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
