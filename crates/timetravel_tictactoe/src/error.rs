//! Error types for the game history.

use derive_more::{Display, Error};

/// Error returned when navigating the snapshot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is out of range for a history of {} snapshots", step, len)]
    OutOfRange {
        /// Step that was requested.
        step: usize,
        /// Number of snapshots held at the time of the request.
        len: usize,
    },
}
