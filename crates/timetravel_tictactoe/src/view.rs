//! Render boundary: the data a presentation layer needs to redraw.

use super::outcome::GameResult;
use super::position::Position;
use super::rules::WinningLine;
use super::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::Serialize;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    step: usize,
    /// Button label.
    description: String,
    /// True for the entry matching the displayed step.
    selected: bool,
}

impl MoveEntry {
    /// Creates a move-list entry.
    pub fn new(step: usize, description: String, selected: bool) -> Self {
        Self {
            step,
            description,
            selected,
        }
    }
}

/// Snapshot of everything on screen.
///
/// Cells use `None` for empty so the JSON form reads `[null, "X", ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RenderView {
    /// Cells in row-major order.
    cells: [Option<Player>; 9],
    /// Index of the move that produced the displayed snapshot.
    last_move: Option<usize>,
    /// Status line.
    status: String,
    /// Result at the displayed step.
    result: GameResult,
    /// Move list in step order.
    moves: Vec<MoveEntry>,
    /// Indices to highlight when the displayed step is won.
    winning_line: Option<[usize; 3]>,
}

impl RenderView {
    /// Builds a view of `board`.
    pub fn new(
        board: &Board,
        status: String,
        result: GameResult,
        moves: Vec<MoveEntry>,
        winning_line: Option<WinningLine>,
    ) -> Self {
        Self {
            cells: (*board.cells()).map(Cell::mark),
            last_move: board.last_move().map(Position::to_index),
            status,
            result,
            moves,
            winning_line: winning_line.map(|line| line.indices()),
        }
    }

    /// Returns true if `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}
