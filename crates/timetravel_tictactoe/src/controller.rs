//! Game controller: turn order, move validation and time travel.
//!
//! The controller owns exactly one [`HistoryStore`]. Everything else it
//! reports (whose turn it is, who won, the status line) is derived from the
//! snapshot at the cursor on demand.

use super::error::HistoryError;
use super::history::HistoryStore;
use super::outcome::GameResult;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Board, Player};
use super::view::{MoveEntry, RenderView};
use tracing::{debug, info, instrument};

/// Why a move intent was dropped without changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The clicked index does not name a cell.
    #[display("No cell at index {}", _0)]
    OutOfBounds(usize),
}

/// What happened to a move intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A new snapshot was recorded.
    Applied {
        /// Player who placed the mark.
        player: Player,
        /// Where the mark was placed.
        position: Position,
        /// Result of the game after the move.
        result: GameResult,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if a snapshot was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// One game session.
///
/// Construct one per game; there is no shared or global state.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: HistoryStore,
}

impl GameController {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Returns the displayed step.
    pub fn step(&self) -> usize {
        self.history.cursor()
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &Board {
        self.history.current()
    }

    /// Returns the player who moves next from the displayed step.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.step())
    }

    /// Returns the result at the displayed step.
    pub fn result(&self) -> GameResult {
        rules::result_of(self.current())
    }

    /// Returns the completed line at the displayed step, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(self.current())
    }

    /// Places the active player's mark at `pos`.
    ///
    /// Ignored, with no state change, when the displayed snapshot is already
    /// finished or the cell is taken. If the cursor points into the past,
    /// the snapshots after it are discarded first.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if self.result().is_finished() {
            debug!("Ignoring move: game is over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.current().is_empty(pos) {
            debug!("Ignoring move: square occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.active_player();
        let next = self.current().with_mark(pos, player);
        debug!(board = %next.display(), "Appending snapshot");
        self.history.append(next);

        let result = self.result();
        info!(%player, position = %pos, step = self.step(), %result, "Move applied");

        MoveOutcome::Applied {
            player,
            position: pos,
            result,
        }
    }

    /// Input boundary: a cell was clicked.
    ///
    /// Indices outside 0-8 are ignored like any other invalid click.
    #[instrument(skip(self))]
    pub fn cell_clicked(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!("Ignoring click outside the board");
                MoveOutcome::Ignored(IgnoreReason::OutOfBounds(index))
            }
        }
    }

    /// Moves the displayed step to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` was never recorded.
    /// Nothing changes in that case.
    #[instrument(skip(self), fields(from = self.step()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.jump(step)?;
        info!(step, next = %self.active_player(), "Jumped");
        Ok(())
    }

    /// Input boundary: an entry of the move list was clicked.
    pub fn history_item_clicked(&mut self, step: usize) -> Result<(), HistoryError> {
        self.jump_to(step)
    }

    /// Discards the whole history and starts over at the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len(), "Restarting game");
        self.history = HistoryStore::new();
    }

    /// Status line for the displayed step.
    pub fn status_text(&self) -> String {
        match self.result() {
            GameResult::Winner(player) => format!("Winner: {}", player),
            GameResult::Draw => "Draw".to_string(),
            GameResult::InProgress => format!("Next player: {}", self.active_player()),
        }
    }

    /// Label of the move-list entry for `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` was never recorded.
    pub fn move_description(&self, step: usize) -> Result<String, HistoryError> {
        let board = self.history.get(step).ok_or(HistoryError::OutOfRange {
            step,
            len: self.history.len(),
        })?;
        Ok(describe(step, board))
    }

    /// Labels of every move-list entry, in step order.
    pub fn move_descriptions(&self) -> Vec<String> {
        self.history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, board)| describe(step, board))
            .collect()
    }

    /// Everything the presentation needs to redraw after a state change.
    #[instrument(skip(self))]
    pub fn view(&self) -> RenderView {
        let cursor = self.step();
        let moves = self
            .move_descriptions()
            .into_iter()
            .enumerate()
            .map(|(step, description)| MoveEntry::new(step, description, step == cursor))
            .collect();

        RenderView::new(
            self.current(),
            self.status_text(),
            self.result(),
            moves,
            self.winning_line(),
        )
    }
}

fn describe(step: usize, board: &Board) -> String {
    match (step, board.last_move()) {
        (0, _) => "Go to game start".to_string(),
        (_, Some(pos)) => {
            format!("Go to move #{} (row: {}, col: {})", step, pos.row(), pos.col())
        }
        (_, None) => format!("Go to move #{}", step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameController::new();
        assert_eq!(game.step(), 0);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.status_text(), "Next player: X");
    }

    #[test]
    fn test_players_alternate() {
        let mut game = GameController::new();
        let first = game.apply_move(Position::Center);
        assert!(matches!(first, MoveOutcome::Applied { player: Player::X, .. }));
        assert_eq!(game.active_player(), Player::O);

        let second = game.apply_move(Position::TopLeft);
        assert!(matches!(second, MoveOutcome::Applied { player: Player::O, .. }));
        assert_eq!(game.status_text(), "Next player: X");
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut game = GameController::new();
        game.apply_move(Position::Center);

        let outcome = game.apply_move(Position::Center);
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut game = GameController::new();
        assert_eq!(
            game.cell_clicked(9),
            MoveOutcome::Ignored(IgnoreReason::OutOfBounds(9))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_move_after_win_ignored() {
        let mut game = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            game.cell_clicked(index);
        }
        assert_eq!(game.result(), GameResult::Winner(Player::X));

        assert_eq!(
            game.cell_clicked(8),
            MoveOutcome::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_move_descriptions() {
        let mut game = GameController::new();
        game.cell_clicked(4);
        game.cell_clicked(5);

        assert_eq!(
            game.move_descriptions(),
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (row: 1, col: 1)".to_string(),
                "Go to move #2 (row: 1, col: 2)".to_string(),
            ]
        );
        assert_eq!(
            game.move_description(3),
            Err(HistoryError::OutOfRange { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_jump_rederives_turn_and_result() {
        let mut game = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            game.cell_clicked(index);
        }
        assert_eq!(game.status_text(), "Winner: X");

        game.jump_to(3).expect("step 3 exists");
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.active_player(), Player::O);
        assert_eq!(game.status_text(), "Next player: O");
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_restart() {
        let mut game = GameController::new();
        game.cell_clicked(0);
        game.cell_clicked(1);

        game.restart();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.current(), &Board::empty());
    }
}
