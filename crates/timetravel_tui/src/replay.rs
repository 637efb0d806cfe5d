//! Headless replay: feed clicks to a controller without a terminal.

use timetravel_tictactoe::{GameController, HistoryError, MoveOutcome};
use tracing::{instrument, warn};

/// Plays `moves` as cell clicks, then optionally jumps to `jump`.
///
/// Clicks that the game ignores are logged and skipped, exactly as the
/// interactive front end would treat them.
///
/// # Errors
///
/// Returns [`HistoryError::OutOfRange`] if `jump` names a step that was
/// never recorded.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameController, HistoryError> {
    let mut game = GameController::new();

    for &index in moves {
        if let MoveOutcome::Ignored(reason) = game.cell_clicked(index) {
            warn!(index, %reason, "Replayed move ignored");
        }
    }

    if let Some(step) = jump {
        game.jump_to(step)?;
    }

    Ok(game)
}
