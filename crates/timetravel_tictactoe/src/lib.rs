//! Pure tic-tac-toe game logic with snapshot history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a single board snapshot
//! - **History**: immutable snapshots plus a cursor, truncated on branching
//! - **Controller**: turn order, move validation, status text and move list
//! - **View**: the data handed to whatever draws the game
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, GameResult, Player};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.cell_clicked(index);
//! }
//! assert_eq!(game.result(), GameResult::Winner(Player::X));
//! assert_eq!(game.winning_line().map(|line| line.indices()), Some([0, 1, 2]));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{GameController, IgnoreReason, MoveOutcome};
pub use error::HistoryError;
pub use history::HistoryStore;
pub use outcome::GameResult;
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Cell, Player};
pub use view::{MoveEntry, RenderView};
