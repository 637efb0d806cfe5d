//! Terminal front end for time-travel tic-tac-toe.
//!
//! Draws the board, status line and move list from the core's render view,
//! and turns key presses into cell clicks and history clicks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use replay::replay;
