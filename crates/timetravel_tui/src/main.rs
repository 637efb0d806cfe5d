//! Time-travel tic-tac-toe - terminal front end
//!
//! Runs the interactive game or replays moves headlessly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use timetravel_tui::{App, Cli, Command, TuiConfig, replay, ui};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, jump } => run_replay(&config, &moves, jump),
    }
}

/// Run the interactive terminal game
fn run_play(config: &TuiConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting time-travel tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.highlight_winning_line());
    let res = app.run(
        |app| terminal.draw(|f| ui::draw(f, app)).map(|_| ()),
        event::read,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    info!("Exiting");
    Ok(())
}

/// Replay moves and print the render view as JSON
fn run_replay(config: &TuiConfig, moves: &[usize], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let game = replay(moves, jump)?;
    println!("{}", serde_json::to_string_pretty(&game.view())?);
    Ok(())
}
