//! Tic-tac-toe console game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use tictactoe_board::Game;
use tictactoe_console::{Cli, Console};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(size = cli.size, "Starting tic-tac-toe");

    let game = Game::new(usize::from(cli.size)).context("Failed to create board")?;
    let stdout = io::stdout();
    let clear = !cli.no_clear && stdout.is_terminal();

    let mut console = Console::new(io::stdin().lock(), stdout.lock(), clear);
    let ending = console.run(game).context("Console I/O failed")?;
    info!(?ending, "Exiting");

    Ok(())
}
