//! Command-line interface for the console game.

use clap::Parser;
use tictactoe_board::MAX_SIZE;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Side length of the board (rows A.., columns 1..)
    #[arg(
        short,
        long,
        env = "TICTACTOE_SIZE",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..=MAX_SIZE as i64)
    )]
    pub size: u8,

    /// Do not clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,
}
