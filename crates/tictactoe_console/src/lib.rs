//! Console front end for the tic-tac-toe board engine.
//!
//! All terminal I/O lives here; the rules live in `tictactoe_board`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;

pub use cli::Cli;
pub use console::{Console, Ending, correction};
