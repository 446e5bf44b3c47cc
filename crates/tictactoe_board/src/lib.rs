//! Pure tic-tac-toe board engine.
//!
//! Models an N×N grid of [`Mark`]s, applies moves as value updates,
//! detects completed lines and full boards, renders the grid to text and
//! decodes move notation such as `B2`.
//!
//! ```
//! use tictactoe_board::{Board, Coordinate, Player, has_line};
//!
//! # fn main() -> Result<(), tictactoe_board::BoardError> {
//! let board = Board::new(3)?;
//! let at = Coordinate::parse("b2")?;
//! let next = board.update(Player::One, at.row, at.col)?;
//!
//! assert!(!has_line(&next, Player::One));
//! assert_eq!(next.to_string(), "   1 2 3\nA: _ _ _\nB: _ X _\nC: _ _ _");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod error;
mod game;
mod outcome;
mod render;
pub mod rules;
mod types;

pub use board::{Board, MAX_SIZE};
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use game::Game;
pub use outcome::Outcome;
pub use render::render;
pub use rules::{all_filled, has_line, winner};
pub use types::{Mark, Player};
