//! Game rules for the board engine.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so callers can combine them freely.

pub mod fill;
pub mod line;

pub use fill::all_filled;
pub use line::{has_line, winner};
