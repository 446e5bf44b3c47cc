//! Error types for board operations.

use derive_more::{Display, Error};

/// Reasons a board operation can be rejected.
///
/// None of these are fatal: the caller reports them and asks the same
/// player again, leaving the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The coordinate lies outside the grid.
    #[display("Cell ({}, {}) is outside a {}x{} board", row, col, size, size)]
    OutOfRange {
        /// Requested row (0-based).
        row: usize,
        /// Requested column (0-based).
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// Move text could not be decoded into a coordinate.
    #[display("Invalid move input: {:?}", _0)]
    InvalidInput(#[error(not(source))] String),

    /// Boards must be square with a side between 1 and 26.
    #[display("Invalid board size: {}", _0)]
    InvalidSize(#[error(not(source))] usize),

    /// The game already reached a line or a full board.
    #[display("Game is already over")]
    GameOver,
}
