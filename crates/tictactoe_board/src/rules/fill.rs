//! Full-board detection.

use crate::{Board, Mark};
use tracing::instrument;

/// Checks if every cell is occupied, regardless of by whom.
///
/// A full board with no line is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn all_filled(board: &Board) -> bool {
    board.cells().iter().all(|m| *m != Mark::Empty)
}
